//! TCP exchange with the upstream server, 2-byte length framing (RFC 1035 §4.2.2).

use dnslite_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

/// One query per connection; the connection is closed afterwards.
pub async fn exchange(
    server_addr: SocketAddr,
    message_bytes: &[u8],
    timeout: Duration,
) -> Result<Vec<u8>, DomainError> {
    let result = tokio::time::timeout(timeout, async {
        let mut stream = TcpStream::connect(server_addr).await.map_err(|e| {
            DomainError::UpstreamFailed {
                server: server_addr.to_string(),
                reason: format!("connect: {}", e),
            }
        })?;
        stream.set_nodelay(true).map_err(|e| DomainError::IoError(e.to_string()))?;

        send_with_length_prefix(&mut stream, message_bytes).await?;
        debug!(server = %server_addr, bytes_sent = message_bytes.len(), "TCP query sent");

        let response = read_with_length_prefix(&mut stream).await?;
        debug!(server = %server_addr, response_len = response.len(), "TCP response received");
        Ok(response)
    })
    .await;

    result.map_err(|_| DomainError::UpstreamTimeout {
        server: server_addr.to_string(),
    })?
}

pub async fn send_with_length_prefix<S>(
    stream: &mut S,
    message_bytes: &[u8],
) -> Result<(), DomainError>
where
    S: AsyncWriteExt + Unpin,
{
    let length = u16::try_from(message_bytes.len()).map_err(|_| {
        DomainError::IoError(format!(
            "Message too large for TCP framing: {} bytes",
            message_bytes.len()
        ))
    })?;

    stream
        .write_all(&length.to_be_bytes())
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to write length prefix: {}", e)))?;
    stream
        .write_all(message_bytes)
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to write DNS message: {}", e)))?;
    stream
        .flush()
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to flush stream: {}", e)))?;

    Ok(())
}

pub async fn read_with_length_prefix<S>(stream: &mut S) -> Result<Vec<u8>, DomainError>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream
        .read_exact(&mut len_buf)
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to read message length: {}", e)))?;

    let message_len = u16::from_be_bytes(len_buf) as usize;

    let mut message = vec![0u8; message_len];
    stream
        .read_exact(&mut message)
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to read message body: {}", e)))?;

    Ok(message)
}
