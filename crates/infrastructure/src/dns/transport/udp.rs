//! UDP exchange with the upstream server (RFC 1035 §4.2.1).

use dnslite_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Largest datagram UDP can carry; replies are relayed whole, never cut short.
pub const MAX_UDP_RESPONSE_SIZE: usize = u16::MAX as usize;

/// Sends `message_bytes` from an ephemeral socket and waits for the reply
/// carrying the same transaction id.
pub async fn exchange(
    server_addr: SocketAddr,
    message_bytes: &[u8],
    timeout: Duration,
) -> Result<Vec<u8>, DomainError> {
    let bind_addr: SocketAddr = if server_addr.is_ipv4() {
        SocketAddr::from(([0, 0, 0, 0], 0))
    } else {
        SocketAddr::from(([0u16; 8], 0))
    };

    let socket = UdpSocket::bind(bind_addr)
        .await
        .map_err(|e| failed(server_addr, format!("bind: {}", e)))?;
    socket
        .connect(server_addr)
        .await
        .map_err(|e| failed(server_addr, format!("connect: {}", e)))?;

    let result = tokio::time::timeout(timeout, async {
        let bytes_sent = socket
            .send(message_bytes)
            .await
            .map_err(|e| failed(server_addr, format!("send: {}", e)))?;
        debug!(server = %server_addr, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        loop {
            let received = socket
                .recv(&mut recv_buf)
                .await
                .map_err(|e| failed(server_addr, format!("recv: {}", e)))?;

            if received >= 2 && message_bytes.len() >= 2 && recv_buf[..2] != message_bytes[..2] {
                warn!(server = %server_addr, "Discarding UDP reply with mismatched id");
                continue;
            }

            recv_buf.truncate(received);
            debug!(server = %server_addr, bytes_received = received, "UDP response received");
            return Ok(recv_buf);
        }
    })
    .await;

    result.map_err(|_| DomainError::UpstreamTimeout {
        server: server_addr.to_string(),
    })?
}

fn failed(server_addr: SocketAddr, reason: String) -> DomainError {
    DomainError::UpstreamFailed {
        server: server_addr.to_string(),
        reason,
    }
}
