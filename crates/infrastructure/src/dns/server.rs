use dnslite_application::use_cases::ResolveQueryUseCase;
use dnslite_domain::{DomainError, Transport};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Turns raw inbound queries into raw replies. `None` means stay silent.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<ResolveQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<ResolveQueryUseCase>) -> Self {
        Self { use_case }
    }

    pub async fn handle(
        &self,
        raw: &[u8],
        transport: Transport,
        client: SocketAddr,
    ) -> Option<Vec<u8>> {
        let resolution = match self.use_case.execute(raw, transport).await {
            Ok(resolution) => resolution,
            Err(e) => {
                log_dropped(&e, transport, client);
                return None;
            }
        };

        match resolution.into_wire() {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(error = %e, %client, "Failed to encode DNS reply");
                None
            }
        }
    }
}

fn log_dropped(e: &DomainError, transport: Transport, client: SocketAddr) {
    match e {
        DomainError::MalformedQuery(_) | DomainError::UnsupportedQueryType(_) => {
            debug!(error = %e, %transport, %client, "Dropping query")
        }
        DomainError::UpstreamTimeout { .. } | DomainError::UpstreamFailed { .. } => {
            warn!(error = %e, %transport, %client, "Dropping query after upstream failure")
        }
        _ => error!(error = %e, %transport, %client, "Dropping query after internal error"),
    }
}
