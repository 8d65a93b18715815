use async_trait::async_trait;
use dnslite_application::ports::UpstreamProxy;
use dnslite_domain::{DomainError, Transport};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::transport::{tcp, udp};

/// Relays raw queries to one upstream server over the caller's transport.
pub struct UpstreamForwarder {
    server: SocketAddr,
    timeout: Duration,
}

impl UpstreamForwarder {
    pub fn new(server: SocketAddr, timeout: Duration) -> Self {
        Self { server, timeout }
    }
}

#[async_trait]
impl UpstreamProxy for UpstreamForwarder {
    #[instrument(skip(self, query), fields(server = %self.server, len = query.len()))]
    async fn forward(&self, query: &[u8], transport: Transport) -> Result<Vec<u8>, DomainError> {
        let result = match transport {
            Transport::Udp => udp::exchange(self.server, query, self.timeout).await,
            Transport::Tcp => tcp::exchange(self.server, query, self.timeout).await,
        };

        match &result {
            Ok(reply) => debug!(%transport, reply_len = reply.len(), "Upstream replied"),
            Err(e) => warn!(%transport, error = %e, "Upstream exchange failed"),
        }
        result
    }
}
