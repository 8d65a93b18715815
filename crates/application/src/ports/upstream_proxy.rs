use async_trait::async_trait;
use dnslite_domain::{DomainError, Transport};

#[async_trait]
pub trait UpstreamProxy: Send + Sync {
    /// Sends `query` unchanged to the upstream server and returns its raw reply.
    async fn forward(&self, query: &[u8], transport: Transport) -> Result<Vec<u8>, DomainError>;
}
