use super::Repositories;
use dnslite_application::records::TypeRegistry;
use dnslite_application::use_cases::ResolveQueryUseCase;
use dnslite_domain::Config;
use dnslite_infrastructure::dns::UpstreamForwarder;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub registry: Arc<TypeRegistry>,
    pub resolve_query: Arc<ResolveQueryUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config, repos: &Repositories) -> anyhow::Result<Self> {
        let registry = Arc::new(TypeRegistry::standard());

        let upstream_addr = config.dns.upstream_addr().map_err(anyhow::Error::msg)?;
        let forwarder = Arc::new(UpstreamForwarder::new(
            upstream_addr,
            config.dns.query_timeout(),
        ));

        let resolve_query = Arc::new(ResolveQueryUseCase::new(
            repos.records.clone(),
            registry.clone(),
            forwarder,
            &config.dns,
        )?);

        info!(
            upstream = %upstream_addr,
            timeout_secs = config.dns.query_timeout,
            nameservers = ?config.dns.nameservers,
            "DNS services initialized"
        );

        Ok(Self {
            registry,
            resolve_query,
        })
    }
}
