use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

const DNS_PORT: u16 = 53;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Server that receives queries the zone has no records for.
    #[serde(default = "default_upstream")]
    pub upstream: String,

    /// Seconds to wait for one upstream exchange.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    /// Names returned for every NS query, in order.
    #[serde(default = "default_nameservers")]
    pub nameservers: Vec<String>,

    #[serde(default = "default_delegation_ttl")]
    pub delegation_ttl: u32,

    /// TTL applied to records created without one.
    #[serde(default = "default_ttl")]
    pub default_ttl: u32,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            upstream: default_upstream(),
            query_timeout: default_query_timeout(),
            nameservers: default_nameservers(),
            delegation_ttl: default_delegation_ttl(),
            default_ttl: default_ttl(),
        }
    }
}

impl DnsConfig {
    /// Parses `upstream`, accepting a bare IP (port 53 implied).
    pub fn upstream_addr(&self) -> Result<SocketAddr, String> {
        let raw = self.upstream.trim();
        if let Ok(addr) = raw.parse::<SocketAddr>() {
            return Ok(addr);
        }
        raw.parse::<IpAddr>()
            .map(|ip| SocketAddr::new(ip, DNS_PORT))
            .map_err(|_| format!("Invalid upstream address '{}'", self.upstream))
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout)
    }
}

fn default_upstream() -> String {
    "1.1.1.1:53".to_string()
}

fn default_query_timeout() -> u64 {
    5
}

fn default_nameservers() -> Vec<String> {
    vec![
        "ns1.dnslite.local.".to_string(),
        "ns2.dnslite.local.".to_string(),
    ]
}

fn default_delegation_ttl() -> u32 {
    60
}

fn default_ttl() -> u32 {
    600
}
