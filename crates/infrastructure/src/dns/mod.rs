pub mod proxy;
pub mod server;
pub mod transport;

pub use proxy::UpstreamForwarder;
pub use server::DnsServerHandler;
