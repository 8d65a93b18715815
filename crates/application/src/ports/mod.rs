mod record_repository;
mod upstream_proxy;

pub use record_repository::RecordRepository;
pub use upstream_proxy::UpstreamProxy;
