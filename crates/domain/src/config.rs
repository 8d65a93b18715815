pub mod database;
pub mod dns;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use database::DatabaseConfig;
pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
