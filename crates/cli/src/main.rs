use clap::Parser;
use dnslite_domain::CliOverrides;
use dnslite_infrastructure::dns::DnsServerHandler;
use mimalloc::MiMalloc;
use std::net::SocketAddr;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[command(name = "dnslite")]
#[command(version)]
#[command(about = "dnslite - authoritative DNS server with an HTTP record API")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database path (":memory:" for a throwaway store)
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Upstream resolver for names not held locally (ip or ip:port)
    #[arg(short = 'u', long)]
    upstream: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        web_port: cli.web_port,
        bind_address: cli.bind,
        database_path: cli.database,
        log_level: cli.log_level,
        upstream: cli.upstream,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting dnslite v{}", env!("CARGO_PKG_VERSION"));

    let pool = bootstrap::init_database(&config.database).await?;

    let repos = di::Repositories::new(pool);
    let dns_services = di::DnsServices::new(&config, &repos)?;
    let use_cases = di::UseCases::new(&config, &repos, dns_services.registry.clone());

    let dns_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.dns_port).parse()?;
    let dns_handler = DnsServerHandler::new(dns_services.resolve_query);

    tokio::spawn(async move {
        if let Err(e) = server::start_dns_server(dns_addr, dns_handler).await {
            error!(error = %e, "DNS server error");
        }
    });

    let web_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;

    server::start_web_server(web_addr, use_cases.into_app_state()).await?;

    info!("Server shutdown complete");
    Ok(())
}
