use clap::Parser;
use pdns_backend_domain::CliOverrides;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "pdns-backend")]
#[command(version)]
#[command(about = "Remote backend for PowerDNS over a Unix domain socket")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// File path of the domain socket
    #[arg(long = "socketfile", value_name = "PATH")]
    socket_file: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log file, opened in append mode
    #[arg(long, value_name = "FILE", conflicts_with = "log_stderr")]
    log_file: Option<String>,

    /// Log to stderr instead of a file
    #[arg(long)]
    log_stderr: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        socket_path: cli.socket_file,
        log_level: cli.log_level,
        log_file: cli.log_file,
        log_stderr: cli.log_stderr,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config)?;

    info!("pdns-backend server start v{}", env!("CARGO_PKG_VERSION"));

    let services = di::BackendServices::new(&config);

    let shutdown = CancellationToken::new();
    let shutdown_on_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Interrupt received, stopping listener");
                shutdown_on_signal.cancel();
            }
            Err(e) => error!(error = %e, "Failed to listen for interrupt signal"),
        }
    });

    server::start_backend_server(&config.server, services.connection_handler, shutdown).await?;

    info!("Server shutdown complete");
    Ok(())
}
