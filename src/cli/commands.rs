//! CLI command dispatch

use tracing_subscriber::EnvFilter;

use crate::http::{HttpServer, ServerConfig};

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parse arguments and dispatch to the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve { host, port } => serve(host, port),
    }
}

/// Boot the HTTP server and block until it exits
pub fn serve(host: String, port: u16) -> CliResult<()> {
    init_tracing();

    let config = ServerConfig::with_addr(host, port);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(HttpServer::with_config(config).start())?;

    Ok(())
}

/// Install the global tracing subscriber, honoring RUST_LOG
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
