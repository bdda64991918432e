//! The `menulens serve` command.

use clap::Args;
use menulens_core::Config;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use crate::server;

/// Arguments for the `serve` command.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Bind address (overrides the config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port (overrides the config file)
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,
}

/// Execute the serve command.
pub async fn execute(args: ServeArgs, config: Config) -> anyhow::Result<()> {
    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);

    let addr = bind_addr(&host, port)?;

    tracing::info!(
        extraction_model = %config.extraction.model,
        generation_model = %config.generation.model,
        fan_out_cap = config.generation.fan_out_cap,
        "Starting Menulens"
    );

    server::serve(addr, Arc::new(config)).await
}

/// Build the bind address from a bare host and port.
///
/// Parsing the host as an `IpAddr` keeps IPv6 hosts (e.g. `::1`) working
/// without requiring the caller to bracket them.
fn bind_addr(host: &str, port: u16) -> anyhow::Result<SocketAddr> {
    let ip: IpAddr = host
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind host {host}: {e}"))?;
    Ok(SocketAddr::new(ip, port))
}
