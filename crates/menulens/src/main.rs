//! Menulens CLI - HTTP service that turns a menu photo into dish listings
//! with generated photos.
//!
//! The server accepts a multipart menu-photo upload plus the caller's
//! provider API key, extracts the dish listing with a vision model, and
//! generates an appetizing photo per dish.
//!
//! # Usage
//!
//! ```bash
//! # Start the server on the configured port
//! menulens serve
//!
//! # Start on a specific port (also honors $PORT)
//! menulens serve --port 8080
//!
//! # View configuration
//! menulens config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;
mod server;

/// Menulens - menu photos in, dish listings with generated photos out.
#[derive(Parser, Debug)]
#[command(name = "menulens")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(cli::serve::ServeArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging from config, with CLI verbose override.
    // Note: logging isn't initialized yet, so use eprintln for config warnings.
    let config = match menulens_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `menulens config path`."
            );
            menulens_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Menulens v{}", menulens_core::VERSION);

    // Dispatch to the appropriate command handler
    match cli.command {
        Commands::Serve(args) => cli::serve::execute(args, config).await,
        Commands::Config(args) => cli::config::execute(args).await,
    }
}
