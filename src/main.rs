//! Storefront server.
//!
//! ```bash
//! cargo run -- --listen 127.0.0.1:8080 --log-format json
//! ```
//!
//! Every other setting comes from the environment (or a `.env` file); see
//! [`storefront::config`].

use anyhow::Result;
use clap::Parser;
use storefront::{config, server, utils::logger};

/// Server-rendered storefront with CMS-backed pages.
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overrides LISTEN
    #[arg(long)]
    listen: Option<String>,

    /// Log format (text or json), overrides LOG_FORMAT
    #[arg(long)]
    log_format: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = config::Config::from_env()?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }
    if let Some(log_format) = cli.log_format {
        config.log_format = log_format;
    }
    config.validate()?;

    logger::init(&config.log_level, &config.log_format)?;
    config.print_summary();

    server::run(config).await
}
