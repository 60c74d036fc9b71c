//! Currency exchange-rate gateway.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────────┐
//!                      │                 CURRENCY GATEWAY                  │
//!   GET /api           │  ┌──────────┐   ┌──────────┐   ┌──────────────┐  │
//!   ───────────────────┼─▶│  http    │──▶│ request  │──▶│   pipeline   │  │
//!                      │  │  server  │   │ context  │   │ single/fan-out│ │
//!                      │  └──────────┘   └──────────┘   └──────┬───────┘  │
//!                      │                                       │ per symbol│
//!                      │                                       ▼          │
//!   JSON array / 500   │  ┌──────────┐   ┌──────────┐   ┌──────────────┐  │
//!   ◀──────────────────┼──│ response │◀──│  rates   │◀──│   fetcher    │◀─┼── Upstream
//!                      │  │  shaping │   │  decode  │   │  (reqwest)   │  │   provider
//!                      │  └──────────┘   └──────────┘   └──────────────┘  │
//!                      └──────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use currency_gateway::config::load_config;
use currency_gateway::lifecycle::startup;
use currency_gateway::observability::logging;

#[derive(Parser)]
#[command(name = "currency-gateway")]
#[command(about = "HTTP gateway serving currency exchange rates", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = load_config(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.server.bind_address = bind;
    }

    logging::init_logging(&config.observability);

    tracing::info!(
        bind_address = %config.server.bind_address,
        worker_threads = config.server.worker_threads,
        upstream = %config.upstream.base_url,
        target_currency = %config.upstream.target_currency,
        "Configuration loaded"
    );

    let runtime = startup::build_runtime(&config.server)?;
    runtime.block_on(startup::run(config))?;

    tracing::info!("Shutdown complete");
    Ok(())
}
