//! Single poll against a live console.
//!
//! Demonstrates:
//! - Loading `RCON_HOST`, `RCON_PORT`, `RCON_PASSWORD` from the environment
//! - Polling one snapshot and logging it through `ConsoleSink`
//! - Printing the snapshot as JSON
//!
//! Usage:
//!   cargo run --example poll_once
//!   cargo run --example poll_once -- --debug
//!   cargo run --example poll_once -- --json

// ============================================================================
// Imports
// ============================================================================

use rcon_snapshot::{ConsoleSink, Poller, RconConfig, Result};
use tracing_subscriber::EnvFilter;

// ============================================================================
// Args
// ============================================================================

/// Command-line arguments.
#[derive(Debug, Clone)]
struct Args {
    debug: bool,
    json: bool,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = std::env::args().collect();
        Self {
            debug: args.iter().any(|a| a == "--debug"),
            json: args.iter().any(|a| a == "--json"),
        }
    }
}

fn init_logging(debug: bool) {
    let filter = if debug {
        "rcon_snapshot=debug"
    } else {
        "rcon_snapshot=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.debug);

    if let Err(e) = run(args).await {
        eprintln!("\n[ERROR] {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    println!("=== Poll Once ===\n");

    let config = RconConfig::from_env()?;
    println!("[1] Target: {}:{}", config.host, config.port);

    let poller = Poller::new(config);
    let snapshot = poller.poll_once(&ConsoleSink).await?;

    println!("    ✓ {} ({} players listed)\n", snapshot.hostname, snapshot.players.len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }

    Ok(())
}
