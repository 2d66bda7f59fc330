//! Quantized Visual Search - Entry Point
//!
//! Binary entry point for the `qvs` server and offline tools.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `qvs` / `qvs serve` | Serve `POST /api/vector-search` over HTTP |
//! | `qvs search` | Rank the configured catalog against an embedding file |
//! | `qvs encode` | Print the `q_b64` for an embedding file |
//! | `qvs build-stub` | Write a deterministic stub catalog from products JSONL |

// Force-link qvs-providers to ensure linkme inventory registrations are included
extern crate qvs_providers;

use clap::Parser;
use qvs::cli::{self, Cli, Command};
use qvs::run_server;

/// Main entry point for Quantized Visual Search
///
/// Without a subcommand the server is started.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    match cli.command {
        None | Some(Command::Serve) => run_server(cli.config.as_deref()).await,
        Some(Command::Search(args)) => {
            let config = cli::load_config(cli.config.as_deref())?;
            let response = cli::search(config, &args).await?;
            print!("{}", cli::format_matches(&response));
            Ok(())
        }
        Some(Command::Encode(args)) => {
            println!("{}", cli::encode(&args).await?);
            Ok(())
        }
        Some(Command::BuildStub(args)) => {
            let max_items = std::env::var(cli::MAX_ITEMS_ENV).ok();
            let written = cli::build_stub(&args, max_items.as_deref()).await?;
            println!("wrote {written} items to {}", args.out.display());
            Ok(())
        }
    }
}
