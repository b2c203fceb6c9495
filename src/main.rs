//! Command-line interface for dynamo-seed
//!
//! # Usage Examples
//!
//! ```bash
//! # Seed the default `users` table forever, one record every 500ms
//! dynamo-seed run
//!
//! # Bounded, faster run against another table and region
//! dynamo-seed run --table staging-users --region us-west-2 \
//!   --interval-ms 100 --count 1000
//!
//! # Inspect what would be written, without the network
//! dynamo-seed run --dry-run --count 3
//! dynamo-seed generate --count 5 --seed 42
//! dynamo-seed generate --shape notifications --count 5
//! ```

use clap::{Parser, Subcommand};
use dynamo_seed::{seeder, GenerateOpts, SeedOpts};

#[derive(Parser)]
#[command(name = "dynamo-seed")]
#[command(about = "A tool for continuously seeding a DynamoDB table with synthetic user records")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate records and put them into DynamoDB on a fixed interval
    Run {
        #[command(flatten)]
        opts: SeedOpts,
    },

    /// Emit generated records to stdout as JSON lines, without the network
    Generate {
        #[command(flatten)]
        opts: GenerateOpts,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing; the per-insert line logs at info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { opts } => seeder::run_seed(&opts).await,
        Commands::Generate { opts } => seeder::run_generate(&opts),
    }
}
