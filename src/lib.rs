//! dynamo-seed: continuously seed a DynamoDB table with synthetic users.
//!
//! The workspace splits into small focused crates:
//!
//! - `seed-core` - the record model and downstream projections
//! - `seed-generator` - the fixed-schema random record generator
//! - `dynamo-types` - record to DynamoDB attribute map conversion
//! - `dynamo-sink` - client construction and PutItem submission
//!
//! This crate ties them together behind the `dynamo-seed` CLI.

pub mod seeder;

use clap::{Parser, ValueEnum};

/// Options for the `run` subcommand.
#[derive(Parser, Clone)]
pub struct SeedOpts {
    /// DynamoDB table to write to
    #[arg(long, default_value = "users", env = "DYNAMO_SEED_TABLE")]
    pub table: String,

    /// AWS region (overrides the environment; falls back to us-east-2)
    #[arg(long)]
    pub region: Option<String>,

    /// Pause between inserts, in milliseconds (must be at least 1)
    #[arg(long, default_value = "500", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: u64,

    /// Stop after this many inserts (default: run forever)
    #[arg(long)]
    pub count: Option<u64>,

    /// RNG seed for reproducible records (default: seed from entropy)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Dry run mode - don't actually write data
    #[arg(long)]
    pub dry_run: bool,
}

/// Options for the `generate` subcommand.
#[derive(Parser, Clone)]
pub struct GenerateOpts {
    /// Number of records to emit
    #[arg(long, default_value = "1")]
    pub count: u64,

    /// RNG seed for reproducible records (default: seed from entropy)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Shape to emit for each generated record
    #[arg(long, value_enum, default_value = "record")]
    pub shape: GenerateShape,
}

/// The JSON shape `generate` writes per record.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerateShape {
    /// The full user record
    Record,
    /// The flattened appearance projection
    Appearance,
    /// The notification flags projection
    Notifications,
}
