//! The generate → submit → tick loop, plus the offline JSON emitter.

use crate::{GenerateOpts, GenerateShape, SeedOpts};
use anyhow::Context;
use dynamo_sink::{DynamoSink, InsertMetrics};
use seed_core::{AppearanceProjection, NotificationFlags};
use seed_generator::UserGenerator;
use std::time::{Duration, Instant};
use tracing::info;

/// Build a generator from an optional CLI seed.
fn generator_from(seed: Option<u64>) -> UserGenerator {
    match seed {
        Some(seed) => UserGenerator::new(seed),
        None => UserGenerator::from_entropy(),
    }
}

/// Run the seeding loop: generate a record, put it, wait, repeat.
///
/// Unbounded by default; a `--count` bound stops the loop after that many
/// inserts and logs summary metrics. Any sink error is fatal and propagates
/// to the caller.
pub async fn run_seed(opts: &SeedOpts) -> anyhow::Result<()> {
    // tokio interval periods must be non-zero; the CLI also rejects 0
    anyhow::ensure!(opts.interval_ms > 0, "--interval-ms must be at least 1");

    let mut generator = generator_from(opts.seed);

    let sink = if opts.dry_run {
        info!("Dry run - records will be generated but not written");
        None
    } else {
        let sink = DynamoSink::connect(&opts.table, opts.region.clone())
            .await
            .with_context(|| format!("failed to connect to DynamoDB table '{}'", opts.table))?;
        Some(sink)
    };

    info!(
        "Seeding table '{}' every {}ms ({})",
        opts.table,
        opts.interval_ms,
        match opts.count {
            Some(count) => format!("{count} records"),
            None => "until terminated".to_string(),
        }
    );

    let mut ticker = tokio::time::interval(Duration::from_millis(opts.interval_ms));
    let started = Instant::now();
    let mut inserted = 0u64;

    loop {
        ticker.tick().await;

        let record = generator.next_record();

        match &sink {
            Some(sink) => {
                sink.put_record(&record)
                    .await
                    .with_context(|| format!("insert #{} failed", record.index))?;
                info!("Inserted record {} (#{})", record.id, record.index);
            }
            None => {
                info!("Would insert record {} (#{})", record.id, record.index);
            }
        }

        inserted += 1;
        if let Some(count) = opts.count {
            if inserted >= count {
                break;
            }
        }
    }

    let metrics = InsertMetrics {
        records_inserted: inserted,
        total_duration: started.elapsed(),
    };
    info!(
        "Done: {} records in {:.1}s ({:.1} records/s)",
        metrics.records_inserted,
        metrics.total_duration.as_secs_f64(),
        metrics.records_per_second()
    );

    Ok(())
}

/// Emit generated records to stdout as single-line JSON, one per record.
///
/// No network is touched; `--shape` selects between the full record and the
/// two downstream projections.
pub fn run_generate(opts: &GenerateOpts) -> anyhow::Result<()> {
    let mut generator = generator_from(opts.seed);

    for record in generator.records(opts.count) {
        let line = match opts.shape {
            GenerateShape::Record => serde_json::to_string(&record.to_json())?,
            GenerateShape::Appearance => {
                serde_json::to_string(&AppearanceProjection::from_record(&record))?
            }
            GenerateShape::Notifications => {
                serde_json::to_string(&NotificationFlags::from_record(&record))?
            }
        };
        println!("{line}");
    }

    Ok(())
}
