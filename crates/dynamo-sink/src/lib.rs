//! DynamoDB sink: client construction and single-item record submission.
//!
//! Credentials and the region resolve through the SDK's default provider
//! chain; when nothing in the environment names a region, `us-east-2` is
//! used. Writes go through `PutItem` one record at a time - a failed write
//! surfaces as an error and is never retried here.

pub mod error;

use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::Client;
use dynamo_types::record_to_item;
use seed_core::UserRecord;
use std::time::Duration;
use tracing::{debug, info};

pub use error::SinkError;

/// Region used when neither the CLI nor the environment names one.
pub const DEFAULT_REGION: &str = "us-east-2";

/// Sink that writes user records to a DynamoDB table via PutItem.
pub struct DynamoSink {
    client: Client,
    table: String,
}

impl DynamoSink {
    /// Connect to DynamoDB and verify the target table is reachable.
    ///
    /// `region` overrides the environment when given; otherwise the SDK's
    /// default provider chain decides, falling back to [`DEFAULT_REGION`].
    pub async fn connect(table: &str, region: Option<String>) -> Result<Self, SinkError> {
        let region_provider = RegionProviderChain::first_try(region.map(Region::new))
            .or_default_provider()
            .or_else(Region::new(DEFAULT_REGION));

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(region_provider)
            .load()
            .await;
        let client = Client::new(&sdk_config);

        let sink = Self {
            client,
            table: table.to_string(),
        };
        sink.preflight().await?;

        Ok(sink)
    }

    /// Build a sink around an existing client, skipping the preflight.
    pub fn with_client(client: Client, table: &str) -> Self {
        Self {
            client,
            table: table.to_string(),
        }
    }

    /// The table this sink writes to.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Check that the table exists and answers before the loop starts.
    async fn preflight(&self) -> Result<(), SinkError> {
        self.client
            .describe_table()
            .table_name(&self.table)
            .send()
            .await
            .map_err(|e| SinkError::Preflight {
                table: self.table.clone(),
                source: Box::new(e),
            })?;

        info!("Connected to DynamoDB table '{}'", self.table);

        Ok(())
    }

    /// Submit a single record via PutItem.
    ///
    /// The record converts to an attribute map unmodified; the caller keeps
    /// ownership and can still project or log it afterwards.
    pub async fn put_record(&self, record: &UserRecord) -> Result<(), SinkError> {
        let item = record_to_item(record);

        debug!(
            "Putting record {} ({} fields) into '{}'",
            record.id,
            record.field_count(),
            self.table
        );

        self.client
            .put_item()
            .table_name(&self.table)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| SinkError::Put {
                table: self.table.clone(),
                source: Box::new(e),
            })?;

        Ok(())
    }
}

/// Metrics from a bounded seeding run.
#[derive(Debug, Clone, Default)]
pub struct InsertMetrics {
    /// Number of records inserted.
    pub records_inserted: u64,
    /// Total wall-clock time, pacing included.
    pub total_duration: Duration,
}

impl InsertMetrics {
    /// Calculate records per second.
    pub fn records_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.records_inserted as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_metrics_rate() {
        let metrics = InsertMetrics {
            records_inserted: 100,
            total_duration: Duration::from_secs(50),
        };

        assert!((metrics.records_per_second() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_insert_metrics_zero_duration() {
        let metrics = InsertMetrics::default();

        assert_eq!(metrics.records_per_second(), 0.0);
    }
}
