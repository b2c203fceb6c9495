//! Error types for the DynamoDB sink.

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use thiserror::Error;

/// Errors that can occur while writing records to DynamoDB.
#[derive(Error, Debug)]
pub enum SinkError {
    /// The table preflight check failed.
    #[error("table '{table}' is not reachable: {source}")]
    Preflight {
        table: String,
        #[source]
        source: Box<SdkError<DescribeTableError>>,
    },

    /// A PutItem call was rejected by the service.
    #[error("PutItem against table '{table}' failed: {source}")]
    Put {
        table: String,
        #[source]
        source: Box<SdkError<PutItemError>>,
    },
}
