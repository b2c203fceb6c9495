//! Core types for the dynamo-seed toolkit.
//!
//! This crate defines the intermediate record format shared by the
//! generator, the DynamoDB sink, and the offline JSON emitter:
//!
//! - [`FieldValue`] - the type-agnostic value a field holds
//! - [`UserRecord`] - one generated user profile
//! - [`AppearanceProjection`] / [`NotificationFlags`] - the flattened
//!   shapes downstream consumers derive from a record

pub mod projection;
pub mod record;

pub use projection::{AppearanceProjection, NotificationFlags};
pub use record::{FieldValue, UserRecord, UserRecordBuilder, FIELD_NAMES};
