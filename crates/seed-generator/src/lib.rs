//! Synthetic user record generation.
//!
//! The schema here is fixed: every record carries the same set of profile
//! fields, from plain strings through nested preference maps. Randomness
//! flows from a single seedable RNG so runs are reproducible on demand.
//!
//! ```no_run
//! use seed_generator::UserGenerator;
//!
//! let mut generator = UserGenerator::new(42);
//! let record = generator.next_record();
//! println!("{}", record.to_json());
//! ```

pub mod generator;
pub mod generators;

pub use generator::{Records, UserGenerator, ETHNICITIES, LOCATIONS, USER_TYPES};
