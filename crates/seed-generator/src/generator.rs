//! The user record generator.

use crate::generators::{datetime, nested, numeric, pick, strings, uuid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seed_core::{FieldValue, UserRecord};

/// Ethnicities selectable for the `ethnicity` field.
pub const ETHNICITIES: [&str; 4] = ["black/african descent", "white", "hispanic", "asian"];

/// Locations selectable for the `location` field.
pub const LOCATIONS: [&str; 3] = ["The TVA", "The Citadel", "Metropolis"];

/// Account types selectable for the `userType` field.
pub const USER_TYPES: [&str; 3] = ["User", "Advertiser", "Admin"];

/// Generator that produces complete synthetic user records.
///
/// The generator draws every random field from a single RNG, so two
/// generators built with the same seed produce identical records. The one
/// exception is `createdAt`, which always reflects the wall-clock time of
/// the call.
pub struct UserGenerator {
    /// Random number generator all field draws come from
    rng: StdRng,
    /// Current record index (for incremental generation)
    index: u64,
}

impl UserGenerator {
    /// Create a generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            index: 0,
        }
    }

    /// Create a generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            index: 0,
        }
    }

    /// Get the current record index.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate the next user record.
    pub fn next_record(&mut self) -> UserRecord {
        let index = self.index;
        let id = uuid::random_uuid(&mut self.rng);
        let rng = &mut self.rng;

        let record = UserRecord::builder(index, id)
            .field("accessibility", nested::random_accessibility(rng))
            .field("allowCodes", FieldValue::Bool(rng.gen_bool(0.5)))
            .field("appearance", nested::random_appearance(rng))
            .field("bio", FieldValue::String(strings::random_letters(rng, 20)))
            .field(
                "birthdate",
                FieldValue::String(datetime::random_birthdate(rng)),
            )
            .field("brew", nested::random_brew(rng))
            .field("contentSetting", FieldValue::string(""))
            .field("country", FieldValue::string(""))
            .field("createdAt", FieldValue::String(datetime::utc_now_iso()))
            .field("email", FieldValue::String(strings::random_email(rng)))
            .field("ethnicity", FieldValue::string(pick(rng, &ETHNICITIES)))
            .field(
                "followers",
                FieldValue::Int(numeric::random_int_range(rng, 0, 100)),
            )
            .field(
                "followersCount",
                FieldValue::Int(numeric::random_int_range(rng, 0, 100)),
            )
            .field(
                "following",
                FieldValue::Int(numeric::random_int_range(rng, 0, 100)),
            )
            .field(
                "followingCount",
                FieldValue::Int(numeric::random_int_range(rng, 0, 100)),
            )
            .field("gender", FieldValue::string(""))
            .field("handle", FieldValue::String(strings::random_letters(rng, 10)))
            .field(
                "imageUrl",
                FieldValue::String(strings::random_image_url(rng)),
            )
            .field("lastUpdated", FieldValue::string(""))
            .field(
                "likesCount",
                FieldValue::Int(numeric::random_int_range(rng, 0, 100)),
            )
            .field("location", FieldValue::string(pick(rng, &LOCATIONS)))
            .field("memberTour", nested::random_member_tour(rng))
            .field("name", FieldValue::String(strings::random_full_name(rng)))
            .field("notifications", nested::notification_kinds())
            .field("onboardingStep", FieldValue::string("completed"))
            .field("phone", FieldValue::String(strings::random_phone(rng)))
            .field("phoneOptOut", FieldValue::Bool(rng.gen_bool(0.5)))
            .field("pronouns", nested::pronoun_list())
            .field(
                "repScore",
                FieldValue::Int(numeric::random_int_range(rng, 0, 10)),
            )
            .field(
                "spillCount",
                FieldValue::Int(numeric::random_int_range(rng, 0, 500)),
            )
            .field("tos", FieldValue::string("accepted"))
            .field("userType", FieldValue::string(pick(rng, &USER_TYPES)))
            .field("website", FieldValue::String(strings::random_website(rng)))
            .field(
                "zipCode",
                FieldValue::String(strings::random_zip_code(rng)),
            )
            .build();

        self.index += 1;

        record
    }

    /// Generate multiple records as a lazy iterator.
    pub fn records(&mut self, count: u64) -> Records<'_> {
        Records {
            generator: self,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates user records.
pub struct Records<'a> {
    generator: &'a mut UserGenerator,
    remaining: u64,
}

impl Iterator for Records<'_> {
    type Item = UserRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;

        Some(self.generator.next_record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Records<'_> {}
