//! Individual value generators for the user record fields.
//!
//! Each module covers one kind of value: plain and formatted strings,
//! integers, dates, UUIDs, and the nested maps and lists.

pub mod datetime;
pub mod nested;
pub mod numeric;
pub mod strings;
pub mod uuid;

use rand::Rng;

/// Pick a uniformly random element from a slice of options.
///
/// The slice must be non-empty.
pub fn pick<'a, R: Rng>(rng: &mut R, options: &'a [&'a str]) -> &'a str {
    options[rng.gen_range(0..options.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_stays_in_options() {
        let mut rng = StdRng::seed_from_u64(42);
        let options = ["a", "b", "c"];

        for _ in 0..100 {
            assert!(options.contains(&pick(&mut rng, &options)));
        }
    }

    #[test]
    fn test_pick_deterministic() {
        let options = ["a", "b", "c"];

        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        for _ in 0..10 {
            assert_eq!(pick(&mut rng1, &options), pick(&mut rng2, &options));
        }
    }
}
