//! Numeric value generators.

use rand::Rng;

/// Generate a random integer in the given range (inclusive).
pub fn random_int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.gen_range(min..=max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_int_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = random_int_range(&mut rng, 0, 100);
            assert!((0..=100).contains(&value));
        }
    }

    #[test]
    fn test_random_int_range_single_value() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(random_int_range(&mut rng, 7, 7), 7);
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        for _ in 0..10 {
            assert_eq!(
                random_int_range(&mut rng1, 0, 500),
                random_int_range(&mut rng2, 0, 500)
            );
        }
    }
}
