//! Date and timestamp value generators.

use chrono::Utc;
use rand::Rng;

/// Generate a random birthdate as a `YYYY-MM-DD` string.
///
/// Years fall in 1980..=2000. Days are capped at 28 so every generated
/// combination is a valid calendar date.
pub fn random_birthdate<R: Rng>(rng: &mut R) -> String {
    let year = rng.gen_range(1980..=2000);
    let month = rng.gen_range(1..=12);
    let day = rng.gen_range(1..=28);
    format!("{year}-{month:02}-{day:02}")
}

/// The current UTC time as an ISO 8601 string with microsecond precision
/// and a trailing `Z`.
///
/// This is NOT deterministic - each call returns the current time.
pub fn utc_now_iso() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_birthdate_ranges() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let date = random_birthdate(&mut rng);
            let parts: Vec<&str> = date.split('-').collect();
            assert_eq!(parts.len(), 3);

            let year: i32 = parts[0].parse().unwrap();
            let month: u32 = parts[1].parse().unwrap();
            let day: u32 = parts[2].parse().unwrap();

            assert!((1980..=2000).contains(&year));
            assert!((1..=12).contains(&month));
            assert!((1..=28).contains(&day));

            // Month and day are zero-padded
            assert_eq!(parts[1].len(), 2);
            assert_eq!(parts[2].len(), 2);
        }
    }

    #[test]
    fn test_random_birthdate_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(random_birthdate(&mut rng1), random_birthdate(&mut rng2));
    }

    #[test]
    fn test_utc_now_iso_format() {
        let value = utc_now_iso();

        assert!(value.ends_with('Z'));
        // YYYY-MM-DDTHH:MM:SS.ffffffZ
        assert_eq!(value.len(), 27);
        assert!(DateTime::parse_from_rfc3339(&value).is_ok());
    }
}
