//! String value generators, plain and formatted.

use super::uuid::random_uuid;
use rand::Rng;

/// Generate a random string of lowercase ASCII letters.
pub fn random_letters<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(b'a' + rng.gen_range(0u8..26)))
        .collect()
}

/// Generate a random email address on the example.com domain.
pub fn random_email<R: Rng>(rng: &mut R) -> String {
    format!("{}@example.com", random_letters(rng, 5))
}

/// Generate a random two-part display name.
pub fn random_full_name<R: Rng>(rng: &mut R) -> String {
    format!("{} {}", random_letters(rng, 6), random_letters(rng, 6))
}

/// Generate a random Philippine-prefixed phone number.
pub fn random_phone<R: Rng>(rng: &mut R) -> String {
    format!("+639{}", rng.gen_range(1_000_000_000u64..=9_999_999_999))
}

/// Generate a random short link on the tdy.lol domain.
pub fn random_website<R: Rng>(rng: &mut R) -> String {
    format!("https://tdy.lol/{}", random_letters(rng, 6))
}

/// Generate a random profile image URL.
pub fn random_image_url<R: Rng>(rng: &mut R) -> String {
    format!("https://example.com/{}/image.jpg", random_uuid(rng))
}

/// Generate a random five-digit ZIP code.
pub fn random_zip_code<R: Rng>(rng: &mut R) -> String {
    format!("{}", rng.gen_range(10_000..=99_999))
}
