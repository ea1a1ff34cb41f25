//! Short random entity identifiers.
//!
//! Ids are 6 characters drawn from the URL-safe nanoid alphabet. At the
//! collection sizes this service holds (tens of records), the collision
//! probability is negligible, so no uniqueness check is made against the
//! live collection.

use rand::Rng;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

pub const ID_LEN: usize = 6;

/// Generates a fresh 6-character identifier.
pub fn generate() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
