use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::modules::validation::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

// Character pools for generation
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";

/// Generate a random default password, used when the user has exhausted
/// their manual attempts at creating one.
///
/// Policy-compliant by construction: the length is uniform in [8,12], one
/// character from each required pool is seeded up front, the remaining
/// positions are filled from the combined alphanumeric pool, and the whole
/// sequence is Fisher-Yates shuffled to remove positional bias. All
/// randomness comes from the OS CSPRNG; this is the one place where
/// predictability would hand an attacker the fallback password.
pub fn generate() -> String {
    let mut rng = OsRng;
    let length = rng.gen_range(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH);

    // One character from each required pool, guaranteeing policy compliance.
    let mut chars = vec![
        UPPERCASE[rng.gen_range(0..UPPERCASE.len())],
        LOWERCASE[rng.gen_range(0..LOWERCASE.len())],
        DIGITS[rng.gen_range(0..DIGITS.len())],
    ];

    // Fill the rest from the combined pool.
    let pool: Vec<u8> = [UPPERCASE, LOWERCASE, DIGITS].concat();
    for _ in chars.len()..length {
        chars.push(pool[rng.gen_range(0..pool.len())]);
    }

    // Shuffle so the seeded characters are not always at the front.
    chars.shuffle(&mut rng);

    String::from_utf8(chars).expect("password chars are ASCII")
}
