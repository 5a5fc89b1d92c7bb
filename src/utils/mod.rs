pub mod clock;
pub mod url_validator;

use chrono::{DateTime, Utc};

/// 62-character alphanumeric alphabet for generated codes
pub const CODE_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generated codes are always exactly this long
pub const GENERATED_CODE_LENGTH: usize = 6;

/// Generate a short code candidate: the last 2 base-36 characters of the
/// current timestamp in milliseconds, followed by 4 uniformly random
/// alphanumeric characters, lowercased. Uniqueness against the store is
/// the caller's responsibility (regenerate on collision).
pub fn generate_short_code(now: DateTime<Utc>) -> String {
    use std::iter;

    let stamp = to_base36(now.timestamp_millis().max(0) as u64);
    let tail = &stamp[stamp.len().saturating_sub(2)..];

    let random: String =
        iter::repeat_with(|| CODE_ALPHABET[rand::random_range(0..CODE_ALPHABET.len())] as char)
            .take(GENERATED_CODE_LENGTH - 2)
            .collect();

    format!("{}{}", tail, random).to_lowercase()
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize] as char);
        value /= 36;
    }
    out.iter().rev().collect()
}

/// Normalize a user-supplied alias: lowercase, whitespace becomes a
/// hyphen, anything outside [a-z0-9-] is dropped.
pub fn normalize_alias(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}
