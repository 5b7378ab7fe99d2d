//! Password strength scoring
//!
//! Scores a password on a 0..=10 scale from length and character-class
//! heuristics. The score is monotone: removing trailing characters never
//! increases it.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Best possible score.
pub const MAX_SCORE: u8 = 10;

/// Passwords that score zero no matter their shape.
static WEAK_PASSWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["root", "password", "admin", "123456", "qwerty", "letmein"]
        .into_iter()
        .collect()
});

/// Score `password` in `0..=MAX_SCORE`.
///
/// Hard rules first: two characters or fewer, a listed weak password, or a
/// single repeated character score 0; more than twenty characters scores 10.
/// Everything else scores `min(len - 8, 4)` length points plus two points per
/// character class present among lowercase, uppercase, and digits, clamped to
/// the scale. Characters outside those classes contribute length only.
pub fn password_strength(password: &str) -> u8 {
    let len = password.chars().count();
    if len <= 2 {
        return 0;
    }
    if WEAK_PASSWORDS.contains(password.to_lowercase().as_str()) {
        return 0;
    }
    let mut chars = password.chars();
    let first = chars.next();
    if let Some(f) = first {
        if chars.all(|c| c == f) {
            return 0;
        }
    }
    if len > 20 {
        return MAX_SCORE;
    }

    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let classes = [has_lower, has_upper, has_digit]
        .into_iter()
        .filter(|present| *present)
        .count() as i64;

    let length_points = (len as i64 - 8).min(4);
    (length_points + 2 * classes).clamp(0, MAX_SCORE as i64) as u8
}
