//! Input coercion helpers
//!
//! Pure text transforms backing the input widgets: digit filtering for
//! numeric cells (with cursor bookkeeping) and the live `YYYY-MM-DD HH:MM`
//! mask for typed timestamp entry.

use chrono::NaiveDateTime;
use kadmin_core::{CoreResult, parse_timestamp};

/// Strip non-digit characters from `text`, returning the filtered text and
/// the adjusted cursor position.
///
/// The cursor moves left by exactly the number of characters removed (it was
/// sitting after them), clamped to the filtered length.
pub fn filter_digits(text: &str, cursor: usize) -> (String, usize) {
    let filtered: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    let removed = text.chars().count() - filtered.chars().count();
    let cursor = cursor.saturating_sub(removed).min(filtered.chars().count());
    (filtered, cursor)
}

/// Number of digits in a full `YYYY-MM-DD HH:MM` mask
const MASK_DIGITS: usize = 12;

/// Live-format a run of digits as `YYYY-MM-DD HH:MM`.
///
/// Separators are inserted after the year, month, day, and hour groups;
/// anything beyond twelve digits is dropped. Non-digits in the input are
/// ignored, so re-masking already-masked text is a no-op.
pub fn mask_timestamp_digits(input: &str) -> String {
    let mut out = String::new();
    for (index, digit) in input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(MASK_DIGITS)
        .enumerate()
    {
        match index {
            4 | 6 => out.push('-'),
            8 => out.push(' '),
            10 => out.push(':'),
            _ => {}
        }
        out.push(digit);
    }
    out
}

/// Parse a complete `YYYY-MM-DD HH:MM` mask into a timestamp with zero
/// seconds. Partial masks and invalid dates are rejected.
pub fn parse_masked_timestamp(masked: &str) -> CoreResult<NaiveDateTime> {
    parse_timestamp(&format!("{}:00", masked))
}

// ============================================================================
// Tests
// ============================================================================
