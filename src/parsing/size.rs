//! Size literal conversion
//!
//! Listing pages print sizes as a decimal magnitude followed by a
//! two-letter binary unit suffix ("1.5 GB"). The magnitude always uses a
//! period as decimal separator regardless of the page locale.

use super::error::{ParseError, ParseResult};

const KB: i64 = 1024;
const MB: i64 = 1024 * 1024;
const GB: i64 = 1024 * 1024 * 1024;
const TB: i64 = 1_099_511_627_776;

/// Convert a size literal into a byte count, rounding toward zero.
///
/// `None` and empty text yield 0. An unrecognized suffix means the whole
/// text is a plain byte count. A malformed magnitude is an error for this
/// call; the listing loop isolates it per row.
pub fn parse_size(text: Option<&str>) -> ParseResult<i64> {
    let Some(text) = text else {
        return Ok(0);
    };
    let text = text.trim();
    if text.is_empty() {
        return Ok(0);
    }

    let (magnitude_text, multiplier) = split_unit(text);
    let magnitude: f64 = magnitude_text
        .trim()
        .parse()
        .map_err(|_| ParseError::invalid_number("size", magnitude_text.trim()))?;

    Ok(((magnitude * multiplier as f64) as i64).max(0))
}

/// Split off the two-letter unit suffix, if one is recognized.
fn split_unit(text: &str) -> (&str, i64) {
    if text.len() < 2 || !text.is_char_boundary(text.len() - 2) {
        return (text, 1);
    }

    let (magnitude, suffix) = text.split_at(text.len() - 2);
    let multiplier = match suffix.to_ascii_uppercase().as_str() {
        "KB" => KB,
        "MB" => MB,
        "GB" => GB,
        "TB" => TB,
        _ => return (text, 1),
    };

    (magnitude, multiplier)
}
