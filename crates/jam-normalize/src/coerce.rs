//! Scalar coercion from raw cell values.
//!
//! Spreadsheet data is human-maintained; every malformed cell degrades
//! to its field default rather than raising.

use jam_model::RawValue;

/// Parse a string as a locale-free number.
///
/// Tolerates surrounding whitespace and thousands separators
/// ("1,234"). Returns None for anything else.
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Remove thousands separators and whitespace
    let cleaned = trimmed
        .replace(',', "")
        .replace(' ', "")
        .replace('\u{a0}', ""); // Non-breaking space

    cleaned.parse().ok()
}

/// Coerce a raw cell to a non-negative count.
///
/// Numbers truncate toward zero; negative, non-finite, boolean, and
/// unparsable values all coerce to 0.
pub fn coerce_count(value: Option<&RawValue>) -> u32 {
    value.and_then(try_count).unwrap_or(0)
}

/// Like [`coerce_count`], but reports whether the cell held anything
/// numeric at all. `None` means the cell is as good as absent, which
/// lets the points field fall back to its weighted sum instead of
/// pinning a malformed cell to 0.
pub fn try_count(value: &RawValue) -> Option<u32> {
    let numeric = match value {
        RawValue::Number(n) => Some(*n),
        RawValue::Text(s) => parse_numeric(s),
        RawValue::Bool(_) | RawValue::Null => None,
    }?;
    if numeric.is_finite() && numeric > 0.0 {
        // Float-to-int casts saturate, so huge cells clamp to u32::MAX.
        Some(numeric as u32)
    } else {
        Some(0)
    }
}

/// Coerce a raw cell to trimmed text; non-text values stringify.
pub fn coerce_text(value: Option<&RawValue>) -> String {
    match value {
        Some(RawValue::Text(s)) => s.trim().to_string(),
        Some(RawValue::Number(n)) => {
            if n.fract() == 0.0 && n.is_finite() {
                format!("{}", *n as i64)
            } else {
                n.to_string()
            }
        }
        Some(RawValue::Bool(b)) => b.to_string(),
        Some(RawValue::Null) | None => String::new(),
    }
}

/// The `verified` rule: literal boolean true, or a string whose form is
/// case-insensitively "yes". Everything else is false.
pub fn coerce_flag(value: Option<&RawValue>) -> bool {
    match value {
        Some(RawValue::Bool(b)) => *b,
        Some(RawValue::Text(s)) => s.trim().eq_ignore_ascii_case("yes"),
        _ => false,
    }
}
