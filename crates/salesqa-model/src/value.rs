//! Cell-value projections over Polars `AnyValue`.
//!
//! Rules never mutate the dataset: every coercion (currency stripping,
//! numeric parsing) is applied here as a side-effect-free projection of the
//! cell, so rule evaluation stays order-independent.

use polars::prelude::AnyValue;

/// Converts a cell to its string representation.
/// Null becomes the empty string; floats lose trailing zeros.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// True for null cells and for text cells that are empty or whitespace-only.
pub fn is_blank(value: &AnyValue) -> bool {
    match value {
        AnyValue::Null => true,
        AnyValue::String(s) => s.trim().is_empty(),
        AnyValue::StringOwned(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Formats a floating-point number without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Converts a cell to f64, going through [`parse_number`] for text cells.
/// Returns `None` for null, non-numeric, and malformed values.
pub fn any_to_f64(value: &AnyValue) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(*v)),
        AnyValue::Int16(v) => Some(f64::from(*v)),
        AnyValue::Int32(v) => Some(f64::from(*v)),
        AnyValue::Int64(v) => Some(*v as f64),
        AnyValue::UInt8(v) => Some(f64::from(*v)),
        AnyValue::UInt16(v) => Some(f64::from(*v)),
        AnyValue::UInt32(v) => Some(f64::from(*v)),
        AnyValue::UInt64(v) => Some(*v as f64),
        AnyValue::Float32(v) => Some(f64::from(*v)),
        AnyValue::Float64(v) => Some(*v),
        AnyValue::String(s) => parse_number(s),
        AnyValue::StringOwned(s) => parse_number(s),
        _ => None,
    }
}

const CURRENCY_SYMBOLS: [char; 3] = ['$', '€', '£'];

/// Parses a monetary/numeric string, tolerating one leading currency symbol
/// (`$-5.00` and `-$5.00` both parse to -5.0) and comma thousands
/// separators in standard 3-digit groups (`1,250.50` parses, `1,2` does
/// not). Returns `None` for empty or malformed input; callers decide
/// whether that counts as a violation.
pub fn parse_number(raw: &str) -> Option<f64> {
    let mut value = raw.trim();
    if value.is_empty() {
        return None;
    }

    let mut negative = false;
    let mut signed = false;
    if let Some(rest) = value.strip_prefix(['-', '+']) {
        negative = value.starts_with('-');
        signed = true;
        value = rest;
    }
    if let Some(rest) = value.strip_prefix(CURRENCY_SYMBOLS) {
        value = rest;
    }
    if let Some(rest) = value.strip_prefix(['-', '+']) {
        // A second sign ("-$-5") is malformed.
        if signed {
            return None;
        }
        negative = value.starts_with('-');
        value = rest;
    }
    // Anything left over ("$--5") is a doubled sign.
    if value.starts_with(['-', '+']) {
        return None;
    }

    let cleaned = strip_thousands_separators(value)?;
    if cleaned.is_empty() {
        return None;
    }
    let magnitude = cleaned.parse::<f64>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Removes comma thousands separators, rejecting misplaced grouping
/// (`1,2`, `,5`, `1,,000`) and commas in the fractional part.
fn strip_thousands_separators(value: &str) -> Option<String> {
    if !value.contains(',') {
        return Some(value.to_string());
    }
    let (int_part, frac_part) = match value.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (value, None),
    };
    if frac_part.is_some_and(|frac| frac.contains(',')) {
        return None;
    }
    let mut groups = int_part.split(',');
    let first = groups.next()?;
    if first.is_empty() || first.len() > 3 || !groups.all(|group| group.len() == 3) {
        return None;
    }
    Some(value.chars().filter(|ch| *ch != ',').collect())
}
