//! Normalized lookup keys
//!
//! Entries and assets often disagree on the type of an identifier (`5` in
//! one file, `"5"` in the other). Every asset key value is registered under
//! up to three forms so such pairs still match:
//!
//! 1. the raw value,
//! 2. its string representation,
//! 3. for strings holding a base-10 number, the numeric value.
//!
//! Entry values are looked up by their raw form only.

use serde_json::{Number, Value};

/// A hashable form of a JSON value used as a lookup table key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LookupKey {
    Null,
    Bool(bool),
    /// Bit pattern of the value as `f64`, with `-0` folded into `0`
    Number(u64),
    String(String),
    /// Arrays and objects, keyed by their compact JSON text
    Composite(String),
}

impl LookupKey {
    /// The raw form of a value
    pub fn raw(value: &Value) -> Self {
        match value {
            Value::Null => LookupKey::Null,
            Value::Bool(b) => LookupKey::Bool(*b),
            Value::Number(n) => n
                .as_f64()
                .map_or_else(|| LookupKey::String(n.to_string()), LookupKey::from_f64),
            Value::String(s) => LookupKey::String(s.clone()),
            Value::Array(_) | Value::Object(_) => LookupKey::Composite(value.to_string()),
        }
    }

    /// The string form of a value
    pub fn text(value: &Value) -> Self {
        LookupKey::String(value_to_text(value))
    }

    /// The numeric form of a string holding a base-10 number
    pub fn numeric(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => parse_decimal(s).map(LookupKey::from_f64),
            _ => None,
        }
    }

    /// All distinct forms a value is registered under, in priority order
    pub fn forms(value: &Value) -> Vec<Self> {
        let mut forms = vec![Self::raw(value)];
        for form in [Some(Self::text(value)), Self::numeric(value)].into_iter().flatten() {
            if !forms.contains(&form) {
                forms.push(form);
            }
        }
        forms
    }

    /// Numeric value of a `Number` key
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            LookupKey::Number(bits) => Some(f64::from_bits(*bits)),
            _ => None,
        }
    }

    fn from_f64(f: f64) -> Self {
        // -0.0 == 0.0 but their bit patterns differ
        let normalized = if f == 0.0 { 0.0 } else { f };
        LookupKey::Number(normalized.to_bits())
    }
}

/// String representation of a JSON value as used for key coercion
///
/// Strings are returned without quotes. Numbers use their shortest form,
/// switching to exponent notation outside `[1e-6, 1e21)` (`5.0` becomes
/// `"5"`, `1e-7` stays `"1e-7"`). Array elements are joined with commas,
/// `null` elements turning into empty text, so `[1, null, 2]` becomes
/// `"1,,2"`. Objects are written as compact JSON.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => value_to_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

fn number_to_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if (1e-6..1e21).contains(&f.abs()) => f.to_string(),
        Some(f) => exponent_text(f),
        None => n.to_string(),
    }
}

/// `1e21` -> `"1e+21"`, `1.5e-7` -> `"1.5e-7"`
fn exponent_text(f: f64) -> String {
    let text = format!("{:e}", f);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => text,
    }
}

/// Parse a string that is entirely a finite base-10 number
///
/// Surrounding whitespace is ignored. Empty strings, `inf`/`NaN` spellings
/// and hex literals are rejected.
fn parse_decimal(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    let decimal_chars = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !decimal_chars {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
}
