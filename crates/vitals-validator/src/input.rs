//! Raw Input Values

use serde_json::Value;

/// A value as it arrives from an entry field or a decoded payload.
///
/// Nothing about its shape is trusted: it may be missing, a number, or text
/// that still has to be parsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue<'a> {
    /// No value at all
    Absent,
    /// Already numeric
    Number(f64),
    /// Text to be parsed
    Text(&'a str),
}

/// Result of normalizing a raw value to a number
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Parsed {
    Missing,
    NotANumber,
    Number(f64),
}

impl RawValue<'_> {
    /// Absent, or text that is empty after trimming
    pub fn is_absent(&self) -> bool {
        match self {
            RawValue::Absent => true,
            RawValue::Text(text) => text.trim().is_empty(),
            RawValue::Number(_) => false,
        }
    }

    pub(crate) fn parse(&self) -> Parsed {
        if self.is_absent() {
            return Parsed::Missing;
        }
        let value = match self {
            RawValue::Number(value) => Some(*value),
            RawValue::Text(text) => parse_decimal(text.trim()),
            RawValue::Absent => None,
        };
        match value {
            Some(value) if value.is_finite() => Parsed::Number(value),
            _ => Parsed::NotANumber,
        }
    }
}

/// Parse with either `.` or a single `,` as decimal separator
fn parse_decimal(text: &str) -> Option<f64> {
    if !text.contains('.') && text.matches(',').count() == 1 {
        return text.replacen(',', ".", 1).parse().ok();
    }
    text.parse().ok()
}

impl From<f64> for RawValue<'_> {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<f32> for RawValue<'_> {
    fn from(value: f32) -> Self {
        RawValue::Number(f64::from(value))
    }
}

impl From<i32> for RawValue<'_> {
    fn from(value: i32) -> Self {
        RawValue::Number(f64::from(value))
    }
}

impl From<u32> for RawValue<'_> {
    fn from(value: u32) -> Self {
        RawValue::Number(f64::from(value))
    }
}

impl From<i64> for RawValue<'_> {
    fn from(value: i64) -> Self {
        RawValue::Number(value as f64)
    }
}

impl<'a> From<&'a str> for RawValue<'a> {
    fn from(text: &'a str) -> Self {
        RawValue::Text(text)
    }
}

impl<'a> From<&'a String> for RawValue<'a> {
    fn from(text: &'a String) -> Self {
        RawValue::Text(text.as_str())
    }
}

impl<'a, T: Into<RawValue<'a>>> From<Option<T>> for RawValue<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Absent, Into::into)
    }
}

/// `null` is absent; booleans, arrays and objects never parse as numbers.
impl<'a> From<&'a Value> for RawValue<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null => RawValue::Absent,
            Value::Number(number) => RawValue::Number(number.as_f64().unwrap_or(f64::NAN)),
            Value::String(text) => RawValue::Text(text.as_str()),
            Value::Bool(_) | Value::Array(_) | Value::Object(_) => RawValue::Number(f64::NAN),
        }
    }
}
