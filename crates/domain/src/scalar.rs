//! Scalar catalog values shown verbatim in the table.

use std::fmt;

use serde::Deserialize;
use serde_json::Number;

/// A JSON scalar taken from a catalog record.
///
/// Ids, prices and discounts arrive as numbers or strings depending on the
/// record. They are displayed as-is; numbers use the shortest form, so a
/// whole-valued float such as `10.0` prints as `10`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(Number),
    Text(String),
    Bool(bool),
}

impl Scalar {
    /// Case-sensitive substring match against the displayed form.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        match self {
            Self::Text(text) => text.contains(needle),
            Self::Number(_) | Self::Bool(_) => self.to_string().contains(needle),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write_number(f, number),
            Self::Text(text) => f.write_str(text),
            Self::Bool(flag) => fmt::Display::fmt(flag, f),
        }
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, number: &Number) -> fmt::Result {
    match number.as_f64() {
        Some(value) if number.is_f64() => {
            if value == 0.0 {
                f.write_str("0")
            } else if value.fract() == 0.0 && value.abs() < 1e21 {
                write!(f, "{value:.0}")
            } else {
                fmt::Display::fmt(&value, f)
            }
        }
        _ => fmt::Display::fmt(number, f),
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or_else(|| Self::Text(value.to_string()), Self::Number)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
