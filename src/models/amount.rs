//! A monetary amount as it appears on the wire.

use serde::{Deserialize, Serialize};

/// A decimal amount received from the remote service, which stores amounts
/// inconsistently as either a JSON number or a numeric string.
///
/// Parsing is deferred until the value is needed so that a malformed amount
/// degrades that one record instead of failing the whole response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    /// The amount was sent as a JSON number.
    Number(f64),
    /// The amount was sent as a string, e.g. `"42.50"`.
    Text(String),
}

impl RawAmount {
    /// Parse the raw value into a non-negative amount.
    ///
    /// Returns `None` for values that do not parse as a number, are not
    /// finite, or are negative. Callers must exclude such records from sums
    /// rather than propagate an error.
    pub fn parse(&self) -> Option<f64> {
        let value = match self {
            RawAmount::Number(value) => *value,
            RawAmount::Text(text) => text.trim().parse().ok()?,
        };

        (value.is_finite() && value >= 0.0).then_some(value)
    }

    /// Parse the raw value, substituting `0` where a number is required.
    pub fn parse_or_zero(&self) -> f64 {
        self.parse().unwrap_or(0.0)
    }
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        RawAmount::Number(value)
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        RawAmount::Text(value.to_owned())
    }
}
