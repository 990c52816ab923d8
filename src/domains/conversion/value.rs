//! Wire representation and decimal handling for measurement amounts.
//!
//! All conversion arithmetic runs on [`rust_decimal::Decimal`] so the
//! high-precision unit factors never drift through binary floats. Results
//! are quantized to a fixed four fractional digits with halves rounding
//! away from zero.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::error::ConversionError;

/// Number of fractional digits every conversion result carries.
pub const RESULT_SCALE: u32 = 4;

/// A measurement amount as received on the wire.
///
/// Clients may send the value either as a JSON number or as a numeric
/// string; both forms go through the same exact-decimal parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    /// A JSON number.
    Number(serde_json::Number),

    /// A numeric string, e.g. `"236.5882365"`.
    Text(String),
}

impl Amount {
    /// Parse the amount into an exact decimal.
    ///
    /// Plain decimal notation is tried first; scientific notation
    /// (`"1e3"`) is accepted as a fallback.
    pub fn to_decimal(&self) -> Result<Decimal, ConversionError> {
        let raw = match self {
            Self::Number(number) => number.to_string(),
            Self::Text(text) => text.clone(),
        };

        Decimal::from_str(&raw)
            .or_else(|_| Decimal::from_scientific(&raw))
            .map_err(|_| ConversionError::InvalidValue(raw))
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        match serde_json::Number::from_f64(value) {
            Some(number) => Self::Number(number),
            None => Self::Text(value.to_string()),
        }
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::Text(value.to_string())
    }
}

/// Quantize a result to exactly [`RESULT_SCALE`] fractional digits.
///
/// Ties round away from zero (round-half-up), not to even. The scale is
/// then padded back up so trailing zeros survive formatting: `1` renders
/// as `1.0000`.
pub fn quantize(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(RESULT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(RESULT_SCALE);
    rounded
}
