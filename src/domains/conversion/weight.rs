//! Weight conversions.

use rust_decimal::Decimal;

use super::error::ConversionError;
use super::units::weight_factor;
use super::value::{Amount, quantize};

/// Convert a weight measurement from one unit to another.
///
/// Supported units: `g`, `kg`, `oz`, `lb`. The result carries exactly four
/// fractional digits, rounded half-up.
pub fn convert_weight(
    value: impl Into<Amount>,
    from_unit: &str,
    to_unit: &str,
) -> Result<Decimal, ConversionError> {
    let from_factor = weight_factor(from_unit)
        .ok_or_else(|| ConversionError::invalid_source_unit(from_unit))?;
    let to_factor =
        weight_factor(to_unit).ok_or_else(|| ConversionError::invalid_target_unit(to_unit))?;

    let value = value.into().to_decimal()?;

    // Same unit, no conversion needed.
    if from_unit == to_unit {
        return Ok(quantize(value));
    }

    // source -> grams -> target
    let converted = value
        .checked_mul(from_factor)
        .and_then(|grams| grams.checked_div(to_factor))
        .ok_or_else(|| ConversionError::invalid_value(value))?;

    Ok(quantize(converted))
}
