//! Temperature conversions and reference data.

use rust_decimal::Decimal;

use super::error::ConversionError;
use super::units::UnitKind;
use super::value::{Amount, quantize};

/// Convert a temperature between Celsius and Fahrenheit.
///
/// Temperatures may be negative; only the two unit tokens `C` and `F` are
/// accepted. The result carries exactly four fractional digits, rounded
/// half-up.
pub fn convert_temperature(
    value: impl Into<Amount>,
    from_unit: &str,
    to_unit: &str,
) -> Result<Decimal, ConversionError> {
    if !UnitKind::Temperature.contains(from_unit) {
        return Err(ConversionError::invalid_source_unit(from_unit));
    }
    if !UnitKind::Temperature.contains(to_unit) {
        return Err(ConversionError::invalid_target_unit(to_unit));
    }

    let mut value = value.into().to_decimal()?;

    // Same unit, no conversion needed.
    if from_unit == to_unit {
        return Ok(quantize(value));
    }

    let five = Decimal::new(5, 0);
    let nine = Decimal::new(9, 0);
    let offset = Decimal::new(32, 0);

    if from_unit == "F" {
        // C = (F - 32) * 5/9
        value = value
            .checked_sub(offset)
            .and_then(|shifted| shifted.checked_mul(five))
            .and_then(|scaled| scaled.checked_div(nine))
            .ok_or_else(|| ConversionError::invalid_value(value))?;
    }

    if to_unit == "F" {
        // F = C * 9/5 + 32
        value = value
            .checked_mul(nine)
            .and_then(|scaled| scaled.checked_div(five))
            .and_then(|scaled| scaled.checked_add(offset))
            .ok_or_else(|| ConversionError::invalid_value(value))?;
    }

    Ok(quantize(value))
}

/// Common cooking temperatures in Celsius.
pub fn cooking_temperatures() -> Vec<(&'static str, Decimal)> {
    vec![
        ("water_boiling", Decimal::new(1_000, 1)),
        ("water_simmering", Decimal::new(850, 1)),
        ("deep_frying", Decimal::new(1_750, 1)), // typical range: 175-190 C
        ("baking_bread", Decimal::new(2_000, 1)),
        ("roasting", Decimal::new(1_800, 1)), // typical range: 160-180 C
        ("slow_cooking", Decimal::new(1_200, 1)),
        ("proofing", Decimal::new(350, 1)),
    ]
}
