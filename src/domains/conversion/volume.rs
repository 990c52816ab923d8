//! Volume conversions.

use rust_decimal::Decimal;

use super::error::ConversionError;
use super::units::volume_factor;
use super::value::{Amount, quantize};

/// Convert a volume measurement from one unit to another.
///
/// Supported units: `ml`, `l`, `cup`, `tbsp`, `tsp`. The result carries
/// exactly four fractional digits, rounded half-up.
pub fn convert_volume(
    value: impl Into<Amount>,
    from_unit: &str,
    to_unit: &str,
) -> Result<Decimal, ConversionError> {
    let from_factor = volume_factor(from_unit)
        .ok_or_else(|| ConversionError::invalid_source_unit(from_unit))?;
    let to_factor =
        volume_factor(to_unit).ok_or_else(|| ConversionError::invalid_target_unit(to_unit))?;

    let value = value.into().to_decimal()?;

    // Same unit, no conversion needed.
    if from_unit == to_unit {
        return Ok(quantize(value));
    }

    // source -> milliliters -> target
    let converted = value
        .checked_mul(from_factor)
        .and_then(|milliliters| milliliters.checked_div(to_factor))
        .ok_or_else(|| ConversionError::invalid_value(value))?;

    Ok(quantize(converted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_conversions_to_milliliter_multiples() {
        assert_eq!(convert_volume(1000, "ml", "l").unwrap().to_string(), "1.0000");
        assert_eq!(
            convert_volume(236.5882365, "ml", "cup").unwrap().to_string(),
            "1.0000"
        );
        assert_eq!(
            convert_volume(14.7867647875, "ml", "tbsp").unwrap().to_string(),
            "1.0000"
        );
        assert_eq!(
            convert_volume("4.92892159583", "ml", "tsp").unwrap().to_string(),
            "1.0000"
        );
    }

    #[test]
    fn test_cup_conversions() {
        assert_eq!(convert_volume(1, "cup", "ml").unwrap().to_string(), "236.5882");
        assert_eq!(convert_volume(1, "cup", "tbsp").unwrap().to_string(), "16.0000");
        assert_eq!(convert_volume(1, "cup", "tsp").unwrap().to_string(), "48.0000");
    }

    #[test]
    fn test_kitchen_equivalences() {
        // 1 cup = 16 tbsp, 1 tbsp = 3 tsp, 1 cup = 48 tsp
        assert_eq!(convert_volume(1, "cup", "tbsp").unwrap().to_string(), "16.0000");
        assert_eq!(convert_volume(1, "tbsp", "tsp").unwrap().to_string(), "3.0000");
        assert_eq!(convert_volume(1, "cup", "tsp").unwrap().to_string(), "48.0000");
    }

    #[test]
    fn test_same_unit_is_identity() {
        use crate::domains::conversion::units::VOLUME_UNITS;

        for unit in VOLUME_UNITS {
            assert_eq!(
                convert_volume(7.25, unit, unit).unwrap().to_string(),
                "7.2500"
            );
        }
    }

    #[test]
    fn test_roundtrip_preserves_value() {
        let original = Decimal::from_str("5.5").unwrap();
        let milliliters = convert_volume(original, "cup", "ml").unwrap();
        let back = convert_volume(milliliters, "ml", "cup").unwrap();
        assert!((back - original).abs() < Decimal::from_str("0.0001").unwrap());
    }

    #[test]
    fn test_invalid_units() {
        assert_eq!(
            convert_volume(1, "invalid", "ml"),
            Err(ConversionError::invalid_source_unit("invalid"))
        );
        assert_eq!(
            convert_volume(1, "ml", "gal"),
            Err(ConversionError::invalid_target_unit("gal"))
        );
    }

    #[test]
    fn test_invalid_value() {
        assert_eq!(
            convert_volume("invalid", "ml", "l"),
            Err(ConversionError::invalid_value("invalid"))
        );
    }

    #[test]
    fn test_unit_checks_precede_value_parse() {
        // A bad source unit is reported even when the value is bad too.
        assert_eq!(
            convert_volume("abc", "invalid", "ml"),
            Err(ConversionError::invalid_source_unit("invalid"))
        );
    }
}
