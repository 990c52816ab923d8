//! Unit enumerations and conversion-factor tables.
//!
//! Volume and weight use a canonical-base-unit strategy: every unit has a
//! fixed multiplicative factor into the base (milliliters for volume, grams
//! for weight), so converting from A to B is one multiply and one divide.
//! Temperature has no factor table; the two units convert by formula in
//! [`super::temperature`].

use rust_decimal::Decimal;

/// The kinds of measurements the server converts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Volume,
    Weight,
    Temperature,
}

/// Volume unit tokens, converted through milliliters.
pub const VOLUME_UNITS: &[&str] = &["ml", "l", "cup", "tbsp", "tsp"];

/// Weight unit tokens, converted through grams.
pub const WEIGHT_UNITS: &[&str] = &["g", "kg", "oz", "lb"];

/// Temperature unit tokens.
pub const TEMPERATURE_UNITS: &[&str] = &["C", "F"];

impl UnitKind {
    /// The closed set of unit tokens for this kind.
    pub fn units(self) -> &'static [&'static str] {
        match self {
            Self::Volume => VOLUME_UNITS,
            Self::Weight => WEIGHT_UNITS,
            Self::Temperature => TEMPERATURE_UNITS,
        }
    }

    /// Whether `unit` belongs to this kind's enumeration.
    pub fn contains(self, unit: &str) -> bool {
        self.units().contains(&unit)
    }

    /// Whether values of this kind must be non-negative.
    ///
    /// Sub-zero temperatures are legitimate; negative volumes and weights
    /// are not.
    pub fn requires_non_negative(self) -> bool {
        !matches!(self, Self::Temperature)
    }
}

/// Factor converting `unit` into milliliters.
///
/// Factors are constructed from integer mantissas so the full precision of
/// each constant is preserved exactly.
pub fn volume_factor(unit: &str) -> Option<Decimal> {
    let factor = match unit {
        "ml" => Decimal::ONE,
        "l" => Decimal::new(1_000, 0),
        "cup" => Decimal::new(2_365_882_365, 7),     // 236.5882365
        "tbsp" => Decimal::new(147_867_647_875, 10), // 14.7867647875
        "tsp" => Decimal::new(492_892_159_583, 11),  // 4.92892159583
        _ => return None,
    };
    Some(factor)
}

/// Factor converting `unit` into grams.
pub fn weight_factor(unit: &str) -> Option<Decimal> {
    let factor = match unit {
        "g" => Decimal::ONE,
        "kg" => Decimal::new(1_000, 0),
        "oz" => Decimal::new(283_495, 4), // 28.3495
        "lb" => Decimal::new(453_592, 3), // 453.592
        _ => return None,
    };
    Some(factor)
}
