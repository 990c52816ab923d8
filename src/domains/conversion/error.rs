//! Conversion-specific error types.

use thiserror::Error;

/// Errors produced by the converters themselves.
///
/// Unit checks here are defense in depth: requests normally reach a
/// converter only after schema validation, but the converters still reject
/// unknown units and unparseable values on their own.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// The source unit is not part of the kind's enumeration.
    #[error("Invalid source unit: {0}")]
    InvalidSourceUnit(String),

    /// The target unit is not part of the kind's enumeration.
    #[error("Invalid target unit: {0}")]
    InvalidTargetUnit(String),

    /// The value could not be parsed into an exact decimal, or the
    /// arithmetic could not represent the result.
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

impl ConversionError {
    /// Create a new "invalid source unit" error.
    pub fn invalid_source_unit(unit: impl Into<String>) -> Self {
        Self::InvalidSourceUnit(unit.into())
    }

    /// Create a new "invalid target unit" error.
    pub fn invalid_target_unit(unit: impl Into<String>) -> Self {
        Self::InvalidTargetUnit(unit.into())
    }

    /// Create a new "invalid value" error.
    pub fn invalid_value(value: impl ToString) -> Self {
        Self::InvalidValue(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConversionError::invalid_source_unit("K").to_string(),
            "Invalid source unit: K"
        );
        assert_eq!(
            ConversionError::invalid_target_unit("R").to_string(),
            "Invalid target unit: R"
        );
        assert_eq!(
            ConversionError::invalid_value("abc").to_string(),
            "Invalid value: abc"
        );
    }
}
