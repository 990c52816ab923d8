//! Measurement conversion domain.
//!
//! Pure conversion logic: unit tables, exact-decimal arithmetic, request
//! schemas, and validation. Nothing in this module performs I/O; every
//! function is deterministic over its inputs and the immutable tables.

mod error;
pub mod temperature;
pub mod units;
pub mod validation;
pub mod value;
pub mod volume;
pub mod weight;

pub use error::ConversionError;
pub use temperature::{convert_temperature, cooking_temperatures};
pub use units::UnitKind;
pub use validation::validate_conversion_request;
pub use value::{Amount, quantize};
pub use volume::convert_volume;
pub use weight::convert_weight;
