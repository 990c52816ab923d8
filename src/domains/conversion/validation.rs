//! Request schemas and validation.
//!
//! The schemas are authored as JSON data so the validator and the tool
//! descriptors advertised to clients share a single definition. Each schema
//! is compiled once into a process-wide static; validation reports
//! violations as messages, never as faults, so the dispatcher can always
//! wrap the outcome into a response envelope.

use std::sync::LazyLock;

use jsonschema::Validator;
use rust_decimal::Decimal;
use serde_json::{Map, Value, json};

use super::units::UnitKind;
use super::value::Amount;

/// JSON schema for volume conversion requests.
pub static VOLUME_CONVERSION_SCHEMA: LazyLock<Value> =
    LazyLock::new(|| conversion_schema(UnitKind::Volume));

/// JSON schema for weight conversion requests.
pub static WEIGHT_CONVERSION_SCHEMA: LazyLock<Value> =
    LazyLock::new(|| conversion_schema(UnitKind::Weight));

/// JSON schema for temperature conversion requests.
pub static TEMPERATURE_CONVERSION_SCHEMA: LazyLock<Value> =
    LazyLock::new(|| conversion_schema(UnitKind::Temperature));

static VOLUME_VALIDATOR: LazyLock<Validator> =
    LazyLock::new(|| compile(&VOLUME_CONVERSION_SCHEMA));
static WEIGHT_VALIDATOR: LazyLock<Validator> =
    LazyLock::new(|| compile(&WEIGHT_CONVERSION_SCHEMA));
static TEMPERATURE_VALIDATOR: LazyLock<Validator> =
    LazyLock::new(|| compile(&TEMPERATURE_CONVERSION_SCHEMA));

/// The request schema for one conversion kind.
pub fn schema_for(kind: UnitKind) -> &'static Value {
    match kind {
        UnitKind::Volume => &VOLUME_CONVERSION_SCHEMA,
        UnitKind::Weight => &WEIGHT_CONVERSION_SCHEMA,
        UnitKind::Temperature => &TEMPERATURE_CONVERSION_SCHEMA,
    }
}

fn validator_for(kind: UnitKind) -> &'static Validator {
    match kind {
        UnitKind::Volume => &VOLUME_VALIDATOR,
        UnitKind::Weight => &WEIGHT_VALIDATOR,
        UnitKind::Temperature => &TEMPERATURE_VALIDATOR,
    }
}

fn compile(schema: &Value) -> Validator {
    jsonschema::validator_for(schema).expect("conversion schemas are statically valid")
}

/// Build the request schema for one conversion kind.
///
/// `value` accepts a JSON number or a numeric string; the decimal parse
/// and the non-negativity check for string values happen in
/// [`validate_conversion_request`], since `minimum` only constrains
/// numbers.
fn conversion_schema(kind: UnitKind) -> Value {
    let mut value_schema = json!({ "type": ["number", "string"] });
    if kind.requires_non_negative() {
        value_schema["minimum"] = json!(0);
    }

    let units = kind.units();
    json!({
        "type": "object",
        "properties": {
            "value": value_schema,
            "from_unit": { "type": "string", "enum": units },
            "to_unit": { "type": "string", "enum": units },
        },
        "required": ["value", "from_unit", "to_unit"],
        "additionalProperties": false,
    })
}

/// Validate a conversion request against its kind's schema.
///
/// Returns `None` when the request is valid, otherwise a human-readable
/// message naming the first violated constraint.
pub fn validate_conversion_request(
    arguments: &Map<String, Value>,
    kind: UnitKind,
) -> Option<String> {
    let instance = Value::Object(arguments.clone());
    if let Err(error) = validator_for(kind).validate(&instance) {
        return Some(format!("Validation error: {error}"));
    }

    // The schema admits numeric strings; they still have to parse as
    // decimals and respect the non-negativity rule for this kind.
    let amount = match arguments.get("value") {
        Some(Value::Number(number)) => Amount::Number(number.clone()),
        Some(Value::String(text)) => Amount::Text(text.clone()),
        _ => return Some("Validation error: 'value' must be a number or numeric string".to_string()),
    };

    match amount.to_decimal() {
        Ok(value) if kind.requires_non_negative() && value < Decimal::ZERO => {
            Some("Value cannot be negative".to_string())
        }
        Ok(_) => None,
        Err(_) => Some(format!(
            "Invalid value format: {}",
            render_raw(&arguments["value"])
        )),
    }
}

fn render_raw(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
