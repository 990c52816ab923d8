//! Cooking temperature reference resource.

use serde_json::Value;

use crate::domains::conversion::cooking_temperatures;

use super::ResourceDefinition;

/// Reference table of common cooking temperatures in Celsius.
pub struct CookingTemperaturesResource;

impl ResourceDefinition for CookingTemperaturesResource {
    const URI: &'static str = "mcp://units/reference/cooking-temperatures";

    const NAME: &'static str = "Cooking Temperatures";

    const DESCRIPTION: &'static str =
        "Common cooking temperatures in Celsius (boiling, frying, baking, proofing)";

    const MIME_TYPE: &'static str = "application/json";

    fn content() -> String {
        let entries: serde_json::Map<String, Value> = cooking_temperatures()
            .into_iter()
            .map(|(name, celsius)| (name.to_string(), Value::String(celsius.to_string())))
            .collect();

        Value::Object(entries).to_string()
    }
}
