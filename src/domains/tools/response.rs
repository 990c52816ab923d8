//! Response envelope builders.
//!
//! Every outcome leaving the tools domain is a `CallToolResult` with a
//! single text item and an error flag; these helpers are the only places
//! that construct it.

use rmcp::model::{CallToolResult, Content};
use rust_decimal::Decimal;
use tracing::warn;

/// Create an error envelope carrying `message` as its only text item.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success envelope rendering the converted value and its unit.
///
/// The value keeps its four fractional digits, so `1 l` renders as
/// `"1.0000 l"`.
pub fn success_result(value: &Decimal, unit: &str) -> CallToolResult {
    CallToolResult::success(vec![Content::text(format!("{} {}", value, unit))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::conversion::quantize;
    use rmcp::model::RawContent;

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_success_result_renders_value_and_unit() {
        let result = success_result(&quantize(Decimal::ONE), "l");
        assert_eq!(text_of(&result), "1.0000 l");
        assert!(!result.is_error.unwrap_or(true));
    }

    #[test]
    fn test_error_result_sets_flag() {
        let result = error_result("Invalid source unit: K");
        assert_eq!(text_of(&result), "Invalid source unit: K");
        assert!(result.is_error.unwrap_or(false));
    }
}
