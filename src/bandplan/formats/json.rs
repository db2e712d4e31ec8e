//! JSON output. NaN frequencies serialize as `null`.

use super::registry::{FormatError, Formatter};
use crate::bandplan::ast::Bandplan;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, plan: &Bandplan) -> Result<String, FormatError> {
        serde_json::to_string_pretty(plan)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON, as consumed by the chart renderer"
    }
}

pub struct CompactJsonFormatter;

impl Formatter for CompactJsonFormatter {
    fn name(&self) -> &str {
        "json-compact"
    }

    fn serialize(&self, plan: &Bandplan) -> Result<String, FormatError> {
        serde_json::to_string(plan).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Single-line JSON"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_json() {
        let plan = Bandplan::parse("40m\n  band 7M-7.2M\n  type amateur\n");
        let json = CompactJsonFormatter.serialize(&plan).unwrap();

        assert_eq!(
            json,
            r#"[{"band":{"value":[7000000.0,7200000.0]},"title":{"value":"40m"},"type":{"value":"amateur"}}]"#
        );
    }

    #[test]
    fn test_nan_serializes_as_null() {
        let plan = Bandplan::parse("x\n  band soon-later\n");
        let json = CompactJsonFormatter.serialize(&plan).unwrap();

        assert!(json.contains(r#""band":{"value":[null,null]}"#));
    }

    #[test]
    fn test_pretty_json_parses_back() {
        let plan = Bandplan::parse("40m #/ shared\n  band 7M-7.2M\n");
        let json = JsonFormatter.serialize(&plan).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["note"]["value"], "shared");
        assert_eq!(value[0]["band"]["value"][1], 7_200_000.0);
    }
}
