//! YAML output. NaN frequencies serialize as `.nan`.

use super::registry::{FormatError, Formatter};
use crate::bandplan::ast::Bandplan;

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, plan: &Bandplan) -> Result<String, FormatError> {
        serde_yaml::to_string(plan).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "YAML, same shape as the JSON output"
    }
}
