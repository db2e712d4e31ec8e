//! Format registry for bandplan serialization
//!
//! Each format implements the `Formatter` trait and is looked up by name.

use crate::bandplan::ast::Bandplan;
use std::collections::BTreeMap;
use std::fmt;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Trait for bandplan formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "json", "treeviz")
    fn name(&self) -> &str;

    fn serialize(&self, plan: &Bandplan) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

/// Registry of bandplan formatters, keyed by name
///
/// Names are kept in sorted order so listings are stable across runs.
pub struct FormatRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a registry without any formatter
    pub fn new() -> Self {
        FormatRegistry {
            formatters: BTreeMap::new(),
        }
    }

    /// Register a formatter, replacing any formatter with the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Look up a formatter by name
    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|formatter| &**formatter)
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Render `plan` with the formatter registered as `format`
    pub fn serialize(&self, plan: &Bandplan, format: &str) -> Result<String, FormatError> {
        self.get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?
            .serialize(plan)
    }

    /// All format names, sorted
    pub fn list_formats(&self) -> Vec<String> {
        self.formatters.keys().cloned().collect()
    }

    /// `(name, description)` pairs in name order, for help output
    pub fn descriptions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.formatters
            .iter()
            .map(|(name, formatter)| (name.as_str(), formatter.description()))
    }

    /// The built-in formats: `json`, `json-compact`, `yaml` and `treeviz`
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::JsonFormatter);
        registry.register(super::CompactJsonFormatter);
        registry.register(super::YamlFormatter);
        registry.register(super::TreevizFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestFormatter;
    impl Formatter for TestFormatter {
        fn name(&self) -> &str {
            "test"
        }
        fn serialize(&self, plan: &Bandplan) -> Result<String, FormatError> {
            Ok(format!("{} sections", plan.len()))
        }
        fn description(&self) -> &str {
            "Test formatter"
        }
    }

    #[test]
    fn test_registry_register() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);

        assert!(registry.has("test"));
        assert_eq!(registry.list_formats(), vec!["test"]);
        assert_eq!(registry.get("test").map(|f| f.description()), Some("Test formatter"));
    }

    #[test]
    fn test_registry_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);

        let plan = Bandplan::parse("40m\n30m\n");
        assert_eq!(registry.serialize(&plan, "test"), Ok("2 sections".to_string()));
    }

    #[test]
    fn test_registry_serialize_not_found() {
        let registry = FormatRegistry::new();
        let result = registry.serialize(&Bandplan::default(), "nonexistent");

        assert_eq!(
            result,
            Err(FormatError::FormatNotFound("nonexistent".to_string()))
        );
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = FormatRegistry::default();
        assert_eq!(
            registry.list_formats(),
            vec!["json", "json-compact", "treeviz", "yaml"]
        );
    }

    #[test]
    fn test_registry_descriptions() {
        let registry = FormatRegistry::default();
        let names: Vec<&str> = registry.descriptions().map(|(name, _)| name).collect();

        assert_eq!(names, vec!["json", "json-compact", "treeviz", "yaml"]);
        assert!(registry
            .descriptions()
            .all(|(_, description)| !description.is_empty()));
    }

    #[test]
    fn test_registry_replace_formatter() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);
        registry.register(TestFormatter);

        assert_eq!(registry.list_formats().len(), 1);
    }

    #[test]
    fn test_format_error_display() {
        let err = FormatError::FormatNotFound("xml".to_string());
        assert_eq!(format!("{err}"), "Format 'xml' not found");

        let err = FormatError::SerializationError("boom".to_string());
        assert_eq!(format!("{err}"), "Serialization error: boom");
    }
}
