//! Specialized attribute parsers
//!
//! Reserved keys map to a parser variant through a static registry. Each
//! parser receives the raw `{value, note, data}` attribute and returns its
//! replacement. Parsers never fail: what cannot be decoded becomes NaN.

pub mod band;
pub mod markers;

use crate::bandplan::ast::Attribute;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A parser for one reserved attribute key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeParser {
    /// `band <freq>-<freq>`
    Band,
    /// `markers CSV <unit>, <columns>` with one row per nested line
    Markers,
}

static REGISTRY: Lazy<HashMap<&'static str, AttributeParser>> = Lazy::new(|| {
    AttributeParser::ALL
        .iter()
        .map(|parser| (parser.key(), *parser))
        .collect()
});

impl AttributeParser {
    pub const ALL: [AttributeParser; 2] = [AttributeParser::Band, AttributeParser::Markers];

    /// Find the parser registered for `key`, if any. Keys are case-sensitive.
    pub fn lookup(key: &str) -> Option<Self> {
        REGISTRY.get(key).copied()
    }

    /// The attribute key this parser handles
    pub fn key(self) -> &'static str {
        match self {
            AttributeParser::Band => "band",
            AttributeParser::Markers => "markers",
        }
    }

    pub fn parse(self, attribute: Attribute) -> Attribute {
        match self {
            AttributeParser::Band => band::parse(attribute),
            AttributeParser::Markers => markers::parse(attribute),
        }
    }
}
