//! Attribute parsing
//!
//! An attribute is a fold whose header reads `key [value] [#/ note]` and whose
//! body holds any nested lines. Keys with a registered
//! [`AttributeParser`](super::AttributeParser) get their value or body
//! rewritten into a typed form; every other key keeps the raw text.

use super::parsers::AttributeParser;
use crate::bandplan::ast::{Attribute, AttributeData, AttributeValue};
use crate::bandplan::lexing::{split_note, Fold};

/// Split a header at its first whitespace run into key and value.
pub fn split_key(title: &str) -> (&str, Option<&str>) {
    let title = title.trim();
    match title.find(char::is_whitespace) {
        Some(index) => {
            let value = title[index..].trim_start();
            (&title[..index], Some(value).filter(|v| !v.is_empty()))
        }
        None => (title, None),
    }
}

/// Parse one attribute fold into its key and [`Attribute`].
///
/// Returns `None` for a header that yields an empty key.
pub fn parse_attribute(fold: &Fold) -> Option<(String, Attribute)> {
    let (title, mut note) = split_note(&fold.header);

    // A bare `#/ text` line is shorthand for `note text`
    let (key, value) = match (title.trim().is_empty(), note) {
        (true, Some(text)) if !text.is_empty() => {
            note = None;
            ("note", Some(text))
        }
        _ => split_key(title),
    };
    if key.is_empty() {
        return None;
    }

    let attribute = Attribute {
        value: value.map(|value| AttributeValue::Text(value.to_string())),
        note: note.filter(|note| !note.is_empty()).map(str::to_string),
        data: (!fold.body.is_empty()).then(|| AttributeData::Lines(fold.body.clone())),
    };

    let attribute = match AttributeParser::lookup(key) {
        Some(parser) => parser.parse(attribute),
        None => attribute,
    };
    Some((key.to_string(), attribute))
}
