//! `band` attribute: a frequency range such as `5351.5kHz-5366.5kHz`.
//!
//! Each edge carries its own unit. Start and end are kept in document order;
//! descending ranges are allowed.

use crate::bandplan::ast::{Attribute, AttributeValue};
use crate::bandplan::frequency;

pub fn parse(attribute: Attribute) -> Attribute {
    let range = match attribute.value_text() {
        Some(text) => parse_range(text),
        None => [f64::NAN, f64::NAN],
    };
    if range.iter().any(|edge| edge.is_nan()) {
        tracing::debug!(value = attribute.value_text(), "undecodable band range");
    }

    Attribute {
        value: Some(AttributeValue::Range(range)),
        ..attribute
    }
}

/// Split at the first dash and decode both sides. A missing side is NaN.
///
/// A dash right after an exponent `e` belongs to the number (`1.5e-3k`).
pub fn parse_range(text: &str) -> [f64; 2] {
    let (start, end) = match range_separator(text) {
        Some(index) => (&text[..index], Some(&text[index + 1..])),
        None => (text, None),
    };
    [
        frequency::decode_or_nan(start.trim()),
        end.map_or(f64::NAN, |end| frequency::decode_or_nan(end.trim())),
    ]
}

fn range_separator(text: &str) -> Option<usize> {
    text.char_indices()
        .find(|&(index, c)| c == '-' && !text[..index].ends_with('e'))
        .map(|(index, _)| index)
}
