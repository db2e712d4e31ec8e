//! Parsed bandplan data model
//!
//! A [`Bandplan`] is an ordered list of [`Section`]s; each section maps
//! attribute keys to [`Attribute`]s. Everything here is build-once and
//! read-only. Serialization mirrors the shape the chart renderer consumes:
//!
//! ```json
//! [{ "title": { "value": "60m" }, "band": { "value": [5351500.0, 5366500.0] } }]
//! ```

use serde::Serialize;
use std::collections::BTreeMap;

/// Key of the synthetic attribute holding a section's header text.
pub const TITLE: &str = "title";

/// The parsed value of an attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Raw value text, for keys without a specialized parser
    Text(String),
    /// A `[start, end]` frequency range in Hz; NaN where undecodable
    Range([f64; 2]),
}

/// The body of an attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeData {
    /// Lines nested under the attribute, dedented once
    Lines(Vec<String>),
    /// Parsed `markers` rows
    Markers(Vec<Marker>),
}

/// One `markers` row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub frequency: f64,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Attribute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<AttributeValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<AttributeData>,
}

impl Attribute {
    pub fn text(value: impl Into<String>) -> Self {
        Attribute {
            value: Some(AttributeValue::Text(value.into())),
            ..Default::default()
        }
    }

    /// The value as text, if it is still raw text.
    pub fn value_text(&self) -> Option<&str> {
        match &self.value {
            Some(AttributeValue::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    /// The raw body lines, if they were not replaced by a specialized parser.
    pub fn lines(&self) -> Option<&[String]> {
        match &self.data {
            Some(AttributeData::Lines(lines)) => Some(lines.as_slice()),
            _ => None,
        }
    }
}

/// One top-level entry of a bandplan, typically one band.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Section {
    attributes: BTreeMap<String, Attribute>,
}

impl Section {
    pub(crate) fn new(attributes: BTreeMap<String, Attribute>) -> Self {
        Section { attributes }
    }

    pub fn get(&self, key: &str) -> Option<&Attribute> {
        self.attributes.get(key)
    }

    /// Attributes in key order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &Attribute)> {
        self.attributes.iter().map(|(key, attr)| (key.as_str(), attr))
    }

    /// The header text. Never empty for sections produced by the parser.
    pub fn title(&self) -> &str {
        self.get(TITLE)
            .and_then(Attribute::value_text)
            .unwrap_or_default()
    }

    /// The `band` range in Hz. Start and end are in document order.
    pub fn band(&self) -> Option<[f64; 2]> {
        match &self.get("band")?.value {
            Some(AttributeValue::Range(range)) => Some(*range),
            _ => None,
        }
    }

    /// The service category (`type` attribute), used for colour lookup.
    pub fn kind(&self) -> Option<&str> {
        self.get("type").and_then(Attribute::value_text)
    }

    pub fn note(&self) -> Option<&str> {
        self.get("note").and_then(Attribute::value_text)
    }

    pub fn markers(&self) -> &[Marker] {
        match self.get("markers").and_then(|attr| attr.data.as_ref()) {
            Some(AttributeData::Markers(markers)) => markers.as_slice(),
            _ => &[],
        }
    }

    /// Whether the band intersects `[start, end]`; either order is accepted
    /// on both sides, and a NaN edge never matches.
    pub fn overlaps(&self, start: f64, end: f64) -> bool {
        let Some([a, b]) = self.band() else {
            return false;
        };
        if [a, b, start, end].iter().any(|edge| edge.is_nan()) {
            return false;
        }
        let (low, high) = (a.min(b), a.max(b));
        let (from, to) = (start.min(end), start.max(end));
        low <= to && from <= high
    }
}

/// A parsed bandplan document: sections in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Bandplan {
    sections: Vec<Section>,
}

impl Bandplan {
    pub fn new(sections: Vec<Section>) -> Self {
        Bandplan { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// First section with the given title.
    pub fn find(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.title() == title)
    }

    /// Sections whose band intersects the visible domain `[start, end]`, in
    /// document order.
    pub fn overlapping(&self, start: f64, end: f64) -> impl Iterator<Item = &Section> {
        self.sections
            .iter()
            .filter(move |section| section.overlaps(start, end))
    }
}

impl<'a> IntoIterator for &'a Bandplan {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
