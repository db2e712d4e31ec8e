//! Bandplan parsing pipeline
//!
//! ```text
//! strip_lines -> fold (sections) -> relocate notes -> prepend globals
//!             -> fold (attributes) -> parse_attribute -> Section
//! ```
//!
//! The parser is total: every input produces a [`Bandplan`]. A document
//! without headers gives an empty one, and undecodable frequencies become NaN
//! inside the attributes they belong to.

pub mod attribute;
pub mod parsers;

pub use attribute::{parse_attribute, split_key};
pub use parsers::AttributeParser;

use crate::bandplan::ast::{Attribute, Bandplan, Section, TITLE};
use crate::bandplan::lexing::{
    dedent_once, fold_by_indentation, global_attributes, split_note, strip_lines, Fold,
};
use std::collections::BTreeMap;

/// Parse a complete bandplan document.
pub fn parse_bandplan(input: &str) -> Bandplan {
    let lines = strip_lines(input);
    let globals = global_attributes(&lines, dedent_once);

    let sections: Vec<Section> = fold_by_indentation(&lines, dedent_once)
        .into_iter()
        .map(relocate_note)
        .filter_map(|fold| parse_section(fold, &globals))
        .collect();

    tracing::debug!(
        lines = lines.len(),
        globals = globals.len(),
        sections = sections.len(),
        "parsed bandplan"
    );
    Bandplan::new(sections)
}

impl Bandplan {
    /// Parse a complete bandplan document. See [`parse_bandplan`].
    pub fn parse(input: &str) -> Self {
        parse_bandplan(input)
    }
}

/// Move a header's inline note into the body as a `note` attribute line.
pub fn relocate_note(fold: Fold) -> Fold {
    let (title, note) = split_note(&fold.header);
    let mut body = Vec::with_capacity(fold.body.len() + 1);
    if let Some(note) = note.filter(|note| !note.is_empty()) {
        body.push(format!("note {note}"));
    }
    body.extend(fold.body);

    Fold {
        header: title.trim().to_string(),
        body,
    }
}

fn parse_section(fold: Fold, globals: &[String]) -> Option<Section> {
    if fold.header.is_empty() {
        tracing::debug!(lines = fold.body.len(), "skipping section without a title");
        return None;
    }

    let lines: Vec<&str> = globals
        .iter()
        .chain(fold.body.iter())
        .map(String::as_str)
        .collect();

    let mut attributes: BTreeMap<String, Attribute> = fold_by_indentation(&lines, dedent_once)
        .iter()
        .filter_map(parse_attribute)
        .collect();
    attributes.insert(TITLE.to_string(), Attribute::text(fold.header));

    Some(Section::new(attributes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bandplan::ast::AttributeData;

    #[test]
    fn test_relocate_note() {
        let fold = Fold {
            header: "60m #/ region note".to_string(),
            body: vec!["band 5351.5kHz-5366.5kHz".to_string()],
        };
        let fold = relocate_note(fold);

        assert_eq!(fold.header, "60m");
        assert_eq!(fold.body, vec!["note region note", "band 5351.5kHz-5366.5kHz"]);
    }

    #[test]
    fn test_relocate_note_without_note() {
        let fold = relocate_note(Fold::new("40m"));
        assert_eq!(fold, Fold::new("40m"));
    }

    #[test]
    fn test_empty_document() {
        assert!(parse_bandplan("").is_empty());
        assert!(parse_bandplan("#/ only a top-level note\n\n").is_empty());
    }

    #[test]
    fn test_section_title_is_synthetic_attribute() {
        let plan = parse_bandplan("40m\n  type amateur\n");

        assert_eq!(plan.len(), 1);
        assert_eq!(plan.sections()[0].title(), "40m");
        assert_eq!(plan.sections()[0].kind(), Some("amateur"));
    }

    #[test]
    fn test_header_title_wins_over_title_attribute() {
        let plan = parse_bandplan("40m\n  title Forty metres\n");
        assert_eq!(plan.sections()[0].title(), "40m");
    }

    #[test]
    fn test_section_overrides_global_attribute() {
        let plan = parse_bandplan("  type amateur\n40m\n  type broadcast\n30m\n");

        assert_eq!(plan.find("40m").and_then(|s| s.kind()), Some("broadcast"));
        assert_eq!(plan.find("30m").and_then(|s| s.kind()), Some("amateur"));
    }

    #[test]
    fn test_global_attribute_keeps_nested_lines() {
        let plan = parse_bandplan("  links\n    https://iaru.org\n40m\n");
        let links = plan.sections()[0].get("links").unwrap();

        assert_eq!(
            links.data,
            Some(AttributeData::Lines(vec!["https://iaru.org".to_string()]))
        );
    }

    #[test]
    fn test_headers_with_empty_title_are_skipped() {
        let plan = parse_bandplan(" #/ stray note\n  type amateur\n40m\n");

        assert_eq!(plan.len(), 1);
        assert_eq!(plan.sections()[0].title(), "40m");
    }

    #[test]
    fn test_sections_keep_document_order() {
        let plan = parse_bandplan("80m\n40m\n160m\n");
        let titles: Vec<_> = plan.sections().iter().map(Section::title).collect();
        assert_eq!(titles, vec!["80m", "40m", "160m"]);
    }
}
