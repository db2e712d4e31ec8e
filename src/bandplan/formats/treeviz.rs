//! Treeviz formatter for bandplans
//!
//! One line per node, nesting drawn with box characters:
//!
//! ```text
//! ├─ § 40m
//! │ ├─ band: 7.000M - 7.200M
//! │ ├─ markers: CSV MHz, description
//! │ │ └─ 7.074M FT8
//! │ └─ type: amateur
//! └─ § 20m
//!   └─ band: 14.000M - 14.350M
//! ```
//!
//! Sections are labelled `§ <title>`; the synthetic `title` attribute is not
//! repeated. Frequencies are shown encoded, labels truncated to 40 characters.

use super::registry::{FormatError, Formatter};
use crate::bandplan::ast::{Attribute, AttributeData, AttributeValue, Bandplan, Section, TITLE};
use crate::bandplan::frequency;

const MAX_LABEL: usize = 40;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn connector(is_last: bool) -> &'static str {
    if is_last {
        "└─"
    } else {
        "├─"
    }
}

fn indent(is_last: bool) -> &'static str {
    if is_last {
        "  "
    } else {
        "│ "
    }
}

pub fn to_treeviz_str(plan: &Bandplan) -> String {
    let mut result = String::new();
    for (i, section) in plan.sections().iter().enumerate() {
        append_section(&mut result, section, i + 1 == plan.len());
    }
    result
}

fn append_section(result: &mut String, section: &Section, is_last: bool) {
    result.push_str(&format!(
        "{} § {}\n",
        connector(is_last),
        truncate(section.title(), MAX_LABEL)
    ));

    let attributes: Vec<_> = section
        .attributes()
        .filter(|(key, _)| *key != TITLE)
        .collect();
    for (i, (key, attribute)) in attributes.iter().enumerate() {
        append_attribute(
            result,
            key,
            attribute,
            indent(is_last),
            i + 1 == attributes.len(),
        );
    }
}

fn append_attribute(
    result: &mut String,
    key: &str,
    attribute: &Attribute,
    prefix: &str,
    is_last: bool,
) {
    let mut label = key.to_string();
    match &attribute.value {
        Some(AttributeValue::Text(text)) => label.push_str(&format!(": {text}")),
        Some(AttributeValue::Range([start, end])) => label.push_str(&format!(
            ": {} - {}",
            frequency::encode(*start),
            frequency::encode(*end)
        )),
        None => {}
    }
    if let Some(note) = &attribute.note {
        label.push_str(&format!(" #/ {note}"));
    }
    result.push_str(&format!(
        "{}{} {}\n",
        prefix,
        connector(is_last),
        truncate(&label, MAX_LABEL)
    ));

    let children: Vec<String> = match &attribute.data {
        Some(AttributeData::Lines(lines)) => lines.clone(),
        Some(AttributeData::Markers(markers)) => markers
            .iter()
            .map(|m| format!("{} {}", frequency::encode(m.frequency), m.description))
            .collect(),
        None => Vec::new(),
    };
    let child_prefix = format!("{}{}", prefix, indent(is_last));
    for (i, child) in children.iter().enumerate() {
        result.push_str(&format!(
            "{}{} {}\n",
            child_prefix,
            connector(i + 1 == children.len()),
            truncate(child, MAX_LABEL)
        ));
    }
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, plan: &Bandplan) -> Result<String, FormatError> {
        Ok(to_treeviz_str(plan))
    }

    fn description(&self) -> &str {
        "One line per section and attribute, for inspection"
    }
}
