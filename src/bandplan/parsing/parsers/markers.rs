//! `markers` attribute: CSV rows of frequency and description.
//!
//! ```text
//! markers CSV MHz, description
//!   144.050, CW calling
//!   144.600, DATA centre of activity (MGM, RTTY)
//! ```
//!
//! The header declares the unit for bare rows; a row that writes its own unit
//! (`144.050 MHz`) keeps it. Rows are split on their first comma only, so
//! descriptions may contain commas.

use crate::bandplan::ast::{Attribute, AttributeData, Marker};
use crate::bandplan::frequency;

const CSV: &str = "CSV";

pub fn parse(attribute: Attribute) -> Attribute {
    let Some(AttributeData::Lines(lines)) = &attribute.data else {
        return attribute;
    };

    let scale = declared_unit(attribute.value_text().unwrap_or_default());
    if scale.is_nan() {
        tracing::debug!(header = attribute.value_text(), "unknown markers unit");
    }
    let markers = lines.iter().map(|line| parse_row(line, scale)).collect();

    Attribute {
        data: Some(AttributeData::Markers(markers)),
        ..attribute
    }
}

/// Multiplier declared by a `CSV <unit>, <columns>` header; Hz when absent,
/// NaN when the unit is not recognised.
pub fn declared_unit(header: &str) -> f64 {
    let header = header.trim();
    let rest = header.strip_prefix(CSV).unwrap_or(header);
    let unit = rest.split_once(',').map_or(rest, |(unit, _)| unit);
    frequency::unit_multiplier(unit).unwrap_or(f64::NAN)
}

fn parse_row(line: &str, scale: f64) -> Marker {
    let (freq, description) = line.split_once(',').unwrap_or((line, ""));
    let frequency = match frequency::read(freq.trim()) {
        Ok(reading) => reading.hertz_or(scale),
        Err(err) => {
            tracing::trace!(%err, "undecodable marker frequency");
            f64::NAN
        }
    };
    Marker {
        frequency,
        description: description.trim().to_string(),
    }
}
