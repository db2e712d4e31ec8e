//! SI-prefixed frequency codec
//!
//! Converts between a frequency in Hz and a compact string such as `144.050M`.
//! The same strings are used inside bandplan documents and as `start=`/`end=`
//! query parameters of a chart link.
//!
//! Encoding keeps three decimals after scaling, so a round trip loses at most
//! `0.0005 * tier threshold`.

pub mod tokens;

use std::fmt;
use tokens::{FrequencyLexer, FrequencyToken};

/// One SI magnitude step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub threshold: f64,
    pub symbol: &'static str,
}

/// Recognised tiers, strictly descending.
pub const TIERS: [Tier; 9] = [
    Tier { threshold: 1e24, symbol: "Y" },
    Tier { threshold: 1e21, symbol: "Z" },
    Tier { threshold: 1e18, symbol: "E" },
    Tier { threshold: 1e15, symbol: "P" },
    Tier { threshold: 1e12, symbol: "T" },
    Tier { threshold: 1e9, symbol: "G" },
    Tier { threshold: 1e6, symbol: "M" },
    Tier { threshold: 1e3, symbol: "k" },
    Tier { threshold: 1.0, symbol: "" },
];

/// Error that can occur while decoding a frequency string
#[derive(Debug, Clone, PartialEq)]
pub enum FrequencyError {
    /// The text does not start with a number
    MalformedNumber(String),
    /// The number is followed by something other than a known prefix and `Hz`
    UnknownUnit(String),
}

impl fmt::Display for FrequencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrequencyError::MalformedNumber(text) => write!(f, "Malformed frequency '{text}'"),
            FrequencyError::UnknownUnit(unit) => write!(f, "Unparseable frequency unit '{unit}'"),
        }
    }
}

impl std::error::Error for FrequencyError {}

/// Multiplier for a prefix symbol (`""` is 1).
pub fn multiplier(symbol: &str) -> Option<f64> {
    TIERS
        .iter()
        .find(|tier| tier.symbol == symbol)
        .map(|tier| tier.threshold)
}

/// Multiplier for a unit as written by humans: `MHz`, `kHz`, `Hz`, `M`, or nothing.
pub fn unit_multiplier(unit: &str) -> Option<f64> {
    let unit = unit.trim();
    multiplier(unit.strip_suffix("Hz").unwrap_or(unit).trim_end())
}

/// Encode a frequency in Hz, e.g. `144_050_000.0` -> `"144.050M"`.
pub fn encode(freq: f64) -> String {
    TIERS
        .iter()
        .find(|tier| freq >= tier.threshold)
        .map(|tier| format!("{:.3}{}", freq / tier.threshold, tier.symbol))
        .unwrap_or_else(|| format!("{freq:.3}"))
}

/// A frequency string split into its number and the unit written after it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub value: f64,
    /// Multiplier of the written prefix and/or `Hz`; `None` for a bare number.
    pub unit: Option<f64>,
}

impl Reading {
    /// The frequency in Hz, scaling a bare number by `default_unit`.
    pub fn hertz_or(&self, default_unit: f64) -> f64 {
        self.value * self.unit.unwrap_or(default_unit)
    }
}

/// Read `<number> [prefix] [Hz]` without resolving the unit.
pub fn read(text: &str) -> Result<Reading, FrequencyError> {
    let mut lexer = FrequencyLexer::new(text);

    let value = match lexer.next() {
        Some((Some(FrequencyToken::Number(value)), _)) => value,
        _ => return Err(FrequencyError::MalformedNumber(text.trim().to_string())),
    };

    let mut unit = None;
    let mut seen_prefix = false;
    let mut seen_hertz = false;
    for (token, span) in lexer {
        match token {
            Some(FrequencyToken::Prefix) if !seen_prefix && !seen_hertz => {
                seen_prefix = true;
                // The lexer only emits single-letter prefixes from the tier table
                unit = Some(multiplier(&text[span]).unwrap_or(f64::NAN));
            }
            Some(FrequencyToken::Hertz) if !seen_hertz => {
                seen_hertz = true;
                unit.get_or_insert(1.0);
            }
            _ => {
                return Err(FrequencyError::UnknownUnit(
                    text[span.start..].trim().to_string(),
                ))
            }
        }
    }

    Ok(Reading { value, unit })
}

/// Decode a frequency string into Hz.
///
/// Accepts `<number> [prefix] [Hz]` with optional blanks between the parts.
pub fn decode(text: &str) -> Result<f64, FrequencyError> {
    read(text).map(|reading| reading.hertz_or(1.0))
}

/// [`decode`] with the not-a-number sentinel in place of an error.
pub fn decode_or_nan(text: &str) -> f64 {
    decode(text).unwrap_or_else(|err| {
        tracing::trace!(%err, "undecodable frequency");
        f64::NAN
    })
}
