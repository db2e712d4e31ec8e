//! Chart view state carried in a shareable link
//!
//! The visible frequency domain travels as `start=` and `end=` query
//! parameters encoded with [`frequency::encode`], the velocity factor as
//! `vf=`. Unrelated parameters are preserved in their original order.
//!
//! ```rust,ignore
//! let mut state = ViewState::parse("?start=144.000M&end=146.000M");
//! assert_eq!(state.frequencies(), Some([144e6, 146e6]));
//! state.set_velocity_factor(66.0);
//! assert_eq!(state.to_query_string(), "start=144.000M&end=146.000M&vf=66");
//! ```

use crate::bandplan::frequency;
use crate::bandplan::propagation::{is_valid_velocity_factor, DEFAULT_VELOCITY_FACTOR};
use url::form_urlencoded;

pub const START: &str = "start";
pub const END: &str = "end";
pub const VELOCITY_FACTOR: &str = "vf";

/// Full frequency domain of the chart, from planetary to quantum scale.
pub const DOMAIN: [f64; 2] = [3.0, 3e24];

/// Ordered query parameters of a chart link
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    params: Vec<(String, String)>,
}

impl ViewState {
    /// Parse a query string; a leading `?` is ignored.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        ViewState {
            params: form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set `key`, replacing the first occurrence in place and dropping the rest.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.params.iter().position(|(k, _)| k == key) {
            Some(index) => {
                self.params[index].1 = value;
                let mut seen = 0;
                self.params.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.params.push((key.to_string(), value)),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.params.retain(|(k, _)| k != key);
    }

    /// The visible domain, when both edges are present and decodable.
    pub fn frequencies(&self) -> Option<[f64; 2]> {
        let start = frequency::decode(self.get(START)?).ok()?;
        let end = frequency::decode(self.get(END)?).ok()?;
        Some([start, end])
    }

    /// Store the visible domain. A domain that encodes the same as `limits`
    /// is the default view and is removed from the link instead.
    pub fn set_frequencies(&mut self, [start, end]: [f64; 2], [min, max]: [f64; 2]) {
        let (start, end) = (frequency::encode(start), frequency::encode(end));
        if start == frequency::encode(min) && end == frequency::encode(max) {
            self.remove(START);
            self.remove(END);
        } else {
            self.set(START, start);
            self.set(END, end);
        }
    }

    /// The velocity factor in percent; out-of-range or missing values read
    /// as the vacuum default.
    pub fn velocity_factor(&self) -> f64 {
        self.get(VELOCITY_FACTOR)
            .and_then(|vf| vf.trim().parse::<f64>().ok())
            .filter(|vf| is_valid_velocity_factor(*vf))
            .unwrap_or(DEFAULT_VELOCITY_FACTOR)
    }

    /// Store the velocity factor; the vacuum default and invalid values are
    /// removed from the link.
    pub fn set_velocity_factor(&mut self, velocity_factor: f64) {
        if velocity_factor >= 100.0 || velocity_factor <= 0.0 || velocity_factor.is_nan() {
            self.remove(VELOCITY_FACTOR);
        } else {
            let text = velocity_factor.to_string();
            let text = text.strip_prefix('0').unwrap_or(&text).to_string();
            self.set(VELOCITY_FACTOR, text);
        }
    }

    /// Form-urlencoded query, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish()
    }
}
