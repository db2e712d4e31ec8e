//! Main module for bandplan library functionality
//!
//! The parse pipeline runs strictly one way:
//!
//!     raw text -> stripped lines -> folds -> sections -> attributes -> typed values
//!
//! Parsing is total: malformed frequencies surface as NaN inside the returned
//! [`Bandplan`], never as an error.

pub mod ast;
pub mod config;
pub mod formats;
pub mod frequency;
pub mod lexing;
pub mod parsing;
pub mod propagation;
pub mod view_state;

pub use ast::{Attribute, AttributeData, AttributeValue, Bandplan, Marker, Section};
pub use frequency::FrequencyError;
pub use parsing::parse_bandplan;
