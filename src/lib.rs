//! # rbp
//!
//! A parser for the rbp bandplan format, plus the SI-prefix frequency codec
//! shared by the parser and by chart view-state links.
//!
//! ```rust,ignore
//! use rbp::bandplan::{frequency, parse_bandplan};
//!
//! let plan = parse_bandplan("2m\n  band 144MHz-146MHz\n");
//! assert_eq!(plan.sections()[0].band(), Some([144e6, 146e6]));
//! assert_eq!(frequency::encode(144_050_000.0), "144.050M");
//! ```

pub mod bandplan;
