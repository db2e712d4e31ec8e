//! Output format implementations for parsed bandplans
//!
//! - `json` / `json-compact`: the renderer-facing shape, via serde_json
//! - `yaml`: the same shape, via serde_yaml
//! - `treeviz`: one line per node for quick inspection

pub mod json;
pub mod registry;
pub mod treeviz;
pub mod yaml;

pub use json::{CompactJsonFormatter, JsonFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
pub use yaml::YamlFormatter;
