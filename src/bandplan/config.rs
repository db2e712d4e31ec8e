//! Configuration loader for the rbp toolchain.
//!
//! `defaults/rbp.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Applications layer user files and
//! `RBP_*` environment variables on top via [`Loader`] before deserializing
//! into [`RbpConfig`].

use crate::bandplan::frequency::{self, FrequencyError};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/rbp.default.toml");

/// Optional per-directory configuration file.
pub const LOCAL_CONFIG: &str = "rbp.toml";

/// Prefix of environment overrides, e.g. `RBP_OUTPUT__FORMAT=yaml`.
pub const ENV_PREFIX: &str = "RBP";

#[derive(Debug, Clone, Deserialize)]
pub struct RbpConfig {
    pub output: OutputConfig,
    pub view: ViewConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
}

/// Default chart view. `min` and `max` are encoded frequencies.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewConfig {
    pub min: String,
    pub max: String,
    pub velocity_factor: f64,
}

impl ViewConfig {
    /// The configured domain in Hz.
    pub fn domain(&self) -> Result<[f64; 2], FrequencyError> {
        Ok([frequency::decode(&self.min)?, frequency::decode(&self.max)?])
    }
}

/// Layers configuration sources over the embedded defaults.
///
/// Later layers win; overrides set with [`Loader::set_override`] win over
/// every source regardless of order.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// A loader holding only `defaults/rbp.default.toml`.
    pub fn new() -> Self {
        Loader {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Layer a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), true)
    }

    /// Layer a TOML file if it exists.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), false)
    }

    /// Layer `rbp.toml` from the working directory, if present.
    pub fn with_local_file(self) -> Self {
        self.with_optional_file(LOCAL_CONFIG)
    }

    fn with_toml(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer `RBP_<SECTION>__<KEY>` environment variables.
    pub fn with_environment(mut self) -> Self {
        self.builder = self.builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        );
        self
    }

    /// Force `key` (dotted, e.g. `output.format`) to `value`; used for CLI flags.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge every layer and deserialize into [`RbpConfig`].
    pub fn build(self) -> Result<RbpConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults alone.
pub fn load_defaults() -> Result<RbpConfig, ConfigError> {
    Loader::new().build()
}
