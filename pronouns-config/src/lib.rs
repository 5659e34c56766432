//! Shared configuration loader for the pronoun converter.
//!
//! `defaults/pronouns.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`PronounsConfig`].

use chrono::format::{Item, StrftimeItems};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use pronouns_core::pronouns::Severity;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/pronouns.default.toml");

/// Top-level configuration consumed by the converter front ends.
#[derive(Debug, Clone, Deserialize)]
pub struct PronounsConfig {
    pub log: LogConfig,
    pub export: ExportConfig,
    pub output: OutputConfig,
}

/// How log lines are stamped and filtered.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub timestamp_format: String,
    pub min_severity: Severity,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub file_prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_stats: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Text,
    Json,
    Tokens,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder, deserialize, and reject unusable timestamp patterns.
    pub fn build(self) -> Result<PronounsConfig, ConfigError> {
        let config: PronounsConfig = self.builder.build()?.try_deserialize()?;
        validate_timestamp_format(&config.log.timestamp_format)?;
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<PronounsConfig, ConfigError> {
    Loader::new().build()
}

fn validate_timestamp_format(pattern: &str) -> Result<(), ConfigError> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::Message(format!(
            "log.timestamp_format: invalid strftime pattern '{}'",
            pattern
        )));
    }
    Ok(())
}
