//! Diagnostics
//!
//!     Conversion runs describe what they did as plain data: a list of [ConversionEvent]s and
//!     a [StatsDelta]. Nothing here is global. A caller that wants a running log (an editor
//!     panel, the CLI's interactive mode) folds runs into a [Session] it owns.
//!
//! Export Format
//!
//!     One line per event, `[<timestamp>] <SEVERITY>: <message>`, joined with `\n`. The
//!     timestamp uses a chrono strftime pattern, [DEFAULT_TIMESTAMP_FORMAT] unless configured.

pub mod session;

pub use session::{export_file_name, word_count, Session};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};

/// Wall-clock time of day, as shown next to each log line.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// Severity of a conversion event, least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Processing,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Upper-case label used in exported logs.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Processing => "PROCESSING",
            Severity::Success => "SUCCESS",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One line of the conversion log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionEvent {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub severity: Severity,
}

impl ConversionEvent {
    pub fn new(timestamp: DateTime<Local>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            timestamp,
            message: message.into(),
            severity,
        }
    }

    /// Render as an export line. An unusable timestamp pattern falls back to the default.
    pub fn render(&self, timestamp_format: &str) -> String {
        format!(
            "[{}] {}: {}",
            format_timestamp(&self.timestamp, timestamp_format),
            self.severity.label(),
            self.message
        )
    }
}

/// Counters contributed by a single conversion run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsDelta {
    pub conversions: u64,
    pub pronouns: u64,
    pub ambiguous: u64,
    pub last_time: DateTime<Local>,
}

/// Running totals across conversion runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub conversions: u64,
    pub pronouns: u64,
    pub ambiguous: u64,
    pub last_time: Option<DateTime<Local>>,
}

impl Stats {
    pub fn apply(&mut self, delta: &StatsDelta) {
        self.conversions += delta.conversions;
        self.pronouns += delta.pronouns;
        self.ambiguous += delta.ambiguous;
        self.last_time = Some(delta.last_time);
    }

    /// Human-readable summary block, one counter per line.
    pub fn summary(&self, timestamp_format: &str) -> String {
        let last_time = self
            .last_time
            .map(|time| format_timestamp(&time, timestamp_format))
            .unwrap_or_else(|| "Never".to_string());

        format!(
            "Conversions processed: {}\nPronouns converted: {}\nAmbiguous resolutions: {}\nLast conversion time: {}",
            self.conversions, self.pronouns, self.ambiguous, last_time
        )
    }
}

fn format_timestamp(timestamp: &DateTime<Local>, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", timestamp.format(pattern)).is_err() {
        out.clear();
        let _ = write!(out, "{}", timestamp.format(DEFAULT_TIMESTAMP_FORMAT));
    }
    out
}
