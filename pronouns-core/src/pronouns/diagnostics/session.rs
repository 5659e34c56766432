//! Caller-owned conversion log and running stats.
use chrono::{Local, NaiveDate};

use super::{ConversionEvent, Severity, Stats, StatsDelta};
use crate::pronouns::assembling::Conversion;

/// Append-only log plus running totals, cleared only on request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    entries: Vec<ConversionEvent>,
    stats: Stats,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ConversionEvent] {
        &self.entries
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Append a message stamped with the current local time.
    pub fn append(&mut self, message: impl Into<String>, severity: Severity) {
        self.entries
            .push(ConversionEvent::new(Local::now(), message, severity));
    }

    pub fn update_stats(&mut self, delta: &StatsDelta) {
        self.stats.apply(delta);
    }

    /// Fold a whole conversion run into the session: its events, then its stats.
    pub fn record(&mut self, conversion: &Conversion) {
        self.entries.extend(conversion.events.iter().cloned());
        self.update_stats(&conversion.stats);
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = Stats::default();
    }

    /// Entries at or above `min_severity`.
    pub fn filtered(&self, min_severity: Severity) -> impl Iterator<Item = &ConversionEvent> {
        self.entries
            .iter()
            .filter(move |entry| entry.severity >= min_severity)
    }

    /// The whole log in export format.
    pub fn export(&self, timestamp_format: &str) -> String {
        self.entries
            .iter()
            .map(|entry| entry.render(timestamp_format))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// File name for an exported log, e.g. `pronoun-converter-debug-2024-03-09.txt`.
pub fn export_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}-{}.txt", prefix, date.format("%Y-%m-%d"))
}

/// Number of whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
