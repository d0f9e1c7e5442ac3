//! Reading history and journal persistence.
//!
//! Both collections are kept most-recent-first and bounded: new entries go to
//! the front, the oldest fall off the back. Every mutation rewrites the whole
//! document. A document that cannot be read or parsed is treated as empty so
//! a damaged file never blocks startup, and a failed write leaves the
//! in-memory state authoritative until the next successful write.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_JOURNAL_CAPACITY, DEFAULT_READING_CAPACITY, TarotConfig};
use crate::draw::DrawnReading;
use crate::error::TarotResult;
use crate::persist::{read_json, write_json_atomic};

/// A free-text journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// When the entry was written.
    pub timestamp: DateTime<Utc>,
    /// The entry text.
    pub text: String,
}

/// Everything the history document holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryState {
    /// Completed readings, most recent first.
    #[serde(default)]
    pub readings: Vec<DrawnReading>,
    /// Journal entries, most recent first.
    #[serde(default)]
    pub journal: Vec<JournalEntry>,
}

impl HistoryState {
    /// Whether there are no readings and no journal entries.
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty() && self.journal.is_empty()
    }

    fn truncate(&mut self, reading_capacity: usize, journal_capacity: usize) {
        self.readings.truncate(reading_capacity);
        self.journal.truncate(journal_capacity);
    }
}

/// Load the history document at `path`.
///
/// Missing, unreadable or unparseable documents yield an empty state.
pub fn load(path: &Path) -> HistoryState {
    match read_json(path) {
        Ok(Some(state)) => state,
        Ok(None) => HistoryState::default(),
        Err(e) => {
            log::warn!("ignoring unreadable history at {}: {e}", path.display());
            HistoryState::default()
        }
    }
}

/// Bounded, persisted log of readings and journal entries.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    state: HistoryState,
    reading_capacity: usize,
    journal_capacity: usize,
}

impl HistoryStore {
    /// Open the store at `path`, loading whatever is there.
    pub fn open(
        path: impl Into<PathBuf>,
        reading_capacity: usize,
        journal_capacity: usize,
    ) -> Self {
        let path = path.into();
        let reading_capacity = reading_capacity.max(1);
        let journal_capacity = journal_capacity.max(1);
        let mut state = load(&path);
        state.truncate(reading_capacity, journal_capacity);
        log::debug!(
            "loaded {} readings and {} journal entries from {}",
            state.readings.len(),
            state.journal.len(),
            path.display()
        );

        Self {
            path,
            state,
            reading_capacity,
            journal_capacity,
        }
    }

    /// Open the store at the default capacities.
    pub fn open_default(path: impl Into<PathBuf>) -> Self {
        Self::open(path, DEFAULT_READING_CAPACITY, DEFAULT_JOURNAL_CAPACITY)
    }

    /// Open the store described by a configuration.
    pub fn from_config(config: &TarotConfig) -> Self {
        Self::open(
            config.history_path(),
            config.reading_capacity,
            config.journal_capacity,
        )
    }

    /// Path of the history document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The in-memory state.
    pub fn state(&self) -> &HistoryState {
        &self.state
    }

    /// Readings, most recent first.
    pub fn readings(&self) -> &[DrawnReading] {
        &self.state.readings
    }

    /// Journal entries, most recent first.
    pub fn journal(&self) -> &[JournalEntry] {
        &self.state.journal
    }

    /// Record a completed reading and write the document.
    ///
    /// The reading is kept in memory even when the write fails; the error is
    /// returned for reporting.
    pub fn add_reading(&mut self, reading: DrawnReading) -> TarotResult<()> {
        self.state.readings.insert(0, reading);
        self.state.readings.truncate(self.reading_capacity);
        self.persist()
    }

    /// Record a journal entry and write the document.
    ///
    /// Blank text is ignored and returns `Ok(false)`.
    pub fn add_journal_entry(&mut self, text: &str) -> TarotResult<bool> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(false);
        }
        self.state.journal.insert(
            0,
            JournalEntry {
                timestamp: Utc::now(),
                text: text.to_string(),
            },
        );
        self.state.journal.truncate(self.journal_capacity);
        self.persist().map(|()| true)
    }

    /// Write the full state to the document.
    pub fn persist(&self) -> TarotResult<()> {
        match write_json_atomic(&self.path, &self.state) {
            Ok(()) => {
                log::debug!("saved history to {}", self.path.display());
                Ok(())
            }
            Err(e) => {
                log::error!("failed to save history to {}: {e}", self.path.display());
                Err(e)
            }
        }
    }

    /// Export readings and journal as markdown, most recent first.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Tarot Journal\n\n");

        out.push_str("## Readings\n\n");
        if self.state.readings.is_empty() {
            out.push_str("*No readings yet.*\n\n");
        }
        for reading in &self.state.readings {
            out.push_str(&format!(
                "### {} ({})\n\n",
                reading.spread_name,
                format_timestamp(&reading.timestamp)
            ));
            for (i, drawn) in reading.cards.iter().enumerate() {
                out.push_str(&format!(
                    "{}. **{}** ({})\n",
                    i + 1,
                    drawn.card,
                    drawn.orientation
                ));
            }
            out.push('\n');
        }

        out.push_str("## Journal\n\n");
        if self.state.journal.is_empty() {
            out.push_str("*No entries yet.*\n\n");
        }
        for entry in &self.state.journal {
            out.push_str(&format!("**{}**\n\n", format_timestamp(&entry.timestamp)));
            for line in entry.text.lines() {
                out.push_str(&format!("> {line}\n"));
            }
            out.push('\n');
        }
        out
    }

    /// Export readings and journal as plain text, most recent first.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Tarot Journal\n=============\n\n");

        out.push_str("Readings\n--------\n\n");
        for reading in &self.state.readings {
            out.push_str(&format!(
                "{} - {}\n",
                format_timestamp(&reading.timestamp),
                reading.spread_name
            ));
            for (i, drawn) in reading.cards.iter().enumerate() {
                out.push_str(&format!("  {}. {drawn}\n", i + 1));
            }
            out.push('\n');
        }

        out.push_str("Journal\n-------\n\n");
        for entry in &self.state.journal {
            out.push_str(&format!(
                "{}\n  {}\n\n",
                format_timestamp(&entry.timestamp),
                entry.text.replace('\n', "\n  ")
            ));
        }
        out
    }
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M UTC").to_string()
}
