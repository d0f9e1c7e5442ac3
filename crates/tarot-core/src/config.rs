//! Configuration for a tarot session.

use std::path::{Path, PathBuf};

/// Default number of readings kept in history.
pub const DEFAULT_READING_CAPACITY: usize = 50;

/// Default number of journal entries kept in history.
pub const DEFAULT_JOURNAL_CAPACITY: usize = 100;

/// Default image extensions, tried in order.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg"];

/// Default asset directories, tried in order.
pub const DEFAULT_ASSET_DIRS: &[&str] = &["images/images", "images", "assets"];

const HISTORY_FILE: &str = "history.json";
const SETTINGS_FILE: &str = "settings.json";

/// Configuration for a tarot session.
#[derive(Debug, Clone)]
pub struct TarotConfig {
    /// Directory holding the history and settings documents.
    pub data_dir: PathBuf,
    /// Candidate base directories for card images, in priority order.
    pub asset_dirs: Vec<PathBuf>,
    /// Candidate image extensions, in priority order.
    pub extensions: Vec<String>,
    /// RNG seed for reproducible draws. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Maximum number of readings retained.
    pub reading_capacity: usize,
    /// Maximum number of journal entries retained.
    pub journal_capacity: usize,
}

impl Default for TarotConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            asset_dirs: DEFAULT_ASSET_DIRS.iter().map(PathBuf::from).collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            seed: None,
            reading_capacity: DEFAULT_READING_CAPACITY,
            journal_capacity: DEFAULT_JOURNAL_CAPACITY,
        }
    }
}

impl TarotConfig {
    /// Set the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Append an asset directory after the existing ones.
    pub fn with_asset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.asset_dirs.push(dir.into());
        self
    }

    /// Replace the asset directories.
    pub fn with_asset_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.asset_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the image extensions.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the reading capacity (at least 1).
    pub fn with_reading_capacity(mut self, capacity: usize) -> Self {
        self.reading_capacity = capacity.max(1);
        self
    }

    /// Set the journal capacity (at least 1).
    pub fn with_journal_capacity(mut self, capacity: usize) -> Self {
        self.journal_capacity = capacity.max(1);
        self
    }

    /// Path of the history document.
    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join(HISTORY_FILE)
    }

    /// Path of the settings document.
    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join(SETTINGS_FILE)
    }
}

/// The platform data directory for tarot documents, or `.tarot` when the
/// platform has none.
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("tarot"))
        .unwrap_or_else(|| Path::new(".tarot").to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = TarotConfig::default();
        assert_eq!(cfg.reading_capacity, 50);
        assert_eq!(cfg.journal_capacity, 100);
        assert_eq!(cfg.extensions, vec![".png", ".jpg", ".jpeg"]);
        assert_eq!(cfg.asset_dirs[0], PathBuf::from("images/images"));
        assert!(cfg.seed.is_none());
    }

    #[test]
    fn builder_methods() {
        let cfg = TarotConfig::default()
            .with_data_dir("/tmp/tarot")
            .with_asset_dirs(["a", "b"])
            .with_asset_dir("c")
            .with_extensions([".webp"])
            .with_seed(7);
        assert_eq!(cfg.history_path(), PathBuf::from("/tmp/tarot/history.json"));
        assert_eq!(cfg.settings_path(), PathBuf::from("/tmp/tarot/settings.json"));
        assert_eq!(
            cfg.asset_dirs,
            vec![PathBuf::from("a"), PathBuf::from("b"), PathBuf::from("c")]
        );
        assert_eq!(cfg.extensions, vec![".webp"]);
        assert_eq!(cfg.seed, Some(7));
    }

    #[test]
    fn capacities_at_least_one() {
        let cfg = TarotConfig::default()
            .with_reading_capacity(0)
            .with_journal_capacity(0);
        assert_eq!(cfg.reading_capacity, 1);
        assert_eq!(cfg.journal_capacity, 1);
    }
}
