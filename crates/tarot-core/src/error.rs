//! Error types for the tarot core.

use thiserror::Error;

/// Result type for tarot operations.
pub type TarotResult<T> = Result<T, TarotError>;

/// Errors that can occur while drawing, resolving or persisting readings.
#[derive(Debug, Error)]
pub enum TarotError {
    /// A spread asks for more cards than the deck holds.
    #[error("invalid spread: requested {requested} cards but the deck holds {available}")]
    InvalidSpread {
        /// Number of cards the spread asked for.
        requested: usize,
        /// Number of cards in the deck.
        available: usize,
    },

    /// A spread definition is inconsistent (zero cards, label count mismatch).
    #[error("malformed spread: {0}")]
    MalformedSpread(String),

    /// No spread with this name is defined.
    #[error("unknown spread: \"{0}\"")]
    UnknownSpread(String),

    /// The identifier does not name one of the 78 cards.
    #[error("unknown card: \"{0}\"")]
    UnknownCard(String),

    /// The settings key is not recognized.
    #[error("unknown setting: \"{0}\" (expected: sound, animation)")]
    UnknownSetting(String),

    /// The settings value could not be interpreted.
    #[error("invalid value \"{value}\" for setting \"{key}\" (expected: on, off, true, false)")]
    InvalidSettingValue {
        /// Settings key.
        key: String,
        /// Rejected value.
        value: String,
    },

    /// Filesystem error while reading or writing a document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Document could not be serialized or parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
