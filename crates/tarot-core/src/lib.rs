//! Core of the Tarot card-drawing application.
//!
//! Provides the 78-card deck model, spread definitions, a draw engine that
//! samples distinct cards with independent orientations, card-image lookup
//! with a card-back fallback, and a bounded, persisted history of readings
//! and journal entries. Rendering, input and audio belong to the front-end.

pub mod assets;
pub mod config;
pub mod deck;
pub mod draw;
pub mod error;
pub mod history;
mod persist;
pub mod session;
pub mod settings;
pub mod spread;

pub use assets::{AssetResolver, CARD_BACK, ResolvedAsset};
pub use config::TarotConfig;
pub use deck::{Card, DECK_SIZE, Deck, MajorArcana, Rank, Suit};
pub use draw::{DrawnCard, DrawnReading, Orientation, draw, draw_single};
pub use error::{TarotError, TarotResult};
pub use history::{HistoryState, HistoryStore, JournalEntry};
pub use session::{RevealedCard, TarotSession};
pub use settings::Settings;
pub use spread::{Spread, SpreadCatalog};
