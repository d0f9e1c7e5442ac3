//! Tarot session management.
//!
//! `TarotSession` owns everything a front-end needs for one application run:
//! the deck, the spread catalog, the asset resolver, the history store, the
//! settings and the RNG. It is built once at startup and flushed with
//! [`TarotSession::shutdown`].

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::assets::{AssetResolver, ResolvedAsset};
use crate::config::TarotConfig;
use crate::deck::{Card, Deck};
use crate::draw::{DrawnCard, DrawnReading, Orientation, draw};
use crate::error::TarotResult;
use crate::history::HistoryStore;
use crate::settings::Settings;
use crate::spread::{Spread, SpreadCatalog};

/// A card ready to show: face (or fallback) image plus orientation.
///
/// Reversed cards carry the upright image; the renderer rotates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedCard {
    /// The card.
    pub card: Card,
    /// Its orientation in the reading.
    pub orientation: Orientation,
    /// The image to show.
    pub asset: ResolvedAsset,
}

/// One application run.
#[derive(Debug)]
pub struct TarotSession {
    config: TarotConfig,
    deck: Deck,
    spreads: SpreadCatalog,
    resolver: AssetResolver,
    history: HistoryStore,
    settings: Settings,
    rng: StdRng,
}

impl TarotSession {
    /// Start a session: load history and settings and seed the RNG.
    pub fn new(config: TarotConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let resolver = AssetResolver::from_config(&config);
        let history = HistoryStore::from_config(&config);
        let settings = Settings::load(&config.settings_path());

        Self {
            config,
            deck: Deck::standard(),
            spreads: SpreadCatalog::standard(),
            resolver,
            history,
            settings,
            rng,
        }
    }

    /// Replace the spread catalog.
    pub fn with_spreads(mut self, spreads: SpreadCatalog) -> Self {
        self.spreads = spreads;
        self
    }

    /// Replace the asset resolver.
    pub fn with_resolver(mut self, resolver: AssetResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// The configuration the session was built from.
    pub fn config(&self) -> &TarotConfig {
        &self.config
    }

    /// The deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The spread catalog.
    pub fn spreads(&self) -> &SpreadCatalog {
        &self.spreads
    }

    /// The asset resolver.
    pub fn resolver(&self) -> &AssetResolver {
        &self.resolver
    }

    /// The history store.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Look up a spread by name.
    pub fn spread(&self, name: &str) -> TarotResult<&Spread> {
        self.spreads.require(name)
    }

    /// Draw a reading for the named spread without recording it.
    pub fn draw(&mut self, spread_name: &str) -> TarotResult<DrawnReading> {
        let spread = self.spreads.require(spread_name)?;
        draw(spread, &self.deck, &mut self.rng)
    }

    /// Draw a reading for an ad-hoc spread without recording it.
    pub fn draw_spread(&mut self, spread: &Spread) -> TarotResult<DrawnReading> {
        draw(spread, &self.deck, &mut self.rng)
    }

    /// Record a fully revealed reading in history.
    pub fn complete(&mut self, reading: DrawnReading) -> TarotResult<()> {
        self.history.add_reading(reading)
    }

    /// Draw the named spread and record it in one step.
    ///
    /// Fails only when nothing could be drawn. A failed save does not lose the
    /// reading: it is returned together with the outcome of the write and stays
    /// in the in-memory history.
    pub fn draw_and_record(
        &mut self,
        spread_name: &str,
    ) -> TarotResult<(DrawnReading, TarotResult<()>)> {
        let reading = self.draw(spread_name)?;
        let saved = self.complete(reading.clone());
        Ok((reading, saved))
    }

    /// Resolve the image for a drawn card.
    pub fn reveal(&self, drawn: &DrawnCard) -> RevealedCard {
        RevealedCard {
            card: drawn.card,
            orientation: drawn.orientation,
            asset: self.resolver.resolve_card(&drawn.card),
        }
    }

    /// Resolve images for every card of a reading, in position order.
    pub fn reveal_all(&self, reading: &DrawnReading) -> Vec<RevealedCard> {
        reading.cards.iter().map(|c| self.reveal(c)).collect()
    }

    /// Add a journal entry. Blank text is ignored and returns `Ok(false)`.
    pub fn add_journal_entry(&mut self, text: &str) -> TarotResult<bool> {
        self.history.add_journal_entry(text)
    }

    /// Change a setting and save the settings document.
    pub fn set_setting(&mut self, key: &str, value: &str) -> TarotResult<()> {
        self.settings.set(key, value)?;
        self.settings.save(&self.config.settings_path())
    }

    /// Flush history to disk at the end of the run.
    pub fn shutdown(self) -> TarotResult<()> {
        self.history.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TarotError;
    use crate::history::load;
    use std::fs;
    use tempfile::TempDir;

    fn session(dir: &TempDir) -> TarotSession {
        let config = TarotConfig::default()
            .with_data_dir(dir.path().join("data"))
            .with_asset_dirs([dir.path().join("images")])
            .with_seed(42);
        TarotSession::new(config)
    }

    #[test]
    fn draw_does_not_record() {
        let dir = TempDir::new().unwrap();
        let mut s = session(&dir);
        let reading = s.draw("Past Present Future").unwrap();
        assert_eq!(reading.cards.len(), 3);
        assert!(s.history().readings().is_empty());
    }

    #[test]
    fn draw_and_record_persists() {
        let dir = TempDir::new().unwrap();
        let mut s = session(&dir);
        let (reading, saved) = s.draw_and_record("celtic cross").unwrap();
        assert!(saved.is_ok());
        assert_eq!(reading.spread_name, "Celtic Cross");
        assert_eq!(reading.cards.len(), 10);

        let stored = load(&s.config().history_path());
        assert_eq!(stored.readings, vec![reading]);
    }

    #[test]
    fn draw_and_record_reports_failed_save() {
        let dir = TempDir::new().unwrap();
        let mut s = session(&dir);
        // A directory where the document should be makes the rename fail.
        let history_path = s.config().history_path();
        fs::create_dir_all(&history_path).unwrap();
        fs::write(history_path.join("occupied"), "x").unwrap();

        let (reading, saved) = s.draw_and_record("Single Card").unwrap();
        assert!(matches!(saved, Err(TarotError::Io(_))));
        assert_eq!(s.history().readings(), [reading]);
    }

    #[test]
    fn draw_and_record_unknown_spread_records_nothing() {
        let dir = TempDir::new().unwrap();
        let mut s = session(&dir);
        assert!(matches!(
            s.draw_and_record("Horseshoe"),
            Err(TarotError::UnknownSpread(_))
        ));
        assert!(s.history().readings().is_empty());
    }

    #[test]
    fn debug_output_names_session() {
        let dir = TempDir::new().unwrap();
        let debug = format!("{:?}", session(&dir));
        assert!(debug.starts_with("TarotSession"));
        assert!(debug.contains("HistoryStore"));
    }

    #[test]
    fn seeded_sessions_agree() {
        let a_dir = TempDir::new().unwrap();
        let b_dir = TempDir::new().unwrap();
        let a = session(&a_dir).draw("Celtic Cross").unwrap();
        let b = session(&b_dir).draw("Celtic Cross").unwrap();
        assert_eq!(a.cards, b.cards);
    }

    #[test]
    fn unknown_spread() {
        let dir = TempDir::new().unwrap();
        let mut s = session(&dir);
        assert!(matches!(
            s.draw("Horseshoe"),
            Err(TarotError::UnknownSpread(_))
        ));
    }

    #[test]
    fn oversized_ad_hoc_spread() {
        let dir = TempDir::new().unwrap();
        let mut s = session(&dir);
        let spread = Spread::new("Everything and more", 100).unwrap();
        assert!(matches!(
            s.draw_spread(&spread),
            Err(TarotError::InvalidSpread { .. })
        ));
        assert!(s.history().readings().is_empty());
    }

    #[test]
    fn reveal_resolves_assets() {
        let dir = TempDir::new().unwrap();
        let images = dir.path().join("images");
        fs::create_dir_all(&images).unwrap();
        fs::write(images.join("CardBacks.png"), b"back").unwrap();

        let mut s = session(&dir);
        let reading = s.draw("Single Card").unwrap();
        let revealed = s.reveal_all(&reading);
        assert_eq!(revealed.len(), 1);
        assert_eq!(revealed[0].card, reading.cards[0].card);
        assert_eq!(revealed[0].orientation, reading.cards[0].orientation);
        assert_eq!(revealed[0].asset.path, Some(images.join("CardBacks.png")));
        assert!(revealed[0].asset.is_fallback);
    }

    #[test]
    fn settings_are_saved() {
        let dir = TempDir::new().unwrap();
        let mut s = session(&dir);
        s.set_setting("sound", "off").unwrap();
        assert!(!s.settings().sound_enabled);

        let reloaded = session(&dir);
        assert!(!reloaded.settings().sound_enabled);
        assert!(reloaded.settings().animation_enabled);
    }

    #[test]
    fn journal_through_session() {
        let dir = TempDir::new().unwrap();
        let mut s = session(&dir);
        assert!(s.add_journal_entry("new moon").unwrap());
        assert!(!s.add_journal_entry("  ").unwrap());
        s.shutdown().unwrap();

        let reloaded = session(&dir);
        assert_eq!(reloaded.history().journal().len(), 1);
    }
}
