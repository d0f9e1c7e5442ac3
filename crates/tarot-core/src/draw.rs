//! Card drawing.
//!
//! A reading samples distinct cards without replacement (a partial
//! Fisher-Yates shuffle of the deck) and flips a fair coin per card for its
//! orientation. Sampled order is position order: the first sampled card
//! fills the spread's first position.

use std::fmt;

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::deck::{Card, Deck};
use crate::error::{TarotError, TarotResult};
use crate::spread::{SINGLE_CARD, Spread};

/// Whether a drawn card is read upright or reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Upright.
    Upright,
    /// Reversed (upside down).
    Reversed,
}

impl Orientation {
    /// Pick an orientation with equal probability.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Self::Reversed
        } else {
            Self::Upright
        }
    }

    /// Whether this is `Reversed`.
    pub fn is_reversed(self) -> bool {
        self == Self::Reversed
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upright => write!(f, "Upright"),
            Self::Reversed => write!(f, "Reversed"),
        }
    }
}

/// A card as it came out of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnCard {
    /// The card.
    pub card: Card,
    /// Its orientation in this reading.
    pub orientation: Orientation,
}

impl fmt::Display for DrawnCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.card, self.orientation)
    }
}

/// One completed spread draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawnReading {
    /// When the reading was drawn.
    pub timestamp: DateTime<Utc>,
    /// Name of the spread that was laid out.
    pub spread_name: String,
    /// Cards in position order.
    pub cards: Vec<DrawnCard>,
}

impl DrawnReading {
    /// Pair each card with its position label in `spread`.
    pub fn positions<'a>(&'a self, spread: &Spread) -> Vec<(String, &'a DrawnCard)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, drawn)| (spread.label(i), drawn))
            .collect()
    }

    /// Number of reversed cards.
    pub fn reversed_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|c| c.orientation.is_reversed())
            .count()
    }
}

/// Draw a reading for `spread` from `deck`.
///
/// Fails with [`TarotError::InvalidSpread`] when the spread asks for more
/// cards than the deck holds; nothing is drawn in that case.
pub fn draw<R: Rng + ?Sized>(
    spread: &Spread,
    deck: &Deck,
    rng: &mut R,
) -> TarotResult<DrawnReading> {
    let count = spread.card_count();
    if count > deck.len() {
        return Err(TarotError::InvalidSpread {
            requested: count,
            available: deck.len(),
        });
    }

    let mut pool = deck.cards().to_vec();
    let (sampled, _) = pool.partial_shuffle(rng, count);

    let cards = sampled
        .iter()
        .map(|card| DrawnCard {
            card: *card,
            orientation: Orientation::random(rng),
        })
        .collect();

    Ok(DrawnReading {
        timestamp: Utc::now(),
        spread_name: spread.name().to_string(),
        cards,
    })
}

/// Draw one card with a random orientation.
pub fn draw_single<R: Rng + ?Sized>(deck: &Deck, rng: &mut R) -> TarotResult<DrawnReading> {
    let spread = Spread::new(SINGLE_CARD, 1)?;
    draw(&spread, deck, rng)
}
