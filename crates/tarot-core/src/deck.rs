//! The 78-card tarot deck.
//!
//! The minor arcana are built suit by suit (Wands, Cups, Swords, Pentacles),
//! each suit running Ace through King, followed by the 22 major arcana in
//! their canonical order. Card identifiers are the display strings
//! (`"Ace of Wands"`, `"The Fool"`) and are what gets persisted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{TarotError, TarotResult};

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 78;

/// A minor arcana suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Wands.
    Wands,
    /// Cups.
    Cups,
    /// Swords.
    Swords,
    /// Pentacles.
    Pentacles,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles];

    /// The suit's name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Wands => "Wands",
            Self::Cups => "Cups",
            Self::Swords => "Swords",
            Self::Pentacles => "Pentacles",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A minor arcana rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Page.
    Page,
    /// Knight.
    Knight,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in deck order.
    pub const ALL: [Rank; 14] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Page,
        Rank::Knight,
        Rank::Queen,
        Rank::King,
    ];

    /// The rank's name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Page => "Page",
            Self::Knight => "Knight",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }

    /// Whether this is a court card (Page, Knight, Queen, King).
    pub fn is_court(self) -> bool {
        matches!(self, Self::Page | Self::Knight | Self::Queen | Self::King)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the 22 major arcana.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MajorArcana {
    /// 0.
    TheFool,
    /// I.
    TheMagician,
    /// II.
    TheHighPriestess,
    /// III.
    TheEmpress,
    /// IV.
    TheEmperor,
    /// V.
    TheHierophant,
    /// VI.
    TheLovers,
    /// VII.
    TheChariot,
    /// VIII.
    Strength,
    /// IX.
    TheHermit,
    /// X.
    WheelOfFortune,
    /// XI.
    Justice,
    /// XII.
    TheHangedMan,
    /// XIII.
    Death,
    /// XIV.
    Temperance,
    /// XV.
    TheDevil,
    /// XVI.
    TheTower,
    /// XVII.
    TheStar,
    /// XVIII.
    TheMoon,
    /// XIX.
    TheSun,
    /// XX.
    Judgement,
    /// XXI.
    TheWorld,
}

impl MajorArcana {
    /// All major arcana in canonical order.
    pub const ALL: [MajorArcana; 22] = [
        MajorArcana::TheFool,
        MajorArcana::TheMagician,
        MajorArcana::TheHighPriestess,
        MajorArcana::TheEmpress,
        MajorArcana::TheEmperor,
        MajorArcana::TheHierophant,
        MajorArcana::TheLovers,
        MajorArcana::TheChariot,
        MajorArcana::Strength,
        MajorArcana::TheHermit,
        MajorArcana::WheelOfFortune,
        MajorArcana::Justice,
        MajorArcana::TheHangedMan,
        MajorArcana::Death,
        MajorArcana::Temperance,
        MajorArcana::TheDevil,
        MajorArcana::TheTower,
        MajorArcana::TheStar,
        MajorArcana::TheMoon,
        MajorArcana::TheSun,
        MajorArcana::Judgement,
        MajorArcana::TheWorld,
    ];

    /// The card's name.
    pub fn name(self) -> &'static str {
        match self {
            Self::TheFool => "The Fool",
            Self::TheMagician => "The Magician",
            Self::TheHighPriestess => "The High Priestess",
            Self::TheEmpress => "The Empress",
            Self::TheEmperor => "The Emperor",
            Self::TheHierophant => "The Hierophant",
            Self::TheLovers => "The Lovers",
            Self::TheChariot => "The Chariot",
            Self::Strength => "Strength",
            Self::TheHermit => "The Hermit",
            Self::WheelOfFortune => "Wheel of Fortune",
            Self::Justice => "Justice",
            Self::TheHangedMan => "The Hanged Man",
            Self::Death => "Death",
            Self::Temperance => "Temperance",
            Self::TheDevil => "The Devil",
            Self::TheTower => "The Tower",
            Self::TheStar => "The Star",
            Self::TheMoon => "The Moon",
            Self::TheSun => "The Sun",
            Self::Judgement => "Judgement",
            Self::TheWorld => "The World",
        }
    }

    /// Traditional number (The Fool is 0).
    pub fn number(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for MajorArcana {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single tarot card. Orientation is not part of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Card {
    /// A major arcana card.
    Major(MajorArcana),
    /// A minor arcana card.
    Minor {
        /// Rank within the suit.
        rank: Rank,
        /// Suit.
        suit: Suit,
    },
}

impl Card {
    /// Whether the card belongs to the major arcana.
    pub fn is_major(&self) -> bool {
        matches!(self, Self::Major(_))
    }

    /// The card's identifier, e.g. `"Ace of Wands"` or `"The Fool"`.
    pub fn identifier(&self) -> String {
        self.to_string()
    }

    /// The identifier with spaces replaced by underscores, used as the image
    /// file stem.
    pub fn file_stem(&self) -> String {
        file_stem(&self.to_string())
    }
}

/// Turn an identifier into an image file stem (`"The Fool"` -> `"The_Fool"`).
pub fn file_stem(identifier: &str) -> String {
    identifier.replace(' ', "_")
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Major(major) => f.write_str(major.name()),
            Self::Minor { rank, suit } => write!(f, "{rank} of {suit}"),
        }
    }
}

impl FromStr for Card {
    type Err = TarotError;

    fn from_str(s: &str) -> TarotResult<Self> {
        let trimmed = s.trim();

        if let Some(major) = MajorArcana::ALL
            .iter()
            .find(|m| m.name().eq_ignore_ascii_case(trimmed))
        {
            return Ok(Self::Major(*major));
        }

        let (rank_str, suit_str) = trimmed
            .split_once(" of ")
            .ok_or_else(|| TarotError::UnknownCard(s.to_string()))?;
        let rank = Rank::ALL
            .iter()
            .find(|r| r.name().eq_ignore_ascii_case(rank_str.trim()))
            .ok_or_else(|| TarotError::UnknownCard(s.to_string()))?;
        let suit = Suit::ALL
            .iter()
            .find(|x| x.name().eq_ignore_ascii_case(suit_str.trim()))
            .ok_or_else(|| TarotError::UnknownCard(s.to_string()))?;

        Ok(Self::Minor {
            rank: *rank,
            suit: *suit,
        })
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = TarotError;

    fn try_from(value: String) -> TarotResult<Self> {
        value.parse()
    }
}

/// The fixed, ordered deck of 78 cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the standard deck: minor arcana suit-major, then major arcana.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::Minor { rank, suit });
            }
        }
        cards.extend(MajorArcana::ALL.iter().map(|m| Card::Major(*m)));
        Self { cards }
    }

    /// All cards in deck order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card at a deck position.
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Deck position of a card.
    pub fn position(&self, card: &Card) -> Option<usize> {
        self.cards.iter().position(|c| c == card)
    }

    /// Card identifiers in deck order.
    pub fn identifiers(&self) -> Vec<String> {
        self.cards.iter().map(Card::identifier).collect()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
