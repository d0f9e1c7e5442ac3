//! Spread definitions: named layouts with a card count and optional
//! position labels.

use crate::error::{TarotError, TarotResult};

/// Name of the one-card spread.
pub const SINGLE_CARD: &str = "Single Card";

/// A named spread layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spread {
    name: String,
    card_count: usize,
    position_labels: Vec<String>,
}

impl Spread {
    /// A spread without position labels.
    pub fn new(name: impl Into<String>, card_count: usize) -> TarotResult<Self> {
        let name = name.into();
        if card_count == 0 {
            return Err(TarotError::MalformedSpread(format!(
                "\"{name}\" must draw at least one card"
            )));
        }
        Ok(Self {
            name,
            card_count,
            position_labels: Vec::new(),
        })
    }

    /// A spread with one label per position.
    pub fn with_labels<I, S>(name: impl Into<String>, labels: I) -> TarotResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let position_labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let mut spread = Self::new(name, position_labels.len())?;
        spread.position_labels = position_labels;
        Ok(spread)
    }

    /// Override the card count of a labelled spread; the label count must match.
    pub fn with_card_count(mut self, card_count: usize) -> TarotResult<Self> {
        if card_count == 0 {
            return Err(TarotError::MalformedSpread(format!(
                "\"{}\" must draw at least one card",
                self.name
            )));
        }
        if !self.position_labels.is_empty() && self.position_labels.len() != card_count {
            return Err(TarotError::MalformedSpread(format!(
                "\"{}\" has {} labels but {card_count} cards",
                self.name,
                self.position_labels.len()
            )));
        }
        self.card_count = card_count;
        Ok(self)
    }

    /// The spread's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of cards drawn.
    pub fn card_count(&self) -> usize {
        self.card_count
    }

    /// Position labels, empty when the spread carries none.
    pub fn position_labels(&self) -> &[String] {
        &self.position_labels
    }

    /// Label for a position, `"Card {n}"` (1-based) when unlabelled.
    pub fn label(&self, position: usize) -> String {
        self.position_labels
            .get(position)
            .cloned()
            .unwrap_or_else(|| format!("Card {}", position + 1))
    }
}

/// An ordered set of spreads with case-insensitive lookup by name.
#[derive(Debug, Clone, Default)]
pub struct SpreadCatalog {
    spreads: Vec<Spread>,
}

impl SpreadCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in spreads.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        // Labels are non-empty literals, so construction cannot fail.
        let builtin = [
            Spread::with_labels(SINGLE_CARD, ["Card"]),
            Spread::with_labels("Past Present Future", ["Past", "Present", "Future"]),
            Spread::with_labels("Situation Action Outcome", ["Situation", "Action", "Outcome"]),
            Spread::with_labels(
                "Celtic Cross",
                [
                    "Present",
                    "Challenge",
                    "Foundation",
                    "Recent Past",
                    "Crown",
                    "Near Future",
                    "Self",
                    "Environment",
                    "Hopes and Fears",
                    "Outcome",
                ],
            ),
        ];
        for spread in builtin.into_iter().flatten() {
            catalog.insert(spread);
        }
        catalog
    }

    /// Add a spread, replacing any existing spread with the same name.
    pub fn insert(&mut self, spread: Spread) {
        match self
            .spreads
            .iter_mut()
            .find(|s| s.name.eq_ignore_ascii_case(&spread.name))
        {
            Some(existing) => *existing = spread,
            None => self.spreads.push(spread),
        }
    }

    /// Look up a spread by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Spread> {
        let name = name.trim();
        self.spreads
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// Look up a spread by name, failing with `UnknownSpread`.
    pub fn require(&self, name: &str) -> TarotResult<&Spread> {
        self.get(name)
            .ok_or_else(|| TarotError::UnknownSpread(name.to_string()))
    }

    /// Iterate spreads in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Spread> {
        self.spreads.iter()
    }

    /// Number of spreads.
    pub fn len(&self) -> usize {
        self.spreads.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.spreads.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog() {
        let catalog = SpreadCatalog::standard();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get(SINGLE_CARD).unwrap().card_count(), 1);
        let ppf = catalog.get("past present future").unwrap();
        assert_eq!(ppf.card_count(), 3);
        assert_eq!(ppf.position_labels(), ["Past", "Present", "Future"]);
        assert_eq!(catalog.get("Celtic Cross").unwrap().card_count(), 10);
    }

    #[test]
    fn labels_default_to_position_number() {
        let spread = Spread::new("Five", 5).unwrap();
        assert_eq!(spread.label(0), "Card 1");
        assert_eq!(spread.label(4), "Card 5");
        let ppf = Spread::with_labels("PPF", ["Past", "Present", "Future"]).unwrap();
        assert_eq!(ppf.label(2), "Future");
    }

    #[test]
    fn zero_cards_rejected() {
        assert!(matches!(
            Spread::new("Empty", 0),
            Err(TarotError::MalformedSpread(_))
        ));
        let no_labels: [&str; 0] = [];
        assert!(Spread::with_labels("Empty", no_labels).is_err());
    }

    #[test]
    fn label_count_must_match() {
        let spread = Spread::with_labels("Two", ["A", "B"]).unwrap();
        assert!(matches!(
            spread.clone().with_card_count(3),
            Err(TarotError::MalformedSpread(_))
        ));
        assert_eq!(spread.with_card_count(2).unwrap().card_count(), 2);
    }

    #[test]
    fn unlabelled_card_count_can_change() {
        let spread = Spread::new("Big", 3).unwrap().with_card_count(100).unwrap();
        assert_eq!(spread.card_count(), 100);
    }

    #[test]
    fn insert_replaces_same_name() {
        let mut catalog = SpreadCatalog::standard();
        catalog.insert(Spread::new("single card", 2).unwrap());
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get(SINGLE_CARD).unwrap().card_count(), 2);
    }

    #[test]
    fn require_unknown() {
        let catalog = SpreadCatalog::standard();
        assert!(matches!(
            catalog.require("Horseshoe"),
            Err(TarotError::UnknownSpread(_))
        ));
    }
}
