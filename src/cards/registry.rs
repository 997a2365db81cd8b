//! Ordered card collection with id lookup.
//!
//! The `CardRegistry` holds the deck in display order and provides fast
//! lookup by `CardId`. Order matters: the grid renders it and the reading
//! shuffles it.

use rustc_hash::FxHashMap;
use tracing::warn;

use super::definition::{CardId, TarotCard};
use crate::core::rng::DeckRng;

/// Registry of fetched cards.
///
/// ## Example
///
/// ```
/// use tarot_stem::cards::{CardRegistry, TarotCard};
///
/// let mut registry = CardRegistry::new();
/// registry.register(TarotCard::new("1", "I", "El Mago", "Ada Lovelace"));
///
/// let found = registry.get("1").unwrap();
/// assert_eq!(found.goddess_name, "Ada Lovelace");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: Vec<TarotCard>,
    index: FxHashMap<CardId, usize>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a fetched list, keeping its order.
    ///
    /// Later duplicates of an id are dropped.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = TarotCard>) -> Self {
        let mut registry = Self::new();
        for card in cards {
            registry.register(card);
        }
        registry
    }

    /// Append a card. Returns `false` (and keeps the first) on a duplicate id.
    pub fn register(&mut self, card: TarotCard) -> bool {
        if self.index.contains_key(&card.id) {
            warn!(id = %card.id, "duplicate card id ignored");
            return false;
        }
        self.index.insert(card.id.clone(), self.cards.len());
        self.cards.push(card);
        true
    }

    /// Get a card by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&TarotCard> {
        self.index.get(id).map(|&i| &self.cards[i])
    }

    /// Get a card by display position.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&TarotCard> {
        self.cards.get(index)
    }

    /// Get the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in display order.
    #[must_use]
    pub fn as_slice(&self) -> &[TarotCard] {
        &self.cards
    }

    /// Iterate over cards in display order.
    pub fn iter(&self) -> impl Iterator<Item = &TarotCard> {
        self.cards.iter()
    }

    /// Permute the display order in place.
    pub fn shuffle(&mut self, rng: &mut DeckRng) {
        rng.shuffle(&mut self.cards);
        self.reindex();
    }

    /// Remove every card.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.index.clear();
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (i, card) in self.cards.iter().enumerate() {
            self.index.insert(card.id.clone(), i);
        }
    }
}
