//! The deck as the UI sees it: cards plus load status.
//!
//! `CardStore` fetches the whole deck once when mounted, remembers whether
//! the last fetch succeeded, and offers the shuffle used by readings.
//! Loading is split into `begin_load` / `finish_load` so a caller can
//! render the loading state between the two.

use tracing::{debug, info, warn};

use super::LoadState;
use crate::api::CardSource;
use crate::cards::{CardRegistry, TarotCard};
use crate::core::error::Result;
use crate::core::rng::DeckRng;

/// Cards fetched from a `CardSource`, with tri-state load status.
///
/// ## Usage
///
/// ```
/// use tarot_stem::api::StaticSource;
/// use tarot_stem::cards::TarotCard;
/// use tarot_stem::core::DeckRng;
/// use tarot_stem::store::CardStore;
///
/// let source = StaticSource::new(vec![TarotCard::new("1", "I", "El Mago", "Ada Lovelace")]);
/// let mut store = CardStore::new(source, DeckRng::new(1));
///
/// store.mount();
/// assert!(store.is_success());
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug)]
pub struct CardStore<S> {
    source: S,
    registry: CardRegistry,
    state: LoadState,
    error: Option<String>,
    rng: DeckRng,
}

impl<S: CardSource> CardStore<S> {
    /// Create an idle store. Nothing is fetched until `mount` or `load`.
    #[must_use]
    pub fn new(source: S, rng: DeckRng) -> Self {
        Self {
            source,
            registry: CardRegistry::new(),
            state: LoadState::Idle,
            error: None,
            rng,
        }
    }

    /// Initial fetch. Does nothing if a fetch already happened.
    pub fn mount(&mut self) {
        if self.state == LoadState::Idle {
            self.load();
        }
    }

    /// Fetch the deck, replacing whatever is held.
    pub fn load(&mut self) {
        self.begin_load();
        let result = self.source.fetch_all();
        self.finish_load(result);
    }

    /// Re-fetch on user request.
    pub fn refresh_cards(&mut self) {
        debug!("refreshing cards");
        self.load();
    }

    /// Enter the loading state and clear the previous error.
    pub fn begin_load(&mut self) {
        self.state = LoadState::Loading;
        self.error = None;
    }

    /// Apply the outcome of a fetch.
    ///
    /// On failure the deck is emptied and a human-readable message kept.
    pub fn finish_load(&mut self, result: Result<Vec<TarotCard>>) {
        match result {
            Ok(cards) => {
                for card in cards.iter().filter(|c| !c.validate()) {
                    warn!(id = %card.id, missing = ?card.missing_fields(), "incomplete card");
                }
                self.registry = CardRegistry::from_cards(cards);
                self.state = LoadState::Success;
                info!(count = self.registry.len(), "cards loaded");
            }
            Err(err) => {
                warn!(error = %err, "loading cards failed");
                self.registry.clear();
                self.error = Some(err.list_message());
                self.state = LoadState::Error;
            }
        }
    }

    /// Fisher-Yates permutation of the held deck, in place.
    pub fn shuffle_for_reading(&mut self) -> &[TarotCard] {
        debug!(count = self.registry.len(), "shuffling deck for reading");
        self.registry.shuffle(&mut self.rng);
        self.registry.as_slice()
    }

    /// A shuffled copy, leaving the held order untouched.
    #[must_use]
    pub fn shuffled_copy(&mut self) -> Vec<TarotCard> {
        let mut cards = self.registry.as_slice().to_vec();
        self.rng.shuffle(&mut cards);
        cards
    }

    /// A uniformly random card, if any are loaded.
    pub fn random_card(&mut self) -> Option<&TarotCard> {
        self.rng.choose(self.registry.as_slice())
    }

    /// The card source, for one-off lookups.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the RNG shared with readings.
    pub fn rng_mut(&mut self) -> &mut DeckRng {
        &mut self.rng
    }
}

impl<S> CardStore<S> {
    /// Cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[TarotCard] {
        self.registry.as_slice()
    }

    /// Look up a loaded card.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&TarotCard> {
        self.registry.get(id)
    }

    /// Card at a display position.
    #[must_use]
    pub fn card_at(&self, index: usize) -> Option<&TarotCard> {
        self.registry.get_index(index)
    }

    /// Current load status.
    #[must_use]
    pub fn load_state(&self) -> LoadState {
        self.state
    }

    /// Message from the last failed fetch.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        self.state == LoadState::Error
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.state == LoadState::Success
    }

    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.registry.is_empty()
    }

    /// Number of loaded cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::StaticSource;
    use crate::core::error::TarotError;

    fn store() -> CardStore<StaticSource> {
        let cards = (0..10)
            .map(|i| TarotCard::new(i.to_string(), i.to_string(), format!("Arcane {i}"), format!("Goddess {i}")))
            .collect();
        CardStore::new(StaticSource::new(cards), DeckRng::new(42))
    }

    #[test]
    fn test_starts_idle() {
        let store = store();
        assert_eq!(store.load_state(), LoadState::Idle);
        assert!(!store.has_cards());
        assert!(store.error().is_none());
    }

    #[test]
    fn test_begin_load_clears_error() {
        let mut store = store();
        store.finish_load(Err(TarotError::Status { status: 503 }));
        assert!(store.has_error());

        store.begin_load();
        assert!(store.is_loading());
        assert!(store.error().is_none());
    }

    #[test]
    fn test_failure_empties_deck() {
        let mut store = store();
        store.mount();
        assert_eq!(store.len(), 10);

        store.finish_load(Err(TarotError::Network("down".into())));
        assert!(store.is_empty());
        assert_eq!(
            store.error(),
            Some("Could not load the tarot cards. Please try again later.")
        );
    }

    #[test]
    fn test_lookup_helpers() {
        let mut store = store();
        store.mount();

        assert_eq!(store.find_by_id("3").unwrap().arcane_name, "Arcane 3");
        assert_eq!(store.card_at(0).unwrap().id.as_str(), "0");
        assert!(store.find_by_id("nope").is_none());
        assert!(store.random_card().is_some());
    }

    #[test]
    fn test_shuffled_copy_leaves_order() {
        let mut store = store();
        store.mount();
        let before: Vec<_> = store.cards().iter().map(|c| c.id.clone()).collect();

        let copy = store.shuffled_copy();
        let after: Vec<_> = store.cards().iter().map(|c| c.id.clone()).collect();

        assert_eq!(before, after);
        assert_eq!(copy.len(), before.len());
    }
}
