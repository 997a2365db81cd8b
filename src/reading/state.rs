//! Selection state of a three-card reading.
//!
//! A `ReadingState` splits the deck into two disjoint piles:
//! - `selected`: at most three cards, each tagged with its position
//! - `available`: the remaining pool the user picks from
//!
//! Positions are handed out strictly in `Past → Present → Future` order,
//! so the position of a selection is implied by how many came before it.

use im::Vector;
use serde::Serialize;
use smallvec::SmallVec;
use tracing::debug;

use super::position::{Position, SelectedCard};
use crate::cards::TarotCard;
use crate::core::rng::DeckRng;

/// Number of slots in a reading.
pub const READING_SIZE: usize = Position::ALL.len();

/// What a selection attempt did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The card now fills this position.
    Assigned(Position),
    /// All three positions are filled; nothing changed.
    NoPositionLeft,
    /// The card is already in the reading; nothing changed.
    AlreadySelected,
    /// The id is not in the available pool; nothing changed.
    NotAvailable,
    /// The reading is not in its selecting phase; nothing changed.
    OutOfPhase,
}

impl SelectOutcome {
    /// Whether the state changed.
    #[must_use]
    pub fn is_assigned(self) -> bool {
        matches!(self, SelectOutcome::Assigned(_))
    }
}

/// Selected cards plus the remaining pool.
///
/// The pool is an `im::Vector` so snapshots handed to views clone in O(1).
/// Serializes for inspection only; a state is only built through
/// [`ReadingState::new`] and the selection methods.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ReadingState {
    selected: SmallVec<[SelectedCard; READING_SIZE]>,
    available: Vector<TarotCard>,
}

impl ReadingState {
    /// Start a reading with the given pool, in the given order.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = TarotCard>) -> Self {
        Self {
            selected: SmallVec::new(),
            available: cards.into_iter().collect(),
        }
    }

    /// Selections in the order they were made.
    #[must_use]
    pub fn selected_cards(&self) -> &[SelectedCard] {
        &self.selected
    }

    /// The remaining pool, in display order.
    pub fn available_cards(&self) -> impl Iterator<Item = &TarotCard> {
        self.available.iter()
    }

    /// Pool card at a display index.
    #[must_use]
    pub fn available_at(&self, index: usize) -> Option<&TarotCard> {
        self.available.get(index)
    }

    /// Size of the remaining pool.
    #[must_use]
    pub fn available_len(&self) -> usize {
        self.available.len()
    }

    /// Next position to fill, or `None` once complete.
    #[must_use]
    pub fn current_position(&self) -> Option<Position> {
        Position::from_index(self.selected.len())
    }

    /// All three positions are filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.selected.len() == READING_SIZE
    }

    /// The selection occupying a position.
    #[must_use]
    pub fn card_at(&self, position: Position) -> Option<&SelectedCard> {
        self.selected.iter().find(|s| s.position == position)
    }

    /// Place a card in the next free position.
    ///
    /// The card leaves the pool if it was there. Cards from outside the pool
    /// (a card preselected on the detail page) are accepted as well.
    pub fn select(&mut self, card: &TarotCard) -> SelectOutcome {
        let Some(position) = self.current_position() else {
            debug!(id = %card.id, "no position left, selection ignored");
            return SelectOutcome::NoPositionLeft;
        };
        if self.selected.iter().any(|s| s.card.id == card.id) {
            return SelectOutcome::AlreadySelected;
        }

        if let Some(index) = self.available.iter().position(|c| c.id == card.id) {
            self.available.remove(index);
        }
        self.selected.push(SelectedCard {
            card: card.clone(),
            position,
        });

        debug!(id = %card.id, %position, "card selected");
        SelectOutcome::Assigned(position)
    }

    /// Select a pool card by id.
    pub fn select_by_id(&mut self, id: &str) -> SelectOutcome {
        if self.is_complete() {
            return SelectOutcome::NoPositionLeft;
        }
        match self.available.iter().find(|c| c.id.as_str() == id).cloned() {
            Some(card) => self.select(&card),
            None => SelectOutcome::NotAvailable,
        }
    }

    /// Select the pool card at a display index.
    pub fn select_at(&mut self, index: usize) -> SelectOutcome {
        if self.is_complete() {
            return SelectOutcome::NoPositionLeft;
        }
        match self.available.get(index).cloned() {
            Some(card) => self.select(&card),
            None => SelectOutcome::NotAvailable,
        }
    }

    /// Take back the most recent selection.
    ///
    /// Its card returns to the end of the pool and its position becomes
    /// current again.
    pub fn undo(&mut self) -> Option<SelectedCard> {
        let last = self.selected.pop()?;
        self.available.push_back(last.card.clone());
        debug!(id = %last.card.id, position = %last.position, "selection undone");
        Some(last)
    }

    /// Reshuffle the remaining pool, keeping selections.
    pub fn shuffle_pool(&mut self, rng: &mut DeckRng) {
        let mut pool: Vec<TarotCard> = self.available.iter().cloned().collect();
        rng.shuffle(&mut pool);
        self.available = pool.into_iter().collect();
    }

    /// Drop every selection and refill the pool from `cards`, shuffled.
    pub fn reset(&mut self, cards: &[TarotCard], rng: &mut DeckRng) {
        let mut pool = cards.to_vec();
        rng.shuffle(&mut pool);
        self.selected.clear();
        self.available = pool.into_iter().collect();
    }

    /// Check the ordering and disjointness invariants.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let ordered = self
            .selected
            .iter()
            .enumerate()
            .all(|(i, s)| Position::from_index(i) == Some(s.position));
        let disjoint = self
            .selected
            .iter()
            .all(|s| !self.available.iter().any(|c| c.id == s.card.id));
        ordered && disjoint && self.selected.len() <= READING_SIZE
    }
}
