//! Guided reading flow.
//!
//! ```text
//! Intro ──start──▶ Dealing ──deal──▶ Selecting ──3rd pick──▶ Complete
//!   ▲                                   ▲                       │
//!   └──────────── reset (any) ──────────┴───────── undo ────────┘
//! ```
//!
//! Actions issued in the wrong phase are ignored.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::position::SelectedCard;
use super::state::{ReadingState, SelectOutcome};
use crate::cards::TarotCard;
use crate::core::rng::DeckRng;

/// Where the reading flow is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingPhase {
    /// Instructions are shown; no cards dealt.
    #[default]
    Intro,
    /// The deck has been shuffled into a face-down spread.
    Dealing,
    /// Waiting for the user to pick cards.
    Selecting,
    /// Three cards chosen; results are shown.
    Complete,
}

/// A reading in progress over a fixed deck.
#[derive(Clone, Debug)]
pub struct ReadingSession {
    phase: ReadingPhase,
    deck: Vec<TarotCard>,
    state: ReadingState,
    rng: DeckRng,
}

impl ReadingSession {
    /// Create a session at the intro, nothing dealt.
    #[must_use]
    pub fn new(deck: Vec<TarotCard>, rng: DeckRng) -> Self {
        Self {
            phase: ReadingPhase::Intro,
            deck,
            state: ReadingState::default(),
            rng,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> ReadingPhase {
        self.phase
    }

    /// Current selection state.
    #[must_use]
    pub fn state(&self) -> &ReadingState {
        &self.state
    }

    /// Cheap copy of the selection state.
    #[must_use]
    pub fn snapshot(&self) -> ReadingState {
        self.state.clone()
    }

    /// Number of cards the session deals from.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Leave the intro: shuffle the deck into the pool.
    pub fn start(&mut self) -> bool {
        if self.phase != ReadingPhase::Intro {
            return false;
        }
        self.state.reset(&self.deck, &mut self.rng);
        self.phase = ReadingPhase::Dealing;
        info!(cards = self.deck.len(), seed = self.rng.seed(), "reading started");
        true
    }

    /// Finish dealing and accept selections.
    pub fn deal(&mut self) -> bool {
        if self.phase != ReadingPhase::Dealing {
            return false;
        }
        self.phase = ReadingPhase::Selecting;
        true
    }

    /// Pick the pool card at a display index.
    pub fn select_at(&mut self, index: usize) -> SelectOutcome {
        if self.phase != ReadingPhase::Selecting {
            return self.out_of_phase();
        }
        let outcome = self.state.select_at(index);
        self.after_select(outcome)
    }

    /// Pick a pool card by id.
    pub fn select_by_id(&mut self, id: &str) -> SelectOutcome {
        if self.phase != ReadingPhase::Selecting {
            return self.out_of_phase();
        }
        let outcome = self.state.select_by_id(id);
        self.after_select(outcome)
    }

    /// Start straight away with `card` in the Past position.
    ///
    /// Used when a reading is launched from a card's detail page. From the
    /// intro this skips the instructions; while selecting it behaves like a
    /// normal pick.
    pub fn preselect(&mut self, card: &TarotCard) -> SelectOutcome {
        if self.phase == ReadingPhase::Intro {
            self.start();
            self.deal();
        }
        if self.phase != ReadingPhase::Selecting {
            return self.out_of_phase();
        }
        let outcome = self.state.select(card);
        self.after_select(outcome)
    }

    /// Take back the last pick.
    pub fn undo(&mut self) -> Option<SelectedCard> {
        if !matches!(self.phase, ReadingPhase::Selecting | ReadingPhase::Complete) {
            return None;
        }
        let undone = self.state.undo()?;
        self.phase = ReadingPhase::Selecting;
        Some(undone)
    }

    /// Reshuffle the remaining pool without touching selections.
    pub fn shuffle(&mut self) -> bool {
        if self.phase != ReadingPhase::Selecting {
            return false;
        }
        self.state.shuffle_pool(&mut self.rng);
        true
    }

    /// Throw everything away and go back to the intro with a reshuffled deck.
    pub fn reset(&mut self) {
        self.rng.shuffle(&mut self.deck);
        self.state = ReadingState::default();
        self.phase = ReadingPhase::Intro;
        debug!("reading reset");
    }

    /// Swap in a freshly loaded deck and restart.
    pub fn replace_deck(&mut self, deck: Vec<TarotCard>) {
        self.deck = deck;
        self.reset();
    }

    fn after_select(&mut self, outcome: SelectOutcome) -> SelectOutcome {
        if outcome.is_assigned() && self.state.is_complete() {
            self.phase = ReadingPhase::Complete;
            info!("reading complete");
        }
        outcome
    }

    fn out_of_phase(&self) -> SelectOutcome {
        if self.phase == ReadingPhase::Complete {
            SelectOutcome::NoPositionLeft
        } else {
            SelectOutcome::OutOfPhase
        }
    }
}
