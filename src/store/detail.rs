//! Single-card loader for the detail page.

use tracing::warn;

use super::LoadState;
use crate::api::CardSource;
use crate::cards::{CardId, TarotCard};
use crate::core::error::TarotError;

/// Outcome of loading one card by id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardDetail {
    state: LoadState,
    card: Option<TarotCard>,
    error: Option<String>,
}

impl CardDetail {
    /// Fetch the card named by a route parameter.
    ///
    /// A missing or blank id fails immediately without touching the source.
    pub fn load<S: CardSource + ?Sized>(source: &S, id: Option<&str>) -> Self {
        let Some(id) = id.map(str::trim).filter(|id| !id.is_empty()) else {
            warn!("card detail requested without an id");
            return Self::failed(&TarotError::InvalidId);
        };

        match source.fetch_by_id(&CardId::new(id)) {
            Ok(card) => Self {
                state: LoadState::Success,
                card: Some(card),
                error: None,
            },
            Err(err) => Self::failed(&err),
        }
    }

    fn failed(err: &TarotError) -> Self {
        Self {
            state: LoadState::Error,
            card: None,
            error: Some(err.card_message()),
        }
    }

    /// Load status.
    #[must_use]
    pub fn load_state(&self) -> LoadState {
        self.state
    }

    /// The card, when loading succeeded.
    #[must_use]
    pub fn card(&self) -> Option<&TarotCard> {
        self.card.as_ref()
    }

    /// Human-readable failure message.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
