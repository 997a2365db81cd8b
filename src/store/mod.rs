//! Loaders that turn card-source calls into UI state.
//!
//! - `CardStore`: the whole deck, fetched on mount
//! - `CardDetail`: one card for the detail page
//! - `LoadState`: shared idle/loading/success/error status

pub mod cards;
pub mod detail;

use serde::{Deserialize, Serialize};

pub use cards::CardStore;
pub use detail::CardDetail;

/// Status of the most recent fetch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// Last request succeeded.
    Success,
    /// Last request failed; see the loader's error message.
    Error,
}
