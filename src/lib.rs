//! # tarot-stem
//!
//! Major arcana paired with pioneering women of science: browse the deck,
//! turn cards over, and draw three-card Past/Present/Future readings.
//!
//! ## Design Principles
//!
//! 1. **Source-Agnostic**: Cards come through the `CardSource` trait, backed
//!    by the HTTP API or by an in-memory deck. Nothing else touches the
//!    network.
//!
//! 2. **Explicit State**: Load status, card faces and reading phases are
//!    enums, never combinations of flags.
//!
//! 3. **Reproducible Shuffles**: Every shuffle goes through a seeded
//!    `DeckRng`, so a reading can be repeated from its seed.
//!
//! ## Modules
//!
//! - `core`: Errors, configuration, logging, RNG
//! - `cards`: Card records, faces and the ordered registry
//! - `api`: `CardSource` trait, HTTP client and static source
//! - `store`: Deck and single-card loaders with load status
//! - `reading`: Three-card selection state and reading flow
//! - `views`: Text rendering of cards, grids and pages
//! - `router`: Page routes
//! - `app`: Interactive application and its commands

pub mod api;
pub mod app;
pub mod cards;
pub mod core;
pub mod reading;
pub mod router;
pub mod store;
pub mod views;

// Re-export commonly used types
pub use crate::core::{ApiConfig, AppConfig, DeckRng, Result, TarotError};

pub use crate::cards::{CardFace, CardId, CardRegistry, ImageData, TarotCard};

pub use crate::api::{CardSource, StaticSource, TarotApiClient};

pub use crate::store::{CardDetail, CardStore, LoadState};

pub use crate::reading::{
    interpretation, Position, ReadingPhase, ReadingSession, ReadingState, SelectOutcome, SelectedCard,
};

pub use crate::router::Route;

pub use crate::views::{CardDetailView, CardGridView, CardSize, CardView, Layout, Navigation, ReadingView};

pub use crate::app::{App, Command, Flow};
