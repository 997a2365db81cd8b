//! Core building blocks: errors, configuration, logging, RNG.
//!
//! Nothing in here knows about cards beyond their id; the domain modules
//! build on these.

pub mod config;
pub mod error;
pub mod logging;
pub mod rng;

pub use config::{ApiConfig, AppConfig, DEFAULT_BASE_URL};
pub use error::{Result, TarotError};
pub use rng::DeckRng;
