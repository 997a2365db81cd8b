//! Card sources: the HTTP API client and an in-memory deck.

pub mod client;
pub mod source;

pub use client::TarotApiClient;
pub use source::{CardSource, StaticSource};
