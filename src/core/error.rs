//! Error taxonomy for fetching and decoding cards.
//!
//! Every failure is terminal for the action that caused it: nothing is
//! retried automatically. Views show [`TarotError::list_message`] or
//! [`TarotError::card_message`] with a retry hint instead of the technical
//! `Display` text.

use crate::cards::CardId;

/// Errors produced by card sources and loaders.
#[derive(Debug, thiserror::Error)]
pub enum TarotError {
    /// Transport failure (DNS, connect, timeout, TLS).
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx status other than a by-id 404.
    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    /// The API answered 404 for a specific card.
    #[error("card {id} not found")]
    CardNotFound { id: CardId },

    /// No usable card id was supplied.
    #[error("invalid card id")]
    InvalidId,

    /// Response body was not the expected JSON shape.
    #[error("malformed card data: {0}")]
    Decode(String),

    /// Reading a local cards file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP client could not be constructed.
    #[error("http client setup failed: {0}")]
    Client(String),
}

impl TarotError {
    /// Human-readable message for a failed list fetch.
    #[must_use]
    pub fn list_message(&self) -> String {
        match self {
            TarotError::InvalidId => "Invalid card id.".to_string(),
            _ => "Could not load the tarot cards. Please try again later.".to_string(),
        }
    }

    /// Human-readable message for a failed single-card fetch.
    #[must_use]
    pub fn card_message(&self) -> String {
        match self {
            TarotError::InvalidId => "Invalid card id.".to_string(),
            TarotError::CardNotFound { id } => {
                format!("Could not load the requested card (no card with id {id}).")
            }
            _ => "Could not load the requested card.".to_string(),
        }
    }
}

impl From<serde_json::Error> for TarotError {
    fn from(err: serde_json::Error) -> Self {
        TarotError::Decode(err.to_string())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TarotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = TarotError::Status { status: 500 };
        assert_eq!(err.to_string(), "unexpected HTTP status 500");

        let err = TarotError::CardNotFound { id: CardId::new("7") };
        assert_eq!(err.to_string(), "card 7 not found");
    }

    #[test]
    fn test_user_messages() {
        let err = TarotError::Network("connection refused".into());
        assert_eq!(
            err.list_message(),
            "Could not load the tarot cards. Please try again later."
        );
        assert_eq!(err.card_message(), "Could not load the requested card.");

        assert_eq!(TarotError::InvalidId.card_message(), "Invalid card id.");
    }

    #[test]
    fn test_from_json_error() {
        let err: TarotError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, TarotError::Decode(_)));
    }
}
