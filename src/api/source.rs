//! Card source trait and the in-memory implementation.
//!
//! Everything that needs cards goes through `CardSource`, so loaders and
//! the application shell never care whether the deck came from HTTP or
//! from a local JSON file.

use std::path::Path;

use tracing::debug;

use crate::cards::{CardId, TarotCard};
use crate::core::error::{Result, TarotError};

/// Where cards come from.
///
/// ## Implementation Notes
///
/// - `fetch_all`: the whole deck in source order
/// - `fetch_by_id`: `InvalidId` for unusable ids, `CardNotFound` when the
///   id is well-formed but unknown
/// - One best-effort attempt per call; no retries or caching
pub trait CardSource {
    /// Fetch every card.
    fn fetch_all(&self) -> Result<Vec<TarotCard>>;

    /// Fetch a single card.
    fn fetch_by_id(&self, id: &CardId) -> Result<TarotCard>;
}

impl<S: CardSource + ?Sized> CardSource for &S {
    fn fetch_all(&self) -> Result<Vec<TarotCard>> {
        (**self).fetch_all()
    }

    fn fetch_by_id(&self, id: &CardId) -> Result<TarotCard> {
        (**self).fetch_by_id(id)
    }
}

impl<S: CardSource + ?Sized> CardSource for Box<S> {
    fn fetch_all(&self) -> Result<Vec<TarotCard>> {
        (**self).fetch_all()
    }

    fn fetch_by_id(&self, id: &CardId) -> Result<TarotCard> {
        (**self).fetch_by_id(id)
    }
}

/// A fixed deck held in memory.
///
/// Backs offline mode (`--cards-file`) and stands in for the API in tests.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    cards: Vec<TarotCard>,
}

impl StaticSource {
    /// Wrap a list of cards.
    #[must_use]
    pub fn new(cards: Vec<TarotCard>) -> Self {
        Self { cards }
    }

    /// Parse a JSON array in the API's format.
    pub fn from_json(json: &str) -> Result<Self> {
        let cards: Vec<TarotCard> = serde_json::from_str(json)?;
        Ok(Self::new(cards))
    }

    /// Read and parse a JSON file in the API's format.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading cards file");
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl CardSource for StaticSource {
    fn fetch_all(&self) -> Result<Vec<TarotCard>> {
        Ok(self.cards.clone())
    }

    fn fetch_by_id(&self, id: &CardId) -> Result<TarotCard> {
        if !id.is_valid() {
            return Err(TarotError::InvalidId);
        }
        self.cards
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or_else(|| TarotError::CardNotFound { id: id.clone() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> StaticSource {
        StaticSource::new(vec![
            TarotCard::new("1", "I", "El Mago", "Ada Lovelace"),
            TarotCard::new("2", "II", "La Sacerdotisa", "Marie Curie"),
        ])
    }

    #[test]
    fn test_fetch_all() {
        let cards = deck().fetch_all().unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].goddess_name, "Marie Curie");
    }

    #[test]
    fn test_fetch_by_id() {
        let source = deck();
        assert_eq!(source.fetch_by_id(&CardId::new("2")).unwrap().arcane_name, "La Sacerdotisa");

        let err = source.fetch_by_id(&CardId::new("9")).unwrap_err();
        assert!(matches!(err, TarotError::CardNotFound { .. }));

        let err = source.fetch_by_id(&CardId::new("")).unwrap_err();
        assert!(matches!(err, TarotError::InvalidId));
    }

    #[test]
    fn test_from_json() {
        let source = StaticSource::from_json(
            r#"[{"id": "5", "arcaneNumber": "V", "arcaneName": "El Papa", "goddessName": "Rosalind Franklin"}]"#,
        )
        .unwrap();
        assert_eq!(source.len(), 1);

        assert!(matches!(StaticSource::from_json("{}"), Err(TarotError::Decode(_))));
    }

    #[test]
    fn test_from_missing_file() {
        let err = StaticSource::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, TarotError::Io(_)));
    }

    #[test]
    fn test_reference_impl() {
        let source = deck();
        let by_ref: &dyn CardSource = &source;
        assert_eq!(by_ref.fetch_all().unwrap().len(), 2);
    }
}
