//! Which side of a card is showing.

use serde::{Deserialize, Serialize};

/// The visible face of a card.
///
/// A single value replaces the `flipped`/`backside` flag pairs: every card
/// shows exactly one of these.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardFace {
    /// Face down, pattern only.
    Backside,
    /// Arcana number, name and artwork.
    #[default]
    Arcane,
    /// The paired scientist.
    Scientist,
}

impl CardFace {
    /// Turn the card over.
    ///
    /// Arcane and Scientist swap; a face-down card is revealed as Arcane.
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            CardFace::Backside => CardFace::Arcane,
            CardFace::Arcane => CardFace::Scientist,
            CardFace::Scientist => CardFace::Arcane,
        }
    }

    /// Whether any card content is visible.
    #[must_use]
    pub fn is_revealed(self) -> bool {
        self != CardFace::Backside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_cycle() {
        assert_eq!(CardFace::Backside.flip(), CardFace::Arcane);
        assert_eq!(CardFace::Arcane.flip(), CardFace::Scientist);
        assert_eq!(CardFace::Scientist.flip(), CardFace::Arcane);
    }

    #[test]
    fn test_default_is_arcane() {
        assert_eq!(CardFace::default(), CardFace::Arcane);
        assert!(CardFace::default().is_revealed());
        assert!(!CardFace::Backside.is_revealed());
    }
}
