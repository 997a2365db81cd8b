//! The three slots of a reading.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::TarotCard;

/// A slot in the three-card spread. Filled strictly in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[serde(alias = "pasado")]
    Past,
    #[serde(alias = "presente")]
    Present,
    #[serde(alias = "futuro")]
    Future,
}

impl Position {
    /// Every position, in assignment order.
    pub const ALL: [Position; 3] = [Position::Past, Position::Present, Position::Future];

    /// Position filled by the `index`-th selection (0-based).
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Position::Past => 0,
            Position::Present => 1,
            Position::Future => 2,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Position::Past => "Past",
            Position::Present => "Present",
            Position::Future => "Future",
        }
    }

    /// What the slot stands for.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Position::Past => "The events that brought you here",
            Position::Present => "Your current situation",
            Position::Future => "The possibilities ahead of you",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A card placed in a reading slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedCard {
    pub card: TarotCard,
    pub position: Position,
}
