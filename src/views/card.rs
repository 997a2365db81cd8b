//! A single card drawn as a text box.

use tracing::debug;

use super::{fit, CardClick};
use crate::cards::{CardFace, TarotCard};
use crate::reading::Position;

/// Card box width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl CardSize {
    /// Inner width in columns.
    #[must_use]
    pub const fn inner_width(self) -> usize {
        match self {
            CardSize::Small => 16,
            CardSize::Medium => 22,
            CardSize::Large => 30,
        }
    }
}

/// One card, rendered with whichever face is showing.
///
/// ## Example
///
/// ```
/// use tarot_stem::cards::{CardFace, TarotCard};
/// use tarot_stem::views::CardView;
///
/// let card = TarotCard::new("1", "I", "El Mago", "Ada Lovelace");
///
/// let front = CardView::new(&card).render();
/// assert!(front.contains("El Mago"));
///
/// let back = CardView::new(&card).face(CardFace::Scientist).render();
/// assert!(back.contains("Ada Lovelace"));
/// assert!(!back.contains("El Mago"));
/// ```
#[derive(Clone, Copy)]
pub struct CardView<'a> {
    card: &'a TarotCard,
    face: CardFace,
    size: CardSize,
    selected: bool,
    position: Option<Position>,
    on_click: Option<CardClick<'a>>,
}

impl<'a> CardView<'a> {
    /// Arcane face, medium size, not selected, not clickable.
    #[must_use]
    pub fn new(card: &'a TarotCard) -> Self {
        Self {
            card,
            face: CardFace::default(),
            size: CardSize::default(),
            selected: false,
            position: None,
            on_click: None,
        }
    }

    #[must_use]
    pub fn face(mut self, face: CardFace) -> Self {
        self.face = face;
        self
    }

    #[must_use]
    pub fn size(mut self, size: CardSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Label the card with its reading position.
    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Make the card clickable.
    #[must_use]
    pub fn on_click(mut self, handler: CardClick<'a>) -> Self {
        self.on_click = Some(handler);
        self
    }

    /// The card being shown.
    #[must_use]
    pub fn card(&self) -> &'a TarotCard {
        self.card
    }

    /// The face being shown.
    #[must_use]
    pub fn current_face(&self) -> CardFace {
        self.face
    }

    #[must_use]
    pub fn is_clickable(&self) -> bool {
        self.on_click.is_some()
    }

    /// Deliver a click to the handler. Returns `false` if not clickable.
    pub fn click(&self) -> bool {
        match self.on_click {
            Some(handler) => {
                debug!(id = %self.card.id, name = %self.card.arcane_name, "card clicked");
                handler(self.card);
                true
            }
            None => false,
        }
    }

    /// Text lines of the face, before framing.
    fn face_lines(&self) -> Vec<String> {
        let card = self.card;
        match self.face {
            CardFace::Backside => vec![
                String::new(),
                "*  *  *".to_string(),
                "TAROT STEM".to_string(),
                "*  *  *".to_string(),
                String::new(),
            ],
            CardFace::Arcane => vec![
                card.arcane_number.clone(),
                card.arcane_name.clone(),
                String::new(),
                format!("art {}", card.arcane_image.credit()),
                String::new(),
            ],
            CardFace::Scientist => vec![
                String::new(),
                card.goddess_name.clone(),
                String::new(),
                format!("portrait {}", card.goddess_image.credit()),
                String::new(),
            ],
        }
    }

    /// Framed lines, all the same width.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let width = self.size.inner_width();
        let (h, v, tl, tr, bl, br) = if self.selected {
            ('═', '║', '╔', '╗', '╚', '╝')
        } else {
            ('─', '│', '┌', '┐', '└', '┘')
        };
        let border = h.to_string().repeat(width);

        let mut lines = Vec::with_capacity(9);
        lines.push(format!("{tl}{border}{tr}"));
        for text in self.face_lines() {
            lines.push(format!("{v}{}{v}", fit(&text, width)));
        }
        if let Some(position) = self.position {
            lines.push(format!("{v}{}{v}", fit(&format!("- {} -", position.label()), width)));
        }
        lines.push(format!("{bl}{border}{br}"));
        lines
    }

    /// Render to a multi-line string.
    #[must_use]
    pub fn render(&self) -> String {
        self.lines().join("\n")
    }
}
