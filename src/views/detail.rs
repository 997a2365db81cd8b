//! Full card description for the detail page.

use super::card::{CardSize, CardView};
use super::{join_columns, wrap};
use crate::cards::{CardFace, ImageData, TarotCard};

const TEXT_WIDTH: usize = 60;

/// Both halves of a card with descriptions and image credits.
#[derive(Clone, Copy, Debug)]
pub struct CardDetailView<'a> {
    card: &'a TarotCard,
}

impl<'a> CardDetailView<'a> {
    #[must_use]
    pub fn new(card: &'a TarotCard) -> Self {
        Self { card }
    }

    /// Render to a multi-line string.
    #[must_use]
    pub fn render(&self) -> String {
        let card = self.card;
        let mut out = Vec::new();

        out.push(format!("{} · {}", card.arcane_number, card.arcane_name));
        out.push(String::new());
        out.extend(join_columns(
            &[
                CardView::new(card).size(CardSize::Large).lines(),
                CardView::new(card)
                    .face(CardFace::Scientist)
                    .size(CardSize::Large)
                    .lines(),
            ],
            3,
        ));

        out.push(String::new());
        out.push("Meaning of the Arcana".to_string());
        out.extend(wrap(&card.arcane_description, TEXT_WIDTH));
        out.extend(credit_lines(&card.arcane_image));

        out.push(String::new());
        out.push(format!("The Contemporary Goddess: {}", card.goddess_name));
        out.extend(wrap(&card.goddess_description, TEXT_WIDTH));
        out.extend(credit_lines(&card.goddess_image));

        out.join("\n")
    }
}

fn credit_lines(image: &ImageData) -> Vec<String> {
    let mut lines = vec![format!("Image {}", image.credit())];
    if let Some(url) = &image.license_url {
        lines.push(format!("License: {url}"));
    }
    lines
}
