//! A grid of cards with loading and empty states.

use rustc_hash::FxHashSet;
use tracing::debug;

use super::card::{CardSize, CardView};
use super::{fit, join_columns, CardClick};
use crate::cards::{CardFace, CardId, TarotCard};

const LOADING_TEXT: &str = "Summoning the cards of destiny...";
const DEFAULT_EMPTY: &str = "No cards available right now.";
const EMPTY_HINT: &str = "The cards may be resting. Try reloading.";

/// A set of cards laid out in rows.
///
/// Each card shows `default_face` unless its id is in the flipped set, in
/// which case it shows the face after flipping.
pub struct CardGridView<'a> {
    cards: Vec<&'a TarotCard>,
    flipped: Option<&'a FxHashSet<CardId>>,
    selected: Option<&'a FxHashSet<CardId>>,
    default_face: CardFace,
    size: CardSize,
    columns: usize,
    max_cards: Option<usize>,
    title: Option<String>,
    subtitle: Option<String>,
    loading: bool,
    skeleton_count: usize,
    empty_message: String,
    on_card_click: Option<CardClick<'a>>,
}

impl<'a> CardGridView<'a> {
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = &'a TarotCard>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            flipped: None,
            selected: None,
            default_face: CardFace::Arcane,
            size: CardSize::Small,
            columns: 3,
            max_cards: None,
            title: None,
            subtitle: None,
            loading: false,
            skeleton_count: 6,
            empty_message: DEFAULT_EMPTY.to_string(),
            on_card_click: None,
        }
    }

    /// Ids of cards turned over from their default face.
    #[must_use]
    pub fn flipped(mut self, flipped: &'a FxHashSet<CardId>) -> Self {
        self.flipped = Some(flipped);
        self
    }

    /// Ids of cards drawn highlighted.
    #[must_use]
    pub fn selected(mut self, selected: &'a FxHashSet<CardId>) -> Self {
        self.selected = Some(selected);
        self
    }

    #[must_use]
    pub fn default_face(mut self, face: CardFace) -> Self {
        self.default_face = face;
        self
    }

    #[must_use]
    pub fn size(mut self, size: CardSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// Show at most `max` cards.
    #[must_use]
    pub fn max_cards(mut self, max: usize) -> Self {
        self.max_cards = Some(max);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Render placeholders instead of cards.
    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    #[must_use]
    pub fn skeleton_count(mut self, count: usize) -> Self {
        self.skeleton_count = count;
        self
    }

    #[must_use]
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    #[must_use]
    pub fn on_card_click(mut self, handler: CardClick<'a>) -> Self {
        self.on_card_click = Some(handler);
        self
    }

    /// Cards that will be drawn, after the `max_cards` cap.
    #[must_use]
    pub fn display_cards(&self) -> &[&'a TarotCard] {
        let n = self.max_cards.map_or(self.cards.len(), |m| m.min(self.cards.len()));
        &self.cards[..n]
    }

    fn face_for(&self, card: &TarotCard) -> CardFace {
        let flipped = self.flipped.is_some_and(|set| set.contains(&card.id));
        if flipped {
            self.default_face.flip()
        } else {
            self.default_face
        }
    }

    /// One view per displayed card.
    #[must_use]
    pub fn card_views(&self) -> Vec<CardView<'a>> {
        self.display_cards()
            .iter()
            .map(|&card| {
                let selected = self.selected.is_some_and(|set| set.contains(&card.id));
                let mut view = CardView::new(card)
                    .face(self.face_for(card))
                    .size(self.size)
                    .selected(selected);
                if let Some(handler) = self.on_card_click {
                    view = view.on_click(handler);
                }
                view
            })
            .collect()
    }

    /// Click the card at a display index. Returns `false` if there is no
    /// such card or the grid is not clickable.
    pub fn click(&self, index: usize) -> bool {
        match self.card_views().get(index) {
            Some(view) => view.click(),
            None => {
                debug!(index, "click outside grid ignored");
                false
            }
        }
    }

    fn header(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(title.clone());
        }
        if let Some(subtitle) = &self.subtitle {
            lines.push(subtitle.clone());
        }
        lines
    }

    fn info_line(&self) -> String {
        let shown = self.display_cards().len();
        let mut parts = vec![if shown == 1 {
            "1 card".to_string()
        } else {
            format!("{shown} cards")
        }];
        if shown < self.cards.len() {
            parts.push(format!("of {} available", self.cards.len()));
        }
        if let Some(selected) = self.selected {
            let count = self
                .display_cards()
                .iter()
                .filter(|c| selected.contains(&c.id))
                .count();
            if count > 0 {
                parts.push(format!("{count} selected"));
            }
        }
        parts.join(" · ")
    }

    fn skeleton(&self) -> Vec<String> {
        let width = self.size.inner_width();
        let border = "─".repeat(width);
        let mut lines = vec![format!("┌{border}┐")];
        for _ in 0..5 {
            lines.push(format!("│{}│", fit("░".repeat(width / 2).as_str(), width)));
        }
        lines.push(format!("└{border}┘"));
        lines
    }

    fn rows(&self, blocks: Vec<Vec<String>>) -> Vec<String> {
        let mut out = Vec::new();
        let mut blocks = blocks.into_iter().peekable();
        while blocks.peek().is_some() {
            let row: Vec<Vec<String>> = blocks.by_ref().take(self.columns).collect();
            out.extend(join_columns(&row, 2));
        }
        out
    }

    /// Render to a multi-line string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = self.header();

        if self.loading {
            out.push(LOADING_TEXT.to_string());
            let skeletons = (0..self.skeleton_count).map(|_| self.skeleton()).collect();
            out.extend(self.rows(skeletons));
            return out.join("\n");
        }

        if self.cards.is_empty() {
            out.push(self.empty_message.clone());
            out.push(EMPTY_HINT.to_string());
            return out.join("\n");
        }

        let blocks = self
            .card_views()
            .iter()
            .enumerate()
            .map(|(i, view)| {
                let mut lines = view.lines();
                lines.push(fit(&format!("[{}]", i + 1), self.size.inner_width() + 2));
                lines
            })
            .collect();
        out.extend(self.rows(blocks));
        out.push(self.info_line());
        out.join("\n")
    }
}
