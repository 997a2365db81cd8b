//! The reading page: instructions, spread, three slots and results.

use super::card::{CardSize, CardView};
use super::grid::CardGridView;
use super::{join_columns, wrap, CardClick};
use crate::cards::CardFace;
use crate::reading::{interpretation, Position, ReadingPhase, ReadingState, READING_SIZE};

const INSTRUCTIONS: [&str; 4] = [
    "Focus on a question or an area of your life.",
    "Type `start` to shuffle the deck and lay out the spread.",
    "Pick three cards with `pick <n>`: Past, Present, then Future.",
    "Each card pairs a major arcana with a woman of science.",
];

/// Everything the reading page shows for one phase and state.
pub struct ReadingView<'a> {
    phase: ReadingPhase,
    state: &'a ReadingState,
    spread_limit: usize,
    on_card_click: Option<CardClick<'a>>,
}

impl<'a> ReadingView<'a> {
    #[must_use]
    pub fn new(phase: ReadingPhase, state: &'a ReadingState) -> Self {
        Self {
            phase,
            state,
            spread_limit: 15,
            on_card_click: None,
        }
    }

    /// Show at most this many face-down cards.
    #[must_use]
    pub fn spread_limit(mut self, limit: usize) -> Self {
        self.spread_limit = limit;
        self
    }

    #[must_use]
    pub fn on_card_click(mut self, handler: CardClick<'a>) -> Self {
        self.on_card_click = Some(handler);
        self
    }

    /// Status line for the selecting phase.
    #[must_use]
    pub fn status(&self) -> String {
        match self.state.current_position() {
            Some(position) => format!("Choose the card for: {}", position.label()),
            None => "Your reading is complete".to_string(),
        }
    }

    /// `k/3 cards selected` followed by a bar.
    #[must_use]
    pub fn progress(&self) -> String {
        let k = self.state.selected_cards().len();
        let bar: String = (0..READING_SIZE).map(|i| if i < k { '■' } else { '□' }).collect();
        format!("{k}/{READING_SIZE} cards selected  {bar}")
    }

    /// The face-down spread.
    #[must_use]
    pub fn spread(&self) -> CardGridView<'a> {
        let mut grid = CardGridView::new(self.state.available_cards())
            .default_face(CardFace::Backside)
            .max_cards(self.spread_limit)
            .columns(5)
            .title("Choose your cards");
        if let Some(handler) = self.on_card_click {
            grid = grid.on_card_click(handler);
        }
        grid
    }

    fn slots(&self) -> Vec<String> {
        let blocks: Vec<Vec<String>> = Position::ALL
            .iter()
            .map(|&position| match self.state.card_at(position) {
                Some(chosen) => CardView::new(&chosen.card)
                    .size(CardSize::Small)
                    .selected(true)
                    .position(position)
                    .lines(),
                None => empty_slot(position),
            })
            .collect();
        join_columns(&blocks, 2)
    }

    fn intro(&self) -> Vec<String> {
        let mut out = vec!["Three-card reading".to_string(), String::new()];
        for (i, step) in INSTRUCTIONS.iter().enumerate() {
            out.push(format!("{}. {step}", i + 1));
        }
        out.push(String::new());
        for position in Position::ALL {
            out.push(format!("{}: {}", position.label(), position.description()));
        }
        out
    }

    fn results(&self) -> Vec<String> {
        let mut out = vec!["✦ Your reading is complete ✦".to_string(), String::new()];
        for chosen in self.state.selected_cards() {
            out.push(format!(
                "{}: {} · {} ({})",
                chosen.position.label(),
                chosen.card.arcane_name,
                chosen.card.goddess_name,
                chosen.position.description(),
            ));
        }
        if let Some(text) = interpretation(self.state) {
            out.push(String::new());
            out.extend(wrap(&text, 72));
        }
        out.push(String::new());
        out.push("Type `reset` for a new reading or `undo` to change the last card.".to_string());
        out
    }

    #[must_use]
    pub fn render(&self) -> String {
        let mut out = Vec::new();
        match self.phase {
            ReadingPhase::Intro => out.extend(self.intro()),
            ReadingPhase::Dealing => {
                out.push("Shuffling the deck...".to_string());
                out.push(format!("{} cards are being laid out.", self.state.available_len()));
            }
            ReadingPhase::Selecting => {
                out.push(self.status());
                out.push(self.progress());
                out.push(String::new());
                out.extend(self.slots());
                out.push(String::new());
                out.push(self.spread().render());
            }
            ReadingPhase::Complete => {
                out.push(self.progress());
                out.push(String::new());
                out.extend(self.slots());
                out.push(String::new());
                out.extend(self.results());
            }
        }
        out.join("\n")
    }
}

fn empty_slot(position: Position) -> Vec<String> {
    let width = CardSize::Small.inner_width();
    let border = "┄".repeat(width);
    let mut lines = vec![format!("┌{border}┐")];
    for text in ["", "Waiting for", "card...", "", ""] {
        lines.push(format!("┆{}┆", super::fit(text, width)));
    }
    lines.push(format!("┆{}┆", super::fit(&format!("- {} -", position.label()), width)));
    lines.push(format!("└{border}┘"));
    lines
}
