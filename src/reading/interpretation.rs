//! Narrative summary of a finished reading.

use super::position::Position;
use super::state::ReadingState;

/// Summary text naming each slot's scientist and arcana.
///
/// `None` until all three positions are filled.
#[must_use]
pub fn interpretation(state: &ReadingState) -> Option<String> {
    if !state.is_complete() {
        return None;
    }
    let past = &state.card_at(Position::Past)?.card;
    let present = &state.card_at(Position::Present)?.card;
    let future = &state.card_at(Position::Future)?.card;

    Some(format!(
        "Your reading reveals a journey through scientific discovery. \
         In your past, the wisdom of {} with \"{}\" laid the foundations of your understanding. \
         In the present, {} guides you with \"{}\", showing you the power of this moment. \
         Your future is lit by the inspiration of {} and \"{}\", promising new discoveries and growth.",
        past.goddess_name,
        past.arcane_name,
        present.goddess_name,
        present.arcane_name,
        future.goddess_name,
        future.arcane_name,
    ))
}
