//! Reading selection and session integration tests.

use proptest::prelude::*;
use tarot_stem::core::DeckRng;
use tarot_stem::reading::{
    interpretation, Position, ReadingPhase, ReadingSession, ReadingState, SelectOutcome, READING_SIZE,
};
use tarot_stem::TarotCard;

fn deck(n: usize) -> Vec<TarotCard> {
    (0..n)
        .map(|i| {
            TarotCard::new(
                i.to_string(),
                i.to_string(),
                format!("Arcane {i}"),
                format!("Goddess {i}"),
            )
        })
        .collect()
}

// =============================================================================
// Selection Order
// =============================================================================

#[test]
fn test_three_distinct_selections_complete_reading() {
    let cards = deck(10);
    let mut state = ReadingState::new(cards.clone());

    assert_eq!(state.select(&cards[4]), SelectOutcome::Assigned(Position::Past));
    assert_eq!(state.select(&cards[7]), SelectOutcome::Assigned(Position::Present));
    assert_eq!(state.select(&cards[1]), SelectOutcome::Assigned(Position::Future));

    assert!(state.is_complete());
    assert_eq!(state.current_position(), None);
    assert_eq!(state.selected_cards().len(), READING_SIZE);
    assert_eq!(state.available_len(), 7);

    let positions: Vec<_> = state.selected_cards().iter().map(|s| s.position).collect();
    assert_eq!(positions, Position::ALL.to_vec());
}

#[test]
fn test_fourth_selection_is_noop() {
    let cards = deck(5);
    let mut state = ReadingState::new(cards.clone());
    for card in &cards[..3] {
        state.select(card);
    }
    let before = state.clone();

    assert_eq!(state.select(&cards[3]), SelectOutcome::NoPositionLeft);
    assert_eq!(state.select_by_id("4"), SelectOutcome::NoPositionLeft);
    assert_eq!(state, before);
}

#[test]
fn test_duplicate_selection_rejected() {
    let cards = deck(4);
    let mut state = ReadingState::new(cards.clone());
    state.select(&cards[0]);

    assert_eq!(state.select(&cards[0]), SelectOutcome::AlreadySelected);
    assert_eq!(state.select_by_id("0"), SelectOutcome::NotAvailable);
    assert_eq!(state.selected_cards().len(), 1);
}

#[test]
fn test_undo_rewinds_position() {
    let cards = deck(6);
    let mut state = ReadingState::new(cards.clone());
    state.select(&cards[2]);
    state.select(&cards[3]);

    let undone = state.undo().unwrap();
    assert_eq!(undone.card.id.as_str(), "3");
    assert_eq!(undone.position, Position::Present);
    assert_eq!(state.current_position(), Some(Position::Present));
    assert_eq!(state.available_cards().last().map(|c| c.id.as_str()), Some("3"));

    state.undo();
    assert!(state.undo().is_none());
    assert_eq!(state.available_len(), 6);
}

#[test]
fn test_undo_single_selection_restores_pool() {
    let cards = deck(3);
    let mut state = ReadingState::new(cards.clone());
    state.select(&cards[1]);
    state.undo();

    assert!(state.selected_cards().is_empty());
    assert_eq!(state.current_position(), Some(Position::Past));
    assert!(state.available_cards().any(|c| c.id == cards[1].id));
}

#[test]
fn test_interpretation_after_complete() {
    let cards = deck(3);
    let mut state = ReadingState::new(cards);
    assert!(interpretation(&state).is_none());
    for _ in 0..3 {
        state.select_at(0);
    }

    let text = interpretation(&state).unwrap();
    for selected in state.selected_cards() {
        assert!(text.contains(&selected.card.goddess_name));
    }
}

// =============================================================================
// Session Flow
// =============================================================================

#[test]
fn test_session_full_flow_with_undo_and_reset() {
    let mut session = ReadingSession::new(deck(12), DeckRng::new(7));
    assert!(!session.deal());
    assert!(!session.shuffle());

    session.start();
    session.deal();
    assert_eq!(session.phase(), ReadingPhase::Selecting);

    assert!(session.select_at(0).is_assigned());
    assert!(session.shuffle());
    assert!(session.select_at(3).is_assigned());
    assert!(session.select_at(5).is_assigned());
    assert_eq!(session.phase(), ReadingPhase::Complete);
    assert!(interpretation(session.state()).is_some());

    session.undo();
    assert_eq!(session.phase(), ReadingPhase::Selecting);
    assert!(interpretation(session.state()).is_none());

    session.reset();
    assert_eq!(session.phase(), ReadingPhase::Intro);
    assert_eq!(session.state().available_len(), 0);
    assert!(session.start());
    assert_eq!(session.state().available_len(), 12);
}

#[test]
fn test_same_seed_same_spread() {
    let mut a = ReadingSession::new(deck(22), DeckRng::new(99));
    let mut b = ReadingSession::new(deck(22), DeckRng::new(99));
    a.start();
    b.start();

    let ids = |s: &ReadingSession| -> Vec<String> {
        s.state().available_cards().map(|c| c.id.to_string()).collect()
    };
    assert_eq!(ids(&a), ids(&b));
}

#[test]
fn test_state_serializes_selection_and_pool() {
    let mut state = ReadingState::new(deck(4));
    state.select_at(1);
    let value = serde_json::to_value(&state).unwrap();

    let selected = value["selected"].as_array().unwrap();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0]["position"], "past");
    assert_eq!(selected[0]["card"]["id"], "1");
    assert_eq!(value["available"].as_array().unwrap().len(), 3);
}

// =============================================================================
// Invariants
// =============================================================================

#[derive(Clone, Debug)]
enum Op {
    Select(usize),
    SelectId(usize),
    Undo,
    Shuffle,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..30).prop_map(Op::Select),
        (0usize..30).prop_map(Op::SelectId),
        Just(Op::Undo),
        Just(Op::Shuffle),
    ]
}

proptest! {
    #[test]
    fn prop_state_stays_consistent(size in 0usize..25, ops in prop::collection::vec(op(), 0..40), seed in any::<u64>()) {
        let mut state = ReadingState::new(deck(size));
        let mut rng = DeckRng::new(seed);

        for op in ops {
            let before = state.selected_cards().len();
            match op {
                Op::Select(i) => {
                    let outcome = state.select_at(i);
                    if outcome.is_assigned() {
                        prop_assert_eq!(state.selected_cards().len(), before + 1);
                    } else {
                        prop_assert_eq!(state.selected_cards().len(), before);
                    }
                }
                Op::SelectId(i) => {
                    state.select_by_id(&i.to_string());
                }
                Op::Undo => {
                    state.undo();
                }
                Op::Shuffle => state.shuffle_pool(&mut rng),
            }

            prop_assert!(state.is_consistent());
            prop_assert!(state.selected_cards().len() <= READING_SIZE);
            prop_assert_eq!(state.selected_cards().len() + state.available_len(), size);
            prop_assert_eq!(state.is_complete(), state.selected_cards().len() == READING_SIZE);
        }
    }
}
