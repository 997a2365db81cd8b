//! Rendering and click tests for cards, grids and pages.

use std::cell::RefCell;

use rustc_hash::FxHashSet;
use tarot_stem::cards::{CardFace, CardId, ImageData, TarotCard};
use tarot_stem::reading::{ReadingPhase, ReadingState};
use tarot_stem::router::Route;
use tarot_stem::views::{CardDetailView, CardGridView, CardSize, CardView, ErrorBanner, Layout, Navigation, ReadingView};

fn mago() -> TarotCard {
    TarotCard::new("1", "I", "El Mago", "Ada Lovelace")
        .with_descriptions("Dominio de los elementos.", "Primera programadora de la historia.")
        .with_images(
            ImageData::new("mago.png", "Autor Arcano"),
            ImageData::new("ada.png", "Autor Diosa").with_license("CC BY", "https://license.com"),
        )
}

fn sacerdotisa() -> TarotCard {
    TarotCard::new("2", "II", "La Sacerdotisa", "Marie Curie")
        .with_descriptions("Sabiduría oculta.", "Premio Nobel de Física y Química.")
}

// =============================================================================
// Card Grid
// =============================================================================

#[test]
fn test_grid_renders_one_element_per_card() {
    let cards = vec![mago(), sacerdotisa()];
    let grid = CardGridView::new(&cards);

    assert_eq!(grid.card_views().len(), 2);
    let text = grid.render();
    assert!(text.contains("El Mago"));
    assert!(text.contains("La Sacerdotisa"));
    assert!(text.contains("[1]"));
    assert!(text.contains("[2]"));
}

#[test]
fn test_grid_click_passes_the_card() {
    let cards = vec![mago(), sacerdotisa()];
    let clicked = RefCell::new(Vec::new());
    let handler = |card: &TarotCard| clicked.borrow_mut().push(card.id.clone());

    let grid = CardGridView::new(&cards).on_card_click(&handler);
    assert!(grid.click(1));
    assert!(grid.card_views()[0].click());

    assert_eq!(*clicked.borrow(), vec![CardId::from("2"), CardId::from("1")]);
}

#[test]
fn test_grid_loading_renders_skeletons() {
    let cards = vec![mago()];
    let text = CardGridView::new(&cards).loading(true).skeleton_count(6).render();
    assert!(text.contains("Summoning the cards of destiny..."));
    assert!(!text.contains("El Mago"));
    assert_eq!(text.matches('┌').count(), 6);
    assert_eq!(text.matches('┘').count(), 6);

    let empty: Vec<TarotCard> = Vec::new();
    let text = CardGridView::new(&empty).loading(true).skeleton_count(4).render();
    assert_eq!(text.matches('┌').count(), 4);
}

#[test]
fn test_grid_flipped_card_shows_scientist() {
    let cards = vec![mago(), sacerdotisa()];
    let mut flipped = FxHashSet::default();
    flipped.insert(CardId::from("2"));

    let text = CardGridView::new(&cards).flipped(&flipped).render();
    assert!(text.contains("El Mago"));
    assert!(text.contains("Marie Curie"));
    assert!(!text.contains("La Sacerdotisa"));
}

// =============================================================================
// Single Card
// =============================================================================

#[test]
fn test_scientist_face() {
    let card = mago();
    let text = CardView::new(&card).face(CardFace::Scientist).size(CardSize::Large).render();
    assert!(text.contains("Ada Lovelace"));
    assert!(text.contains("portrait by Autor Diosa"));
    assert!(!text.contains("El Mago"));
}

#[test]
fn test_backside_hides_everything() {
    let card = mago();
    let text = CardView::new(&card).face(CardFace::Backside).render();
    assert!(!text.contains("El Mago"));
    assert!(!text.contains("Ada Lovelace"));
}

#[test]
fn test_detail_view() {
    let card = mago();
    let text = CardDetailView::new(&card).render();
    assert!(text.contains("Dominio de los elementos."));
    assert!(text.contains("Primera programadora de la historia."));
    assert!(text.contains("License: https://license.com"));
}

// =============================================================================
// Reading Page
// =============================================================================

#[test]
fn test_reading_view_progress() {
    let mut state = ReadingState::new(vec![mago(), sacerdotisa(), TarotCard::new("3", "III", "La Emperatriz", "Hedy Lamarr")]);
    state.select_by_id("2");

    let view = ReadingView::new(ReadingPhase::Selecting, &state);
    assert_eq!(view.status(), "Choose the card for: Present");
    assert!(view.progress().starts_with("1/3"));
    let text = view.render();
    assert!(text.contains("La Sacerdotisa"));
    assert!(text.contains("Waiting for"));
}

#[test]
fn test_reading_spread_click() {
    let state = ReadingState::new(vec![mago(), sacerdotisa()]);
    let clicked = RefCell::new(None);
    let handler = |card: &TarotCard| *clicked.borrow_mut() = Some(card.id.clone());

    let view = ReadingView::new(ReadingPhase::Selecting, &state).on_card_click(&handler);
    assert!(view.spread().click(0));
    assert_eq!(clicked.take(), Some(CardId::from("1")));
}

// =============================================================================
// Chrome
// =============================================================================

#[test]
fn test_navigation_and_layout() {
    assert!(Navigation::new(Route::Home).render().contains("[Home]"));

    let page = Layout::render(&Route::Reading, "content");
    assert!(page.contains("[Reading]"));
    assert!(page.contains("content"));
    assert!(page.ends_with("Tarot STEM: connecting ancestral wisdom with modern science"));
}

#[test]
fn test_error_banner_without_hint() {
    assert_eq!(ErrorBanner::new("Boom").render(), "! Boom");
}
