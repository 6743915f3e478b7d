//! Application State Tests
//!
//! Exercises the card store, selection set, pagination cursor, and bulk
//! preview snapshot through the public crate API.

use kampanya_studio::models::{seed_cards, CampaignCard, CardGradient, CardIcon};
use kampanya_studio::services::app_state::{AppState, EditorMode, EditorSession, CARDS_PER_PAGE};
use kampanya_studio::utils::formatting::{format_amount, format_price};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn numbered_cards(n: usize) -> Vec<CampaignCard> {
    (0..n)
        .map(|i| CampaignCard {
            title: format!("Kampanya {i}"),
            ..CampaignCard::draft()
        })
        .collect()
}

// ============================================================================
// Pagination
// ============================================================================

#[wasm_bindgen_test(unsupported = test)]
fn test_cards_per_page_constant() {
    assert_eq!(CARDS_PER_PAGE, 6);
}

#[wasm_bindgen_test(unsupported = test)]
fn test_empty_store_still_has_one_page() {
    let state = AppState::new(Vec::new());
    assert_eq!(state.total_pages(), 1);
    assert!(state.page_cards().is_empty());
    assert!(state.on_first_page());
    assert!(state.on_last_page());
}

#[wasm_bindgen_test(unsupported = test)]
fn test_pagination_windows() {
    let mut state = AppState::new(numbered_cards(7));
    assert_eq!(state.total_pages(), 2);
    assert_eq!(state.page_cards().len(), 6);
    assert_eq!(state.page_cards()[0].title, "Kampanya 0");

    state.next_page();
    assert_eq!(state.page_cards().len(), 1);
    assert_eq!(state.page_cards()[0].title, "Kampanya 6");

    // Past-the-end navigation is a no-op.
    state.next_page();
    assert_eq!(state.current_page(), 1);
}

#[wasm_bindgen_test(unsupported = test)]
fn test_go_to_page_is_clamped() {
    let mut state = AppState::new(numbered_cards(13));
    state.go_to_page(99);
    assert_eq!(state.current_page(), 2);
}

// ============================================================================
// Editor commit paths
// ============================================================================

#[wasm_bindgen_test(unsupported = test)]
fn test_create_session_uses_draft_seed() {
    let session = EditorSession::create();
    assert_eq!(session.mode, EditorMode::Create);
    assert!(session.seed.title.is_empty());
    assert_eq!(session.seed.features, vec![String::new()]);
}

#[wasm_bindgen_test(unsupported = test)]
fn test_update_session_targets_original_id() {
    let cards = seed_cards();
    let session = EditorSession::update(cards[0].clone());
    assert_eq!(session.mode, EditorMode::Update(cards[0].id));
}

#[wasm_bindgen_test(unsupported = test)]
fn test_save_existing_card_keeps_position() {
    let mut state = AppState::new(seed_cards());
    let target = state.cards[1].clone();
    let mut staged = target.clone();
    staged.description = "Yeni açıklama".to_string();
    staged.background = CardGradient::Red;
    staged.icon = CardIcon::Heart;

    state.commit(EditorMode::Update(target.id), staged);

    assert_eq!(state.cards.len(), 3);
    assert_eq!(state.cards[1].id, target.id);
    assert_eq!(state.cards[1].description, "Yeni açıklama");
    assert_eq!(state.cards[1].background, CardGradient::Red);
}

#[wasm_bindgen_test(unsupported = test)]
fn test_save_new_card_appends() {
    let mut state = AppState::new(seed_cards());
    let staged = CampaignCard {
        title: "Hafta Sonu Paketi".to_string(),
        price: 1250.0,
        ..CampaignCard::draft()
    };
    state.commit(EditorMode::Create, staged);
    assert_eq!(state.cards.len(), 4);
    assert_eq!(state.cards[3].title, "Hafta Sonu Paketi");
}

#[wasm_bindgen_test(unsupported = test)]
fn test_feature_removal_preserves_order() {
    let mut card = CampaignCard::draft();
    card.features = vec!["a".into(), "b".into(), "c".into(), "d".into()];
    card.features.remove(1);
    assert_eq!(card.features, vec!["a", "c", "d"]);
}

// ============================================================================
// Selection and preview
// ============================================================================

#[wasm_bindgen_test(unsupported = test)]
fn test_selection_toggle_round_trip() {
    let mut state = AppState::new(seed_cards());
    let id = state.cards[0].id;
    state.toggle_selection(id);
    state.toggle_selection(id);
    assert!(state.selection.is_empty());
}

#[wasm_bindgen_test(unsupported = test)]
fn test_preview_lifecycle() {
    let mut state = AppState::new(seed_cards());
    state.toggle_selection(state.cards[1].id);
    state.toggle_selection(state.cards[2].id);

    state.open_preview();
    assert_eq!(state.preview.len(), 2);

    state.close_preview();
    assert!(state.preview.is_empty());
    assert!(state.selection.is_empty());

    // No selection, no preview.
    state.open_preview();
    assert!(!state.preview_open());
}

// ============================================================================
// Currency formatting
// ============================================================================

#[wasm_bindgen_test(unsupported = test)]
fn test_tr_locale_grouping() {
    assert_eq!(format_amount(3500.0), "3.500");
    assert_eq!(format_amount(1234567.89), "1.234.567,89");
}

#[wasm_bindgen_test(unsupported = test)]
fn test_price_label() {
    assert_eq!(format_price(5000.0), "5.000 TL");
}
