use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_english_with_closed_menu() {
    let state = UiState::default();
    assert_eq!(state.language, Language::En);
    assert!(!state.menu_open);
    assert!(!state.scrolled);
}

// =============================================================
// Language
// =============================================================

#[test]
fn toggle_language_round_trips() {
    let mut state = UiState::default();
    state.toggle_language();
    assert_eq!(state.language, Language::Ko);
    state.toggle_language();
    assert_eq!(state.language, Language::En);
}

// =============================================================
// Menu
// =============================================================

#[test]
fn toggle_menu_opens_and_closes() {
    let mut state = UiState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(!state.menu_open);
}

#[test]
fn close_menu_is_idempotent() {
    let mut state = UiState { menu_open: true, ..UiState::default() };
    state.close_menu();
    assert!(!state.menu_open);
    state.close_menu();
    assert!(!state.menu_open);
}

// =============================================================
// Scroll
// =============================================================

#[test]
fn scroll_offset_threshold_is_exclusive() {
    let mut state = UiState::default();
    assert!(!state.set_scroll_offset(SCROLLED_THRESHOLD_PX));
    assert!(!state.scrolled);
    assert!(state.set_scroll_offset(SCROLLED_THRESHOLD_PX + 1.0));
    assert!(state.scrolled);
    assert!(state.set_scroll_offset(0.0));
    assert!(!state.scrolled);
}

#[test]
fn scroll_offset_reports_no_change_within_same_band() {
    let mut state = UiState::default();
    assert!(state.set_scroll_offset(100.0));
    assert!(!state.set_scroll_offset(250.0));
    assert!(state.scrolled);
}
