use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn ui_state_default_drawer_open() {
    let state = UiState::default();
    assert!(state.drawer_open);
}

#[test]
fn toggle_drawer_flips_visibility() {
    let mut state = UiState::default();
    state.toggle_drawer();
    assert!(!state.drawer_open);
    state.toggle_drawer();
    assert!(state.drawer_open);
}
