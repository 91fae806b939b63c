use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_sidebar_open() {
    let state = UiState::default();
    assert!(state.sidebar_open);
}

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn ui_state_default_settings_section_is_account() {
    let state = UiState::default();
    assert_eq!(state.settings_section, SettingsSection::Account);
}

#[test]
fn toggle_sidebar_flips_state() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    assert!(!state.sidebar_open);
    state.toggle_sidebar();
    assert!(state.sidebar_open);
}

// =============================================================
// SettingsSection
// =============================================================

#[test]
fn settings_section_default_is_account() {
    assert_eq!(SettingsSection::default(), SettingsSection::Account);
}

#[test]
fn settings_sections_have_distinct_labels() {
    assert_eq!(SettingsSection::ALL.map(SettingsSection::label), ["Account", "Appearance"]);
    for section in SettingsSection::ALL {
        assert!(!section.description().is_empty());
    }
}
