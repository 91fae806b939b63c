//! Local UI chrome state (sidebar, theme, settings section).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`chat`,
//! `viewer`, `references`) so layout controls can evolve independently.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the sidebar, dark mode and settings navigation.
#[derive(Clone, Debug)]
pub struct UiState {
    pub sidebar_open: bool,
    pub dark_mode: bool,
    pub settings_section: SettingsSection,
}

impl Default for UiState {
    fn default() -> Self {
        Self { sidebar_open: true, dark_mode: false, settings_section: SettingsSection::Account }
    }
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }
}

/// Sections of the settings page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SettingsSection {
    #[default]
    Account,
    Appearance,
}

impl SettingsSection {
    pub const ALL: [Self; 2] = [Self::Account, Self::Appearance];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Account => "Account",
            Self::Appearance => "Appearance",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Account => "Update how your name appears in the workspace.",
            Self::Appearance => "Choose between the light and dark theme.",
        }
    }
}
