//! Section switcher for the settings page.

use leptos::prelude::*;

use crate::state::ui::{SettingsSection, UiState};

/// Vertical list of settings sections bound to `UiState::settings_section`.
#[component]
pub fn SettingsNav() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <nav class="settings-nav">
            {SettingsSection::ALL
                .into_iter()
                .map(|section| {
                    view! {
                        <button
                            class="settings-nav__item"
                            class:settings-nav__item--active=move || ui.with(|u| u.settings_section == section)
                            on:click=move |_| ui.update(|u| u.settings_section = section)
                        >
                            <span class="settings-nav__label">{section.label()}</span>
                            <span class="settings-nav__description">{section.description()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
