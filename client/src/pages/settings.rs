//! Account settings page with Account and Appearance sections.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use crate::components::app_layout::AppLayout;
use crate::components::settings_nav::SettingsNav;
use crate::state::auth::AuthState;
use crate::state::ui::{SettingsSection, UiState};
use crate::util::dark_mode;

pub(crate) const MAX_DISPLAY_NAME_CHARS: usize = 80;

#[cfg(feature = "hydrate")]
const SAVED_NOTICE_MS: u32 = 3000;

/// Trim and validate a display name before sending it.
pub(crate) fn validate_display_name(raw: &str) -> Result<String, &'static str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err("Display name cannot be empty.");
    }
    if name.chars().count() > MAX_DISPLAY_NAME_CHARS {
        return Err("Display name must be 80 characters or fewer.");
    }
    Ok(name.to_owned())
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <AppLayout>
            <div class="settings-page">
                <header class="page-header">
                    <h1>"Settings"</h1>
                </header>
                <div class="settings-page__body">
                    <SettingsNav/>
                    <div class="settings-page__section">
                        {move || match ui.with(|u| u.settings_section) {
                            SettingsSection::Account => view! { <AccountSettings/> }.into_any(),
                            SettingsSection::Appearance => view! { <AppearanceSettings/> }.into_any(),
                        }}
                    </div>
                </div>
            </div>
        </AppLayout>
    }
}

#[component]
fn AccountSettings() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let name = RwSignal::new(auth.with_untracked(|a| a.user.as_ref().map(|u| u.name.clone()).unwrap_or_default()));
    let status = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let value = match validate_display_name(&name.get()) {
            Ok(value) => value,
            Err(message) => {
                status.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        status.set("Saving...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let update = crate::net::types::ProfileUpdate { name: value };
            match crate::net::api::update_profile(&update).await {
                Ok(user) => {
                    name.set(user.name.clone());
                    auth.update(|a| a.user = Some(user));
                    status.set("Saved".to_owned());
                    busy.set(false);
                    gloo_timers::future::TimeoutFuture::new(SAVED_NOTICE_MS).await;
                    if status.get_untracked() == "Saved" {
                        status.set(String::new());
                    }
                }
                Err(e) => {
                    log::warn!("profile update failed: {e}");
                    status.set(format!("Save failed: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
            busy.set(false);
        }
    };

    let email = move || {
        auth.with(|a| a.user.as_ref().and_then(|u| u.email.clone()))
            .unwrap_or_else(|| "—".to_owned())
    };

    view! {
        <form class="settings-form" on:submit=on_submit>
            <label class="settings-form__field">
                <span>"Display name"</span>
                <input
                    class="settings-form__input"
                    type="text"
                    maxlength=MAX_DISPLAY_NAME_CHARS.to_string()
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <div class="settings-form__field">
                <span>"Email"</span>
                <span class="settings-form__readonly">{email}</span>
            </div>
            <div class="settings-form__actions">
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Save"
                </button>
                <Show when=move || !status.get().is_empty()>
                    <span class="settings-form__status">{move || status.get()}</span>
                </Show>
            </div>
        </form>
    }
}

#[component]
fn AppearanceSettings() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_change = move |ev: leptos::ev::Event| {
        let dark = dark_mode::set(event_target_checked(&ev));
        ui.update(|u| u.dark_mode = dark);
    };

    view! {
        <div class="settings-form">
            <label class="settings-form__toggle">
                <input type="checkbox" prop:checked=move || ui.with(|u| u.dark_mode) on:change=on_change/>
                <span>"Dark mode"</span>
            </label>
        </div>
    }
}
