//! Collapsible navigation sidebar shared by all authenticated pages.
//!
//! ARCHITECTURE
//! ============
//! Navigation targets are a static table so the active-link check stays a pure
//! function of the current path.

#[cfg(test)]
#[path = "app_sidebar_test.rs"]
mod app_sidebar_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;

const NAV_ITEMS: [(&str, &str); 3] = [("/", "Workspace"), ("/references", "References"), ("/settings", "Settings")];

/// Whether `href` is the active section for `path`.
fn is_active(href: &str, path: &str) -> bool {
    if href == "/" {
        path == "/"
    } else {
        path == href || path.starts_with(&format!("{href}/"))
    }
}

/// First letter of the user's name for the avatar fallback.
fn initials(name: &str) -> String {
    name.chars()
        .find(|c| c.is_alphanumeric())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_owned())
}

/// Sidebar with section links, collapse toggle and user menu.
#[component]
pub fn AppSidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            auth.update(|a| a.user = None);
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href("/login");
            }
        });
    };

    view! {
        <nav class="app-sidebar" class:app-sidebar--collapsed=move || !ui.with(|u| u.sidebar_open)>
            <div class="app-sidebar__header">
                <span class="app-sidebar__brand">"DocChat"</span>
                <button
                    class="app-sidebar__toggle"
                    title="Toggle sidebar"
                    aria-label="Toggle sidebar"
                    on:click=move |_| ui.update(UiState::toggle_sidebar)
                >
                    "☰"
                </button>
            </div>
            <ul class="app-sidebar__links">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(href, label)| {
                        let active = move || pathname.with(|path| is_active(href, path));
                        view! {
                            <li class="app-sidebar__item" class:app-sidebar__item--active=active>
                                <A href=href>{label}</A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="app-sidebar__user">
                {move || {
                    let name = auth.with(AuthState::display_name);
                    let avatar = auth.with(|a| a.user.as_ref().and_then(|u| u.avatar_url.clone()));
                    let fallback = initials(&name);
                    view! {
                        {match avatar {
                            Some(url) => view! { <img class="app-sidebar__avatar" src=url alt=""/> }.into_any(),
                            None => view! { <span class="app-sidebar__avatar">{fallback}</span> }.into_any(),
                        }}
                        <span class="app-sidebar__name">{name}</span>
                    }
                }}
                <button class="btn app-sidebar__logout" on:click=on_logout>
                    "Log out"
                </button>
            </div>
        </nav>
    }
}
