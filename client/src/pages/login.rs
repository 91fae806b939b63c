//! Sign-in page offering OAuth providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The OAuth round-trip is owned by the backend behind `/auth/{provider}`;
//! this page only starts it with a full-page navigation.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::should_redirect_signed_in;

const PROVIDERS: [(&str, &str); 2] = [("google", "Continue with Google"), ("github", "Continue with GitHub")];

fn oauth_href(provider: &str) -> String {
    format!("/auth/{provider}")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if auth.with(should_redirect_signed_in) {
            navigate("/", NavigateOptions::default());
        }
    });

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"DocChat"</h1>
                <p class="login-card__subtitle">"Chat with your papers. Jump straight to the cited page."</p>
                {PROVIDERS
                    .into_iter()
                    .map(|(provider, label)| {
                        let href = oauth_href(provider);
                        let target = href.clone();
                        view! {
                            <a
                                href=href
                                class="login-button"
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    #[cfg(feature = "hydrate")]
                                    {
                                        if let Some(window) = web_sys::window() {
                                            let _ = window.location().set_href(&target);
                                        }
                                    }
                                    #[cfg(not(feature = "hydrate"))]
                                    {
                                        let _ = &target;
                                    }
                                }
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
