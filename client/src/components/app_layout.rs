//! Authenticated page frame: sidebar plus main content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every signed-in route renders through this layout so the unauthenticated
//! redirect and the loading fallback behave the same everywhere.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::app_sidebar::AppSidebar;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Sidebar + content frame shown once a user is signed in.
#[component]
pub fn AppLayout(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <Show
            when=move || auth.with(AuthState::is_signed_in)
            fallback=|| view! { <div class="app-loading">"Loading..."</div> }
        >
            <div class="app-layout">
                <AppSidebar/>
                <main class="app-layout__main">{children()}</main>
            </div>
        </Show>
    }
}
