//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{login::LoginPage, references::ReferencesPage, settings::SettingsPage, workspace::WorkspacePage};
use crate::state::{
    auth::AuthState, chat::ChatState, references::ReferencesState, ui::UiState, viewer::ViewerState,
};
use crate::util::{auth::load_current_user, dark_mode};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, resolves the session once and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let chat = RwSignal::new(ChatState::default());
    let viewer = RwSignal::new(ViewerState::default());
    let references = RwSignal::new(ReferencesState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(chat);
    provide_context(viewer);
    provide_context(references);
    provide_context(ui);

    load_current_user(auth);

    // Theme is a browser preference; SSR always renders light.
    Effect::new(move || {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/docchat.css"/>
        <Title text="DocChat"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=WorkspacePage/>
                <Route path=StaticSegment("references") view=ReferencesPage/>
                <Route path=StaticSegment("settings") view=SettingsPage/>
            </Routes>
        </Router>
    }
}
