//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::EditorConfig;
use crate::pages::notes::NotesPage;
use crate::state::notes::NotesState;

/// Root application component.
///
/// Owns the editor state for the lifetime of the page and provides it, with
/// `config`, to every child component.
#[component]
pub fn App(config: EditorConfig) -> impl IntoView {
    provide_meta_context();

    let notes = RwSignal::new(NotesState::default());

    provide_context(config);
    provide_context(notes);

    view! {
        <Title text="Video Notes"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=NotesPage/>
            </Routes>
        </Router>
    }
}
