//! Video notes page: header, add-form, and table.

use leptos::prelude::*;

use crate::components::note_form::NoteForm;
use crate::components::notes_table::NotesTable;

#[component]
pub fn NotesPage() -> impl IntoView {
    view! {
        <div class="notes-page">
            <div class="notes-page__card">
                <header class="notes-page__header">
                    <h2>"Video Notes"</h2>
                </header>
                <NoteForm/>
                <NotesTable/>
            </div>
        </div>
    }
}
