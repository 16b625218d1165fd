//! Add-form: three text inputs and the "Add Note" button.

#[cfg(test)]
#[path = "note_form_test.rs"]
mod note_form_test;

use leptos::prelude::*;

use crate::state::notes::{NoteField, NotesState};

/// Text of the submit button; the plus sign is rendered as a separate icon.
pub const ADD_LABEL: &str = "Add Note";

/// Form that appends a note once all three fields are filled.
///
/// Clicking "Add Note" or pressing Enter in any input submits. A submit with
/// an empty field does nothing and keeps the typed values.
#[component]
pub fn NoteForm() -> impl IntoView {
    let notes = expect_context::<RwSignal<NotesState>>();

    let submit = Callback::new(move |()| {
        notes.update(|s| match s.add_pending() {
            Ok(id) => log::debug!("added note {id}"),
            Err(err) => log::debug!("add ignored: {err}"),
        });
    });

    view! {
        <div class="note-form">
            {NoteField::ALL
                .into_iter()
                .map(|field| view! { <PendingInput field=field submit=submit/> })
                .collect::<Vec<_>>()}
            <button class="btn btn--primary note-form__add" on:click=move |_| submit.run(())>
                <span class="note-form__icon" aria-hidden="true">"+"</span>
                {ADD_LABEL}
            </button>
        </div>
    }
}

/// One add-form input bound to a pending field.
#[component]
fn PendingInput(field: NoteField, submit: Callback<()>) -> impl IntoView {
    let notes = expect_context::<RwSignal<NotesState>>();

    let value = move || notes.with(|s| s.pending().field(field).to_owned());

    view! {
        <input
            class=format!("note-form__input note-form__input--{}", field.key())
            type="text"
            placeholder=field.placeholder()
            prop:value=value
            on:input=move |ev| {
                let text = event_target_value(&ev);
                notes.update(|s| s.set_pending(field, text));
            }
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if ev.key() == "Enter" {
                    ev.prevent_default();
                    submit.run(());
                }
            }
        />
    }
}
