//! Notes table with in-place row editing.

use leptos::prelude::*;

use crate::config::EditorConfig;
use crate::state::notes::{NoteField, NoteId, NotesState};
use crate::state::table::{COLUMNS, EMPTY_MESSAGE, RowActions, RowView, TableView};
use crate::util::logging::log_ignored;

/// Table of all notes in append order, or a placeholder row when empty.
///
/// Rows are keyed by note id so a row being edited keeps its inputs (and
/// focus) while the collection changes around it.
#[component]
pub fn NotesTable() -> impl IntoView {
    let notes = expect_context::<RwSignal<NotesState>>();

    let table = Memo::new(move |_| notes.with(TableView::from_state));
    let is_empty = move || table.with(TableView::is_placeholder);

    view! {
        <div class="notes-table">
            <table class="notes-table__table">
                <thead>
                    <tr class="notes-table__head">
                        {COLUMNS
                            .into_iter()
                            .map(|title| view! { <th class="notes-table__heading">{title}</th> })
                            .collect::<Vec<_>>()}
                    </tr>
                </thead>
                <tbody class="notes-table__body">
                    <For
                        each=move || table.with(TableView::row_ids)
                        key=|id| *id
                        children=move |id| view! { <NoteRow id=id/> }
                    />
                    <Show when=is_empty>
                        <tr>
                            <td class="notes-table__empty" colspan="4">
                                {EMPTY_MESSAGE}
                            </td>
                        </tr>
                    </Show>
                </tbody>
            </table>
        </div>
    }
}

/// A single note row: three cells plus the actions column.
#[component]
fn NoteRow(id: NoteId) -> impl IntoView {
    let notes = expect_context::<RwSignal<NotesState>>();
    let config = expect_context::<EditorConfig>();

    let row = Memo::new(move |_| notes.with(|s| RowView::for_note(s, id)));
    let editing = Memo::new(move |_| row.with(|r| r.as_ref().is_some_and(|r| r.editing)));
    let actions = Memo::new(move |_| row.with(|r| r.as_ref().map_or(RowActions::EditDelete, RowView::actions)));

    let on_edit = Callback::new(move |()| notes.update(|s| log_ignored("edit", s.enter_edit(id))));
    let on_delete = Callback::new(move |()| notes.update(|s| log_ignored("delete", s.delete(id))));
    let on_save = Callback::new(move |()| notes.update(|s| log_ignored("save", s.save())));
    let on_cancel = Callback::new(move |()| notes.update(|s| log_ignored("cancel", s.cancel(config.cancel_policy))));

    view! {
        <tr class="notes-table__row" class:notes-table__row--editing=move || editing.get()>
            {NoteField::ALL
                .into_iter()
                .map(|field| {
                    view! {
                        <NoteCell
                            id=id
                            field=field
                            row=row
                            editing=editing
                            on_save=on_save
                            on_cancel=on_cancel
                        />
                    }
                })
                .collect::<Vec<_>>()}
            <td class="notes-table__actions">
                {move || match actions.get() {
                    RowActions::EditDelete => {
                        view! {
                            <div class="notes-table__buttons">
                                <button class="icon-btn icon-btn--edit" title="Edit" on:click=move |_| on_edit.run(())>
                                    "Edit"
                                </button>
                                <button
                                    class="icon-btn icon-btn--delete"
                                    title="Delete"
                                    on:click=move |_| on_delete.run(())
                                >
                                    "Delete"
                                </button>
                            </div>
                        }
                            .into_any()
                    }
                    RowActions::SaveCancel => {
                        view! {
                            <div class="notes-table__buttons">
                                <button class="icon-btn icon-btn--save" title="Save" on:click=move |_| on_save.run(())>
                                    "Save"
                                </button>
                                <button
                                    class="icon-btn icon-btn--cancel"
                                    title="Cancel"
                                    on:click=move |_| on_cancel.run(())
                                >
                                    "Cancel"
                                </button>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </td>
        </tr>
    }
}

/// One field cell: plain text, or an input while the row is in edit mode.
///
/// Input events write straight into the note; Enter saves and Escape cancels.
#[component]
fn NoteCell(
    id: NoteId,
    field: NoteField,
    row: Memo<Option<RowView>>,
    editing: Memo<bool>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let notes = expect_context::<RwSignal<NotesState>>();

    let value = move || row.with(|r| r.as_ref().map(|r| r.cell(field).to_owned()).unwrap_or_default());

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            on_save.run(());
        }
        "Escape" => on_cancel.run(()),
        _ => {}
    };

    view! {
        <td class=format!("notes-table__cell notes-table__cell--{}", field.key())>
            {move || {
                if editing.get() {
                    view! {
                        <input
                            class="notes-table__input"
                            type="text"
                            prop:value=value
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                notes.update(|s| log_ignored("update", s.update_field(id, field, text)));
                            }
                            on:keydown=on_keydown
                        />
                    }
                        .into_any()
                } else {
                    view! { <span class="notes-table__text">{value}</span> }.into_any()
                }
            }}
        </td>
    }
}
