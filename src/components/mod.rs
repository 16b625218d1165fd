//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the editor's `RwSignal<NotesState>` and
//! `EditorConfig` from Leptos context providers set up by `App`.

pub mod note_form;
pub mod notes_table;
