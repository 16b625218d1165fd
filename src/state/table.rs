//! Table view model derived from [`NotesState`].
//!
//! Components render only what this model says, which keeps the
//! placeholder/row/action rules testable without a DOM.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use super::notes::{Note, NoteField, NoteId, NotesState};

/// Column headings, left to right.
pub const COLUMNS: [&str; 4] = ["Timestamp", "Title", "Note", "Actions"];

/// Text of the placeholder row shown for an empty collection.
pub const EMPTY_MESSAGE: &str = "No notes yet. Add your first note above!";

/// Body of the notes table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableView {
    Placeholder,
    Rows(Vec<RowView>),
}

impl TableView {
    pub fn from_state(state: &NotesState) -> Self {
        if state.is_empty() {
            return Self::Placeholder;
        }
        let editing = state.edit_mode().editing_id();
        Self::Rows(
            state
                .notes()
                .iter()
                .map(|note| RowView::new(note, editing == Some(note.id)))
                .collect(),
        )
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }

    pub fn row_count(&self) -> usize {
        match self {
            Self::Placeholder => 0,
            Self::Rows(rows) => rows.len(),
        }
    }

    /// Row ids in display order, used as keys for the row list.
    pub fn row_ids(&self) -> Vec<NoteId> {
        match self {
            Self::Placeholder => Vec::new(),
            Self::Rows(rows) => rows.iter().map(|row| row.id).collect(),
        }
    }
}

/// One rendered note row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowView {
    pub id: NoteId,
    pub timestamp: String,
    pub title: String,
    pub note: String,
    /// Cells render as inputs instead of text.
    pub editing: bool,
}

impl RowView {
    fn new(note: &Note, editing: bool) -> Self {
        Self {
            id: note.id,
            timestamp: note.timestamp.clone(),
            title: note.title.clone(),
            note: note.note.clone(),
            editing,
        }
    }

    /// Row for a single note, or `None` once it has been deleted.
    pub fn for_note(state: &NotesState, id: NoteId) -> Option<Self> {
        state
            .get(id)
            .map(|note| Self::new(note, state.edit_mode().is_editing(id)))
    }

    pub fn cell(&self, field: NoteField) -> &str {
        match field {
            NoteField::Timestamp => &self.timestamp,
            NoteField::Title => &self.title,
            NoteField::Note => &self.note,
        }
    }

    pub fn actions(&self) -> RowActions {
        if self.editing { RowActions::SaveCancel } else { RowActions::EditDelete }
    }
}

/// Controls shown in the Actions column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowActions {
    #[default]
    EditDelete,
    SaveCancel,
}
