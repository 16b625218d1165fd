//! Note collection, add-form drafts, and the single-row edit mode.
//!
//! Every operation is a plain method on [`NotesState`] so the editor can be
//! driven and tested without a browser. Operations that cannot apply (an
//! empty add-form field, an id that is no longer in the collection) return a
//! [`NotesError`] and leave the state untouched; the UI treats those as
//! silent no-ops.

#[cfg(test)]
#[path = "notes_test.rs"]
mod notes_test;

use std::fmt;

use uuid::Uuid;

use crate::config::CancelPolicy;

/// Opaque note identifier, unique within one editor instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three user-editable text fields of a note.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoteField {
    Timestamp,
    Title,
    Note,
}

impl NoteField {
    /// Fields in column order.
    pub const ALL: [Self; 3] = [Self::Timestamp, Self::Title, Self::Note];

    /// Lowercase key, used in log lines and CSS modifiers.
    pub fn key(self) -> &'static str {
        match self {
            Self::Timestamp => "timestamp",
            Self::Title => "title",
            Self::Note => "note",
        }
    }

    /// Placeholder shown in the add-form input for this field.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Timestamp => "Timestamp (00:00)",
            Self::Title => "Title",
            Self::Note => "Note",
        }
    }
}

impl fmt::Display for NoteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single timestamped annotation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub timestamp: String,
    pub title: String,
    pub note: String,
}

impl Note {
    /// Borrow the text of `field`.
    pub fn field(&self, field: NoteField) -> &str {
        match field {
            NoteField::Timestamp => &self.timestamp,
            NoteField::Title => &self.title,
            NoteField::Note => &self.note,
        }
    }

    fn field_mut(&mut self, field: NoteField) -> &mut String {
        match field {
            NoteField::Timestamp => &mut self.timestamp,
            NoteField::Title => &mut self.title,
            NoteField::Note => &mut self.note,
        }
    }
}

/// Values typed into the add-form that have not been added yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingNote {
    pub timestamp: String,
    pub title: String,
    pub note: String,
}

impl PendingNote {
    pub fn new(timestamp: impl Into<String>, title: impl Into<String>, note: impl Into<String>) -> Self {
        Self { timestamp: timestamp.into(), title: title.into(), note: note.into() }
    }

    pub fn field(&self, field: NoteField) -> &str {
        match field {
            NoteField::Timestamp => &self.timestamp,
            NoteField::Title => &self.title,
            NoteField::Note => &self.note,
        }
    }

    pub fn set(&mut self, field: NoteField, value: String) {
        match field {
            NoteField::Timestamp => self.timestamp = value,
            NoteField::Title => self.title = value,
            NoteField::Note => self.note = value,
        }
    }

    /// First field (in column order) that is the empty string.
    ///
    /// Whitespace-only values count as filled.
    pub fn missing_field(&self) -> Option<NoteField> {
        NoteField::ALL.into_iter().find(|field| self.field(*field).is_empty())
    }
}

/// Which note, if any, is rendered with editable inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    NotEditing,
    /// `original` is the note as it was when edit mode was entered.
    Editing { original: Note },
}

impl EditMode {
    pub fn editing_id(&self) -> Option<NoteId> {
        match self {
            Self::NotEditing => None,
            Self::Editing { original } => Some(original.id),
        }
    }

    pub fn is_editing(&self, id: NoteId) -> bool {
        self.editing_id() == Some(id)
    }
}

/// Reasons an editor operation was not applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotesError {
    /// An add-form field was empty when Add was activated.
    #[error("note field `{0}` is empty")]
    MissingField(NoteField),

    /// No note in the collection has this id.
    #[error("no note with id {0}")]
    UnknownNote(NoteId),

    /// Save or Cancel was requested while no note was being edited.
    #[error("no note is being edited")]
    NotEditing,
}

/// Editor state: notes in append order, the edit mode, and the add-form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotesState {
    notes: Vec<Note>,
    edit: EditMode,
    pending: PendingNote,
}

impl NotesState {
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn edit_mode(&self) -> &EditMode {
        &self.edit
    }

    pub fn pending(&self) -> &PendingNote {
        &self.pending
    }

    /// Replace one add-form field.
    pub fn set_pending(&mut self, field: NoteField, value: String) {
        self.pending.set(field, value);
    }

    /// Add a note from the add-form fields and clear them.
    ///
    /// # Errors
    ///
    /// Returns [`NotesError::MissingField`] if any pending field is empty; the
    /// pending fields are kept so the user can finish typing.
    pub fn add_pending(&mut self) -> Result<NoteId, NotesError> {
        let fields = self.pending.clone();
        self.insert(fields)
    }

    /// Add a note from explicit values and clear the add-form.
    ///
    /// # Errors
    ///
    /// Returns [`NotesError::MissingField`] if any value is empty.
    pub fn add(
        &mut self,
        timestamp: impl Into<String>,
        title: impl Into<String>,
        note: impl Into<String>,
    ) -> Result<NoteId, NotesError> {
        self.insert(PendingNote::new(timestamp, title, note))
    }

    fn insert(&mut self, fields: PendingNote) -> Result<NoteId, NotesError> {
        if let Some(field) = fields.missing_field() {
            return Err(NotesError::MissingField(field));
        }

        let id = NoteId::generate();
        let PendingNote { timestamp, title, note } = fields;
        self.notes.push(Note { id, timestamp, title, note });
        self.pending = PendingNote::default();
        Ok(id)
    }

    /// Overwrite one field of the note with `id`.
    ///
    /// Edits are written straight into the collection; there is no separate
    /// draft copy.
    ///
    /// # Errors
    ///
    /// Returns [`NotesError::UnknownNote`] if no note has `id`.
    pub fn update_field(&mut self, id: NoteId, field: NoteField, value: String) -> Result<(), NotesError> {
        let note = self
            .notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or(NotesError::UnknownNote(id))?;
        *note.field_mut(field) = value;
        Ok(())
    }

    /// Remove the note with `id`, keeping the order of the rest.
    ///
    /// Removing the note under edit also leaves edit mode.
    ///
    /// # Errors
    ///
    /// Returns [`NotesError::UnknownNote`] if no note has `id`.
    pub fn delete(&mut self, id: NoteId) -> Result<Note, NotesError> {
        let index = self
            .notes
            .iter()
            .position(|note| note.id == id)
            .ok_or(NotesError::UnknownNote(id))?;
        if self.edit.is_editing(id) {
            self.edit = EditMode::NotEditing;
        }
        Ok(self.notes.remove(index))
    }

    /// Put the note with `id` into edit mode, replacing any other.
    ///
    /// # Errors
    ///
    /// Returns [`NotesError::UnknownNote`] if no note has `id`; the current
    /// edit mode is kept.
    pub fn enter_edit(&mut self, id: NoteId) -> Result<(), NotesError> {
        let original = self.get(id).cloned().ok_or(NotesError::UnknownNote(id))?;
        self.edit = EditMode::Editing { original };
        Ok(())
    }

    /// Leave edit mode, returning the id that was being edited.
    pub fn exit_edit(&mut self) -> Option<NoteId> {
        std::mem::take(&mut self.edit).editing_id()
    }

    /// Leave edit mode keeping every edit made to the row.
    ///
    /// # Errors
    ///
    /// Returns [`NotesError::NotEditing`] if no note is in edit mode.
    pub fn save(&mut self) -> Result<NoteId, NotesError> {
        self.exit_edit().ok_or(NotesError::NotEditing)
    }

    /// Leave edit mode according to `policy`.
    ///
    /// [`CancelPolicy::KeepEdits`] behaves exactly like [`Self::save`].
    /// [`CancelPolicy::Revert`] first restores the fields captured when edit
    /// mode was entered.
    ///
    /// # Errors
    ///
    /// Returns [`NotesError::NotEditing`] if no note is in edit mode.
    pub fn cancel(&mut self, policy: CancelPolicy) -> Result<NoteId, NotesError> {
        let EditMode::Editing { original } = std::mem::take(&mut self.edit) else {
            return Err(NotesError::NotEditing);
        };

        let id = original.id;
        if policy == CancelPolicy::Revert {
            if let Some(note) = self.notes.iter_mut().find(|note| note.id == id) {
                *note = original;
            }
        }
        Ok(id)
    }
}
