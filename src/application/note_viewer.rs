// src/application/note_viewer.rs
use crate::domain::{DomainError, NewNote, Note, NoteColor, NoteId, NotePatch};

/// Storage port for the notes collection. Each method is a single store call.
pub trait NoteRepository {
    /// Insert a note and return the id the store assigned to it
    fn insert_note(&mut self, note: &NewNote) -> Result<NoteId, DomainError>;

    fn get_note(&mut self, id: &NoteId) -> Result<Note, DomainError>;

    /// All notes in insertion order
    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError>;

    fn delete_note(&mut self, id: &NoteId) -> Result<(), DomainError>;

    /// Overwrite only the fields set in `patch`
    fn patch_note(&mut self, id: &NoteId, patch: &NotePatch) -> Result<(), DomainError>;

    /// Delete every note and return how many were removed
    fn delete_all_notes(&mut self) -> Result<usize, DomainError>;

    fn set_note_color(&mut self, id: &NoteId, color: &NoteColor) -> Result<(), DomainError>;
}

impl<R: NoteRepository + ?Sized> NoteRepository for &mut R {
    fn insert_note(&mut self, note: &NewNote) -> Result<NoteId, DomainError> {
        (**self).insert_note(note)
    }

    fn get_note(&mut self, id: &NoteId) -> Result<Note, DomainError> {
        (**self).get_note(id)
    }

    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        (**self).list_notes()
    }

    fn delete_note(&mut self, id: &NoteId) -> Result<(), DomainError> {
        (**self).delete_note(id)
    }

    fn patch_note(&mut self, id: &NoteId, patch: &NotePatch) -> Result<(), DomainError> {
        (**self).patch_note(id, patch)
    }

    fn delete_all_notes(&mut self) -> Result<usize, DomainError> {
        (**self).delete_all_notes()
    }

    fn set_note_color(&mut self, id: &NoteId, color: &NoteColor) -> Result<(), DomainError> {
        (**self).set_note_color(id, color)
    }
}

pub struct NoteViewer<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteViewer<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn view_note(&mut self, note_id: &NoteId) -> Result<Note, DomainError> {
        self.repository.get_note(note_id)
    }
}
