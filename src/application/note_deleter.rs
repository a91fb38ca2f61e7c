// src/application/note_deleter.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, NoteId};

pub struct NoteDeleter<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteDeleter<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn delete_note(&mut self, note_id: &NoteId) -> Result<(), DomainError> {
        self.repository.delete_note(note_id)
    }

    /// Delete every note and return the number of notes that were deleted
    pub fn delete_all_notes(&mut self) -> Result<usize, DomainError> {
        self.repository.delete_all_notes()
    }
}
