// src/application/note_lister.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note};

pub struct NoteLister<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteLister<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// List all notes in the order they were created
    pub fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        self.repository.list_notes()
    }
}
