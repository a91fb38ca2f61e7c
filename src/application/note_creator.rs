// src/application/note_creator.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, NewNote, NoteId};

pub struct NoteCreator<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteCreator<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Validate and store a new note, returning the store-assigned id
    pub fn create_note(
        &mut self,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<NoteId, DomainError> {
        let note = NewNote::new(title, content)?;
        self.repository.insert_note(&note)
    }
}
