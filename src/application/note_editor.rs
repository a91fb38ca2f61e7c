// src/application/note_editor.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, NoteColor, NoteId, NotePatch};

pub struct NoteEditor<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteEditor<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Overwrite the supplied fields of a note, leaving the others as stored
    pub fn patch_note(
        &mut self,
        note_id: &NoteId,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<(), DomainError> {
        let patch = NotePatch::new(title, content)?;
        self.repository.patch_note(note_id, &patch)
    }

    /// Set the color of a note and return the color that was stored
    pub fn update_color(
        &mut self,
        note_id: &NoteId,
        color: Option<String>,
    ) -> Result<NoteColor, DomainError> {
        let color = NoteColor::parse(color)?;
        self.repository.set_note_color(note_id, &color)?;
        Ok(color)
    }
}
