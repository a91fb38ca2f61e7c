// src/util/testing.rs

use anyhow::Result;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteRepository;
use crate::domain::{DomainError, NewNote, Note, NoteColor, NoteId, NotePatch};

/// Shared in-memory repository for testing use cases and the HTTP port
///
/// Notes are kept in insertion order and receive sequential ids
/// (`note-1`, `note-2`, ...). A failing store can be simulated with
/// `with_storage_failure`, which makes every call return `StorageError`.
///
/// # Examples
///
/// ```
/// use quirknotes::application::NoteRepository;
/// use quirknotes::util::testing::MockNoteRepository;
///
/// let mut mock = MockNoteRepository::builder()
///     .with_note("Question", "Answer")
///     .build();
///
/// assert_eq!(mock.list_notes().unwrap().len(), 1);
/// ```
#[derive(Debug)]
pub struct MockNoteRepository {
    notes: Vec<Note>,
    next_id: usize,
    fail_storage: bool,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }

    /// Ids of the stored notes in insertion order
    pub fn ids(&self) -> Vec<NoteId> {
        self.notes.iter().map(|n| n.id.clone()).collect()
    }

    fn check_storage(&self) -> Result<(), DomainError> {
        if self.fail_storage {
            return Err(DomainError::StorageError(
                "simulated storage failure".to_string(),
            ));
        }
        Ok(())
    }

    fn push(&mut self, title: String, content: String) -> NoteId {
        self.next_id += 1;
        let id = NoteId::new(format!("note-{}", self.next_id));
        self.notes.push(Note {
            id: id.clone(),
            title,
            content,
            color: None,
        });
        id
    }

    fn find_mut(&mut self, id: &NoteId) -> Result<&mut Note, DomainError> {
        self.notes
            .iter_mut()
            .find(|n| &n.id == id)
            .ok_or_else(|| DomainError::NoteNotFound(id.clone()))
    }
}

impl NoteRepository for MockNoteRepository {
    fn insert_note(&mut self, note: &NewNote) -> Result<NoteId, DomainError> {
        self.check_storage()?;
        Ok(self.push(note.title.clone(), note.content.clone()))
    }

    fn get_note(&mut self, id: &NoteId) -> Result<Note, DomainError> {
        self.check_storage()?;
        self.find_mut(id).map(|n| n.clone())
    }

    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        self.check_storage()?;
        Ok(self.notes.clone())
    }

    fn delete_note(&mut self, id: &NoteId) -> Result<(), DomainError> {
        self.check_storage()?;
        let position = self
            .notes
            .iter()
            .position(|n| &n.id == id)
            .ok_or_else(|| DomainError::NoteNotFound(id.clone()))?;
        self.notes.remove(position);
        Ok(())
    }

    fn patch_note(&mut self, id: &NoteId, patch: &NotePatch) -> Result<(), DomainError> {
        self.check_storage()?;
        let note = self.find_mut(id)?;
        if let Some(title) = &patch.title {
            note.title = title.clone();
        }
        if let Some(content) = &patch.content {
            note.content = content.clone();
        }
        Ok(())
    }

    fn delete_all_notes(&mut self) -> Result<usize, DomainError> {
        self.check_storage()?;
        let count = self.notes.len();
        self.notes.clear();
        Ok(count)
    }

    fn set_note_color(&mut self, id: &NoteId, color: &NoteColor) -> Result<(), DomainError> {
        self.check_storage()?;
        self.find_mut(id)?.color = Some(color.as_str().to_string());
        Ok(())
    }
}

/// Builder for MockNoteRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNoteRepositoryBuilder {
    notes: Vec<(String, String)>,
    fail_storage: bool,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            fail_storage: false,
        }
    }

    /// Add a note; ids are assigned in the order notes are added
    pub fn with_note(mut self, title: &str, content: &str) -> Self {
        self.notes.push((title.to_string(), content.to_string()));
        self
    }

    /// Make every repository call fail with StorageError
    pub fn with_storage_failure(mut self) -> Self {
        self.fail_storage = true;
        self
    }

    pub fn build(self) -> MockNoteRepository {
        let mut repo = MockNoteRepository {
            notes: vec![],
            next_id: 0,
            fail_storage: false,
        };
        for (title, content) in self.notes {
            repo.push(title, content);
        }
        repo.fail_storage = self.fail_storage;
        repo
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "tower", "mio", "rusqlite"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[ctor::ctor]
    fn init() {
        init_test_setup().expect("Failed to initialize test setup");
    }

    #[test]
    fn given_notes_added_when_building_then_ids_are_sequential() {
        let mock = MockNoteRepository::builder()
            .with_note("A", "1")
            .with_note("B", "2")
            .build();

        assert_eq!(mock.ids(), vec![NoteId::new("note-1"), NoteId::new("note-2")]);
    }

    #[test]
    fn given_no_note_when_getting_note_then_returns_error() {
        let mut mock = MockNoteRepository::builder().build();

        let result = mock.get_note(&NoteId::new("note-999"));
        assert!(matches!(result, Err(DomainError::NoteNotFound(_))));
    }

    #[test]
    fn given_deleted_note_when_inserting_then_id_is_not_reused() {
        let mut mock = MockNoteRepository::builder().with_note("A", "1").build();
        mock.delete_note(&NoteId::new("note-1")).expect("delete");

        let id = mock
            .insert_note(&NewNote {
                title: "B".to_string(),
                content: "2".to_string(),
            })
            .expect("insert");

        assert_eq!(id, NoteId::new("note-2"));
    }

    #[test]
    fn given_storage_failure_configured_when_calling_then_every_method_fails() {
        let mut mock = MockNoteRepository::builder()
            .with_note("A", "1")
            .with_storage_failure()
            .build();
        let id = NoteId::new("note-1");

        assert!(matches!(mock.list_notes(), Err(DomainError::StorageError(_))));
        assert!(matches!(mock.get_note(&id), Err(DomainError::StorageError(_))));
        assert!(matches!(mock.delete_note(&id), Err(DomainError::StorageError(_))));
        assert!(matches!(mock.delete_all_notes(), Err(DomainError::StorageError(_))));
    }
}
