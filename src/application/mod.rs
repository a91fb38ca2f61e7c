// src/application/mod.rs
pub mod note_creator;
pub mod note_deleter;
pub mod note_editor;
pub mod note_lister;
pub mod note_viewer;

pub use note_creator::NoteCreator;
pub use note_deleter::NoteDeleter;
pub use note_editor::NoteEditor;
pub use note_lister::NoteLister;
pub use note_viewer::{NoteRepository, NoteViewer};
