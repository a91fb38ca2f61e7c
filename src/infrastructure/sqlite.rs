// src/infrastructure/sqlite.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, NewNote, Note, NoteColor, NoteId, NotePatch};
use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Path value that selects a transient in-memory database.
pub const IN_MEMORY: &str = ":memory:";

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS notes (
    seq     INTEGER PRIMARY KEY AUTOINCREMENT,
    id      TEXT NOT NULL UNIQUE,
    title   TEXT NOT NULL,
    content TEXT NOT NULL,
    color   TEXT
);
";

/// Notes collection stored in a single SQLite table.
///
/// `seq` records insertion order; `id` is the public document id.
pub struct SqliteNoteRepository {
    conn: Connection,
}

impl SqliteNoteRepository {
    /// Open (or create) the database at `path`. `:memory:` opens an in-memory database.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = PathBuf::from(path.as_ref());
        if path.as_os_str() == IN_MEMORY {
            return Self::in_memory();
        }
        debug!(?path, "Opening SQLite note store");

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create database directory {}", parent.display())
            })?;
        }

        let conn = Connection::open(&path)
            .with_context(|| format!("Failed to open database {}", path.display()))?;
        let repo = Self::bootstrap(conn)?;

        info!(?path, "Successfully opened note store");
        Ok(repo)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;
        let repo = Self::bootstrap(conn)?;
        info!("Successfully opened in-memory note store");
        Ok(repo)
    }

    fn bootstrap(conn: Connection) -> Result<Self> {
        conn.busy_timeout(Duration::from_secs(5))
            .context("Failed to set busy timeout")?;
        conn.execute_batch(SCHEMA)
            .context("Failed to create notes schema")?;
        Ok(Self { conn })
    }
}

fn storage_error(action: &str, err: rusqlite::Error) -> DomainError {
    DomainError::StorageError(format!("Failed to {action}: {err}"))
}

fn note_from_row(row: &Row<'_>) -> rusqlite::Result<Note> {
    Ok(Note {
        id: NoteId::new(row.get::<_, String>(0)?),
        title: row.get(1)?,
        content: row.get(2)?,
        color: row.get(3)?,
    })
}

impl NoteRepository for SqliteNoteRepository {
    #[instrument(level = "debug", skip(self, note))]
    fn insert_note(&mut self, note: &NewNote) -> Result<NoteId, DomainError> {
        let id = NoteId::new(Uuid::new_v4().simple().to_string());
        self.conn
            .execute(
                "INSERT INTO notes (id, title, content) VALUES (?1, ?2, ?3)",
                params![id.as_str(), note.title, note.content],
            )
            .map_err(|e| storage_error("insert note", e))?;

        info!(note_id = %id, "Inserted note");
        Ok(id)
    }

    #[instrument(level = "debug", skip(self))]
    fn get_note(&mut self, id: &NoteId) -> Result<Note, DomainError> {
        self.conn
            .query_row(
                "SELECT id, title, content, color FROM notes WHERE id = ?1",
                params![id.as_str()],
                note_from_row,
            )
            .optional()
            .map_err(|e| storage_error("read note", e))?
            .ok_or_else(|| DomainError::NoteNotFound(id.clone()))
    }

    #[instrument(level = "debug", skip(self))]
    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, content, color FROM notes ORDER BY seq")
            .map_err(|e| storage_error("list notes", e))?;
        let notes = stmt
            .query_map([], note_from_row)
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(|e| storage_error("list notes", e))?;

        debug!(count = notes.len(), "Listed notes");
        Ok(notes)
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_note(&mut self, id: &NoteId) -> Result<(), DomainError> {
        let deleted = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1", params![id.as_str()])
            .map_err(|e| storage_error("delete note", e))?;

        if deleted == 0 {
            debug!(note_id = %id, "Note not found for deletion");
            return Err(DomainError::NoteNotFound(id.clone()));
        }
        info!(note_id = %id, "Deleted note");
        Ok(())
    }

    #[instrument(level = "debug", skip(self, patch))]
    fn patch_note(&mut self, id: &NoteId, patch: &NotePatch) -> Result<(), DomainError> {
        // COALESCE keeps the stored value for fields the patch leaves unset
        let updated = self
            .conn
            .execute(
                "UPDATE notes SET title = COALESCE(?2, title), content = COALESCE(?3, content)
                 WHERE id = ?1",
                params![id.as_str(), patch.title, patch.content],
            )
            .map_err(|e| storage_error("patch note", e))?;

        if updated == 0 {
            return Err(DomainError::NoteNotFound(id.clone()));
        }
        info!(
            note_id = %id,
            title = patch.title.is_some(),
            content = patch.content.is_some(),
            "Patched note"
        );
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_all_notes(&mut self) -> Result<usize, DomainError> {
        let deleted = self
            .conn
            .execute("DELETE FROM notes", [])
            .map_err(|e| storage_error("delete notes", e))?;

        info!(notes_deleted = deleted, "Deleted all notes");
        Ok(deleted)
    }

    #[instrument(level = "debug", skip(self))]
    fn set_note_color(&mut self, id: &NoteId, color: &NoteColor) -> Result<(), DomainError> {
        let updated = self
            .conn
            .execute(
                "UPDATE notes SET color = ?2 WHERE id = ?1",
                params![id.as_str(), color.as_str()],
            )
            .map_err(|e| storage_error("update note color", e))?;

        if updated == 0 {
            return Err(DomainError::NoteNotFound(id.clone()));
        }
        info!(note_id = %id, %color, "Updated note color");
        Ok(())
    }
}
