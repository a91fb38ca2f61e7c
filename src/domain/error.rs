// src/domain/error.rs
use crate::domain::NoteId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{0}")]
    ValidationError(String),
    #[error("Unable to find note with ID {0}.")]
    NoteNotFound(NoteId),
    #[error("Storage error: {0}")]
    StorageError(String),
}
