// src/ports/dto.rs
//
// JSON bodies of the notes API. Request fields are optional so that missing
// fields reach domain validation instead of failing deserialization.
use crate::domain::NoteId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CreateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PatchNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateNoteColorRequest {
    pub color: Option<String>,
}

/// Success envelope: every 200 body carries a `response` field.
#[derive(Debug, Deserialize, Serialize)]
pub struct ApiResponse<T> {
    pub response: T,
}

impl<T> ApiResponse<T> {
    pub fn new(response: T) -> Self {
        Self { response }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateNoteResponse {
    pub response: String,
    #[serde(rename = "insertedId")]
    pub inserted_id: NoteId,
}

pub fn deleted_message(id: &NoteId) -> String {
    format!("Document with ID {id} deleted.")
}

pub fn patched_message(id: &NoteId) -> String {
    format!("Document with ID {id} patched.")
}

pub fn color_updated_message(id: &NoteId, color: &str) -> String {
    format!("Document with ID {id} color updated to {color}.")
}

pub fn deleted_all_message(count: usize) -> String {
    format!("{count} note(s) deleted.")
}
