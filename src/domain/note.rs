// src/domain/note.rs
use crate::domain::DomainError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static HEX_COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").expect("valid hex color regex")
});

/// Store-assigned note identifier. Opaque to callers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for NoteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: NoteId,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A validated note that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub content: String,
}

impl NewNote {
    /// Both fields are required; an empty string counts as missing.
    pub fn new(title: Option<String>, content: Option<String>) -> Result<Self, DomainError> {
        match (non_empty(title), non_empty(content)) {
            (Some(title), Some(content)) => Ok(Self { title, content }),
            _ => Err(DomainError::ValidationError(
                "Must have a title and content.".to_string(),
            )),
        }
    }
}

/// Partial update of a note. `None` fields are left untouched by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NotePatch {
    pub fn new(title: Option<String>, content: Option<String>) -> Result<Self, DomainError> {
        if title.is_none() && content.is_none() {
            return Err(DomainError::ValidationError(
                "Must have at least one of title or content.".to_string(),
            ));
        }
        if title.as_deref() == Some("") || content.as_deref() == Some("") {
            return Err(DomainError::ValidationError(
                "Title and content cannot be empty.".to_string(),
            ));
        }
        Ok(Self { title, content })
    }
}

/// Hex color in `#RGB` or `#RRGGBB` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteColor(String);

impl NoteColor {
    pub fn parse(color: Option<String>) -> Result<Self, DomainError> {
        let color = non_empty(color)
            .ok_or_else(|| DomainError::ValidationError("Must have a color.".to_string()))?;
        if !HEX_COLOR_RE.is_match(&color) {
            return Err(DomainError::ValidationError(format!(
                "Invalid color `{color}`, expected #RGB or #RRGGBB."
            )));
        }
        Ok(Self(color))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_title_and_content_when_creating_new_note_then_succeeds() {
        let note = NewNote::new(Some("Title".to_string()), Some("Body".to_string()))
            .expect("valid note");
        assert_eq!(note.title, "Title");
        assert_eq!(note.content, "Body");
    }

    #[test]
    fn given_missing_content_when_creating_new_note_then_returns_validation_error() {
        let result = NewNote::new(Some("Title".to_string()), None);
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[test]
    fn given_empty_title_when_creating_new_note_then_returns_validation_error() {
        let result = NewNote::new(Some(String::new()), Some("Body".to_string()));
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[test]
    fn given_no_fields_when_building_patch_then_returns_validation_error() {
        let result = NotePatch::new(None, None);
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[test]
    fn given_empty_field_when_building_patch_then_returns_validation_error() {
        let empty_title = NotePatch::new(Some(String::new()), None);
        let empty_content = NotePatch::new(Some("New".to_string()), Some(String::new()));

        assert!(matches!(empty_title, Err(DomainError::ValidationError(_))));
        assert!(matches!(empty_content, Err(DomainError::ValidationError(_))));
    }

    #[test]
    fn given_only_title_when_building_patch_then_leaves_content_unset() {
        let patch = NotePatch::new(Some("New".to_string()), None).expect("valid patch");
        assert_eq!(patch.title.as_deref(), Some("New"));
        assert_eq!(patch.content, None);
    }

    #[test]
    fn given_hex_colors_when_parsing_then_accepts_short_and_long_forms() {
        for color in ["#FF0000", "#ff0000", "#F00", "#0a0B0c"] {
            let parsed = NoteColor::parse(Some(color.to_string())).expect("valid color");
            assert_eq!(parsed.as_str(), color);
        }
    }

    #[test]
    fn given_non_hex_color_when_parsing_then_returns_validation_error() {
        for color in ["red", "FF0000", "#FF00", "#GG0000", "#FF0000 "] {
            let result = NoteColor::parse(Some(color.to_string()));
            assert!(
                matches!(result, Err(DomainError::ValidationError(_))),
                "{color} should be rejected"
            );
        }
    }

    #[test]
    fn given_missing_color_when_parsing_then_returns_validation_error() {
        assert!(matches!(
            NoteColor::parse(None),
            Err(DomainError::ValidationError(_))
        ));
    }
}
