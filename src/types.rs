use std::fmt;

use serde::{Deserialize, Serialize};

/// Default base URL of the notes service.
pub const DEFAULT_API_URL: &str = "https://notes-api.dicoding.dev/v2";

/// Identifier assigned to a note by the notes service.
///
/// The client only ever holds ids it received from the service; there is no
/// constructor that generates one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        NoteId(id.into())
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

impl From<&str> for NoteId {
    fn from(s: &str) -> Self {
        NoteId(s.to_string())
    }
}

impl From<String> for NoteId {
    fn from(s: String) -> Self {
        NoteId(s)
    }
}

/// A note as stored by the notes service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub body: String,
    /// Creation timestamp, kept exactly as the service sent it
    pub created_at: String,
    #[serde(default)]
    pub archived: bool,
}

/// Payload for creating a note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub body: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Minimal result of an archive or unarchive call.
///
/// This is not the full note; reload the list for authoritative state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveStatus {
    pub id: NoteId,
    pub archived: bool,
}
