//! Intents produced by the views and consumed by the controller.

use crate::types::NoteId;

/// A user intent waiting to be carried out against the notes service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A validated note form was submitted
    CreateNote { title: String, body: String },
    /// The delete button of a note was pressed
    DeleteNote { id: NoteId },
    /// The archive/unarchive button of a note was pressed
    ToggleArchive { id: NoteId, archived_before: bool },
}

impl Command {
    /// Name of the intent as it appears in logs
    pub fn event_name(&self) -> &'static str {
        match self {
            Command::CreateNote { .. } => "note-added",
            Command::DeleteNote { .. } => "delete-note",
            Command::ToggleArchive { .. } => "archive-note",
        }
    }

    /// Id of the note the command targets, if it targets an existing one
    pub fn note_id(&self) -> Option<&NoteId> {
        match self {
            Command::CreateNote { .. } => None,
            Command::DeleteNote { id } | Command::ToggleArchive { id, .. } => Some(id),
        }
    }
}
