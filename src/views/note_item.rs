//! A single note as presented to the user.

use jiff::Timestamp;
use jiff::civil::{Date, DateTime};
use jiff::tz::TimeZone;

use crate::controller::Command;
use crate::types::{Note, NoteId};

pub const UNTITLED: &str = "Untitled";
pub const NO_CONTENT: &str = "No content";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    id: NoteId,
    title: String,
    body: String,
    created_at: String,
    archived: bool,
}

impl NoteItem {
    pub fn new(note: &Note) -> Self {
        Self {
            id: note.id.clone(),
            title: note.title.clone(),
            body: note.body.clone(),
            created_at: note.created_at.clone(),
            archived: note.archived,
        }
    }

    pub fn id(&self) -> &NoteId {
        &self.id
    }

    pub fn title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED
        } else {
            &self.title
        }
    }

    pub fn body(&self) -> &str {
        if self.body.is_empty() {
            NO_CONTENT
        } else {
            &self.body
        }
    }

    /// Creation date as `Mon D, YYYY`
    pub fn date(&self) -> String {
        format_date(&self.created_at)
    }

    pub fn is_archived(&self) -> bool {
        self.archived
    }

    pub fn status_label(&self) -> &'static str {
        if self.archived { "Archived" } else { "Active" }
    }

    /// Label of the button that flips the archived flag
    pub fn toggle_label(&self) -> &'static str {
        if self.archived { "Unarchive" } else { "Archive" }
    }

    pub fn delete(&self) -> Command {
        Command::DeleteNote {
            id: self.id.clone(),
        }
    }

    pub fn toggle_archive(&self) -> Command {
        Command::ToggleArchive {
            id: self.id.clone(),
            archived_before: self.archived,
        }
    }
}

impl From<&Note> for NoteItem {
    fn from(note: &Note) -> Self {
        NoteItem::new(note)
    }
}

/// Format a service timestamp as `Mon D, YYYY` in UTC.
///
/// Accepts RFC 3339 timestamps as well as bare civil datetimes and dates;
/// anything else is returned unchanged.
pub fn format_date(raw: &str) -> String {
    let date = if let Ok(ts) = raw.parse::<Timestamp>() {
        ts.to_zoned(TimeZone::UTC).date()
    } else if let Ok(dt) = raw.parse::<DateTime>() {
        dt.date()
    } else if let Ok(date) = raw.parse::<Date>() {
        date
    } else {
        return raw.to_string();
    };
    date.strftime("%b %-d, %Y").to_string()
}
