//! One-shot note commands: `ls`, `add`, `rm`, `archive`, `unarchive`.
//!
//! Each command drives the same [`Controller`] the TUI uses, with a console
//! notifier in place of toasts and dialogs.
//!
//! [`Controller`]: crate::controller::Controller

use owo_colors::OwoColorize;
use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{CommandOutput, console_controller, outcome_to_result};
use crate::config::Config;
use crate::controller::Command;
use crate::error::{NotesError, Result};
use crate::text::truncate;
use crate::types::{Note, NoteId};
use crate::views::{NoteItem, NotesGrid, validate_draft};

/// Longest body excerpt shown in the `ls` table
const BODY_COLUMN_WIDTH: usize = 40;

/// Which partition `ls` prints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListFilter {
    #[default]
    All,
    Active,
    Archived,
}

impl ListFilter {
    pub fn from_flags(active: bool, archived: bool) -> Self {
        match (active, archived) {
            (true, false) => ListFilter::Active,
            (false, true) => ListFilter::Archived,
            _ => ListFilter::All,
        }
    }

    fn shows_active(self) -> bool {
        self != ListFilter::Archived
    }

    fn shows_archived(self) -> bool {
        self != ListFilter::Active
    }
}

#[derive(Tabled)]
struct NoteRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Body")]
    body: String,
    #[tabled(rename = "Created")]
    created: String,
}

impl From<&NoteItem> for NoteRow {
    fn from(item: &NoteItem) -> Self {
        NoteRow {
            id: item.id().to_string(),
            title: item.title().to_string(),
            body: truncate(item.body(), BODY_COLUMN_WIDTH),
            created: item.date(),
        }
    }
}

fn note_json(note: &Note) -> serde_json::Value {
    json!({
        "id": note.id,
        "title": note.title,
        "body": note.body,
        "createdAt": note.created_at,
        "archived": note.archived,
    })
}

/// One heading plus either a table or the grid's empty message
fn render_section(heading: &str, grid: &NotesGrid) -> String {
    let heading = format!("{} ({})", heading, grid.len());
    let heading = heading.cyan().bold().to_string();
    match grid.empty_message() {
        Some(message) => format!("{heading}\n{}", message.dimmed()),
        None => {
            let rows: Vec<NoteRow> = grid.items().iter().map(NoteRow::from).collect();
            let table = Table::new(rows).with(Style::rounded()).to_string();
            format!("{heading}\n{table}")
        }
    }
}

/// Load every note and print the requested partitions
pub async fn cmd_ls(filter: ListFilter, memory: bool, json: bool) -> Result<()> {
    let config = Config::load()?;
    let mut controller = console_controller(&config, memory, false)?;

    let listing = controller.reload().await;
    if let Some(message) = listing.error_message() {
        return Err(NotesError::Reported(message.to_string()));
    }

    let board = controller.snapshot();
    let notes = listing.notes();
    let active: Vec<_> = notes
        .iter()
        .filter(|n| !n.archived && filter.shows_active())
        .map(note_json)
        .collect();
    let archived: Vec<_> = notes
        .iter()
        .filter(|n| n.archived && filter.shows_archived())
        .map(note_json)
        .collect();

    let mut sections = Vec::new();
    if filter.shows_active() {
        sections.push(render_section("Active Notes", &board.active));
    }
    if filter.shows_archived() {
        sections.push(render_section("Archived Notes", &board.archived));
    }

    let json_output = match filter {
        ListFilter::All => json!({ "active": active, "archived": archived }),
        ListFilter::Active => json!({ "active": active }),
        ListFilter::Archived => json!({ "archived": archived }),
    };

    CommandOutput::new(json_output)
        .with_text(sections.join("\n\n"))
        .print(json)
}

/// Validate and create a note
pub async fn cmd_add(title: &str, body: &str, memory: bool) -> Result<()> {
    // Checked here as well so an invalid note fails before any connection is set up
    validate_draft(title, body)?;

    let config = Config::load()?;
    let mut controller = console_controller(&config, memory, false)?;
    let outcome = controller
        .handle(Command::CreateNote {
            title: title.to_string(),
            body: body.to_string(),
        })
        .await;
    outcome_to_result(outcome, "add")
}

/// Delete a note after confirmation
pub async fn cmd_rm(id: &str, yes: bool, memory: bool) -> Result<()> {
    let config = Config::load()?;
    let mut controller = console_controller(&config, memory, yes)?;
    let outcome = controller
        .handle(Command::DeleteNote {
            id: NoteId::from(id),
        })
        .await;
    outcome_to_result(outcome, "delete")
}

pub async fn cmd_archive(id: &str, memory: bool) -> Result<()> {
    set_archived(id, true, memory).await
}

pub async fn cmd_unarchive(id: &str, memory: bool) -> Result<()> {
    set_archived(id, false, memory).await
}

async fn set_archived(id: &str, archived: bool, memory: bool) -> Result<()> {
    let config = Config::load()?;
    let mut controller = console_controller(&config, memory, false)?;
    let outcome = controller
        .handle(Command::ToggleArchive {
            id: NoteId::from(id),
            archived_before: !archived,
        })
        .await;
    outcome_to_result(outcome, if archived { "archive" } else { "unarchive" })?;

    let verb = if archived { "Archived" } else { "Unarchived" };
    println!("{} {}", format!("{verb} note").green(), id.cyan());
    Ok(())
}
