//! Renderer-independent view models.
//!
//! Each view holds exactly what is drawn and turns user actions into
//! [`crate::controller::Command`]s. The TUI components in
//! [`crate::tui::components`] draw them; tests drive them directly.

pub mod app_bar;
pub mod note_form;
pub mod note_item;
pub mod notes_grid;

pub use app_bar::AppBar;
pub use note_form::{Field, NoteForm, ValidationErrors, validate_draft};
pub use note_item::{NoteItem, format_date};
pub use notes_grid::NotesGrid;
