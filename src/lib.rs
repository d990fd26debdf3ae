pub mod api;
pub mod busy;
pub mod cli;
pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod notify;
pub mod service;
pub mod text;
pub mod tui;
pub mod types;
pub mod views;

pub use api::{Backend, HttpNotesApi, InMemoryNotesApi, NotesApi};
pub use busy::{BusyGuard, BusyIndicator};
pub use config::Config;
pub use controller::{BoardSnapshot, Command, CommandOutcome, CommandSender, Controller};
pub use error::{NotesError, Result};
pub use notify::{Notice, NoticeLevel, Notifier};
pub use service::{Listing, NotesService};
pub use types::{ArchiveStatus, Note, NoteDraft, NoteId};
