//! Application controller.
//!
//! Owns the only copy of the note list. It loads the notes at startup, runs
//! each [`Command`] against the [`NotesService`], and after every successful
//! mutation reloads the full list and publishes a fresh [`BoardSnapshot`].
//! Commands are processed strictly one at a time, so reload cycles never
//! interleave.

mod command;

pub use command::Command;

use tokio::sync::{mpsc, watch};

use crate::api::NotesApi;
use crate::config::UiConfig;
use crate::error::Result;
use crate::service::{Listing, NotesService};
use crate::types::{Note, NoteDraft};
use crate::views::{NotesGrid, validate_draft};

pub const NOTE_ADDED: &str = "Note added successfully!";
pub const NOTE_DELETED: &str = "Note deleted successfully!";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this note?";

/// Capacity of the command queue between the UI and the controller
pub const COMMAND_QUEUE_SIZE: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Reloading,
}

/// How a command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The service accepted the change and the board was reloaded
    Applied,
    /// The user declined the confirmation; nothing was sent
    Declined,
    /// The command was rejected locally or by the service; the user was told
    Failed,
}

impl CommandOutcome {
    pub fn is_applied(self) -> bool {
        self == CommandOutcome::Applied
    }
}

/// Everything the UI draws, as of the last reload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub active: NotesGrid,
    pub archived: NotesGrid,
    /// Set when the last reload failed; both grids are then empty
    pub load_error: Option<String>,
    /// Incremented on every publish; 0 means nothing has loaded yet
    pub generation: u64,
}

impl BoardSnapshot {
    fn empty(ui: &UiConfig) -> Self {
        Self {
            active: NotesGrid::new(&ui.empty_message),
            archived: NotesGrid::new(&ui.archived_empty_message),
            load_error: None,
            generation: 0,
        }
    }
}

/// Split notes into (active, archived), keeping their order
pub fn partition_notes(notes: &[Note]) -> (Vec<Note>, Vec<Note>) {
    notes.iter().cloned().partition(|note| !note.archived)
}

/// Messages accepted by [`Controller::run`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Command(Command),
    Reload,
}

/// Cloneable handle for queueing work on a running controller
#[derive(Debug, Clone)]
pub struct CommandSender {
    tx: mpsc::Sender<Request>,
}

impl CommandSender {
    pub fn channel() -> (Self, mpsc::Receiver<Request>) {
        let (tx, rx) = mpsc::channel(COMMAND_QUEUE_SIZE);
        (Self { tx }, rx)
    }

    /// Queue a command without waiting. Returns false when the queue is full
    /// or the controller has stopped.
    pub fn send(&self, command: Command) -> bool {
        let event = command.event_name();
        match self.tx.try_send(Request::Command(command)) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("dropped {event}: {e}");
                false
            }
        }
    }

    pub fn reload(&self) -> bool {
        self.tx.try_send(Request::Reload).is_ok()
    }
}

pub struct Controller<A> {
    service: NotesService<A>,
    state: ControllerState,
    board: watch::Sender<BoardSnapshot>,
}

impl<A: NotesApi> Controller<A> {
    pub fn new(service: NotesService<A>, ui: &UiConfig) -> (Self, watch::Receiver<BoardSnapshot>) {
        let (board, rx) = watch::channel(BoardSnapshot::empty(ui));
        let controller = Self {
            service,
            state: ControllerState::Idle,
            board,
        };
        (controller, rx)
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn service(&self) -> &NotesService<A> {
        &self.service
    }

    /// The board as last published
    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.borrow().clone()
    }

    /// Load every note and republish both grids
    pub async fn reload(&mut self) -> Listing {
        self.state = ControllerState::Reloading;
        let listing = self.service.list_notes().await;
        self.render(&listing);
        self.state = ControllerState::Idle;
        listing
    }

    fn render(&self, listing: &Listing) {
        let (active, archived) = partition_notes(listing.notes());
        self.board.send_modify(|board| {
            board.active.set_notes(&active);
            board.archived.set_notes(&archived);
            board.load_error = listing.error_message().map(str::to_string);
            board.generation += 1;
        });
        tracing::debug!(
            "rendered {} active and {} archived notes",
            active.len(),
            archived.len()
        );
    }

    /// Carry out one command and reload after a successful mutation
    pub async fn handle(&mut self, command: Command) -> CommandOutcome {
        let event = command.event_name();
        tracing::debug!("handling {event}");

        let result = match command {
            Command::CreateNote { title, body } => self.create(title, body).await,
            Command::DeleteNote { id } => {
                if !self.service.notifier().confirm(CONFIRM_DELETE).await {
                    tracing::info!("{event}: {id} kept, deletion declined");
                    return CommandOutcome::Declined;
                }
                self.service.delete_note(&id).await.map(|note| {
                    tracing::info!("deleted note {}", note.id);
                    self.service.notifier().success(NOTE_DELETED);
                })
            }
            Command::ToggleArchive {
                id,
                archived_before,
            } => {
                let status = if archived_before {
                    self.service.unarchive_note(&id).await
                } else {
                    self.service.archive_note(&id).await
                };
                status.map(|status| {
                    tracing::info!("note {} archived: {}", status.id, status.archived);
                })
            }
        };

        match result {
            Ok(()) => {
                self.reload().await;
                CommandOutcome::Applied
            }
            Err(e) => {
                tracing::error!("{event} failed: {e}");
                CommandOutcome::Failed
            }
        }
    }

    async fn create(&self, title: String, body: String) -> Result<()> {
        if let Err(errors) = validate_draft(&title, &body) {
            self.service.notifier().error(&errors.to_string());
            return Err(errors.into());
        }

        let note = self.service.create_note(&NoteDraft { title, body }).await?;
        tracing::info!("created note {}", note.id);
        self.service.notifier().success(NOTE_ADDED);
        Ok(())
    }

    /// Load once, then process queued requests until every sender is gone
    pub async fn run(mut self, mut requests: mpsc::Receiver<Request>) {
        self.reload().await;

        while let Some(request) = requests.recv().await {
            match request {
                Request::Command(command) => {
                    self.handle(command).await;
                }
                Request::Reload => {
                    self.reload().await;
                }
            }
        }
        tracing::debug!("command queue closed, controller stopping");
    }
}
