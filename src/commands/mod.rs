mod config;
mod notes;
mod ui;

pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use notes::{cmd_add, cmd_archive, cmd_ls, cmd_rm, cmd_unarchive, ListFilter};
pub use ui::cmd_ui;

use std::sync::Arc;

use serde_json::Value;

use crate::api::{Backend, HttpNotesApi, InMemoryNotesApi};
use crate::busy::BusyIndicator;
use crate::config::Config;
use crate::controller::{CommandOutcome, Controller};
use crate::error::{NotesError, Result};
use crate::notify::{AutoConfirm, ConsoleNotifier, Notifier};
use crate::service::NotesService;

/// Output of a command that supports `--json`
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    /// Text shown instead of the JSON when `--json` is not given
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn print(self, json: bool) -> Result<()> {
        match self.text {
            Some(text) if !json => println!("{text}"),
            _ => print_json(&self.json)?,
        }
        Ok(())
    }
}

/// Print a JSON value to stdout with pretty formatting
pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Open the transport selected on the command line
pub fn open_backend(config: &Config, memory: bool) -> Result<Backend> {
    if memory {
        tracing::debug!("using in-memory notes store");
        return Ok(Backend::Memory(InMemoryNotesApi::new()));
    }
    Ok(Backend::Http(HttpNotesApi::from_config(config)?))
}

/// Controller for one-shot commands: notices go to the console and
/// confirmations are read from stdin unless `yes` is set
pub fn console_controller(config: &Config, memory: bool, yes: bool) -> Result<Controller<Backend>> {
    let notifier: Arc<dyn Notifier> = if yes {
        Arc::new(AutoConfirm::new(ConsoleNotifier))
    } else {
        Arc::new(ConsoleNotifier)
    };
    let service = NotesService::new(open_backend(config, memory)?, BusyIndicator::new(), notifier);
    let (controller, _board) = Controller::new(service, &config.ui);
    Ok(controller)
}

/// Turn a command outcome into the process result. Failures were already
/// shown by the notifier.
fn outcome_to_result(outcome: CommandOutcome, what: &str) -> Result<()> {
    match outcome {
        CommandOutcome::Applied => Ok(()),
        CommandOutcome::Declined => Err(NotesError::Reported(format!("{what} cancelled"))),
        CommandOutcome::Failed => Err(NotesError::Reported(format!("{what} failed"))),
    }
}
