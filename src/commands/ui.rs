//! Notes board TUI (`noteboard ui`, also the default command)

use std::sync::Arc;

use iocraft::prelude::*;

use super::open_backend;
use crate::busy::BusyIndicator;
use crate::config::Config;
use crate::controller::{CommandSender, Controller};
use crate::error::{NotesError, Result};
use crate::notify::ChannelNotifier;
use crate::service::NotesService;
use crate::tui::{NotesApp, UiBridge};

/// Launch the notes TUI
pub async fn cmd_ui(memory: bool) -> Result<()> {
    let config = Config::load()?;
    let api = open_backend(&config, memory)?;

    let (notifier, events) = ChannelNotifier::new();
    let busy = BusyIndicator::new();
    let busy_rx = busy.subscribe();
    let service = NotesService::new(api, busy, Arc::new(notifier));
    let (controller, board) = Controller::new(service, &config.ui);

    // The controller loads once, then works through the queue until the UI drops its sender
    let (commands, requests) = CommandSender::channel();
    let worker = tokio::spawn(controller.run(requests));

    let bridge = Arc::new(UiBridge::new(commands, events, board, busy_rx));
    let result = element!(NotesApp(bridge: Some(bridge), title: config.ui.title.clone()))
        .fullscreen()
        .await
        .map_err(|e| NotesError::Other(format!("TUI error: {e}")));

    // A request may still be in flight; its outcome has nowhere to go
    worker.abort();
    result
}
