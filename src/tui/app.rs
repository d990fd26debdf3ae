//! Main notes TUI component
//!
//! The component owns a [`UiModel`] and talks to the running controller only
//! through a [`UiBridge`]: commands go out on the controller's queue, board
//! snapshots and the busy count come back on `watch` channels, and notices
//! and confirmation requests arrive from the [`ChannelNotifier`].
//!
//! [`ChannelNotifier`]: crate::notify::ChannelNotifier

use std::sync::Arc;
use std::time::{Duration, Instant};

use iocraft::prelude::*;
use parking_lot::Mutex;
use tokio::sync::{mpsc, oneshot, watch};

use crate::controller::{BoardSnapshot, Command, CommandSender};
use crate::notify::UiEvent;
use crate::views::AppBar;

use super::components::{
    BusyOverlay, ConfirmDialog, Footer, NoteFormPanel, NotesColumn, TitleBar, ToastBar,
    shortcuts_for,
};
use super::keymap::key_to_action;
use super::model::{Effect, Focus, UiModel};
use super::theme::theme;

/// Lines taken by the form: heading plus two inputs with their error rows
const FORM_HEIGHT: u16 = 9;

/// Channels between the TUI and a running controller
pub struct UiBridge {
    commands: CommandSender,
    events: Mutex<Option<mpsc::UnboundedReceiver<UiEvent>>>,
    board: watch::Receiver<BoardSnapshot>,
    busy: watch::Receiver<usize>,
    pending_reply: Mutex<Option<oneshot::Sender<bool>>>,
}

impl UiBridge {
    pub fn new(
        commands: CommandSender,
        events: mpsc::UnboundedReceiver<UiEvent>,
        board: watch::Receiver<BoardSnapshot>,
        busy: watch::Receiver<usize>,
    ) -> Self {
        Self {
            commands,
            events: Mutex::new(Some(events)),
            board,
            busy,
            pending_reply: Mutex::new(None),
        }
    }

    /// The board as last published by the controller
    pub fn board(&self) -> BoardSnapshot {
        self.board.borrow().clone()
    }

    pub fn send(&self, command: Command) {
        self.commands.send(command);
    }

    pub fn reload(&self) {
        if !self.commands.reload() {
            tracing::warn!("reload request dropped");
        }
    }

    /// The notifier's event stream. Only the first caller gets it.
    fn take_events(&self) -> Option<mpsc::UnboundedReceiver<UiEvent>> {
        self.events.lock().take()
    }

    /// Hold on to the reply channel of the confirmation being shown. A
    /// question still waiting for an answer is declined.
    fn park_reply(&self, reply: oneshot::Sender<bool>) {
        if let Some(previous) = self.pending_reply.lock().replace(reply) {
            let _ = previous.send(false);
        }
    }

    /// Answer the pending confirmation, if there is one
    pub fn answer(&self, yes: bool) {
        if let Some(reply) = self.pending_reply.lock().take() {
            let _ = reply.send(yes);
        }
    }
}

#[derive(Default, Props)]
pub struct NotesAppProps {
    pub bridge: Option<Arc<UiBridge>>,
    pub title: String,
}

/// Layout:
/// ```text
/// +------------------------------------------+
/// | Notes App            2 active / 1 archived|
/// | New note                                 |
/// | [Title ...........................]      |
/// | [Body  ...........................]      |
/// +---------------------+--------------------+
/// | Active Notes        | Archived Notes     |
/// |  card               |  card              |
/// +---------------------+--------------------+
/// | toast                                    |
/// | Footer with shortcuts                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn NotesApp<'a>(props: &NotesAppProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let bridge = props.bridge.clone();

    let mut model = hooks.use_state(|| {
        UiModel::new(bridge.as_ref().map(|b| b.board()).unwrap_or_default())
    });
    let mut should_exit = hooks.use_state(|| false);

    // Board snapshots from the controller
    hooks.use_future({
        let bridge = bridge.clone();
        async move {
            let Some(bridge) = bridge else { return };
            let mut board = bridge.board.clone();
            while board.changed().await.is_ok() {
                let snapshot = board.borrow_and_update().clone();
                model.write().set_board(snapshot);
            }
        }
    });

    // Busy count
    hooks.use_future({
        let bridge = bridge.clone();
        async move {
            let Some(bridge) = bridge else { return };
            let mut busy = bridge.busy.clone();
            loop {
                let in_flight = *busy.borrow_and_update();
                if model.read().busy != (in_flight > 0) {
                    model.write().busy = in_flight > 0;
                }
                if busy.changed().await.is_err() {
                    break;
                }
            }
        }
    });

    // Notices and confirmation requests
    hooks.use_future({
        let bridge = bridge.clone();
        async move {
            let Some(bridge) = bridge else { return };
            let Some(mut events) = bridge.take_events() else {
                return;
            };
            while let Some(event) = events.recv().await {
                match event {
                    UiEvent::Notice(notice) => model.write().show_notice(notice),
                    UiEvent::Confirm { message, reply } => {
                        bridge.park_reply(reply);
                        model.write().ask(message);
                    }
                }
            }
        }
    });

    // Toast expiry
    hooks.use_future(async move {
        loop {
            tokio::time::sleep(Duration::from_millis(250)).await;
            if model.read().toast_expired(Instant::now()) {
                model.write().toast = None;
            }
        }
    });

    hooks.use_terminal_events({
        let bridge = bridge.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let ctx = model.read().key_context();
                let Some(action) = key_to_action(code, modifiers, ctx) else {
                    return;
                };
                let effect = model.write().apply(action);
                match (effect, bridge.as_ref()) {
                    (Effect::Quit, _) => should_exit.set(true),
                    (Effect::Send(command), Some(bridge)) => bridge.send(command),
                    (Effect::Reload, Some(bridge)) => bridge.reload(),
                    (Effect::Answer(yes), Some(bridge)) => bridge.answer(yes),
                    _ => {}
                }
            }
            _ => {}
        }
    });

    if should_exit.get() {
        if let Some(bridge) = &bridge {
            bridge.answer(false);
        }
        system.exit();
    }

    let theme = theme();
    let (board, focus, active_index, archived_index, toast, confirm, busy) = {
        let m = model.read();
        (
            m.board.clone(),
            m.focus,
            m.active_index,
            m.archived_index,
            m.toast.clone(),
            m.confirm.clone(),
            m.busy,
        )
    };

    let toast_height = if toast.is_some() { 3 } else { 0 };
    let error_height = if board.load_error.is_some() { 1 } else { 0 };
    let columns_height = height
        .saturating_sub(1 + FORM_HEIGHT + 1 + toast_height + error_height)
        .max(3) as u32;
    let column_width = (width / 2) as u32;
    let shortcuts = shortcuts_for(focus, confirm.is_some());

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
            position: Position::Relative,
        ) {
            TitleBar(
                app_bar: AppBar::new(props.title.clone()),
                active_count: board.active.len(),
                archived_count: board.archived.len(),
            )

            View(padding_left: 1, padding_right: 1, flex_shrink: 0.0) {
                NoteFormPanel(model: Some(model))
            }

            #(board.load_error.clone().map(|message| element! {
                View(height: 1, padding_left: 1) {
                    Text(content: message, color: theme.error)
                }
            }))

            View(flex_direction: FlexDirection::Row, flex_grow: 1.0) {
                NotesColumn(
                    heading: "Active Notes".to_string(),
                    grid: Some(board.active.clone()),
                    selected: active_index,
                    has_focus: focus == Focus::Active,
                    width: column_width,
                    height: columns_height,
                )
                NotesColumn(
                    heading: "Archived Notes".to_string(),
                    grid: Some(board.archived.clone()),
                    selected: archived_index,
                    has_focus: focus == Focus::Archived,
                    width: column_width,
                    height: columns_height,
                )
            }

            ToastBar(toast: toast)
            Footer(shortcuts: shortcuts)

            #(busy.then(|| element! { BusyOverlay() }))
            #(confirm.map(|message| element! {
                ConfirmDialog(message: message)
            }))
        }
    }
}
