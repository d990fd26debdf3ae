//! Key-to-action mapping for the notes TUI
//!
//! Converts raw `(KeyCode, KeyModifiers)` pairs into [`UiAction`]s, taking the
//! focused pane and any open dialog into account so each key press resolves
//! to at most one action.

use iocraft::prelude::{KeyCode, KeyModifiers};

use super::model::Focus;

/// All actions the notes TUI dispatches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    // Focus
    FocusNext,
    FocusPrev,
    /// Leave the form for the active notes grid
    LeaveForm,

    // Form
    Submit,

    // Grid navigation
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,

    // Note operations
    ToggleArchive,
    Delete,
    Reload,

    // Confirm dialog
    ConfirmYes,
    ConfirmNo,

    DismissToast,
    Quit,

    /// Key was recognised but requires no further action (absorb it)
    Consumed,
}

/// What the key mapper needs to know about the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyContext {
    pub focus: Focus,
    pub confirming: bool,
}

/// Map a raw key event to a [`UiAction`].
///
/// Returns `None` when the key has no mapping in the current context, which
/// lets a focused text input handle it as typing.
pub fn key_to_action(code: KeyCode, modifiers: KeyModifiers, ctx: KeyContext) -> Option<UiAction> {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Some(UiAction::Quit);
    }

    // The confirm dialog captures all keys
    if ctx.confirming {
        return Some(confirm_key(code));
    }

    match ctx.focus {
        Focus::Title | Focus::Body => form_key(code),
        Focus::Active | Focus::Archived => grid_key(code, modifiers),
    }
}

fn confirm_key(code: KeyCode) -> UiAction {
    match code {
        KeyCode::Char('y') | KeyCode::Char('Y') => UiAction::ConfirmYes,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => UiAction::ConfirmNo,
        _ => UiAction::Consumed,
    }
}

/// Keys recognised while a form field has focus. Everything else is typing.
fn form_key(code: KeyCode) -> Option<UiAction> {
    match code {
        KeyCode::Tab => Some(UiAction::FocusNext),
        KeyCode::BackTab => Some(UiAction::FocusPrev),
        KeyCode::Enter => Some(UiAction::Submit),
        KeyCode::Esc => Some(UiAction::LeaveForm),
        _ => None,
    }
}

fn grid_key(code: KeyCode, modifiers: KeyModifiers) -> Option<UiAction> {
    if modifiers.contains(KeyModifiers::SHIFT) {
        return match code {
            KeyCode::Char('G') | KeyCode::Char('g') => Some(UiAction::GoToBottom),
            KeyCode::BackTab | KeyCode::Tab => Some(UiAction::FocusPrev),
            _ => None,
        };
    }

    match code {
        KeyCode::Tab => Some(UiAction::FocusNext),
        KeyCode::BackTab => Some(UiAction::FocusPrev),

        KeyCode::Char('j') | KeyCode::Down => Some(UiAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(UiAction::MoveUp),
        KeyCode::Char('g') | KeyCode::Home => Some(UiAction::GoToTop),
        KeyCode::Char('G') | KeyCode::End => Some(UiAction::GoToBottom),

        KeyCode::Char('a') => Some(UiAction::ToggleArchive),
        KeyCode::Char('d') | KeyCode::Delete => Some(UiAction::Delete),
        KeyCode::Char('r') => Some(UiAction::Reload),

        KeyCode::Esc => Some(UiAction::DismissToast),
        KeyCode::Char('q') => Some(UiAction::Quit),
        _ => None,
    }
}
