//! Notes TUI model for testable state management
//!
//! All screen state lives in [`UiModel`]. Key presses become [`UiAction`]s,
//! and applying one returns the [`Effect`] the component has to carry out,
//! so the whole interaction can be unit tested without iocraft.

use std::ops::Range;
use std::time::{Duration, Instant};

use crate::controller::{BoardSnapshot, Command};
use crate::notify::Notice;
use crate::views::{NoteForm, NoteItem, NotesGrid};

use super::keymap::{KeyContext, UiAction};

/// How long a notice stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Which part of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Title,
    Body,
    Active,
    Archived,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Title => Focus::Body,
            Focus::Body => Focus::Active,
            Focus::Active => Focus::Archived,
            Focus::Archived => Focus::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Title => Focus::Archived,
            Focus::Body => Focus::Title,
            Focus::Active => Focus::Body,
            Focus::Archived => Focus::Active,
        }
    }

    /// Whether a text field has focus
    pub fn is_form(self) -> bool {
        matches!(self, Focus::Title | Focus::Body)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub notice: Notice,
    pub shown_at: Instant,
}

/// What the component must do after an action is applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Send(Command),
    Reload,
    /// Answer the pending confirmation
    Answer(bool),
    Quit,
}

#[derive(Debug, Clone)]
pub struct UiModel {
    pub form: NoteForm,
    pub focus: Focus,
    pub board: BoardSnapshot,
    pub active_index: usize,
    pub archived_index: usize,
    /// Question of the confirmation dialog, while one is open
    pub confirm: Option<String>,
    pub toast: Option<Toast>,
    pub busy: bool,
}

impl UiModel {
    pub fn new(board: BoardSnapshot) -> Self {
        Self {
            form: NoteForm::new(),
            focus: Focus::default(),
            board,
            active_index: 0,
            archived_index: 0,
            confirm: None,
            toast: None,
            busy: false,
        }
    }

    pub fn key_context(&self) -> KeyContext {
        KeyContext {
            focus: self.focus,
            confirming: self.confirm.is_some(),
        }
    }

    /// Take a freshly published board, keeping selections in range
    pub fn set_board(&mut self, board: BoardSnapshot) {
        self.active_index = clamp_index(self.active_index, board.active.len());
        self.archived_index = clamp_index(self.archived_index, board.archived.len());
        self.board = board;
    }

    pub fn show_notice(&mut self, notice: Notice) {
        self.toast = Some(Toast {
            notice,
            shown_at: Instant::now(),
        });
    }

    /// Open the confirmation dialog
    pub fn ask(&mut self, message: impl Into<String>) {
        self.confirm = Some(message.into());
    }

    /// Whether the toast has been up for longer than [`TOAST_DURATION`]
    pub fn toast_expired(&self, now: Instant) -> bool {
        self.toast
            .as_ref()
            .is_some_and(|t| now.duration_since(t.shown_at) >= TOAST_DURATION)
    }

    /// The grid under focus, if a grid has focus
    pub fn focused_grid(&self) -> Option<&NotesGrid> {
        match self.focus {
            Focus::Active => Some(&self.board.active),
            Focus::Archived => Some(&self.board.archived),
            Focus::Title | Focus::Body => None,
        }
    }

    /// The highlighted note in the focused grid
    pub fn selected(&self) -> Option<&NoteItem> {
        match self.focus {
            Focus::Active => self.board.active.get(self.active_index),
            Focus::Archived => self.board.archived.get(self.archived_index),
            Focus::Title | Focus::Body => None,
        }
    }

    fn move_selection(&mut self, f: impl FnOnce(usize, usize) -> usize) {
        let len = self.focused_grid().map_or(0, NotesGrid::len);
        let index = match self.focus {
            Focus::Active => &mut self.active_index,
            Focus::Archived => &mut self.archived_index,
            Focus::Title | Focus::Body => return,
        };
        if len > 0 {
            *index = f(*index, len);
        }
    }

    pub fn apply(&mut self, action: UiAction) -> Effect {
        match action {
            UiAction::FocusNext => self.focus = self.focus.next(),
            UiAction::FocusPrev => self.focus = self.focus.prev(),
            UiAction::LeaveForm => self.focus = Focus::Active,

            UiAction::Submit if self.focus.is_form() => {
                if let Some(command) = self.form.submit() {
                    self.focus = Focus::Title;
                    return Effect::Send(command);
                }
            }
            UiAction::Submit => {}

            UiAction::MoveUp => self.move_selection(|i, _| i.saturating_sub(1)),
            UiAction::MoveDown => self.move_selection(|i, len| (i + 1).min(len - 1)),
            UiAction::GoToTop => self.move_selection(|_, _| 0),
            UiAction::GoToBottom => self.move_selection(|_, len| len - 1),

            UiAction::ToggleArchive => {
                if let Some(item) = self.selected() {
                    return Effect::Send(item.toggle_archive());
                }
            }
            UiAction::Delete => {
                if let Some(item) = self.selected() {
                    return Effect::Send(item.delete());
                }
            }
            UiAction::Reload => return Effect::Reload,

            UiAction::ConfirmYes | UiAction::ConfirmNo => {
                if self.confirm.take().is_some() {
                    return Effect::Answer(action == UiAction::ConfirmYes);
                }
            }

            UiAction::DismissToast => self.toast = None,
            UiAction::Quit => return Effect::Quit,
            UiAction::Consumed => {}
        }
        Effect::None
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}

/// Items to draw so that `selected` stays visible with room for `capacity`
pub fn visible_window(selected: usize, len: usize, capacity: usize) -> Range<usize> {
    let capacity = capacity.max(1);
    if len <= capacity {
        return 0..len;
    }
    let start = selected.saturating_sub(capacity - 1).min(len - capacity);
    start..start + capacity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;
    use crate::controller::partition_notes;
    use crate::types::{Note, NoteId};

    fn note(id: &str, archived: bool) -> Note {
        Note {
            id: NoteId::from(id),
            title: format!("Note {id}"),
            body: "Some body text".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            archived,
        }
    }

    fn board(notes: &[Note]) -> BoardSnapshot {
        let ui = UiConfig::default();
        let (active, archived) = partition_notes(notes);
        let mut active_grid = NotesGrid::new(ui.empty_message);
        active_grid.set_notes(&active);
        let mut archived_grid = NotesGrid::new(ui.archived_empty_message);
        archived_grid.set_notes(&archived);
        BoardSnapshot {
            active: active_grid,
            archived: archived_grid,
            load_error: None,
            generation: 1,
        }
    }

    fn model() -> UiModel {
        UiModel::new(board(&[
            note("a", false),
            note("b", false),
            note("c", true),
        ]))
    }

    #[test]
    fn test_focus_cycle() {
        let mut m = model();
        assert_eq!(m.focus, Focus::Title);
        for expected in [Focus::Body, Focus::Active, Focus::Archived, Focus::Title] {
            m.apply(UiAction::FocusNext);
            assert_eq!(m.focus, expected);
        }
        m.apply(UiAction::FocusPrev);
        assert_eq!(m.focus, Focus::Archived);
    }

    #[test]
    fn test_submit_valid_form_sends_create() {
        let mut m = model();
        m.form.set_title("Groceries");
        m.form.set_body("Milk and eggs");
        m.focus = Focus::Body;

        let effect = m.apply(UiAction::Submit);
        assert_eq!(
            effect,
            Effect::Send(Command::CreateNote {
                title: "Groceries".to_string(),
                body: "Milk and eggs".to_string(),
            })
        );
        assert_eq!(m.form.title(), "");
        assert_eq!(m.focus, Focus::Title);
    }

    #[test]
    fn test_submit_invalid_form_sends_nothing() {
        let mut m = model();
        m.form.set_title("ab");
        assert_eq!(m.apply(UiAction::Submit), Effect::None);
        assert!(m.form.error(crate::views::Field::Body).is_some());
    }

    #[test]
    fn test_selection_moves_and_clamps() {
        let mut m = model();
        m.focus = Focus::Active;
        m.apply(UiAction::MoveDown);
        m.apply(UiAction::MoveDown);
        assert_eq!(m.active_index, 1);
        assert_eq!(m.selected().map(|i| i.id().as_str()), Some("b"));

        m.set_board(board(&[note("a", false)]));
        assert_eq!(m.active_index, 0);

        m.set_board(board(&[]));
        assert_eq!(m.selected(), None);
        assert_eq!(m.apply(UiAction::Delete), Effect::None);
    }

    #[test]
    fn test_toggle_in_archived_grid_unarchives() {
        let mut m = model();
        m.focus = Focus::Archived;
        assert_eq!(
            m.apply(UiAction::ToggleArchive),
            Effect::Send(Command::ToggleArchive {
                id: NoteId::from("c"),
                archived_before: true,
            })
        );
    }

    #[test]
    fn test_delete_sends_selected_id() {
        let mut m = model();
        m.focus = Focus::Active;
        m.apply(UiAction::GoToBottom);
        assert_eq!(
            m.apply(UiAction::Delete),
            Effect::Send(Command::DeleteNote {
                id: NoteId::from("b")
            })
        );
    }

    #[test]
    fn test_confirm_answers_once() {
        let mut m = model();
        m.ask("Are you sure you want to delete this note?");
        assert!(m.key_context().confirming);

        assert_eq!(m.apply(UiAction::ConfirmNo), Effect::Answer(false));
        assert!(m.confirm.is_none());
        assert_eq!(m.apply(UiAction::ConfirmYes), Effect::None);
    }

    #[test]
    fn test_toast_expiry() {
        let mut m = model();
        m.show_notice(Notice::success("Note added successfully!"));
        let shown = m.toast.as_ref().map(|t| t.shown_at).unwrap();

        assert!(!m.toast_expired(shown));
        assert!(m.toast_expired(shown + TOAST_DURATION));
    }

    #[test]
    fn test_visible_window() {
        assert_eq!(visible_window(0, 3, 5), 0..3);
        assert_eq!(visible_window(0, 10, 4), 0..4);
        assert_eq!(visible_window(5, 10, 4), 2..6);
        assert_eq!(visible_window(9, 10, 4), 6..10);
        assert_eq!(visible_window(0, 10, 0), 0..1);
    }
}
