//! Components that draw the notes view models

pub mod busy_overlay;
pub mod confirm_dialog;
pub mod footer;
pub mod modal;
pub mod note_card;
pub mod note_form;
pub mod notes_grid;
pub mod title_bar;
pub mod toast;

pub use busy_overlay::{BusyOverlay, BusyOverlayProps};
pub use confirm_dialog::{ConfirmDialog, ConfirmDialogProps};
pub use footer::{Footer, FooterProps, Shortcut, shortcuts_for};
pub use modal::{ModalBox, ModalBoxProps, ModalOverlay, ModalOverlayProps};
pub use note_card::{NoteCard, NoteCardProps};
pub use note_form::{NoteFormPanel, NoteFormPanelProps};
pub use notes_grid::{NotesColumn, NotesColumnProps};
pub use title_bar::{TitleBar, TitleBarProps};
pub use toast::{ToastBar, ToastBarProps};
