//! Full-screen terminal interface
//!
//! - `model` / `keymap` - screen state and key handling, testable without a terminal
//! - `components` - iocraft components drawing the view models
//! - `app` - the root component and its bridge to the controller

pub mod app;
pub mod components;
pub mod keymap;
pub mod model;
pub mod theme;

pub use app::{NotesApp, NotesAppProps, UiBridge};
pub use keymap::{KeyContext, UiAction, key_to_action};
pub use model::{Effect, Focus, UiModel};
pub use theme::Theme;
