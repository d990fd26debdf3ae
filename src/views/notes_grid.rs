//! A list of note items, or an empty-state message when there are none.

use crate::types::Note;

use super::note_item::NoteItem;

pub const DEFAULT_EMPTY_MESSAGE: &str = "No notes found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesGrid {
    items: Vec<NoteItem>,
    empty_message: String,
}

impl Default for NotesGrid {
    fn default() -> Self {
        Self::new(DEFAULT_EMPTY_MESSAGE)
    }
}

impl NotesGrid {
    pub fn new(empty_message: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            empty_message: empty_message.into(),
        }
    }

    /// Replace every item, keeping the input order
    pub fn set_notes(&mut self, notes: &[Note]) {
        self.items = notes.iter().map(NoteItem::new).collect();
    }

    pub fn items(&self) -> &[NoteItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&NoteItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Message to show instead of items, when there are none
    pub fn empty_message(&self) -> Option<&str> {
        self.items.is_empty().then_some(self.empty_message.as_str())
    }
}
