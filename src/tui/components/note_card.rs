//! Note card component
//!
//! Layout:
//! ```text
//! +---------------------------+
//! |> Groceries      Jul 28, 2022
//! |  Milk and eggs, and bread |
//! |  from the corner shop...  |
//! |  Active  [a] Archive      |
//! +---------------------------+
//! ```

use iocraft::prelude::*;

use crate::text::{truncate, wrap_lines};
use crate::tui::theme::theme;
use crate::views::NoteItem;

/// Lines a card occupies, borders included
pub const CARD_HEIGHT: u16 = 6;

/// Body lines shown on a card
const BODY_LINES: usize = 2;

#[derive(Default, Props)]
pub struct NoteCardProps {
    pub item: Option<NoteItem>,
    pub is_selected: bool,
    /// Available width for the card (in characters)
    pub width: Option<u32>,
}

#[component]
pub fn NoteCard(props: &NoteCardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(item) = props.item.as_ref() else {
        return element! { View() };
    };

    let text_color = if props.is_selected {
        theme.highlight_text
    } else {
        theme.text
    };
    let bg_color = props.is_selected.then_some(theme.highlight);

    // Border and padding take four columns
    let inner = props.width.unwrap_or(30).saturating_sub(4).max(10) as usize;
    let date = item.date();
    let title_width = inner.saturating_sub(date.chars().count() + 3).max(4);
    let body_lines = wrap_lines(item.body(), inner.saturating_sub(2), BODY_LINES);
    let indicator = if props.is_selected { ">" } else { " " };

    element! {
        View(
            width: 100pct,
            height: CARD_HEIGHT,
            flex_direction: FlexDirection::Column,
            flex_shrink: 0.0,
            border_style: BorderStyle::Round,
            border_color: theme.border_color(props.is_selected),
            background_color: bg_color,
            padding_left: 1,
            padding_right: 1,
        ) {
            View(flex_direction: FlexDirection::Row, justify_content: JustifyContent::SpaceBetween) {
                View(flex_direction: FlexDirection::Row) {
                    Text(content: indicator, color: text_color, weight: Weight::Bold)
                    Text(
                        content: format!(" {}", truncate(item.title(), title_width)),
                        color: text_color,
                        weight: Weight::Bold,
                    )
                }
                Text(
                    content: date,
                    color: if props.is_selected { theme.highlight_text } else { theme.date },
                )
            }
            View(flex_direction: FlexDirection::Column, height: BODY_LINES as u16, padding_left: 2) {
                #(body_lines.into_iter().map(|line| element! {
                    Text(content: line, color: text_color)
                }))
            }
            View(flex_direction: FlexDirection::Row, gap: 2, padding_left: 2) {
                Text(
                    content: item.status_label(),
                    color: if props.is_selected {
                        theme.highlight_text
                    } else {
                        theme.status_color(item.is_archived())
                    },
                )
                Text(
                    content: format!("[a] {}  [d] Delete", item.toggle_label()),
                    color: if props.is_selected { theme.highlight_text } else { theme.text_dimmed },
                )
            }
        }
    }
}
