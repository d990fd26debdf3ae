//! One column of note cards with a heading and an empty state

use iocraft::prelude::*;

use super::note_card::{CARD_HEIGHT, NoteCard};
use crate::tui::model::visible_window;
use crate::tui::theme::theme;
use crate::views::NotesGrid;

#[derive(Default, Props)]
pub struct NotesColumnProps {
    pub heading: String,
    pub grid: Option<NotesGrid>,
    pub selected: usize,
    pub has_focus: bool,
    /// Width of the column in characters
    pub width: u32,
    /// Height of the column in lines
    pub height: u32,
}

#[component]
pub fn NotesColumn(props: &NotesColumnProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let grid = props.grid.clone().unwrap_or_default();

    // Heading, count line and border
    let capacity = (props.height.saturating_sub(4) / CARD_HEIGHT as u32) as usize;
    let window = visible_window(props.selected, grid.len(), capacity);
    let hidden_above = window.start;
    let hidden_below = grid.len().saturating_sub(window.end);
    let card_width = props.width.saturating_sub(2);

    let cards: Vec<AnyElement<'static>> = grid.items()[window.clone()]
        .iter()
        .enumerate()
        .map(|(offset, item)| {
            let index = window.start + offset;
            element! {
                NoteCard(
                    item: Some(item.clone()),
                    is_selected: props.has_focus && index == props.selected,
                    width: Some(card_width),
                )
            }
            .into_any()
        })
        .collect();

    element! {
        View(
            width: Size::Length(props.width),
            height: Size::Length(props.height),
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border_color(props.has_focus),
        ) {
            View(
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::SpaceBetween,
                padding_left: 1,
                padding_right: 1,
            ) {
                Text(
                    content: props.heading.clone(),
                    color: if props.has_focus { theme.border_focused } else { theme.text },
                    weight: Weight::Bold,
                )
                Text(content: grid.len().to_string(), color: theme.text_dimmed)
            }
            #(grid.empty_message().map(|message| element! {
                View(
                    width: 100pct,
                    flex_grow: 1.0,
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                ) {
                    Text(content: message.to_string(), color: theme.text_dimmed)
                }
            }))
            #((hidden_above > 0).then(|| element! {
                Text(content: format!("  ^ {hidden_above} more"), color: theme.text_dimmed)
            }))
            #(cards)
            #((hidden_below > 0).then(|| element! {
                Text(content: format!("  v {hidden_below} more"), color: theme.text_dimmed)
            }))
        }
    }
}
