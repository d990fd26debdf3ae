//! Modal building blocks: a centering overlay and a bordered box.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Backdrop color behind a modal that hides the screen
pub const MODAL_BACKDROP: Color = Color::Rgb {
    r: 30,
    g: 30,
    b: 30,
};

#[derive(Default, Props)]
pub struct ModalOverlayProps<'a> {
    /// Hide everything behind the modal (default: false)
    pub show_backdrop: Option<bool>,
    pub children: Vec<AnyElement<'a>>,
}

/// Full-screen, absolutely positioned layer that centers its children
#[component]
pub fn ModalOverlay<'a>(props: &mut ModalOverlayProps<'a>) -> impl Into<AnyElement<'a>> {
    let show_backdrop = props.show_backdrop.unwrap_or(false);

    element! {
        View(
            width: 100pct,
            height: 100pct,
            position: Position::Absolute,
            top: 0,
            left: 0,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            background_color: if show_backdrop { Some(MODAL_BACKDROP) } else { None },
        ) {
            #(std::mem::take(&mut props.children))
        }
    }
}

#[derive(Default, Props)]
pub struct ModalBoxProps<'a> {
    /// Width in columns (default: 50)
    pub width: Option<u32>,
    pub border_color: Option<Color>,
    pub title: Option<String>,
    pub footer_text: Option<String>,
    pub children: Vec<AnyElement<'a>>,
}

/// Bordered box with an optional title row and footer row
#[component]
pub fn ModalBox<'a>(props: &mut ModalBoxProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();
    let border_color = props.border_color.unwrap_or(theme.border_focused);

    element! {
        View(
            width: Size::Length(props.width.unwrap_or(50)),
            background_color: Color::Black,
            border_style: BorderStyle::Double,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
            flex_direction: FlexDirection::Column,
        ) {
            #(props.title.clone().map(|title| element! {
                View(
                    width: 100pct,
                    border_edges: Edges::Bottom,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                ) {
                    Text(content: title, color: border_color, weight: Weight::Bold)
                }
            }))

            View(width: 100pct, flex_direction: FlexDirection::Column, padding_top: 1, padding_bottom: 1) {
                #(std::mem::take(&mut props.children))
            }

            #(props.footer_text.clone().map(|footer| element! {
                View(
                    width: 100pct,
                    border_edges: Edges::Top,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                ) {
                    Text(content: footer, color: theme.text_dimmed)
                }
            }))
        }
    }
}
