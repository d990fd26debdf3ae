//! Note creation form: title and body inputs with their validation errors

use iocraft::prelude::*;

use crate::tui::model::{Focus, UiModel};
use crate::tui::theme::theme;
use crate::views::Field;

#[derive(Default, Props)]
pub struct NoteFormPanelProps {
    pub model: Option<State<UiModel>>,
}

#[component]
pub fn NoteFormPanel(props: &NoteFormPanelProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(mut model) = props.model else {
        return element! { View() };
    };

    let (title, body, title_error, body_error, focus) = {
        let m = model.read();
        (
            m.form.title().to_string(),
            m.form.body().to_string(),
            m.form.error(Field::Title),
            m.form.error(Field::Body),
            m.focus,
        )
    };
    let title_focused = focus == Focus::Title;
    let body_focused = focus == Focus::Body;

    element! {
        View(flex_direction: FlexDirection::Column, width: 100pct, flex_shrink: 0.0) {
            Text(content: "New note", color: theme.text, weight: Weight::Bold)

            // Title
            View(
                flex_direction: FlexDirection::Row,
                border_style: BorderStyle::Round,
                border_color: theme.border_color(title_focused),
                padding_left: 1,
                padding_right: 1,
                height: 3,
            ) {
                View(width: 8) {
                    Text(content: "Title", color: theme.text_dimmed)
                }
                View(flex_grow: 1.0) {
                    TextInput(
                        value: title,
                        has_focus: title_focused,
                        on_change: move |value| model.write().form.set_title(value),
                        color: theme.text,
                    )
                }
            }
            View(height: 1, padding_left: 2) {
                Text(content: title_error.unwrap_or(""), color: theme.error)
            }

            // Body
            View(
                flex_direction: FlexDirection::Row,
                border_style: BorderStyle::Round,
                border_color: theme.border_color(body_focused),
                padding_left: 1,
                padding_right: 1,
                height: 3,
            ) {
                View(width: 8) {
                    Text(content: "Body", color: theme.text_dimmed)
                }
                View(flex_grow: 1.0) {
                    TextInput(
                        value: body,
                        has_focus: body_focused,
                        on_change: move |value| model.write().form.set_body(value),
                        color: theme.text,
                    )
                }
            }
            View(height: 1, padding_left: 2) {
                Text(content: body_error.unwrap_or(""), color: theme.error)
            }
        }
    }
}
