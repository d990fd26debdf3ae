//! Notice bar for success and error messages

use iocraft::prelude::*;

use crate::tui::model::Toast;
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct ToastBarProps {
    pub toast: Option<Toast>,
}

/// Renders the current notice above the footer, or nothing
#[component]
pub fn ToastBar(props: &ToastBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View() {
            #(props.toast.as_ref().map(|t| {
                let color = theme.notice_color(t.notice.level);
                element! {
                    View(
                        width: 100pct,
                        height: 3,
                        flex_shrink: 0.0,
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        background_color: Color::Black,
                        border_edges: Edges::Top,
                        border_style: BorderStyle::Single,
                        border_color: color,
                    ) {
                        Text(content: t.notice.message.clone(), color: color)
                    }
                }
            }))
        }
    }
}
