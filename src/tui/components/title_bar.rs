//! App bar component
//!
//! Displays the configured title and the note counts.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::views::AppBar;

#[derive(Default, Props)]
pub struct TitleBarProps {
    pub app_bar: AppBar,
    pub active_count: usize,
    pub archived_count: usize,
}

#[component]
pub fn TitleBar(props: &TitleBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.app_bar,
        ) {
            Text(
                content: props.app_bar.title().to_string(),
                color: theme.text,
                weight: Weight::Bold,
            )
            Text(
                content: format!(
                    "{} active / {} archived",
                    props.active_count, props.archived_count
                ),
                color: theme.text,
            )
        }
    }
}
