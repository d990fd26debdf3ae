//! Loading indicator drawn while any notes service call is in flight

use iocraft::prelude::*;

use super::modal::{ModalBox, ModalOverlay};
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct BusyOverlayProps {}

/// Render only while busy, as a direct child of the screen root
#[component]
pub fn BusyOverlay(_props: &BusyOverlayProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        ModalOverlay() {
            ModalBox(width: Some(20), border_color: Some(theme.highlight)) {
                View(width: 100pct, justify_content: JustifyContent::Center) {
                    Text(content: "Loading...", color: theme.text, weight: Weight::Bold)
                }
            }
        }
    }
}
