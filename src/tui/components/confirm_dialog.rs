//! Yes/no confirmation dialog

use iocraft::prelude::*;

use super::modal::{ModalBox, ModalOverlay};
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct ConfirmDialogProps {
    pub message: String,
}

#[component]
pub fn ConfirmDialog(props: &ConfirmDialogProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        ModalOverlay(show_backdrop: true) {
            ModalBox(
                width: Some(56),
                border_color: Some(theme.warning),
                title: Some("Confirm".to_string()),
                footer_text: Some("[y]es / [n]o".to_string()),
            ) {
                Text(content: props.message.clone(), color: theme.text)
            }
        }
    }
}
