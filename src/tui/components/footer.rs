//! Keyboard shortcuts bar component

use iocraft::prelude::*;

use crate::tui::model::Focus;
use crate::tui::theme::theme;

/// A single keyboard shortcut entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// The key or key combination (e.g., "q", "Tab")
    pub key: String,
    /// What it does (e.g., "Quit", "Next field")
    pub action: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

fn shortcuts(pairs: &[(&str, &str)]) -> Vec<Shortcut> {
    pairs
        .iter()
        .map(|(key, action)| Shortcut::new(*key, *action))
        .collect()
}

/// Shortcuts for the current focus, or for the open confirmation dialog
pub fn shortcuts_for(focus: Focus, confirming: bool) -> Vec<Shortcut> {
    if confirming {
        return shortcuts(&[("y", "Delete"), ("n/Esc", "Keep")]);
    }
    if focus.is_form() {
        return shortcuts(&[
            ("Enter", "Add Note"),
            ("Tab", "Next Field"),
            ("S-Tab", "Prev Field"),
            ("Esc", "Notes"),
            ("C-c", "Quit"),
        ]);
    }
    let toggle = if focus == Focus::Archived {
        "Unarchive"
    } else {
        "Archive"
    };
    shortcuts(&[
        ("j/k", "Up/Down"),
        ("a", toggle),
        ("d", "Delete"),
        ("r", "Reload"),
        ("Tab", "Next Pane"),
        ("q", "Quit"),
    ])
}

#[derive(Default, Props)]
pub struct FooterProps {
    pub shortcuts: Vec<Shortcut>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", shortcut.key),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", shortcut.action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(shortcuts: &[Shortcut]) -> Vec<&str> {
        shortcuts.iter().map(|s| s.key.as_str()).collect()
    }

    #[test]
    fn test_confirm_shortcuts_win() {
        let s = shortcuts_for(Focus::Title, true);
        assert_eq!(keys(&s), vec!["y", "n/Esc"]);
    }

    #[test]
    fn test_toggle_label_follows_grid() {
        let active = shortcuts_for(Focus::Active, false);
        assert!(active.contains(&Shortcut::new("a", "Archive")));

        let archived = shortcuts_for(Focus::Archived, false);
        assert!(archived.contains(&Shortcut::new("a", "Unarchive")));
    }

    #[test]
    fn test_form_shortcuts_do_not_offer_q() {
        let s = shortcuts_for(Focus::Body, false);
        assert!(!keys(&s).contains(&"q"));
        assert!(keys(&s).contains(&"Enter"));
    }
}
