pub const DEFAULT_TITLE: &str = "Notes App";

/// Title bar shown above everything else
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppBar {
    title: String,
}

impl Default for AppBar {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

impl AppBar {
    /// A blank title falls back to [`DEFAULT_TITLE`]
    pub fn new(title: impl Into<String>) -> Self {
        let mut bar = Self {
            title: String::new(),
        };
        bar.set_title(title);
        bar
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        self.title = if title.trim().is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            title
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_title() {
        assert_eq!(AppBar::default().title(), "Notes App");
    }

    #[test]
    fn test_blank_title_falls_back() {
        assert_eq!(AppBar::new("  ").title(), DEFAULT_TITLE);

        let mut bar = AppBar::new("My Notes");
        assert_eq!(bar.title(), "My Notes");
        bar.set_title("");
        assert_eq!(bar.title(), DEFAULT_TITLE);
    }
}
