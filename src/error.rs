use thiserror::Error;

use crate::views::note_form::ValidationErrors;

#[derive(Error, Debug)]
pub enum NotesError {
    /// The request never produced an HTTP response (DNS, connect, timeout, TLS).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("service error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Service {
        status: u16,
        message: Option<String>,
    },

    #[error("invalid note: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("unexpected response from notes service: {0}")]
    Decode(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The failure was already shown to the user by a notifier; only the
    /// exit status is left to set.
    #[error("{0}")]
    Reported(String),

    #[error("{0}")]
    Other(String),
}

impl NotesError {
    /// Text shown to the user for a failed remote call.
    ///
    /// A service failure carries the server's own message when it sent a
    /// non-empty one; everything else falls back to `default`.
    pub fn user_message(&self, default: &str) -> String {
        match self {
            NotesError::Service {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => default.to_string(),
        }
    }

    /// Whether a notifier has already shown this error
    pub fn is_reported(&self) -> bool {
        matches!(self, NotesError::Reported(_))
    }
}

pub type Result<T> = std::result::Result<T, NotesError>;
