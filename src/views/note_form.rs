//! Note creation form.
//!
//! Both fields are validated on every change so the error can be shown while
//! typing. Submitting re-validates and, only when both fields pass, yields a
//! single [`Command::CreateNote`] and empties the form.

use std::fmt;

use crate::controller::Command;

pub const TITLE_MIN_LEN: usize = 3;
pub const BODY_MIN_LEN: usize = 5;

pub const TITLE_TOO_SHORT: &str = "Title must be at least 3 characters";
pub const BODY_TOO_SHORT: &str = "Note content must be at least 5 characters";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Body,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Title => f.write_str("title"),
            Field::Body => f.write_str("body"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Every rule a draft failed, in field order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn for_field(&self, field: Field) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

fn check_title(title: &str) -> Option<&'static str> {
    (title.chars().count() < TITLE_MIN_LEN).then_some(TITLE_TOO_SHORT)
}

fn check_body(body: &str) -> Option<&'static str> {
    (body.chars().count() < BODY_MIN_LEN).then_some(BODY_TOO_SHORT)
}

/// Apply the form's rules to a title and body outside the form (the CLI)
pub fn validate_draft(title: &str, body: &str) -> Result<(), ValidationErrors> {
    let errors: Vec<FieldError> = [
        check_title(title).map(|message| FieldError {
            field: Field::Title,
            message,
        }),
        check_body(body).map(|message| FieldError {
            field: Field::Body,
            message,
        }),
    ]
    .into_iter()
    .flatten()
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteForm {
    title: String,
    body: String,
    title_error: Option<&'static str>,
    body_error: Option<&'static str>,
}

impl NoteForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
        self.title_error = check_title(&self.title);
    }

    pub fn set_body(&mut self, value: impl Into<String>) {
        self.body = value.into();
        self.body_error = check_body(&self.body);
    }

    /// Error currently shown under `field`
    pub fn error(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Title => self.title_error,
            Field::Body => self.body_error,
        }
    }

    pub fn is_valid(&self) -> bool {
        check_title(&self.title).is_none() && check_body(&self.body).is_none()
    }

    /// Validate both fields. When both pass, return the create command and
    /// reset the form; otherwise mark every failing field.
    pub fn submit(&mut self) -> Option<Command> {
        self.title_error = check_title(&self.title);
        self.body_error = check_body(&self.body);
        if self.title_error.is_some() || self.body_error.is_some() {
            return None;
        }

        let command = Command::CreateNote {
            title: std::mem::take(&mut self.title),
            body: std::mem::take(&mut self.body),
        };
        *self = Self::default();
        Some(command)
    }
}
