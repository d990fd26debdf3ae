//! Transport layer for the notes service.
//!
//! [`NotesApi`] is a one-to-one description of the service's HTTP endpoints.
//! It does no user notification and holds no busy state; that belongs to
//! [`crate::service::NotesService`], which wraps any implementation of it.

pub mod http;
pub mod memory;

use std::future::Future;

use serde::Deserialize;

use crate::error::Result;
use crate::types::{Note, NoteDraft, NoteId};

pub use http::HttpNotesApi;
pub use memory::InMemoryNotesApi;

/// Success envelope used by every endpoint: `{"data": ...}`
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Failure body: `{"message": "..."}`. Other fields (such as `status`) are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Common interface for notes service transports
pub trait NotesApi: Send + Sync {
    /// `GET /notes`
    fn list_active(&self) -> impl Future<Output = Result<Vec<Note>>> + Send;

    /// `GET /notes/archived`
    fn list_archived(&self) -> impl Future<Output = Result<Vec<Note>>> + Send;

    /// `POST /notes`
    fn create(&self, draft: &NoteDraft) -> impl Future<Output = Result<Note>> + Send;

    /// `DELETE /notes/{id}`
    fn delete(&self, id: &NoteId) -> impl Future<Output = Result<Note>> + Send;

    /// `POST /notes/{id}/archive`
    fn archive(&self, id: &NoteId) -> impl Future<Output = Result<()>> + Send;

    /// `POST /notes/{id}/unarchive`
    fn unarchive(&self, id: &NoteId) -> impl Future<Output = Result<()>> + Send;
}

/// Transport picked at startup: the real service, or an in-process store for `--memory`
#[derive(Debug, Clone)]
pub enum Backend {
    Http(HttpNotesApi),
    Memory(InMemoryNotesApi),
}

impl NotesApi for Backend {
    async fn list_active(&self) -> Result<Vec<Note>> {
        match self {
            Backend::Http(api) => api.list_active().await,
            Backend::Memory(api) => api.list_active().await,
        }
    }

    async fn list_archived(&self) -> Result<Vec<Note>> {
        match self {
            Backend::Http(api) => api.list_archived().await,
            Backend::Memory(api) => api.list_archived().await,
        }
    }

    async fn create(&self, draft: &NoteDraft) -> Result<Note> {
        match self {
            Backend::Http(api) => api.create(draft).await,
            Backend::Memory(api) => api.create(draft).await,
        }
    }

    async fn delete(&self, id: &NoteId) -> Result<Note> {
        match self {
            Backend::Http(api) => api.delete(id).await,
            Backend::Memory(api) => api.delete(id).await,
        }
    }

    async fn archive(&self, id: &NoteId) -> Result<()> {
        match self {
            Backend::Http(api) => api.archive(id).await,
            Backend::Memory(api) => api.archive(id).await,
        }
    }

    async fn unarchive(&self, id: &NoteId) -> Result<()> {
        match self {
            Backend::Http(api) => api.unarchive(id).await,
            Backend::Memory(api) => api.unarchive(id).await,
        }
    }
}
