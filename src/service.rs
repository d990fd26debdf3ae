//! The notes API client used by the rest of the application.
//!
//! [`NotesService`] wraps a [`NotesApi`] transport. Every operation holds the
//! shared busy indicator for exactly as long as the call is in flight, and
//! every failure is presented to the user once, here, before it is returned.

use std::sync::Arc;

use crate::api::NotesApi;
use crate::busy::BusyIndicator;
use crate::error::Result;
use crate::notify::Notifier;
use crate::types::{ArchiveStatus, Note, NoteDraft, NoteId};

pub const LIST_FAILED: &str = "Failed to get notes";
pub const CREATE_FAILED: &str = "Failed to add note";
pub const DELETE_FAILED: &str = "Failed to delete note";
pub const ARCHIVE_FAILED: &str = "Failed to archive note";
pub const UNARCHIVE_FAILED: &str = "Failed to unarchive note";

/// Result of loading every note
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// Active notes first, then archived ones
    Loaded(Vec<Note>),
    /// Loading failed; the message has already been shown to the user
    Failed { message: String },
}

impl Listing {
    /// The loaded notes, or an empty slice when loading failed
    pub fn notes(&self) -> &[Note] {
        match self {
            Listing::Loaded(notes) => notes,
            Listing::Failed { .. } => &[],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Listing::Failed { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Listing::Loaded(_) => None,
            Listing::Failed { message } => Some(message),
        }
    }
}

pub struct NotesService<A> {
    api: A,
    busy: BusyIndicator,
    notifier: Arc<dyn Notifier>,
}

impl<A: NotesApi> NotesService<A> {
    pub fn new(api: A, busy: BusyIndicator, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            busy,
            notifier,
        }
    }

    pub fn busy(&self) -> &BusyIndicator {
        &self.busy
    }

    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    /// Load active then archived notes.
    ///
    /// The first failure aborts the load; the caller never sees a partial
    /// list.
    pub async fn list_notes(&self) -> Listing {
        let _busy = self.busy.acquire();

        let loaded = async {
            let mut notes = self.api.list_active().await?;
            notes.extend(self.api.list_archived().await?);
            Ok::<_, crate::error::NotesError>(notes)
        }
        .await;

        match loaded {
            Ok(notes) => {
                tracing::debug!("loaded {} notes", notes.len());
                Listing::Loaded(notes)
            }
            Err(e) => {
                tracing::error!("failed to load notes: {e}");
                let message = e.user_message(LIST_FAILED);
                self.notifier.error(&message);
                Listing::Failed { message }
            }
        }
    }

    pub async fn create_note(&self, draft: &NoteDraft) -> Result<Note> {
        let result = {
            let _busy = self.busy.acquire();
            self.api.create(draft).await
        };
        self.report(result, CREATE_FAILED)
    }

    pub async fn delete_note(&self, id: &NoteId) -> Result<Note> {
        let result = {
            let _busy = self.busy.acquire();
            self.api.delete(id).await
        };
        self.report(result, DELETE_FAILED)
    }

    pub async fn archive_note(&self, id: &NoteId) -> Result<ArchiveStatus> {
        let result = {
            let _busy = self.busy.acquire();
            self.api.archive(id).await
        };
        self.report(result, ARCHIVE_FAILED).map(|()| ArchiveStatus {
            id: id.clone(),
            archived: true,
        })
    }

    pub async fn unarchive_note(&self, id: &NoteId) -> Result<ArchiveStatus> {
        let result = {
            let _busy = self.busy.acquire();
            self.api.unarchive(id).await
        };
        self.report(result, UNARCHIVE_FAILED).map(|()| ArchiveStatus {
            id: id.clone(),
            archived: false,
        })
    }

    /// Show a failed call to the user, then hand the result back unchanged
    fn report<T>(&self, result: Result<T>, default: &str) -> Result<T> {
        if let Err(e) = &result {
            tracing::error!("{default}: {e}");
            self.notifier.error(&e.user_message(default));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::InMemoryNotesApi;
    use crate::api::memory::Endpoint;
    use crate::error::NotesError;
    use crate::notify::RecordingNotifier;

    fn note(id: &str, archived: bool) -> Note {
        Note {
            id: NoteId::from(id),
            title: format!("Title {id}"),
            body: format!("Body of {id}"),
            created_at: "2024-03-05T10:00:00.000Z".to_string(),
            archived,
        }
    }

    fn service(api: InMemoryNotesApi) -> (NotesService<InMemoryNotesApi>, RecordingNotifier) {
        let recorder = RecordingNotifier::new(true);
        let service = NotesService::new(api, BusyIndicator::new(), Arc::new(recorder.clone()));
        (service, recorder)
    }

    #[tokio::test]
    async fn test_list_notes_puts_active_first() {
        let api = InMemoryNotesApi::with_notes(vec![
            note("a", true),
            note("b", false),
            note("c", false),
        ]);
        let (service, recorder) = service(api);

        let listing = service.list_notes().await;
        let ids: Vec<&str> = listing.notes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
        assert!(recorder.notices().is_empty());
    }

    #[tokio::test]
    async fn test_list_notes_archived_failure_is_not_partial() {
        let api = InMemoryNotesApi::with_notes(vec![note("a", false)]);
        api.fail(Endpoint::ListArchived, 500, Some("Server down"));
        let (service, recorder) = service(api);

        let listing = service.list_notes().await;
        assert!(listing.notes().is_empty());
        assert_eq!(listing.error_message(), Some("Server down"));
        assert_eq!(recorder.errors(), vec!["Server down".to_string()]);
    }

    #[tokio::test]
    async fn test_list_notes_active_failure_skips_archived_call() {
        let api = InMemoryNotesApi::with_notes(vec![note("a", true)]);
        api.fail(Endpoint::ListActive, 503, None);
        let (service, recorder) = service(api.clone());

        let listing = service.list_notes().await;
        assert!(listing.is_failed());
        assert_eq!(recorder.errors(), vec![LIST_FAILED.to_string()]);
        assert_eq!(api.call_count(Endpoint::ListArchived), 0);
    }

    #[tokio::test]
    async fn test_mutation_failure_notifies_and_returns_error() {
        let api = InMemoryNotesApi::new();
        let (service, recorder) = service(api);

        let err = service.delete_note(&NoteId::from("missing")).await.unwrap_err();
        assert!(matches!(err, NotesError::Service { status: 404, .. }));
        assert_eq!(recorder.errors(), vec!["Note is not found".to_string()]);
        assert!(!service.busy().is_busy());
    }

    #[tokio::test]
    async fn test_blank_service_message_uses_default() {
        let api = InMemoryNotesApi::new();
        api.fail(Endpoint::Create, 400, Some(""));
        let (service, recorder) = service(api);

        let result = service.create_note(&NoteDraft::new("abc", "hello")).await;
        assert!(result.is_err());
        assert_eq!(recorder.errors(), vec![CREATE_FAILED.to_string()]);
    }

    #[tokio::test]
    async fn test_archive_and_unarchive_status() {
        let api = InMemoryNotesApi::with_notes(vec![note("a", false)]);
        let (service, _) = service(api);
        let id = NoteId::from("a");

        let status = service.archive_note(&id).await.unwrap();
        assert_eq!(status, ArchiveStatus { id: id.clone(), archived: true });

        let status = service.unarchive_note(&id).await.unwrap();
        assert!(!status.archived);
    }

    #[tokio::test]
    async fn test_busy_released_after_each_call() {
        let api = InMemoryNotesApi::new();
        api.fail(Endpoint::Archive, 500, None);
        let (service, _) = service(api);

        let _ = service.list_notes().await;
        assert!(!service.busy().is_busy());
        let _ = service.archive_note(&NoteId::from("x")).await;
        assert!(!service.busy().is_busy());
    }
}
