//! `reqwest` implementation of [`NotesApi`].

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::error::{NotesError, Result};
use crate::types::{Note, NoteDraft, NoteId};

use super::{DataEnvelope, ErrorBody, NotesApi};

const USER_AGENT: &str = concat!("noteboard/", env!("CARGO_PKG_VERSION"));

/// HTTP transport for the notes service
#[derive(Debug, Clone)]
pub struct HttpNotesApi {
    client: Client,
    base_url: Url,
}

impl HttpNotesApi {
    /// Build a transport from configuration (base URL and request timeout)
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .connect_timeout(config.timeout())
            .build()?;

        Ok(Self::with_client(client, config.base_url()?))
    }

    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL. Each segment is percent-encoded,
    /// so an id can never escape its path position.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                NotesError::Config(format!(
                    "base URL '{}' cannot have a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.endpoint(segments)?;
        tracing::debug!("{method} {url}");
        Ok(self.client.request(method, url))
    }

    /// Send a request and unwrap the `{data}` envelope, or turn a non-2xx
    /// status into a service failure carrying the server's message.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        decode_response(status, &bytes)
    }

    /// Like [`Self::send`] for endpoints whose success body carries nothing
    /// the client needs (archive/unarchive may omit `data` entirely).
    async fn send_ack(&self, request: RequestBuilder) -> Result<()> {
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            return Ok(());
        }
        decode_response::<serde_json::Value>(status, &bytes).map(|_| ())
    }
}

/// Decode a response body according to the service's envelope convention
pub fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T> {
    if !status.is_success() {
        let error: ErrorBody = serde_json::from_slice(body).unwrap_or_default();
        tracing::warn!(
            "notes service returned {}: {}",
            status.as_u16(),
            error.message.as_deref().unwrap_or("<no message>")
        );
        return Err(NotesError::Service {
            status: status.as_u16(),
            message: error.message,
        });
    }

    let envelope: DataEnvelope<T> = serde_json::from_slice(body)
        .map_err(|e| NotesError::Decode(format!("{} (status {})", e, status.as_u16())))?;
    Ok(envelope.data)
}

impl NotesApi for HttpNotesApi {
    async fn list_active(&self) -> Result<Vec<Note>> {
        let request = self.request(Method::GET, &["notes"])?;
        self.send(request).await
    }

    async fn list_archived(&self) -> Result<Vec<Note>> {
        let request = self.request(Method::GET, &["notes", "archived"])?;
        self.send(request).await
    }

    async fn create(&self, draft: &NoteDraft) -> Result<Note> {
        let request = self.request(Method::POST, &["notes"])?.json(draft);
        self.send(request).await
    }

    async fn delete(&self, id: &NoteId) -> Result<Note> {
        let request = self.request(Method::DELETE, &["notes", id.as_str()])?;
        self.send(request).await
    }

    async fn archive(&self, id: &NoteId) -> Result<()> {
        let request = self.request(Method::POST, &["notes", id.as_str(), "archive"])?;
        self.send_ack(request).await
    }

    async fn unarchive(&self, id: &NoteId) -> Result<()> {
        let request = self.request(Method::POST, &["notes", id.as_str(), "unarchive"])?;
        self.send_ack(request).await
    }
}
