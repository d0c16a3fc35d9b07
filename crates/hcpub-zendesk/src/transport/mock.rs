//! Mock transport for testing.
//!
//! Provides [`MockTransport`] for exercising the client and publish workflow
//! without network access.

use std::collections::VecDeque;
use std::sync::Mutex;

use super::{HttpResponse, MultipartForm, Transport};
use crate::error::HelpCenterError;

/// Body of a request captured by [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// JSON request.
    Json(serde_json::Value),
    /// Multipart form request.
    Multipart(MultipartForm),
}

/// Request captured by [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// Target URL.
    pub url: String,
    /// Request body.
    pub body: RequestBody,
}

impl RecordedRequest {
    /// JSON body, if this was a JSON request.
    pub fn json(&self) -> Option<&serde_json::Value> {
        match &self.body {
            RequestBody::Json(value) => Some(value),
            RequestBody::Multipart(_) => None,
        }
    }

    /// Multipart form, if this was a multipart request.
    pub fn multipart(&self) -> Option<&MultipartForm> {
        match &self.body {
            RequestBody::Multipart(form) => Some(form),
            RequestBody::Json(_) => None,
        }
    }
}

/// Mock transport for testing.
///
/// Replays queued responses in order and records every request. Once the
/// queue is empty, the fallback response is returned.
///
/// # Example
///
/// ```ignore
/// use hcpub_zendesk::MockTransport;
///
/// let transport = MockTransport::new()
///     .with_response(201, r#"{"article":{"id":7}}"#);
/// ```
#[derive(Debug)]
pub struct MockTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    fallback: HttpResponse,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            fallback: HttpResponse::new(200, "{}"),
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl MockTransport {
    /// Create a mock that answers every request with `200 {}`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_response(self, status: u16, body: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(HttpResponse::new(status, body));
        self
    }

    /// Set the response used once the queue is exhausted.
    #[must_use]
    pub fn with_fallback(mut self, status: u16, body: impl Into<String>) -> Self {
        self.fallback = HttpResponse::new(status, body);
        self
    }

    /// All requests received so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn respond(&self, url: &str, body: RequestBody) -> HttpResponse {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_owned(),
            body,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

impl Transport for MockTransport {
    fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, HelpCenterError> {
        Ok(self.respond(url, RequestBody::Json(body.clone())))
    }

    fn post_multipart(
        &self,
        url: &str,
        form: &MultipartForm,
    ) -> Result<HttpResponse, HelpCenterError> {
        Ok(self.respond(url, RequestBody::Multipart(form.clone())))
    }
}
