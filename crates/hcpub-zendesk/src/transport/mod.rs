//! HTTP transport abstraction.
//!
//! [`HelpCenterClient`](crate::HelpCenterClient) talks to the network only
//! through the [`Transport`] trait, so the publish workflow can run against
//! [`MockTransport`] in tests. [`UreqTransport`] is the real implementation.

#[cfg(any(test, feature = "mock"))]
mod mock;
mod ureq_transport;

#[cfg(any(test, feature = "mock"))]
pub use mock::{MockTransport, RecordedRequest, RequestBody};
pub use ureq_transport::UreqTransport;

use serde::de::DeserializeOwned;

use crate::error::HelpCenterError;

/// Minimal HTTP capability needed by the Help Center client.
pub trait Transport {
    /// POST a JSON document to `url`.
    fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, HelpCenterError>;

    /// POST a `multipart/form-data` form to `url`.
    fn post_multipart(
        &self,
        url: &str,
        form: &MultipartForm,
    ) -> Result<HttpResponse, HelpCenterError>;
}

/// Status and body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Create a response from status and body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON if the status matches `expected`.
    ///
    /// Any other status becomes [`HelpCenterError::HttpResponse`].
    pub fn expect_json<T: DeserializeOwned>(self, expected: u16) -> Result<T, HelpCenterError> {
        if self.status != expected {
            return Err(self.into_error());
        }
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Convert into an HTTP error carrying status and body.
    pub fn into_error(self) -> HelpCenterError {
        HelpCenterError::HttpResponse {
            status: self.status,
            body: self.body,
        }
    }
}

/// File part of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    /// Form field name.
    pub name: String,
    /// File name sent in `Content-Disposition`.
    pub filename: String,
    /// MIME type of the file.
    pub content_type: String,
    /// File contents.
    pub data: Vec<u8>,
}

/// A `multipart/form-data` form with text fields and file parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    fields: Vec<(String, String)>,
    files: Vec<FilePart>,
}

impl MultipartForm {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text field.
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Add a file part.
    #[must_use]
    pub fn file(
        mut self,
        name: impl Into<String>,
        filename: impl Into<String>,
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        self.files.push(FilePart {
            name: name.into(),
            filename: filename.into(),
            content_type: content_type.into(),
            data,
        });
        self
    }

    /// Text fields in insertion order.
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// File parts in insertion order.
    pub fn files(&self) -> &[FilePart] {
        &self.files
    }

    /// Value of the text field `name`, if present.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Encode the form body using `boundary`.
    ///
    /// Text fields come first, then file parts.
    pub fn encode(&self, boundary: &str) -> Vec<u8> {
        let mut body = Vec::new();

        for (name, value) in &self.fields {
            body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
            body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
            );
            body.extend_from_slice(value.as_bytes());
            body.extend_from_slice(b"\r\n");
        }

        for file in &self.files {
            body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
            body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                    file.name, file.filename
                )
                .as_bytes(),
            );
            body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", file.content_type).as_bytes());
            body.extend_from_slice(&file.data);
            body.extend_from_slice(b"\r\n");
        }

        body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
        body
    }
}
