//! Blocking HTTP transport backed by `ureq`.

use std::time::Duration;

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use rand::RngExt;
use tracing::debug;
use ureq::Agent;

use super::{HttpResponse, MultipartForm, Transport};
use crate::error::HelpCenterError;

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// HTTP transport using a `ureq` agent and basic authentication.
pub struct UreqTransport {
    agent: Agent,
    authorization: String,
}

impl UreqTransport {
    /// Create a transport authenticating as `username` with `api_token`.
    #[must_use]
    pub fn new(username: &str, api_token: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            authorization: basic_auth(username, api_token),
        }
    }

    fn read_response(
        response: ureq::http::Response<ureq::Body>,
    ) -> Result<HttpResponse, HelpCenterError> {
        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        let body = if status >= 400 {
            body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned())
        } else {
            body_reader.read_to_string()?
        };

        debug!(status, "Received response");
        Ok(HttpResponse { status, body })
    }
}

impl Transport for UreqTransport {
    fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, HelpCenterError> {
        let payload = serde_json::to_vec(body)?;
        debug!(url, bytes = payload.len(), "POST json");

        let response = self
            .agent
            .post(url)
            .header("Authorization", &self.authorization)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(&payload[..])?;

        Self::read_response(response)
    }

    fn post_multipart(
        &self,
        url: &str,
        form: &MultipartForm,
    ) -> Result<HttpResponse, HelpCenterError> {
        let boundary = format!("----HcpubFormBoundary{:016x}", rand::rng().random::<u64>());
        let body = form.encode(&boundary);
        debug!(url, bytes = body.len(), "POST multipart");

        let response = self
            .agent
            .post(url)
            .header("Authorization", &self.authorization)
            .header(
                "Content-Type",
                &format!("multipart/form-data; boundary={boundary}"),
            )
            .header("Accept", "application/json")
            .send(&body[..])?;

        Self::read_response(response)
    }
}

/// Build an HTTP basic `Authorization` header value.
fn basic_auth(username: &str, api_token: &str) -> String {
    let credentials = BASE64_STANDARD.encode(format!("{username}:{api_token}"));
    format!("Basic {credentials}")
}
