//! Zendesk Help Center REST API client.
//!
//! Provides a sync client for the Help Center API with HTTP basic
//! authentication. All requests go through a [`Transport`].

mod articles;
mod attachments;

use hcpub_config::ZendeskConfig;

use crate::transport::{Transport, UreqTransport};

/// Help Center REST API client.
pub struct HelpCenterClient<T: Transport = UreqTransport> {
    transport: T,
    base_url: String,
}

impl HelpCenterClient<UreqTransport> {
    /// Create client from config values.
    ///
    /// The config is expected to be validated already.
    #[must_use]
    pub fn from_config(config: &ZendeskConfig) -> Self {
        Self::with_transport(
            &config.base_url,
            UreqTransport::new(&config.username, &config.api_token),
        )
    }
}

impl<T: Transport> HelpCenterClient<T> {
    /// Create client for `base_url` using the given transport.
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Help Center base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Public URL of an article in the given locale.
    pub fn article_url(&self, locale: &str, article_id: u64) -> String {
        format!("{}/hc/{}/articles/{}", self.base_url, locale, article_id)
    }

    /// Get the API base URL.
    fn api_url(&self) -> String {
        format!("{}/api/v2/help_center", self.base_url)
    }
}
