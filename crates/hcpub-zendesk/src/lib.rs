//! Zendesk Help Center integration for hcpub.
//!
//! This crate provides complete publishing functionality:
//! - [`HelpCenterClient`]: REST API client over a pluggable [`Transport`]
//! - [`ArticlePublisher`]: Markdown to draft article workflow with image uploads
//!
//! # API Client
//!
//! ```ignore
//! use hcpub_zendesk::{HelpCenterClient, UreqTransport};
//!
//! let client = HelpCenterClient::with_transport(
//!     "https://example.zendesk.com",
//!     UreqTransport::new("user@example.com/token", "api-token"),
//! );
//!
//! let attachment = client.upload_attachment("logo.png", data, "image/png")?;
//! println!("Uploaded: {}", attachment.content_url);
//! ```

// API client
mod client;
pub use client::HelpCenterClient;

// HTTP transport
pub mod transport;
#[cfg(any(test, feature = "mock"))]
pub use transport::MockTransport;
pub use transport::{HttpResponse, MultipartForm, Transport, UreqTransport};

// Types
pub mod types;

// Publish workflow
pub mod publisher;
pub use publisher::{ArticlePublisher, PublishConfig, PublishError, SourceDocument};

// Errors
pub mod error;
pub use error::HelpCenterError;
