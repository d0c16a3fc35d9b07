//! Article publisher for the Help Center.
//!
//! This module provides the [`ArticlePublisher`] struct that encapsulates the
//! entire workflow for publishing a Markdown document as a draft article:
//!
//! 1. Resolve the document and its `images/<name>/` directory
//! 2. Upload images as inline attachments
//! 3. Rewrite image references to the uploaded URLs
//! 4. Render Markdown to HTML
//! 5. Create the draft article
//! 6. Associate the attachments with the article, 20 per request
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use hcpub_config::ZendeskConfig;
//! use hcpub_zendesk::{ArticlePublisher, HelpCenterClient, PublishConfig, SourceDocument};
//!
//! let zendesk = ZendeskConfig {
//!     base_url: "https://example.zendesk.com".to_owned(),
//!     username: "user@example.com/token".to_owned(),
//!     api_token: "token".to_owned(),
//!     section_id: "360001".to_owned(),
//!     locale: "en-us".to_owned(),
//! };
//! let client = HelpCenterClient::from_config(&zendesk);
//! let publisher = ArticlePublisher::new(&client, PublishConfig::from_config(&zendesk));
//!
//! let document = SourceDocument::resolve(Path::new("docs/guide.md"))?;
//! let result = publisher.publish(&document, "Getting Started")?;
//! println!("{}", result.url);
//! # Ok(())
//! # }
//! ```

mod associate;
mod error;
mod executor;
mod images;
mod render;
mod resolver;
mod result;
mod rewrite;

pub use associate::{
    AssociationFailure, AssociationReport, MAX_ATTACHMENTS_PER_REQUEST, associate_attachments,
};
pub use error::PublishError;
pub use executor::{ArticlePublisher, dry_run};
pub use images::{
    IMAGE_EXTENSIONS, ImageRecord, LocalImage, UploadedImages, discover_images, upload_images,
};
pub use render::render_html;
pub use resolver::SourceDocument;
pub use result::{DryRunResult, PublishResult};
pub use rewrite::rewrite_image_references;

use hcpub_config::ZendeskConfig;

/// Where and how new articles are created.
#[derive(Debug, Clone)]
pub struct PublishConfig {
    /// Section new articles are created in.
    pub section_id: String,
    /// Article locale, also used for the article URL.
    pub locale: String,
}

impl PublishConfig {
    /// Take section and locale from the Zendesk configuration.
    #[must_use]
    pub fn from_config(config: &ZendeskConfig) -> Self {
        Self {
            section_id: config.section_id.clone(),
            locale: config.locale.clone(),
        }
    }
}
