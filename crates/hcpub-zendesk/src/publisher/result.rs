//! Result types for publish operations.

use std::path::PathBuf;

use super::associate::AssociationReport;
use super::images::UploadedImages;
use crate::types::Article;

/// Result of publishing a document as a Help Center article.
#[derive(Debug)]
pub struct PublishResult {
    /// Created draft article.
    pub article: Article,
    /// Public article URL.
    pub url: String,
    /// Uploaded images.
    pub images: UploadedImages,
    /// Attachment association outcome.
    pub association: AssociationReport,
}

/// Result of a dry run (no network calls).
#[derive(Debug)]
pub struct DryRunResult {
    /// Article title.
    pub title: String,
    /// Rendered HTML body, image references unchanged.
    pub html: String,
    /// Image directory that would be uploaded.
    pub image_dir: PathBuf,
    /// Images that would be uploaded, in upload order.
    pub image_names: Vec<String>,
}
