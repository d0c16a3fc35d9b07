//! Help Center attachment types.

use serde::{Deserialize, Serialize};

/// Uploaded article attachment.
///
/// Only includes fields that are actually used.
/// Serde ignores unknown fields from the API response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArticleAttachment {
    /// Attachment ID.
    pub id: u64,
    /// File name as stored by the server.
    pub file_name: String,
    /// Public URL of the uploaded file.
    pub content_url: String,
}

/// Attachment upload response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct AttachmentResponse {
    /// The created attachment.
    pub article_attachment: ArticleAttachment,
}

/// Body of a bulk attachment association request.
#[derive(Debug, Clone, Serialize)]
pub struct BulkAttachments<'a> {
    /// Attachment IDs to link to the article.
    pub attachment_ids: &'a [u64],
}
