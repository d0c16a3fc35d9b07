//! Attachment operations for Help Center API.

use tracing::info;

use super::HelpCenterClient;
use crate::error::HelpCenterError;
use crate::transport::{MultipartForm, Transport};
use crate::types::{ArticleAttachment, AttachmentResponse, BulkAttachments};

impl<T: Transport> HelpCenterClient<T> {
    /// Upload an inline article attachment not yet linked to any article.
    ///
    /// The endpoint answers `201 Created`; any other status is an error.
    pub fn upload_attachment(
        &self,
        filename: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<ArticleAttachment, HelpCenterError> {
        let url = format!("{}/articles/attachments.json", self.api_url());

        info!("Uploading inline attachment '{}'", filename);

        let form = MultipartForm::new()
            .text("inline", "true")
            .file("file", filename, content_type, data);

        let response: AttachmentResponse = self
            .transport
            .post_multipart(&url, &form)?
            .expect_json(201)?;

        info!(
            "Uploaded '{}' as attachment {}",
            filename, response.article_attachment.id
        );
        Ok(response.article_attachment)
    }

    /// Link uploaded attachments to an article.
    ///
    /// The API accepts at most 20 IDs per request; callers chunk.
    pub fn associate_attachments(
        &self,
        article_id: u64,
        attachment_ids: &[u64],
    ) -> Result<(), HelpCenterError> {
        let url = format!(
            "{}/articles/{}/bulk_attachments.json",
            self.api_url(),
            article_id
        );

        info!(
            "Associating {} attachment(s) with article {}",
            attachment_ids.len(),
            article_id
        );

        let payload = serde_json::to_value(BulkAttachments { attachment_ids })?;
        let response = self.transport.post_json(&url, &payload)?;

        if response.is_success() {
            Ok(())
        } else {
            Err(response.into_error())
        }
    }
}
