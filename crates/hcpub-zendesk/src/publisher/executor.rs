//! Publish workflow implementation.

use tracing::info;

use crate::client::HelpCenterClient;
use crate::transport::Transport;
use crate::types::NewArticle;

use super::PublishConfig;
use super::associate::associate_attachments;
use super::error::PublishError;
use super::images::{discover_images, upload_images};
use super::render::render_html;
use super::resolver::SourceDocument;
use super::result::{DryRunResult, PublishResult};
use super::rewrite::rewrite_image_references;

/// Publishes Markdown documents as draft Help Center articles.
pub struct ArticlePublisher<'a, T: Transport> {
    client: &'a HelpCenterClient<T>,
    config: PublishConfig,
}

impl<'a, T: Transport> ArticlePublisher<'a, T> {
    /// Create a new publisher.
    #[must_use]
    pub fn new(client: &'a HelpCenterClient<T>, config: PublishConfig) -> Self {
        Self { client, config }
    }

    /// Publish a document as a draft article.
    ///
    /// This method:
    /// 1. Uploads every image in the document's image directory
    /// 2. Rewrites `images/<name>/<file>` references to the uploaded URLs
    /// 3. Renders the Markdown to HTML
    /// 4. Creates the draft article
    /// 5. Associates the uploaded attachments with the article
    ///
    /// # Errors
    ///
    /// Returns an error if an upload or the article creation fails, or if
    /// the document or an image cannot be read. The document is read before
    /// any upload, so an unreadable document makes no network call. Association failures do not
    /// fail the publish; they are reported in [`PublishResult::association`].
    pub fn publish(
        &self,
        document: &SourceDocument,
        title: &str,
    ) -> Result<PublishResult, PublishError> {
        let markdown = document.read()?;
        let local_images = discover_images(document.image_dir())?;
        let images = upload_images(self.client, &local_images)?;

        info!("Replacing image links in {}", document.path().display());
        let markdown = rewrite_image_references(&markdown, &images, document.image_subdir());

        info!("Converting markdown to HTML");
        let html = render_html(&markdown);

        let article = self.client.create_article(
            &self.config.section_id,
            NewArticle {
                draft: true,
                locale: &self.config.locale,
                title,
                body: &html,
            },
        )?;

        let association = associate_attachments(self.client, article.id, &images.attachment_ids());
        let url = self.client.article_url(&self.config.locale, article.id);

        Ok(PublishResult {
            article,
            url,
            images,
            association,
        })
    }
}

/// Preview a publish without touching the network.
///
/// Image references are left as local paths.
pub fn dry_run(document: &SourceDocument, title: &str) -> Result<DryRunResult, PublishError> {
    let image_names = discover_images(document.image_dir())?
        .into_iter()
        .map(|image| image.filename)
        .collect();
    let html = render_html(&document.read()?);

    Ok(DryRunResult {
        title: title.to_owned(),
        html,
        image_dir: document.image_dir().to_path_buf(),
        image_names,
    })
}
