//! Article operations for Help Center API.

use tracing::info;

use super::HelpCenterClient;
use crate::error::HelpCenterError;
use crate::transport::Transport;
use crate::types::{Article, ArticleResponse, NewArticle, NewArticleRequest};

impl<T: Transport> HelpCenterClient<T> {
    /// Create an article in a section.
    ///
    /// The endpoint answers `201 Created`; any other status is an error.
    pub fn create_article(
        &self,
        section_id: &str,
        article: NewArticle<'_>,
    ) -> Result<Article, HelpCenterError> {
        let url = format!("{}/sections/{}/articles.json", self.api_url(), section_id);

        info!(
            "Creating article '{}' in section {} (draft={})",
            article.title, section_id, article.draft
        );

        let payload = serde_json::to_value(NewArticleRequest { article })?;
        let response: ArticleResponse = self
            .transport
            .post_json(&url, &payload)?
            .expect_json(201)?;

        info!("Created article {}", response.article.id);
        Ok(response.article)
    }
}
