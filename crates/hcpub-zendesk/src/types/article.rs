//! Help Center article types.

use serde::{Deserialize, Serialize};

/// Article creation payload.
#[derive(Debug, Clone, Serialize)]
pub struct NewArticle<'a> {
    /// Drafts are hidden from readers until published in the Help Center.
    pub draft: bool,
    /// Article locale (e.g. "en-us").
    pub locale: &'a str,
    /// Article title.
    pub title: &'a str,
    /// Article body as HTML.
    pub body: &'a str,
}

/// Article creation request envelope.
#[derive(Debug, Clone, Serialize)]
pub struct NewArticleRequest<'a> {
    /// The article to create.
    pub article: NewArticle<'a>,
}

/// Created article.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Article {
    /// Article ID.
    pub id: u64,
    /// Public article URL, when returned by the server.
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Article creation response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleResponse {
    /// The created article.
    pub article: Article,
}
