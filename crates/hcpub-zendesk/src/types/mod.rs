//! Help Center API types.

mod article;
mod attachment;

pub use article::{Article, ArticleResponse, NewArticle, NewArticleRequest};
pub use attachment::{ArticleAttachment, AttachmentResponse, BulkAttachments};
