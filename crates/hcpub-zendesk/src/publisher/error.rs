//! Error types for the publish workflow.

use std::path::PathBuf;

use crate::error::HelpCenterError;

/// Error during article publishing.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// Source document does not exist.
    #[error("File {} does not exist", .0.display())]
    DocumentNotFound(PathBuf),

    /// Help Center API error.
    #[error("Help Center API error: {0}")]
    HelpCenter(#[from] HelpCenterError),

    /// IO error (reading the document or images).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
