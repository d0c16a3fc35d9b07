//! Attachment association in batches.

use tracing::{info, warn};

use crate::client::HelpCenterClient;
use crate::error::HelpCenterError;
use crate::transport::Transport;

/// Maximum attachment IDs accepted by one bulk association request.
pub const MAX_ATTACHMENTS_PER_REQUEST: usize = 20;

/// A bulk association request that failed.
#[derive(Debug)]
pub struct AssociationFailure {
    /// IDs carried by the failed request.
    pub attachment_ids: Vec<u64>,
    /// What went wrong.
    pub error: HelpCenterError,
}

/// Outcome of associating attachments with an article.
#[derive(Debug, Default)]
pub struct AssociationReport {
    /// Number of requests issued.
    pub requests: usize,
    /// Number of IDs in successful requests.
    pub associated: usize,
    /// Failed requests, in order.
    pub failures: Vec<AssociationFailure>,
}

impl AssociationReport {
    /// Whether every request succeeded.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Link `attachment_ids` to an article, at most
/// [`MAX_ATTACHMENTS_PER_REQUEST`] per request.
///
/// Every chunk is attempted even if an earlier one fails; failures are
/// collected in the report.
pub fn associate_attachments<T: Transport>(
    client: &HelpCenterClient<T>,
    article_id: u64,
    attachment_ids: &[u64],
) -> AssociationReport {
    let mut report = AssociationReport::default();

    for chunk in attachment_ids.chunks(MAX_ATTACHMENTS_PER_REQUEST) {
        report.requests += 1;
        match client.associate_attachments(article_id, chunk) {
            Ok(()) => report.associated += chunk.len(),
            Err(error) => {
                warn!(
                    "Failed to associate {} attachment(s) with article {}: {}",
                    chunk.len(),
                    article_id,
                    error
                );
                report.failures.push(AssociationFailure {
                    attachment_ids: chunk.to_vec(),
                    error,
                });
            }
        }
    }

    info!(
        "Associated {}/{} attachment(s) in {} request(s)",
        report.associated,
        attachment_ids.len(),
        report.requests
    );
    report
}
