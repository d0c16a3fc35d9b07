//! Image reference rewriting.

use tracing::debug;

use super::images::UploadedImages;

/// Replace `images/<subdir>/<file>` references with uploaded content URLs.
///
/// This is a literal text substitution: only the exact relative path is
/// rewritten, wherever it appears. Longer names are replaced first so that
/// `a.png` does not clobber a reference to `a.png.png`.
pub fn rewrite_image_references(
    markdown: &str,
    images: &UploadedImages,
    image_subdir: &str,
) -> String {
    let mut records: Vec<_> = images.iter().collect();
    records.sort_by(|a, b| b.local_name.len().cmp(&a.local_name.len()));

    let mut text = markdown.to_owned();
    for record in records {
        let pattern = format!("images/{image_subdir}/{}", record.local_name);
        let count = text.matches(&pattern).count();
        if count > 0 {
            text = text.replace(&pattern, &record.content_url);
        }
        debug!(pattern = %pattern, count, url = %record.content_url, "Rewrote image reference");
    }
    text
}
