//! Image discovery and upload.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::error::PublishError;
use crate::client::HelpCenterClient;
use crate::transport::Transport;

/// File extensions uploaded as images. Matching is case-sensitive.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "tif", "gif"];

/// Image file found next to a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalImage {
    /// File name inside the image directory.
    pub filename: String,
    /// Absolute path of the file.
    pub path: PathBuf,
}

/// Image uploaded to the Help Center.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// File name inside the local image directory.
    pub local_name: String,
    /// Server-assigned attachment ID.
    pub id: u64,
    /// Public URL of the uploaded file.
    pub content_url: String,
    /// File name as stored by the server.
    pub file_name: String,
}

/// Uploaded images keyed by local file name.
///
/// Iteration follows file name order, which is also upload order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadedImages {
    records: BTreeMap<String, ImageRecord>,
}

impl UploadedImages {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, replacing any record with the same local name.
    pub fn insert(&mut self, record: ImageRecord) {
        self.records.insert(record.local_name.clone(), record);
    }

    /// Record for a local file name.
    pub fn get(&self, local_name: &str) -> Option<&ImageRecord> {
        self.records.get(local_name)
    }

    /// Number of uploaded images.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no image was uploaded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in file name order.
    pub fn iter(&self) -> impl Iterator<Item = &ImageRecord> {
        self.records.values()
    }

    /// Attachment IDs in iteration order.
    pub fn attachment_ids(&self) -> Vec<u64> {
        self.iter().map(|r| r.id).collect()
    }
}

/// List image files in `dir`, sorted by file name.
///
/// A missing directory means the document has no images.
pub fn discover_images(dir: &Path) -> Result<Vec<LocalImage>, PublishError> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!("Image directory {} not found, no images to upload", dir.display());
            return Ok(Vec::new());
        }
        Err(err) => return Err(err.into()),
    };

    let mut images = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() || !has_image_extension(&path) {
            continue;
        }
        let Some(filename) = path.file_name().and_then(|n| n.to_str()).map(str::to_owned) else {
            warn!("Skipping image with non UTF-8 name: {}", path.display());
            continue;
        };
        images.push(LocalImage { filename, path });
    }
    images.sort_by(|a, b| a.filename.cmp(&b.filename));
    Ok(images)
}

/// Upload every image as an inline attachment.
///
/// Stops at the first failure; nothing uploaded so far is returned.
pub fn upload_images<T: Transport>(
    client: &HelpCenterClient<T>,
    images: &[LocalImage],
) -> Result<UploadedImages, PublishError> {
    let mut uploaded = UploadedImages::new();

    for image in images {
        info!("Uploading image attachment: {}", image.filename);
        let data = std::fs::read(&image.path)?;
        let attachment =
            client.upload_attachment(&image.filename, data, guess_content_type(&image.filename))?;

        uploaded.insert(ImageRecord {
            local_name: image.filename.clone(),
            id: attachment.id,
            content_url: attachment.content_url,
            file_name: attachment.file_name,
        });
    }

    Ok(uploaded)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext))
}

fn guess_content_type(filename: &str) -> &'static str {
    match filename.rsplit('.').next() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("tif") => "image/tiff",
        _ => "application/octet-stream",
    }
}
