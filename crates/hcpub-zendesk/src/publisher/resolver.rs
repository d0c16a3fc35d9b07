//! Source document resolution.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::PublishError;

/// Directory holding per-document image folders, relative to the document.
const IMAGES_DIR: &str = "images";

/// A Markdown document on disk and the location of its images.
///
/// Images for `docs/guide.md` live in `docs/images/guide/`, and the document
/// references them as `images/guide/<file>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    path: PathBuf,
    image_subdir: String,
    image_dir: PathBuf,
}

impl SourceDocument {
    /// Resolve `path` to an absolute document path and derive its image directory.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::DocumentNotFound`] if `path` is not an existing file.
    pub fn resolve(path: &Path) -> Result<Self, PublishError> {
        if !path.is_file() {
            return Err(PublishError::DocumentNotFound(path.to_path_buf()));
        }

        let path = std::fs::canonicalize(path)?;
        let image_subdir = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let image_dir = path
            .parent()
            .unwrap_or(Path::new("/"))
            .join(IMAGES_DIR)
            .join(&image_subdir);

        debug!(
            document = %path.display(),
            image_dir = %image_dir.display(),
            "Resolved source document"
        );

        Ok(Self {
            path,
            image_subdir,
            image_dir,
        })
    }

    /// Absolute path of the document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name of the image folder (document basename without extension).
    pub fn image_subdir(&self) -> &str {
        &self.image_subdir
    }

    /// Absolute path of the image folder. It may not exist.
    pub fn image_dir(&self) -> &Path {
        &self.image_dir
    }

    /// Whether the image folder exists as a directory.
    pub fn has_image_dir(&self) -> bool {
        self.image_dir.is_dir()
    }

    /// Read the full document text.
    pub fn read(&self) -> Result<String, PublishError> {
        Ok(std::fs::read_to_string(&self.path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_derives_image_dir() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("guide.md");
        std::fs::write(&doc, "# Guide").unwrap();

        let source = SourceDocument::resolve(&doc).unwrap();
        let root = std::fs::canonicalize(dir.path()).unwrap();

        assert_eq!(source.path(), root.join("guide.md"));
        assert_eq!(source.image_subdir(), "guide");
        assert_eq!(source.image_dir(), root.join("images/guide"));
        assert_eq!(source.read().unwrap(), "# Guide");
        assert!(!source.has_image_dir());
    }

    #[test]
    fn test_has_image_dir() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("guide.md");
        std::fs::write(&doc, "").unwrap();
        std::fs::create_dir_all(dir.path().join("images/guide")).unwrap();

        assert!(SourceDocument::resolve(&doc).unwrap().has_image_dir());
    }

    #[test]
    fn test_image_file_is_not_an_image_dir() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("guide.md");
        std::fs::write(&doc, "").unwrap();
        std::fs::create_dir_all(dir.path().join("images")).unwrap();
        std::fs::write(dir.path().join("images/guide"), "").unwrap();

        assert!(!SourceDocument::resolve(&doc).unwrap().has_image_dir());
    }

    #[test]
    fn test_resolve_strips_only_last_extension() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("release.notes.md");
        std::fs::write(&doc, "").unwrap();

        let source = SourceDocument::resolve(&doc).unwrap();

        assert_eq!(source.image_subdir(), "release.notes");
    }

    #[test]
    fn test_resolve_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.md");

        let err = SourceDocument::resolve(&missing).unwrap_err();

        assert!(matches!(err, PublishError::DocumentNotFound(ref p) if p == &missing));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_resolve_directory_is_not_a_document() {
        let dir = tempfile::tempdir().unwrap();

        let err = SourceDocument::resolve(dir.path()).unwrap_err();

        assert!(matches!(err, PublishError::DocumentNotFound(_)));
    }
}
