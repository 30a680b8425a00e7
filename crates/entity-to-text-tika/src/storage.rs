//! On-disk cache for extracted text.

use crate::document::FileDocument;
use crate::error::{TikaError, TikaResult};
use crate::scheme::SchemeRegistry;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Default cache root URI.
pub const DEFAULT_DESTINATION: &str = "private://entity-to-text/ocr";

/// Deterministic on-disk cache of extracted text.
///
/// Each entry lives at `<root>/<id>-<filename>.<langcode>.ocr.txt`,
/// so the same document and language always map to the same file and
/// re-extraction overwrites in place. Existing caches stay valid
/// across releases as long as this naming holds.
pub struct PlaintextStorage {
    schemes: Arc<SchemeRegistry>,
    root: String,
}

impl PlaintextStorage {
    /// Cache under [`DEFAULT_DESTINATION`].
    pub fn new(schemes: Arc<SchemeRegistry>) -> Self {
        Self {
            schemes,
            root: DEFAULT_DESTINATION.to_string(),
        }
    }

    /// Cache under a custom root URI.
    pub fn with_root(mut self, uri: impl Into<String>) -> Self {
        self.root = uri.into();
        self
    }

    /// Load the cached text for a document and language.
    ///
    /// `Ok(None)` means the pair was never cached; a cached empty
    /// extraction comes back as `Ok(Some(""))`.
    pub async fn load(&self, file: &FileDocument, langcode: &str) -> TikaResult<Option<String>> {
        let path = self.full_path(file, langcode)?;

        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    /// Write the text for a document and language, overwriting any
    /// previous entry, and return the path written.
    pub async fn save(
        &self,
        file: &FileDocument,
        content: &str,
        langcode: &str,
    ) -> TikaResult<PathBuf> {
        let path = self.full_path(file, langcode)?;
        tokio::fs::write(&path, content).await?;
        debug!(document_id = file.id, path = %path.display(), "cached extracted text");
        Ok(path)
    }

    /// Resolve the cache path for a document and language.
    fn full_path(&self, file: &FileDocument, langcode: &str) -> TikaResult<PathBuf> {
        // The root has to exist on disk before it can be resolved.
        self.schemes.prepare_directory(&self.root);

        let scheme =
            SchemeRegistry::scheme_of(&self.root).ok_or_else(|| TikaError::MissingScheme {
                uri: self.root.clone(),
            })?;
        if !self.schemes.is_registered(scheme) {
            return Err(TikaError::InvalidScheme {
                scheme: scheme.to_string(),
                uri: self.root.clone(),
            });
        }

        let dir = self
            .schemes
            .realpath(&self.root)
            .ok_or_else(|| TikaError::UnresolvedRoot {
                uri: self.root.clone(),
            })?;

        Ok(dir.join(format!("{}-{}.{}.ocr.txt", file.id, file.filename, langcode)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage(dir: &tempfile::TempDir) -> PlaintextStorage {
        let registry = Arc::new(SchemeRegistry::new().with_mount("private", dir.path()));
        PlaintextStorage::new(registry)
    }

    fn document() -> FileDocument {
        FileDocument::new(399, "foo.txt", "private://foo.txt")
    }

    #[tokio::test]
    async fn test_save_uses_deterministic_cache_name() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir);

        let path = storage.save(&document(), "Hello plain text", "en").await.unwrap();

        assert!(path.ends_with("399-foo.txt.en.ocr.txt"));
        assert!(path.starts_with(dir.path().canonicalize().unwrap()));
    }

    #[tokio::test]
    async fn test_round_trips_content() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir);

        storage.save(&document(), "Hello plain text", "en").await.unwrap();
        let loaded = storage.load(&document(), "en").await.unwrap();

        assert_eq!(loaded.as_deref(), Some("Hello plain text"));
    }

    #[tokio::test]
    async fn test_never_cached_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir);

        let loaded = storage.load(&document(), "en").await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_cached_empty_text_is_some_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir);

        storage.save(&document(), "", "en").await.unwrap();
        let loaded = storage.load(&document(), "en").await.unwrap();

        assert_eq!(loaded.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_languages_cache_separately() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir);

        storage.save(&document(), "english", "en").await.unwrap();
        storage.save(&document(), "français", "fr").await.unwrap();

        assert_eq!(
            storage.load(&document(), "en").await.unwrap().as_deref(),
            Some("english")
        );
        assert_eq!(
            storage.load(&document(), "fr").await.unwrap().as_deref(),
            Some("français")
        );
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_entry() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir);

        storage.save(&document(), "first", "en").await.unwrap();
        storage.save(&document(), "second", "en").await.unwrap();

        let loaded = storage.load(&document(), "en").await.unwrap();
        assert_eq!(loaded.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_custom_root_uri() {
        let dir = tempfile::tempdir().unwrap();
        let registry = Arc::new(SchemeRegistry::new().with_mount("private", dir.path()));
        let storage = PlaintextStorage::new(registry).with_root("private://other/cache");

        let path = storage.save(&document(), "text", "en").await.unwrap();

        assert!(path.starts_with(
            dir.path().canonicalize().unwrap().join("other/cache")
        ));
    }

    #[tokio::test]
    async fn test_unregistered_scheme_is_a_configuration_error() {
        let storage = PlaintextStorage::new(Arc::new(SchemeRegistry::new()));

        let result = storage.load(&document(), "en").await;
        assert!(matches!(result, Err(TikaError::InvalidScheme { .. })));
    }

    #[tokio::test]
    async fn test_root_without_scheme_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let registry = Arc::new(SchemeRegistry::new().with_mount("private", dir.path()));
        let storage = PlaintextStorage::new(registry).with_root("no-scheme-root");

        let result = storage.save(&document(), "text", "en").await;
        assert!(matches!(result, Err(TikaError::MissingScheme { .. })));
    }

    #[tokio::test]
    async fn test_unresolvable_root_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        // Mount under a regular file so the root cannot be created.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"file").unwrap();
        let registry = Arc::new(SchemeRegistry::new().with_mount("private", &blocker));
        let storage = PlaintextStorage::new(registry);

        let result = storage.save(&document(), "text", "en").await;
        assert!(matches!(result, Err(TikaError::UnresolvedRoot { .. })));
    }
}
