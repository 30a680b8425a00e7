//! File-to-text extraction through a Tika server.

use crate::client::{TikaClient, DEFAULT_OCR_LANGUAGE};
use crate::document::FileDocument;
use crate::error::TikaResult;
use crate::hook::{IdentityPreProcess, PreProcessFile};
use crate::scheme::SchemeRegistry;
use crate::settings::TikaSettings;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::{debug, warn};

/// Extracts document text through a remote Tika server.
///
/// Running unconfigured is a supported state that yields empty text.
/// A failing server or an unresolvable document degrades the same
/// way, with one warning per document, so a single bad document never
/// aborts a batch. Only configuration errors propagate.
pub struct FileTextExtractor {
    settings: TikaSettings,
    schemes: Arc<SchemeRegistry>,
    client: OnceCell<TikaClient>,
    pre_process: Box<dyn PreProcessFile>,
}

impl FileTextExtractor {
    /// Create an extractor; the client is built lazily on first use.
    pub fn new(settings: TikaSettings, schemes: Arc<SchemeRegistry>) -> Self {
        Self {
            settings,
            schemes,
            client: OnceCell::new(),
            pre_process: Box::new(IdentityPreProcess),
        }
    }

    /// Use a pre-built client instead of lazy construction.
    pub fn with_client(mut self, client: TikaClient) -> Self {
        self.client = OnceCell::with_value(client);
        self
    }

    /// Replace the pre-process hook.
    pub fn with_pre_process(mut self, hook: impl PreProcessFile + 'static) -> Self {
        self.pre_process = Box::new(hook);
        self
    }

    /// Whether a client has been constructed or injected yet.
    pub fn has_client(&self) -> bool {
        self.client.get().is_some()
    }

    /// Extract text with the default OCR language.
    pub async fn extract(&self, file: &FileDocument) -> TikaResult<String> {
        self.extract_with_language(file, DEFAULT_OCR_LANGUAGE).await
    }

    /// Extract text, hinting OCR with `langcode`, an ISO 639-2
    /// three-letter code.
    pub async fn extract_with_language(
        &self,
        file: &FileDocument,
        langcode: &str,
    ) -> TikaResult<String> {
        let Some(connection) = &self.settings.connection else {
            debug!(document_id = file.id, "no tika connection configured, skipping");
            return Ok(String::new());
        };

        let client = self
            .client
            .get_or_try_init(|| TikaClient::new(&connection.host, connection.port))?;

        // The shared client keeps the default language; each call gets
        // a clone carrying its own.
        let mut client = client.clone();
        client.set_ocr_language(langcode);

        let (client, file) = self.pre_process.pre_process(client, file.clone());

        let Some(path) = self.schemes.realpath(&file.uri) else {
            warn!(
                document_id = file.id,
                uri = %file.uri,
                "document uri did not resolve to a local path"
            );
            return Ok(String::new());
        };

        match client.get_text(&path).await {
            Ok(text) => Ok(text),
            Err(error) => {
                warn!(
                    document_id = file.id,
                    path = %path.display(),
                    error = %error,
                    "document could not be processed by tika"
                );
                Ok(String::new())
            }
        }
    }
}
