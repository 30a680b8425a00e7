//! entity-to-text-tika - Document OCR through an Apache Tika server.
//!
//! Sends binary documents to a Tika server for text extraction
//! ([`FileTextExtractor`]) and caches the extracted text on disk
//! under deterministic names ([`PlaintextStorage`]), so each document
//! is OCRed once per language.
//!
//! # Example
//!
//! ```ignore
//! use entity_to_text_tika::{
//!     FileDocument, FileTextExtractor, PlaintextStorage, SchemeRegistry, TikaSettings,
//! };
//! use std::sync::Arc;
//!
//! let schemes = Arc::new(
//!     SchemeRegistry::new().with_mount("private", "/var/files/private"),
//! );
//! let extractor = FileTextExtractor::new(TikaSettings::from_env(), schemes.clone());
//! let storage = PlaintextStorage::new(schemes);
//!
//! let file = FileDocument::new(399, "report.pdf", "private://reports/report.pdf");
//! let text = match storage.load(&file, "eng").await? {
//!     Some(cached) => cached,
//!     None => {
//!         let text = extractor.extract_with_language(&file, "eng").await?;
//!         storage.save(&file, &text, "eng").await?;
//!         text
//!     }
//! };
//! ```

pub mod client;
pub mod document;
pub mod error;
pub mod extractor;
pub mod hook;
pub mod scheme;
pub mod settings;
pub mod storage;

pub use client::{TikaClient, DEFAULT_OCR_LANGUAGE};
pub use document::FileDocument;
pub use error::{TikaError, TikaResult};
pub use extractor::FileTextExtractor;
pub use hook::{IdentityPreProcess, PreProcessFile};
pub use scheme::SchemeRegistry;
pub use settings::{TikaConnection, TikaSettings, ENV_TIKA_HOST, ENV_TIKA_PORT};
pub use storage::{PlaintextStorage, DEFAULT_DESTINATION};
