//! entity-to-text - Plain-text extraction for structured content.
//!
//! Renders CMS content through host-provided capabilities and reduces
//! the output to clean plain text, typically to feed a search index:
//! a [`FieldExtractor`] for single fields and a [`CollectionExtractor`]
//! for reference collections, both passing rendered output through a
//! default-deny HTML sanitizer.
//!
//! The host supplies the rendering machinery ([`Render`]) and the
//! field type registry ([`FieldTypes`]); everything downstream of
//! rendering lives here.
//!
//! # Example
//!
//! ```ignore
//! use entity_to_text::{FieldExtractor, FieldTypeRegistry, HtmlSanitizer};
//! use std::sync::Arc;
//!
//! let registry = FieldTypeRegistry::new()
//!     .with_type("text_with_summary", "text_default");
//!
//! let extractor = FieldExtractor::new(
//!     Arc::new(my_renderer),
//!     Arc::new(HtmlSanitizer::new()),
//!     Arc::new(registry),
//! );
//!
//! let body = extractor.extract(&item, "body").await?;
//! ```

pub mod error;
pub mod extractor;
pub mod field_types;
pub mod item;
pub mod render;
pub mod sanitizer;

pub use error::{ExtractError, ExtractResult};
pub use extractor::{CollectionExtractor, FieldExtractor};
pub use field_types::{FieldTypeRegistry, FieldTypes};
pub use item::{ContentItem, FieldInstance, ItemReference, LANGCODE_NOT_SPECIFIED};
pub use render::{FieldDisplay, Label, Render, Rendered};
pub use sanitizer::{HtmlSanitizer, Sanitize, SanitizerConfig};
