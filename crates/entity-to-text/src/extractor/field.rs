//! Single-field plain-text extraction.

use crate::error::ExtractResult;
use crate::field_types::FieldTypes;
use crate::item::ContentItem;
use crate::render::{FieldDisplay, Render};
use crate::sanitizer::Sanitize;
use std::sync::Arc;
use tracing::debug;

/// Extracts one field of a content item as trimmed plain text.
///
/// Missing fields, unregistered field types, and fields without values
/// all yield an empty string without touching the renderer. Only a
/// broken registry or a failed render surfaces as an error.
pub struct FieldExtractor {
    renderer: Arc<dyn Render>,
    sanitizer: Arc<dyn Sanitize>,
    field_types: Arc<dyn FieldTypes>,
}

impl FieldExtractor {
    /// Create an extractor from its collaborators.
    pub fn new(
        renderer: Arc<dyn Render>,
        sanitizer: Arc<dyn Sanitize>,
        field_types: Arc<dyn FieldTypes>,
    ) -> Self {
        Self {
            renderer,
            sanitizer,
            field_types,
        }
    }

    /// Render one field of `item` and reduce it to trimmed plain text.
    pub async fn extract(&self, item: &ContentItem, field_name: &str) -> ExtractResult<String> {
        let Some(field) = item.field(field_name) else {
            debug!(item_id = %item.id, field_name, "field not defined on item, skipping");
            return Ok(String::new());
        };

        // Lookup precedes the emptiness check; registry failures
        // surface even for valueless fields.
        let Some(formatter) = self.field_types.default_formatter(&field.field_type)? else {
            debug!(
                item_id = %item.id,
                field_name,
                field_type = %field.field_type,
                "field type has no descriptor, skipping"
            );
            return Ok(String::new());
        };

        if field.is_empty() {
            return Ok(String::new());
        }

        let display = FieldDisplay::hidden_label(formatter);
        let rendered = self.renderer.render_field(item, field_name, &display).await?;
        let text = self.sanitizer.sanitize(rendered.as_str());

        Ok(text.trim().to_string())
    }
}
