//! Rendering capability provided by the host CMS.
//!
//! The extractors never touch view builders or theme layers directly;
//! they hand an item (or one of its fields) to a [`Render`]
//! implementation and get back the final output.

use crate::error::ExtractResult;
use crate::item::ContentItem;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// How a field label is placed when the field is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// No label output at all.
    Hidden,
    /// Label rendered above the values.
    Above,
    /// Label rendered inline with the first value.
    Inline,
}

/// Display options handed to the renderer for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDisplay {
    /// Label placement.
    pub label: Label,

    /// Formatter to render the values with.
    pub formatter: String,
}

impl FieldDisplay {
    /// Display with a hidden label and the given formatter.
    pub fn hidden_label(formatter: impl Into<String>) -> Self {
        Self {
            label: Label::Hidden,
            formatter: formatter.into(),
        }
    }
}

/// Renderer output.
///
/// Hosts either return markup they consider safe or a bare string;
/// both go through the sanitizer unchanged, the distinction only
/// records what the renderer produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Markup produced by the host's rendering pipeline.
    Markup(String),
    /// A plain string with no markup wrapper.
    Plain(String),
}

impl Rendered {
    /// Borrow the raw output regardless of variant.
    pub fn as_str(&self) -> &str {
        match self {
            Rendered::Markup(html) => html,
            Rendered::Plain(text) => text,
        }
    }

    /// Consume into the raw output.
    pub fn into_inner(self) -> String {
        match self {
            Rendered::Markup(html) => html,
            Rendered::Plain(text) => text,
        }
    }
}

/// Host rendering capability.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Render: Send + Sync {
    /// Render a single field of `item` with explicit display options.
    async fn render_field(
        &self,
        item: &ContentItem,
        field_name: &str,
        display: &FieldDisplay,
    ) -> ExtractResult<Rendered>;

    /// Render the whole `item` in a view mode and language.
    async fn render_item(
        &self,
        item: &ContentItem,
        view_mode: &str,
        langcode: &str,
    ) -> ExtractResult<Rendered>;
}
