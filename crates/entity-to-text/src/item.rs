//! Content snapshot types consumed by the extractors.
//!
//! Host adapters build these from their CMS records; extractors only
//! read them. Field values stay opaque JSON since only the host's
//! renderer knows how to interpret them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Language code used when an item has no explicit language.
pub const LANGCODE_NOT_SPECIFIED: &str = "und";

/// A single field on a content item: its registered type plus the
/// ordered list of raw values.
///
/// A field that exists with an empty value list is a different state
/// from a field that is absent from [`ContentItem::fields`] entirely.
/// Both are valid; extractors yield an empty string for either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldInstance {
    /// Field type key, resolved against the host's field type registry.
    pub field_type: String,

    /// Raw renderable values in delta order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub values: Vec<serde_json::Value>,
}

impl FieldInstance {
    /// Create a field instance of the given type with no values.
    pub fn new(field_type: impl Into<String>) -> Self {
        Self {
            field_type: field_type.into(),
            values: Vec::new(),
        }
    }

    /// Append a raw value.
    pub fn with_value(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Whether the field holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Snapshot of one renderable content item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Stable identifier, used for logging only.
    pub id: String,

    /// Item type (e.g. "node", "paragraph"); the renderer picks the
    /// matching view builder from this.
    pub item_type: String,

    /// Language the item is currently loaded in.
    pub langcode: String,

    /// Named fields present on this item. A name missing here means
    /// the item type defines no such field.
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub fields: BTreeMap<String, FieldInstance>,
}

impl ContentItem {
    /// Create an item with no fields and an unspecified language.
    pub fn new(id: impl Into<String>, item_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            item_type: item_type.into(),
            langcode: LANGCODE_NOT_SPECIFIED.to_string(),
            fields: BTreeMap::new(),
        }
    }

    /// Set the item language.
    pub fn with_langcode(mut self, langcode: impl Into<String>) -> Self {
        self.langcode = langcode.into();
        self
    }

    /// Attach a field.
    pub fn with_field(mut self, name: impl Into<String>, field: FieldInstance) -> Self {
        self.fields.insert(name.into(), field);
        self
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldInstance> {
        self.fields.get(name)
    }
}

/// One element of a multi-value reference field: the resolved target
/// item plus the language the reference was made in.
///
/// The reference language can differ from [`ContentItem::langcode`]
/// when the parent is viewed in a translation the target lacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemReference {
    /// The referenced item, already resolved by the host.
    pub item: ContentItem,

    /// Language code the reference carries.
    pub langcode: String,
}

impl ItemReference {
    /// Create a reference to a resolved item.
    pub fn new(item: ContentItem, langcode: impl Into<String>) -> Self {
        Self {
            item,
            langcode: langcode.into(),
        }
    }
}
