//! Field type registry seam.

use crate::error::ExtractResult;
use std::collections::BTreeMap;

/// Field type lookup capability provided by the host.
#[cfg_attr(test, mockall::automock)]
pub trait FieldTypes: Send + Sync {
    /// Default formatter for a field type.
    ///
    /// `Ok(None)` means the type has no registered descriptor and the
    /// field is skipped. `Err` means the registry itself failed and
    /// the failure surfaces to the caller uncaught.
    fn default_formatter(&self, field_type: &str) -> ExtractResult<Option<String>>;
}

/// In-memory registry mapping field types to their default formatter.
#[derive(Debug, Clone, Default)]
pub struct FieldTypeRegistry {
    formatters: BTreeMap<String, String>,
}

impl FieldTypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field type with its default formatter.
    pub fn with_type(
        mut self,
        field_type: impl Into<String>,
        formatter: impl Into<String>,
    ) -> Self {
        self.register(field_type, formatter);
        self
    }

    /// Register a field type in place.
    pub fn register(&mut self, field_type: impl Into<String>, formatter: impl Into<String>) {
        self.formatters.insert(field_type.into(), formatter.into());
    }
}

impl FieldTypes for FieldTypeRegistry {
    fn default_formatter(&self, field_type: &str) -> ExtractResult<Option<String>> {
        Ok(self.formatters.get(field_type).cloned())
    }
}
