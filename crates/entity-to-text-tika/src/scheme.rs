//! Scheme URI resolution.
//!
//! Documents and cache roots are addressed by scheme URIs
//! (`private://reports/annual.pdf`), the way a CMS addresses its
//! storage backends. A registry maps each scheme to a local root
//! directory and resolves URIs to real paths.

use std::collections::HashMap;
use std::path::PathBuf;

const SCHEME_SEPARATOR: &str = "://";

/// Maps URI schemes to local root directories.
#[derive(Debug, Clone, Default)]
pub struct SchemeRegistry {
    mounts: HashMap<String, PathBuf>,
}

impl SchemeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a scheme onto a local root directory.
    pub fn with_mount(mut self, scheme: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        self.register(scheme, root);
        self
    }

    /// Mount a scheme in place.
    pub fn register(&mut self, scheme: impl Into<String>, root: impl Into<PathBuf>) {
        self.mounts.insert(scheme.into(), root.into());
    }

    /// Scheme part of a URI, if it has one.
    pub fn scheme_of(uri: &str) -> Option<&str> {
        match uri.split_once(SCHEME_SEPARATOR) {
            Some((scheme, _)) if !scheme.is_empty() => Some(scheme),
            _ => None,
        }
    }

    /// Whether a scheme has a mount.
    pub fn is_registered(&self, scheme: &str) -> bool {
        self.mounts.contains_key(scheme)
    }

    /// Resolve a scheme URI to a canonical local path.
    ///
    /// `None` when the URI has no mounted scheme or the target does
    /// not exist on disk.
    pub fn realpath(&self, uri: &str) -> Option<PathBuf> {
        let (scheme, rest) = uri.split_once(SCHEME_SEPARATOR)?;
        let root = self.mounts.get(scheme)?;
        let target = if rest.is_empty() {
            root.clone()
        } else {
            root.join(rest)
        };
        target.canonicalize().ok()
    }

    /// Create the directory a URI points at, parents included.
    ///
    /// Idempotent. `false` when the URI cannot be mapped or creation
    /// fails; such failures resurface on the following read or write.
    pub fn prepare_directory(&self, uri: &str) -> bool {
        let Some((scheme, rest)) = uri.split_once(SCHEME_SEPARATOR) else {
            return false;
        };
        let Some(root) = self.mounts.get(scheme) else {
            return false;
        };
        let target = if rest.is_empty() {
            root.clone()
        } else {
            root.join(rest)
        };
        std::fs::create_dir_all(target).is_ok()
    }
}
