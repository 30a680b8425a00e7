//! Tika connection settings.

use crate::error::{TikaError, TikaResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming the Tika host.
pub const ENV_TIKA_HOST: &str = "ENTITY_TO_TEXT_TIKA_HOST";

/// Environment variable naming the Tika port.
pub const ENV_TIKA_PORT: &str = "ENTITY_TO_TEXT_TIKA_PORT";

/// Connection coordinates of a Tika server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TikaConnection {
    /// Server host name, without a scheme.
    pub host: String,
    /// Server port.
    pub port: u16,
}

/// Settings for file text extraction.
///
/// An absent connection is a first-class state: extraction silently
/// yields empty text until a server is configured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TikaSettings {
    /// Tika server to talk to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<TikaConnection>,
}

impl TikaSettings {
    /// Settings with no connection configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings pointing at the given server.
    pub fn with_connection(host: impl Into<String>, port: u16) -> Self {
        Self {
            connection: Some(TikaConnection {
                host: host.into(),
                port,
            }),
        }
    }

    /// Load settings from a TOML or JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> TikaResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let ext = path.as_ref().extension().and_then(|e| e.to_str());

        match ext {
            Some("toml") => {
                toml::from_str(&content).map_err(|e| TikaError::Settings(e.to_string()))
            }
            Some("json") => {
                serde_json::from_str(&content).map_err(|e| TikaError::Settings(e.to_string()))
            }
            _ => Err(TikaError::Settings(
                "Unsupported settings file format. Use .toml or .json".to_string(),
            )),
        }
    }

    /// Read connection settings from the environment.
    ///
    /// Both [`ENV_TIKA_HOST`] and [`ENV_TIKA_PORT`] must be set and
    /// the port must parse as a number; anything else leaves the
    /// connection unconfigured.
    pub fn from_env() -> Self {
        let host = std::env::var(ENV_TIKA_HOST).ok();
        let port = std::env::var(ENV_TIKA_PORT)
            .ok()
            .and_then(|port| port.parse().ok());

        match (host, port) {
            (Some(host), Some(port)) => Self::with_connection(host, port),
            _ => Self::new(),
        }
    }
}
