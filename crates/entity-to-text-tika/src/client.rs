//! Tika server HTTP client.
//!
//! Speaks the Tika server REST protocol: document bytes go up in a
//! `PUT /tika` with `Accept: text/plain`, extracted text comes back
//! in the body. The OCR language rides along in the
//! `X-Tika-OCRLanguage` header.

use crate::error::{TikaError, TikaResult};
use reqwest::header;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default OCR language, an ISO 639-2 three-letter code.
pub const DEFAULT_OCR_LANGUAGE: &str = "eng";

/// Header carrying the OCR language hint.
const OCR_LANGUAGE_HEADER: &str = "X-Tika-OCRLanguage";

/// Fixed request timeout. OCR on large scans is slow.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP client for one Tika server.
///
/// Cloning is cheap and each clone carries its own OCR language, so
/// callers clone per request when languages differ.
#[derive(Debug, Clone)]
pub struct TikaClient {
    http: reqwest::Client,
    text_endpoint: Url,
    version_endpoint: Url,
    ocr_language: String,
}

impl TikaClient {
    /// Build a client for `host:port`.
    ///
    /// Fails when the pair does not form a valid HTTP endpoint.
    pub fn new(host: &str, port: u16) -> TikaResult<Self> {
        let endpoint = format!("http://{}:{}/", host, port);
        let base = Url::parse(&endpoint).map_err(|source| TikaError::Endpoint {
            endpoint: endpoint.clone(),
            source,
        })?;
        let text_endpoint = base.join("tika").map_err(|source| TikaError::Endpoint {
            endpoint: endpoint.clone(),
            source,
        })?;
        let version_endpoint = base.join("version").map_err(|source| TikaError::Endpoint {
            endpoint,
            source,
        })?;
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http,
            text_endpoint,
            version_endpoint,
            ocr_language: DEFAULT_OCR_LANGUAGE.to_string(),
        })
    }

    /// Set the OCR language for subsequent requests.
    pub fn set_ocr_language(&mut self, langcode: impl Into<String>) {
        self.ocr_language = langcode.into();
    }

    /// OCR language currently in effect.
    pub fn ocr_language(&self) -> &str {
        &self.ocr_language
    }

    /// Extract plain text from the file at `path`.
    pub async fn get_text(&self, path: &Path) -> TikaResult<String> {
        let bytes = tokio::fs::read(path).await?;

        let response = self
            .http
            .put(self.text_endpoint.clone())
            .header(header::ACCEPT, "text/plain")
            .header(OCR_LANGUAGE_HEADER, self.ocr_language.as_str())
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TikaError::Server {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        Ok(response.text().await?)
    }

    /// Server version string, usable as a connection probe.
    pub async fn version(&self) -> TikaResult<String> {
        let response = self.http.get(self.version_endpoint.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TikaError::Server {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        Ok(response.text().await?)
    }
}
