//! Default-deny HTML sanitization.
//!
//! Rendered output arrives as markup; search backends and OCR caches
//! want bare text. The sanitizer strips every element and attribute
//! and keeps only text content, whitespace intact. Trimming is left
//! to the extractors so inner whitespace survives untouched.

use scraper::{ElementRef, Html};
use serde::{Deserialize, Serialize};

/// Plain-text sanitization capability.
pub trait Sanitize: Send + Sync {
    /// Strip all markup from `html`, returning only its text content.
    fn sanitize(&self, html: &str) -> String;
}

/// Policy for [`HtmlSanitizer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizerConfig {
    /// Elements whose entire subtree is dropped, text included.
    pub drop_elements: Vec<String>,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            drop_elements: vec![
                "script".to_string(),
                "style".to_string(),
                "noscript".to_string(),
            ],
        }
    }
}

/// Default-deny HTML-to-text sanitizer.
///
/// No element survives, whatever the input allows. Text nodes are
/// concatenated verbatim and character entities come out decoded.
pub struct HtmlSanitizer {
    config: SanitizerConfig,
}

impl HtmlSanitizer {
    /// Create a sanitizer with the default policy.
    pub fn new() -> Self {
        Self {
            config: SanitizerConfig::default(),
        }
    }

    /// Create a sanitizer with a custom policy.
    pub fn with_config(config: SanitizerConfig) -> Self {
        Self { config }
    }

    fn dropped(&self, tag: &str) -> bool {
        self.config
            .drop_elements
            .iter()
            .any(|dropped| dropped.eq_ignore_ascii_case(tag))
    }

    fn collect_text(&self, element: &ElementRef, out: &mut String) {
        for child in element.children() {
            if let Some(node) = child.value().as_element() {
                if self.dropped(node.name()) {
                    continue;
                }
                if let Some(child_element) = ElementRef::wrap(child) {
                    self.collect_text(&child_element, out);
                }
            } else if let Some(text) = child.value().as_text() {
                out.push_str(text);
            }
        }
    }
}

impl Default for HtmlSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sanitize for HtmlSanitizer {
    fn sanitize(&self, html: &str) -> String {
        let fragment = Html::parse_fragment(html);
        let mut text = String::new();
        self.collect_text(&fragment.root_element(), &mut text);
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_nested_markup() {
        let sanitizer = HtmlSanitizer::new();
        let text = sanitizer.sanitize("<div><strong>Hello</strong> <em>world</em></div>");
        assert_eq!(text, "Hello world");
    }

    #[test]
    fn test_preserves_inner_whitespace_verbatim() {
        let sanitizer = HtmlSanitizer::new();
        let text =
            sanitizer.sanitize("<p>  Quisque dolor vehicula egestas morbi commodo diam   . </p>");
        assert_eq!(text, "  Quisque dolor vehicula egestas morbi commodo diam   . ");
    }

    #[test]
    fn test_drops_script_subtree() {
        let sanitizer = HtmlSanitizer::new();
        let text = sanitizer.sanitize("before<script>var x = 1;</script>after");
        assert_eq!(text, "beforeafter");
    }

    #[test]
    fn test_drops_style_subtree() {
        let sanitizer = HtmlSanitizer::new();
        let text = sanitizer.sanitize("<style>p { color: red; }</style><p>kept</p>");
        assert_eq!(text, "kept");
    }

    #[test]
    fn test_decodes_entities() {
        let sanitizer = HtmlSanitizer::new();
        let text = sanitizer.sanitize("<p>Caf&eacute; &amp; bar</p>");
        assert_eq!(text, "Café & bar");
    }

    #[test]
    fn test_plain_text_passes_through() {
        let sanitizer = HtmlSanitizer::new();
        assert_eq!(sanitizer.sanitize("no markup here"), "no markup here");
    }

    #[test]
    fn test_empty_input() {
        let sanitizer = HtmlSanitizer::new();
        assert_eq!(sanitizer.sanitize(""), "");
    }

    #[test]
    fn test_custom_policy_drops_extra_elements() {
        let config = SanitizerConfig {
            drop_elements: vec!["aside".to_string()],
        };
        let sanitizer = HtmlSanitizer::with_config(config);
        let text = sanitizer.sanitize("<p>kept</p><aside>dropped</aside>");
        assert_eq!(text, "kept");
    }

    #[test]
    fn test_comments_are_ignored() {
        let sanitizer = HtmlSanitizer::new();
        assert_eq!(sanitizer.sanitize("a<!-- hidden -->b"), "ab");
    }
}
