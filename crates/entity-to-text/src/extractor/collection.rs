//! Reference-collection plain-text extraction.

use crate::error::ExtractResult;
use crate::item::ItemReference;
use crate::render::Render;
use crate::sanitizer::Sanitize;
use std::sync::Arc;

/// View mode used for referenced items.
const VIEW_MODE: &str = "full";

/// Extracts every item of a reference collection as trimmed plain
/// text, one string per reference, in collection order.
pub struct CollectionExtractor {
    renderer: Arc<dyn Render>,
    sanitizer: Arc<dyn Sanitize>,
}

impl CollectionExtractor {
    /// Create an extractor from its collaborators.
    pub fn new(renderer: Arc<dyn Render>, sanitizer: Arc<dyn Sanitize>) -> Self {
        Self {
            renderer,
            sanitizer,
        }
    }

    /// Render each referenced item in the full view mode, in the
    /// language its reference carries, and reduce it to trimmed plain
    /// text. Output length and order always match the input.
    pub async fn extract_many(&self, references: &[ItemReference]) -> ExtractResult<Vec<String>> {
        let mut texts = Vec::with_capacity(references.len());

        for reference in references {
            let rendered = self
                .renderer
                .render_item(&reference.item, VIEW_MODE, &reference.langcode)
                .await?;
            let text = self.sanitizer.sanitize(rendered.as_str());
            texts.push(text.trim().to_string());
        }

        Ok(texts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;
    use crate::item::ContentItem;
    use crate::render::{MockRender, Rendered};
    use crate::sanitizer::HtmlSanitizer;

    fn extractor(renderer: MockRender) -> CollectionExtractor {
        CollectionExtractor::new(Arc::new(renderer), Arc::new(HtmlSanitizer::new()))
    }

    fn reference(id: &str, langcode: &str) -> ItemReference {
        ItemReference::new(
            ContentItem::new(id, "paragraph").with_langcode(langcode),
            langcode,
        )
    }

    #[tokio::test]
    async fn test_empty_collection_yields_empty_vec() {
        let mut renderer = MockRender::new();
        renderer.expect_render_item().times(0);

        let extractor = extractor(renderer);

        let texts = extractor.extract_many(&[]).await.unwrap();
        assert!(texts.is_empty());
    }

    #[tokio::test]
    async fn test_preserves_order_and_length() {
        let mut renderer = MockRender::new();
        renderer
            .expect_render_item()
            .times(2)
            .returning(|item, _, _| {
                Ok(Rendered::Markup(format!("<p>paragraph {}</p>", item.id)))
            });

        let extractor = extractor(renderer);
        let references = vec![reference("7", "en"), reference("8", "en")];

        let texts = extractor.extract_many(&references).await.unwrap();
        assert_eq!(texts, vec!["paragraph 7", "paragraph 8"]);
    }

    #[tokio::test]
    async fn test_renders_full_view_mode_in_reference_language() {
        let mut renderer = MockRender::new();
        renderer
            .expect_render_item()
            .withf(|item, view_mode, langcode| {
                item.id == "7" && view_mode == "full" && langcode == "fr"
            })
            .times(1)
            .returning(|_, _, _| Ok(Rendered::Plain("texte".to_string())));

        let extractor = extractor(renderer);

        let texts = extractor.extract_many(&[reference("7", "fr")]).await.unwrap();
        assert_eq!(texts, vec!["texte"]);
    }

    #[tokio::test]
    async fn test_trims_each_value_but_keeps_inner_whitespace() {
        let mut renderer = MockRender::new();
        renderer.expect_render_item().returning(|_, _, _| {
            Ok(Rendered::Markup(
                "<p>  Quisque dolor vehicula egestas morbi commodo diam   . </p>".to_string(),
            ))
        });

        let extractor = extractor(renderer);

        let texts = extractor.extract_many(&[reference("7", "en")]).await.unwrap();
        assert_eq!(texts, vec!["Quisque dolor vehicula egestas morbi commodo diam   ."]);
    }

    #[tokio::test]
    async fn test_render_failure_propagates() {
        let mut renderer = MockRender::new();
        renderer
            .expect_render_item()
            .returning(|_, _, _| Err(ExtractError::Render("view builder broke".to_string())));

        let extractor = extractor(renderer);

        let result = extractor.extract_many(&[reference("7", "en")]).await;
        assert!(matches!(result, Err(ExtractError::Render(_))));
    }
}
