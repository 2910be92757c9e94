//! Liquid stage.
//!
//! Renders the document text as a Liquid template before markdown
//! conversion: variables, filters, control flow, and the `accordion`,
//! `alert`, `callout` and `media` block tags.

use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};

/// Stage that renders Liquid in markdown content.
///
/// Content authors can use:
/// - Variables: `{{ page.title }}`, `{{ site.name }}`, `{{ theme.accent }}`
/// - Filters: `{{ "Stop" | colorize_red }}`
/// - Control flow: `{% if ... %}...{% endif %}`
/// - Block tags: `{% callout info %}...{% endcallout %}`
///
/// Each top-level block tag is stored on the document as an HTML fragment
/// and leaves a placeholder comment in `content`.
pub struct LiquidStage;

impl Stage for LiquidStage {
    fn name(&self) -> &'static str {
        "liquid"
    }

    fn process(
        &self,
        docs: &mut [ProcessingDocument],
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        for doc in docs {
            let content_context = ctx.content_context(doc);

            let expanded = ctx
                .content
                .render(&doc.content, &content_context)
                .map_err(|source| PipelineError::Tags {
                    path: doc.doc.source_path.display().to_string(),
                    source,
                })?;

            doc.content = expanded.text;
            doc.fragments = expanded.fragments;
            doc.heading_ids = expanded.heading_ids;
        }

        Ok(())
    }
}
