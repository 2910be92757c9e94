//! Markdown rendering stage.

use crate::build::markdown::render_markdown;
use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};
use crate::tags::splice;

/// Stage that renders markdown content to HTML.
///
/// After this stage, `doc.content` contains HTML, with every heading
/// carrying an `id` and the block tag fragments back in place. Heading ids
/// continue from the ones the block tags took, so none repeats on a page.
pub struct MarkdownStage;

impl Stage for MarkdownStage {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn process(
        &self,
        docs: &mut [ProcessingDocument],
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        for doc in docs {
            let html = render_markdown(
                &doc.content,
                ctx.markdown_config,
                &mut doc.heading_ids,
            )
            .map_err(|e| {
                PipelineError::stage(
                    "markdown",
                    format!("failed to render {}: {}", doc.url_path(), e),
                )
            })?;

            doc.content = splice(&html, &std::mem::take(&mut doc.fragments));
        }

        Ok(())
    }
}
