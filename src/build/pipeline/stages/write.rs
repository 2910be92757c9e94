//! File writing stage.

use crate::build::paths::url_to_output_path;
use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};

/// Stage that writes each page to `<output>/<url>/index.html`.
pub struct WriteStage;

impl Stage for WriteStage {
    fn name(&self) -> &'static str {
        "write"
    }

    fn process(
        &self,
        docs: &mut [ProcessingDocument],
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        for doc in docs.iter() {
            let Some(html) = doc.output_html.as_deref() else {
                return Err(PipelineError::stage(
                    "write",
                    format!("document '{}' was never rendered", doc.url_path()),
                ));
            };

            let output_path = url_to_output_path(doc.url_path(), ctx.output_dir);
            if let Some(parent) = output_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output_path, html)?;

            tracing::debug!(
                url = doc.url_path(),
                sidenav = doc.has_sidenav,
                path = %output_path.display(),
                "wrote page"
            );
        }

        Ok(())
    }
}
