//! Side navigation stages.

use std::borrow::Cow;

use crate::build::pipeline::{
    FinalizeStage, PipelineContext, PipelineError, ProcessingDocument, Stage,
};
use crate::sidenav::{SIDE_NAV_JS, compile};

/// Stage that adds the side navigation to pages that opt in with
/// `sidenav: true` in their front matter.
///
/// Pages with too few headings are left untouched.
pub struct SidenavStage;

impl Stage for SidenavStage {
    fn name(&self) -> &'static str {
        "sidenav"
    }

    fn process(
        &self,
        docs: &mut [ProcessingDocument],
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        for doc in docs {
            let Some(html) = doc.output_html.as_deref() else {
                return Err(PipelineError::stage(
                    "sidenav",
                    format!(
                        "document '{}' has no output HTML (was template stage run?)",
                        doc.url_path()
                    ),
                ));
            };

            let compiled = compile(html, doc.doc.front_matter.sidenav, ctx.sidenav_config)
                .map_err(|source| PipelineError::Sidenav {
                    path: doc.doc.source_path.display().to_string(),
                    source,
                })?;
            let with_nav = match compiled {
                Cow::Owned(html) => Some(html),
                Cow::Borrowed(_) => None,
            };

            if let Some(html) = with_nav {
                tracing::debug!(url = doc.url_path(), "added side navigation");
                doc.output_html = Some(html);
                doc.has_sidenav = true;
                ctx.sidenav_pages += 1;
            }
        }

        Ok(())
    }
}

/// Writes the side navigation script once any page has a side navigation.
pub struct SidenavAssetStage;

impl FinalizeStage for SidenavAssetStage {
    fn name(&self) -> &'static str {
        "sidenav-asset"
    }

    fn finalize(&self, ctx: &PipelineContext) -> Result<(), PipelineError> {
        if ctx.sidenav_pages == 0 {
            return Ok(());
        }

        let output_path = ctx.output_dir.join(&ctx.sidenav_config.script_output);
        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&output_path, SIDE_NAV_JS)?;

        tracing::info!(
            pages = ctx.sidenav_pages,
            path = %output_path.display(),
            "wrote side navigation script"
        );
        Ok(())
    }
}
