//! Pipeline error types.

use crate::build::render::RenderError;
use crate::sidenav::SidenavError;
use crate::tags::TagError;

/// Errors that can occur during pipeline processing.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error("template rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("liquid error in {path}: {source}")]
    Tags {
        path: String,
        #[source]
        source: TagError,
    },

    #[error("side navigation error in {path}: {source}")]
    Sidenav {
        path: String,
        #[source]
        source: SidenavError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stage '{stage}' failed: {message}")]
    Stage { stage: String, message: String },
}

impl PipelineError {
    /// Create a stage-specific error.
    pub fn stage(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Stage {
            stage: stage.into(),
            message: message.into(),
        }
    }
}
