//! Pipeline context for sharing state across stages.

use std::path::Path;

use crate::build::render::{ContentRenderContext, Renderer, SiteContext};
use crate::config::{MarkdownConfig, SidenavConfig};
use crate::tags::ContentRenderer;

use super::ProcessingDocument;

/// Shared context for pipeline stages.
///
/// Contains all resources and configuration needed by stages during processing.
pub struct PipelineContext<'a> {
    // === Output configuration ===
    /// Directory where output files are written
    pub output_dir: &'a Path,

    // === Site-level data ===
    /// Site metadata (name, URL, favicon)
    pub site: &'a SiteContext,

    /// Theme settings passed to templates
    pub theme_settings: &'a serde_json::Value,

    /// Markdown processing configuration
    pub markdown_config: &'a MarkdownConfig,

    /// Side navigation configuration
    pub sidenav_config: &'a SidenavConfig,

    // === Services ===
    /// Liquid renderer for document text, with the block tags registered
    pub content: &'a ContentRenderer,

    /// Page template renderer
    pub renderer: &'a Renderer,

    // === Build state ===
    /// Number of pages that received a side navigation
    pub sidenav_pages: usize,
}

impl<'a> PipelineContext<'a> {
    /// Create a new pipeline context.
    pub fn new(
        output_dir: &'a Path,
        site: &'a SiteContext,
        theme_settings: &'a serde_json::Value,
        markdown_config: &'a MarkdownConfig,
        sidenav_config: &'a SidenavConfig,
        content: &'a ContentRenderer,
        renderer: &'a Renderer,
    ) -> Self {
        Self {
            output_dir,
            site,
            theme_settings,
            markdown_config,
            sidenav_config,
            content,
            renderer,
            sidenav_pages: 0,
        }
    }

    /// The Liquid globals for rendering a document's own text.
    pub fn content_context(&self, doc: &ProcessingDocument) -> ContentRenderContext {
        ContentRenderContext {
            site: self.site.clone(),
            page: doc.page_info(),
            theme: self.theme_settings.clone(),
        }
    }
}
