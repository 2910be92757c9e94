//! Document types for pipeline processing.

use crate::build::document::Document;
use crate::build::markdown::HeadingIds;
use crate::build::render::PageInfo;

/// A document being processed through the pipeline.
///
/// Wraps the original `Document` with mutable state that evolves
/// through pipeline stages:
///
/// 1. Initially: `content` = raw markdown
/// 2. After liquid: `content` = markdown with Liquid expanded, block tags
///    rendered into `fragments` and placeholders left in their place
/// 3. After markdown: `content` = HTML with fragments spliced back in
/// 4. After template: `output_html` = final page HTML
/// 5. After sidenav: `output_html` carries the side navigation, if any
#[derive(Debug)]
pub struct ProcessingDocument {
    /// The original document (metadata and raw content)
    pub doc: Document,

    /// Content being processed.
    pub content: String,

    /// Rendered block tags waiting to be spliced back into `content`.
    pub fragments: Vec<String>,

    /// Heading ids already used on this page.
    pub heading_ids: HeadingIds,

    /// Final HTML output after template rendering.
    ///
    /// None until the template stage populates it.
    pub output_html: Option<String>,

    /// Whether the sidenav stage added a navigation to this page.
    pub has_sidenav: bool,
}

impl ProcessingDocument {
    /// Create a new processing document from a discovered document.
    pub fn new(doc: Document) -> Self {
        let content = doc.raw_content.clone();
        Self {
            doc,
            content,
            fragments: Vec::new(),
            heading_ids: HeadingIds::new(),
            output_html: None,
            has_sidenav: false,
        }
    }

    /// Get the document's URL path (for output location).
    pub fn url_path(&self) -> &str {
        &self.doc.url_path
    }

    /// Get the document title.
    pub fn title(&self) -> String {
        self.doc.title()
    }

    /// Page metadata exposed to templates as `page.*`.
    pub fn page_info(&self) -> PageInfo {
        PageInfo {
            title: self.title(),
            url: self.doc.url_path.clone(),
            description: self.doc.front_matter.description.clone(),
            sidenav: self.doc.front_matter.sidenav,
            extra: self.doc.front_matter.extra.clone(),
        }
    }
}
