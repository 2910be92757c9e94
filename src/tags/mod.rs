//! Document templating with Liquid.
//!
//! Document text is a Liquid template: variables (`{{ page.title }}`), the
//! standard tags and filters, the `colorize` filters, and Bootstrap block
//! tags:
//!
//! ```text
//! {% accordion faq %}
//! {% collapse How do I install it? %}
//! Run the installer.
//! {% endcollapse %}
//! {% endaccordion %}
//! ```
//!
//! Block tags convert their own bodies from markdown. A tag that is not
//! nested in another one is parked as a fragment, leaving a placeholder
//! comment behind, so the markdown pass over the rest of the page cannot
//! reinterpret its HTML. [`splice`] puts the fragments back afterwards.

mod accordion;
mod alert;
mod callout;
mod colorize;
mod media;

use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use liquid::ParserBuilder;
use liquid_core::error::ResultLiquidReplaceExt;
use liquid_core::{Error, Runtime};
use serde::Serialize;

use crate::build::markdown::{HeadingIds, render_markdown, render_markdown_inline};
use crate::config::MarkdownConfig;

#[derive(thiserror::Error, Debug)]
pub enum TagError {
    #[error("{0}")]
    Liquid(#[from] liquid::Error),
}

/// Register the block tags and filters on a parser builder.
fn register_tags(parser_builder: ParserBuilder, session: &TagSession) -> ParserBuilder {
    let parser_builder = parser_builder
        .block(accordion::AccordionBlock::new(session.clone()))
        .block(accordion::CollapseBlock::new(session.clone()))
        .block(alert::AlertBlock::new(session.clone()))
        .block(callout::CalloutBlock::new(session.clone()))
        .block(media::MediaBlock::new(session.clone()));

    colorize::register_filters(parser_builder)
}

// =============================================================================
// Document state
// =============================================================================

/// What the block tags leave behind while one document renders.
#[derive(Debug, Default)]
struct DocumentState {
    heading_ids: HeadingIds,
    fragments: Vec<String>,
}

/// Open block tags on the current render; 0 outside any tag.
#[derive(Debug, Default)]
struct Nesting(usize);

/// State shared by the block tags of one parser.
///
/// Documents render one at a time; [`ContentRenderer::render`] resets the
/// state before a document and takes it afterwards.
#[derive(Debug, Clone)]
pub(crate) struct TagSession {
    markdown_config: Arc<MarkdownConfig>,
    state: Arc<Mutex<DocumentState>>,
}

impl TagSession {
    fn new(markdown_config: MarkdownConfig) -> Self {
        Self {
            markdown_config: Arc::new(markdown_config),
            state: Arc::new(Mutex::new(DocumentState::default())),
        }
    }

    fn state(&self) -> MutexGuard<'_, DocumentState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Convert block-level markdown to HTML.
    pub(crate) fn markdown(&self, text: &str) -> liquid_core::Result<String> {
        let mut state = self.state();
        render_markdown(text, &self.markdown_config, &mut state.heading_ids)
            .map_err(|e| Error::with_msg(e.to_string()))
    }

    /// Convert markdown to a single run of inline HTML.
    pub(crate) fn markdown_span(&self, text: &str) -> liquid_core::Result<String> {
        render_markdown_inline(text, &self.markdown_config)
            .map_err(|e| Error::with_msg(e.to_string()))
    }

    /// Write the HTML produced by `render`, or a placeholder for it when
    /// the tag is not nested in another block tag.
    pub(crate) fn render_block(
        &self,
        writer: &mut dyn Write,
        runtime: &dyn Runtime,
        render: impl FnOnce() -> liquid_core::Result<String>,
    ) -> liquid_core::Result<()> {
        let top_level = {
            let mut nesting = runtime.registers().get_mut::<Nesting>();
            nesting.0 += 1;
            nesting.0 == 1
        };
        let html = render();
        runtime.registers().get_mut::<Nesting>().0 -= 1;
        let html = html?;

        if !top_level {
            return write!(writer, "{}", html).replace("Failed to render");
        }

        let marker = {
            let mut state = self.state();
            state.fragments.push(html);
            placeholder(state.fragments.len() - 1)
        };
        write!(writer, "\n\n{}\n\n", marker).replace("Failed to render")
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// A document with its Liquid rendered.
#[derive(Debug, Default)]
pub struct Expanded {
    /// The rendered text, each top-level block tag replaced by a placeholder
    pub text: String,
    /// Rendered HTML, one per placeholder
    pub fragments: Vec<String>,
    /// Heading ids the block tags used, to be shared with the rest of the page
    pub heading_ids: HeadingIds,
}

/// Renders document text through Liquid.
pub struct ContentRenderer {
    parser: liquid::Parser,
    session: TagSession,
}

impl ContentRenderer {
    pub fn new(markdown_config: &MarkdownConfig) -> Result<Self, TagError> {
        let session = TagSession::new(markdown_config.clone());
        let parser = register_tags(ParserBuilder::with_stdlib(), &session).build()?;
        Ok(Self { parser, session })
    }

    /// Render `source` with the fields of `context` as globals.
    pub fn render<T: Serialize>(&self, source: &str, context: &T) -> Result<Expanded, TagError> {
        let globals = liquid::model::to_object(context)?;

        *self.session.state() = DocumentState::default();
        let template = self.parser.parse(source)?;
        let text = template.render(&globals)?;
        let state = std::mem::take(&mut *self.session.state());

        Ok(Expanded {
            text,
            fragments: state.fragments,
            heading_ids: state.heading_ids,
        })
    }
}

/// Placeholder for the `index`-th fragment.
///
/// An HTML comment on a line of its own is passed through by the markdown
/// converter untouched, whatever the fragment contains.
pub fn placeholder(index: usize) -> String {
    format!("<!--spyglass:fragment:{}-->", index)
}

/// Put rendered fragments back in place of their placeholders.
pub fn splice(html: &str, fragments: &[String]) -> String {
    fragments
        .iter()
        .enumerate()
        .fold(html.to_string(), |html, (index, fragment)| {
            html.replacen(&placeholder(index), fragment.trim_end(), 1)
        })
}

/// Render `source` with no globals.
#[cfg(test)]
pub(crate) fn expand(source: &str) -> Result<Expanded, TagError> {
    ContentRenderer::new(&MarkdownConfig::default())?.render(source, &serde_json::json!({}))
}
