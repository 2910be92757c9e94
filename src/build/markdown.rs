//! Markdown rendering with heading ids.
//!
//! Every heading leaves the converter with an `id` attribute, either the one
//! given with `{#id}` or a slug of its text, so later stages can link to it.

use std::collections::HashSet;

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};

use crate::config::MarkdownConfig;

#[derive(thiserror::Error, Debug)]
pub enum MarkdownError {
    #[error("invalid markdown extension: {0}")]
    InvalidExtension(String),
}

/// Build parser options from the configured extension names.
fn parser_options(markdown_config: &MarkdownConfig) -> Result<Options, MarkdownError> {
    let mut options = Options::empty();
    for extension in &markdown_config.extensions {
        match extension.as_str() {
            "definition_lists" => options.insert(Options::ENABLE_DEFINITION_LIST),
            "footnotes" => options.insert(Options::ENABLE_FOOTNOTES),
            "gfm" => options.insert(Options::ENABLE_GFM),
            "heading_attributes" => options.insert(Options::ENABLE_HEADING_ATTRIBUTES),
            "strikethrough" => options.insert(Options::ENABLE_STRIKETHROUGH),
            "tables" => options.insert(Options::ENABLE_TABLES),
            "tasklists" => options.insert(Options::ENABLE_TASKLISTS),
            other => return Err(MarkdownError::InvalidExtension(other.to_string())),
        }
    }
    Ok(options)
}

/// Heading ids already taken in one document.
///
/// A page is converted in several pieces (the text around block tags and
/// each tag body), so the pieces share one set to keep ids unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadingIds(HashSet<String>);

impl HeadingIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `base`, or the first free `base-N`.
    fn claim(&mut self, base: &str) -> String {
        let mut id = base.to_string();
        let mut suffix = 1;
        while self.0.contains(&id) {
            id = format!("{}-{}", base, suffix);
            suffix += 1;
        }
        self.0.insert(id.clone());
        id
    }

    fn reserve(&mut self, id: &str) {
        self.0.insert(id.to_string());
    }
}

/// Render markdown to HTML using pulldown-cmark.
///
/// Heading ids are taken from `heading_ids`, which the other pieces of the
/// same document share.
pub fn render_markdown(
    markdown: &str,
    markdown_config: &MarkdownConfig,
    heading_ids: &mut HeadingIds,
) -> Result<String, MarkdownError> {
    let parser = Parser::new_ext(markdown, parser_options(markdown_config)?);

    // Intercept headings to add id attributes
    struct HeadingState<'a> {
        level: HeadingLevel,
        classes: Vec<String>,
        attrs: Vec<(String, Option<String>)>,
        inner: Vec<Event<'a>>,
        text: String,
    }
    let mut in_heading: Option<HeadingState> = None;

    let events: Vec<Event> = parser
        .flat_map(|event| match event {
            Event::Start(Tag::Heading {
                level,
                ref id,
                ref classes,
                ref attrs,
            }) => {
                // If heading already has an id, just pass it through
                if let Some(existing_id) = id {
                    heading_ids.reserve(existing_id);
                    return vec![event];
                }
                in_heading = Some(HeadingState {
                    level,
                    classes: classes.iter().map(|c| c.to_string()).collect(),
                    attrs: attrs
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.as_ref().map(|v| v.to_string())))
                        .collect(),
                    inner: Vec::new(),
                    text: String::new(),
                });
                vec![]
            }
            Event::End(TagEnd::Heading(_)) if in_heading.is_some() => {
                let Some(state) = in_heading.take() else {
                    return vec![event];
                };

                // Generate a unique id from the heading text
                let id = heading_ids.claim(&slugify(&state.text));

                let class_attr = if state.classes.is_empty() {
                    String::new()
                } else {
                    format!(" class=\"{}\"", state.classes.join(" "))
                };

                let extra_attrs = state
                    .attrs
                    .iter()
                    .map(|(k, v)| match v {
                        Some(val) => format!(" {}=\"{}\"", k, val),
                        None => format!(" {}", k),
                    })
                    .collect::<String>();

                let mut inner_html = String::new();
                html::push_html(&mut inner_html, state.inner.into_iter());

                vec![Event::Html(
                    format!(
                        "<h{} id=\"{}\"{}{}>{}</h{}>\n",
                        state.level as usize,
                        id,
                        class_attr,
                        extra_attrs,
                        inner_html,
                        state.level as usize,
                    )
                    .into(),
                )]
            }
            _ => match in_heading.as_mut() {
                Some(state) => {
                    if let Event::Text(text) | Event::Code(text) = &event {
                        state.text.push_str(text);
                    }
                    state.inner.push(event);
                    vec![]
                }
                None => vec![event],
            },
        })
        .collect();

    let mut html_output = String::new();
    html::push_html(&mut html_output, events.into_iter());

    Ok(html_output)
}

/// Render markdown as a single run of inline content.
///
/// Paragraph boundaries are dropped, so several paragraphs merge into one
/// line of HTML that can sit inside an inline context.
pub fn render_markdown_inline(
    markdown: &str,
    markdown_config: &MarkdownConfig,
) -> Result<String, MarkdownError> {
    let parser = Parser::new_ext(markdown, parser_options(markdown_config)?);

    let events = parser.filter_map(|event| match event {
        Event::Start(Tag::Paragraph) => None,
        Event::End(TagEnd::Paragraph) => Some(Event::Text(" ".into())),
        other => Some(other),
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, events);

    Ok(html_output.trim().to_string())
}

/// Convert a string to a slug suitable for use as an HTML id.
fn slugify(s: &str) -> String {
    s.to_lowercase()
        .replace(' ', "-")
        .replace(|c: char| !c.is_alphanumeric() && c != '-', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("What's New?"), "whats-new");
        assert_eq!(slugify("API Reference"), "api-reference");
    }

    #[test]
    fn test_render_basic_markdown() {
        let config = MarkdownConfig::default();

        let output = render_markdown("# Hello\n\nWorld", &config, &mut HeadingIds::new()).unwrap();

        assert!(output.contains("<h1 id=\"hello\">Hello</h1>"));
        assert!(output.contains("<p>World</p>"));
    }

    #[test]
    fn test_duplicate_headings_get_suffixes() {
        let config = MarkdownConfig::default();

        let output = render_markdown("## Setup\n\n## Setup\n", &config, &mut HeadingIds::new()).unwrap();

        assert!(output.contains("<h2 id=\"setup\">"));
        assert!(output.contains("<h2 id=\"setup-1\">"));
    }

    #[test]
    fn test_shared_ids_stay_unique_across_pieces() {
        let config = MarkdownConfig::default();
        let mut ids = HeadingIds::new();

        let first = render_markdown("# Setup\n", &config, &mut ids).unwrap();
        let second = render_markdown("# Setup\n", &config, &mut ids).unwrap();

        assert!(first.contains("<h1 id=\"setup\">"));
        assert!(second.contains("<h1 id=\"setup-1\">"));
    }

    #[test]
    fn test_explicit_heading_id_is_kept() {
        let config = MarkdownConfig::default();

        let output = render_markdown("# Intro {#start}\n", &config, &mut HeadingIds::new()).unwrap();

        assert!(output.contains("id=\"start\""));
    }

    #[test]
    fn test_heading_inline_markup_is_rendered() {
        let config = MarkdownConfig::default();

        let output = render_markdown("# Using `cargo`\n", &config, &mut HeadingIds::new()).unwrap();

        assert!(output.contains("<h1 id=\"using-cargo\">Using <code>cargo</code></h1>"));
    }

    #[test]
    fn test_inline_merges_paragraphs() {
        let config = MarkdownConfig::default();

        let output = render_markdown_inline("First **bold**.\n\nSecond.", &config).unwrap();

        assert_eq!(output, "First <strong>bold</strong>. Second.");
    }

    #[test]
    fn test_invalid_extension() {
        let config = MarkdownConfig {
            extensions: vec!["not_a_real_extension".to_string()],
        };

        let result = render_markdown("# Test", &config, &mut HeadingIds::new());
        assert!(result.is_err());
    }
}
