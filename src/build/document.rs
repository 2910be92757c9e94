use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::util::title_from_stem;

// =============================================================================
// Content items (documents and static files)
// =============================================================================

/// A content item discovered in the content directory.
/// Can be either a document (markdown) or a static file (images, etc.).
#[derive(Debug, Clone)]
pub enum ContentItem {
    /// A markdown document that will be rendered to HTML
    Document(Document),
    /// A static file that will be copied as-is
    Static(StaticFile),
}

/// A static file (image, CSS, JS, etc.) that gets copied to output.
#[derive(Debug, Clone)]
pub struct StaticFile {
    /// Path relative to the content root (e.g., "images/screenshot.png")
    pub source_path: PathBuf,
    /// The output path this file will be written to (e.g., "/images/screenshot.png")
    pub output_path: String,
}

// =============================================================================
// Documents
// =============================================================================

/// A markdown document discovered in the content directory.
#[derive(Debug, Clone)]
pub struct Document {
    /// Path relative to the content root (e.g., "guides/installation.md")
    pub source_path: PathBuf,
    /// The URL path this document will be served at (e.g., "/guides/installation")
    pub url_path: String,
    /// Front matter metadata
    pub front_matter: FrontMatter,
    /// Markdown content without the front matter block
    pub raw_content: String,
}

/// Front matter metadata parsed from the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrontMatter {
    /// Page title (can override filename-derived title)
    pub title: Option<String>,
    /// Page description for SEO/previews
    pub description: Option<String>,
    /// Opt in to the generated side navigation
    #[serde(default)]
    pub sidenav: bool,
    /// Additional arbitrary metadata (available in templates at top level, e.g., `page.author`)
    #[serde(flatten)]
    pub extra: std::collections::HashMap<String, serde_yaml::Value>,
}

/// Result of parsing front matter from markdown content.
#[derive(Debug)]
pub struct ParsedContent {
    /// The parsed front matter (empty if none found)
    pub front_matter: FrontMatter,
    /// The markdown content without the front matter block
    pub content: String,
}

/// Parse front matter from markdown content.
///
/// Front matter is a YAML block delimited by `---` at the start of the file:
///
/// ```markdown
/// ---
/// title: My Page
/// sidenav: true
/// ---
///
/// # Content starts here
/// ```
///
/// Returns the parsed front matter and the remaining content.
pub fn parse_front_matter(content: &str) -> ParsedContent {
    let content = content.trim_start();

    if !content.starts_with("---") {
        return ParsedContent {
            front_matter: FrontMatter::default(),
            content: content.to_string(),
        };
    }

    let after_opening = &content[3..];
    let Some(closing_pos) = after_opening.find("\n---") else {
        // No closing delimiter found, treat entire content as markdown
        return ParsedContent {
            front_matter: FrontMatter::default(),
            content: content.to_string(),
        };
    };

    let yaml_content = after_opening[..closing_pos].trim_start_matches('\n');

    // "---" + yaml + "\n---"
    let markdown_start = 3 + closing_pos + 4;
    let markdown_content = if markdown_start < content.len() {
        content[markdown_start..].trim_start_matches('\n').to_string()
    } else {
        String::new()
    };

    let front_matter = if yaml_content.trim().is_empty() {
        FrontMatter::default()
    } else {
        match serde_yaml::from_str(yaml_content) {
            Ok(fm) => fm,
            Err(e) => {
                tracing::warn!("failed to parse front matter: {}", e);
                FrontMatter::default()
            }
        }
    };

    ParsedContent {
        front_matter,
        content: markdown_content,
    }
}

impl Document {
    /// Load a document from disk, splitting off its front matter.
    pub fn load(full_path: &Path, source_path: PathBuf, url_path: String) -> std::io::Result<Self> {
        let raw = std::fs::read_to_string(full_path)?;
        let parsed = parse_front_matter(&raw);
        Ok(Self {
            source_path,
            url_path,
            front_matter: parsed.front_matter,
            raw_content: parsed.content,
        })
    }

    /// Get the document title, falling back to filename if not in front matter.
    pub fn title(&self) -> String {
        self.front_matter.title.clone().unwrap_or_else(|| {
            self.source_path
                .file_stem()
                .and_then(|s| s.to_str())
                .map(title_from_stem)
                .unwrap_or_else(|| "Untitled".to_string())
        })
    }
}
