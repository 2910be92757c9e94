//! Configuration type definitions.
//!
//! This module contains all the data structures used in spyglass configuration files.
//! These types are pure data - no I/O or complex logic.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// =============================================================================
// Top-level config
// =============================================================================

/// The full site configuration read from `spyglass.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpyglassConfig {
    pub site: SiteConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub theme: SiteTheme,
    #[serde(default)]
    pub markdown: MarkdownConfig,
    #[serde(default)]
    pub sidenav: SidenavConfig,
}

/// Resolve a possibly relative path against a base path.
pub(crate) fn resolve_against(path: &Path, base_path: &Path) -> PathBuf {
    if path.is_relative() {
        base_path.join(path)
    } else {
        path.to_path_buf()
    }
}

// =============================================================================
// Site configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub url: Option<String>,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Path to the site favicon
    pub favicon: Option<String>,
}

fn default_output() -> PathBuf {
    PathBuf::from("_site")
}

// =============================================================================
// Content configuration
// =============================================================================

/// Where the site's documents live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Directory of markdown documents and static files (relative to the config file)
    #[serde(default = "default_content_path")]
    pub path: PathBuf,
}

fn default_content_path() -> PathBuf {
    PathBuf::from("posts")
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            path: default_content_path(),
        }
    }
}

// =============================================================================
// Theme configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteTheme {
    /// Theme directory; must contain `templates/page.html`
    #[serde(default = "default_theme_path")]
    pub path: PathBuf,
    /// Arbitrary settings passed to templates as `theme.*`
    #[serde(default)]
    pub settings: serde_json::Value,
}

fn default_theme_path() -> PathBuf {
    PathBuf::from("themes/default")
}

impl Default for SiteTheme {
    fn default() -> Self {
        Self {
            path: default_theme_path(),
            settings: serde_json::Value::Null,
        }
    }
}

// =============================================================================
// Markdown configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkdownConfig {
    /// Extensions to enable for markdown processing
    #[serde(default = "default_markdown_extensions")]
    pub extensions: Vec<String>,
}

fn default_markdown_extensions() -> Vec<String> {
    vec![
        "definition_lists".to_string(),
        "footnotes".to_string(),
        "gfm".to_string(),
        "heading_attributes".to_string(),
        "strikethrough".to_string(),
        "tables".to_string(),
        "tasklists".to_string(),
    ]
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            extensions: default_markdown_extensions(),
        }
    }
}

// =============================================================================
// Side navigation configuration
// =============================================================================

/// Gumshoe scroll tracker, loaded from cdnjs.
pub const GUMSHOE_SCRIPT_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/gumshoe/3.5.1/js/gumshoe.min.js";

/// Settings for the generated side navigation.
///
/// ```yaml
/// sidenav:
///   container: ".post > .row"
///   min_headings: 3
///   scripts:
///     - https://cdnjs.cloudflare.com/ajax/libs/gumshoe/3.5.1/js/gumshoe.min.js
///     - /assets/js/side-nav.js
///   script_output: assets/js/side-nav.js
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidenavConfig {
    /// Selector that must match exactly one element in every page with a side nav
    #[serde(default = "default_container")]
    pub container: String,
    /// Minimum number of qualifying headings before a nav is generated
    #[serde(default = "default_min_headings")]
    pub min_headings: usize,
    /// Script URLs appended to pages that receive a side nav, in order
    #[serde(default = "default_scripts")]
    pub scripts: Vec<String>,
    /// Where the bundled `side-nav.js` is written, relative to the output directory
    #[serde(default = "default_script_output")]
    pub script_output: PathBuf,
}

fn default_container() -> String {
    ".post > .row".to_string()
}

fn default_min_headings() -> usize {
    3
}

fn default_scripts() -> Vec<String> {
    vec![
        GUMSHOE_SCRIPT_URL.to_string(),
        "/assets/js/side-nav.js".to_string(),
    ]
}

fn default_script_output() -> PathBuf {
    PathBuf::from("assets/js/side-nav.js")
}

impl Default for SidenavConfig {
    fn default() -> Self {
        Self {
            container: default_container(),
            min_headings: default_min_headings(),
            scripts: default_scripts(),
            script_output: default_script_output(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_against() {
        assert_eq!(
            resolve_against(Path::new("posts"), Path::new("/site")),
            PathBuf::from("/site/posts")
        );
        assert_eq!(
            resolve_against(Path::new("/abs/posts"), Path::new("/site")),
            PathBuf::from("/abs/posts")
        );
    }

    #[test]
    fn test_sidenav_defaults() {
        let sidenav = SidenavConfig::default();
        assert_eq!(sidenav.scripts[0], GUMSHOE_SCRIPT_URL);
        assert_eq!(sidenav.script_output, PathBuf::from("assets/js/side-nav.js"));
    }
}
