//! Path and URL conversion utilities.
//!
//! This module handles conversions between:
//! - Content paths (relative paths within the content directory)
//! - URL paths (the URL at which a page or file is served)
//! - Output file paths (where files are written in the output directory)

use std::path::{Path, PathBuf};

/// Convert a markdown file path to a URL path.
///
/// ```ignore
/// document_url("installation.md") => "/installation"
/// document_url("guides/quickstart.md") => "/guides/quickstart"
/// document_url("guides/index.md") => "/guides"
/// document_url("index.md") => "/"
/// ```
pub fn document_url(path: &Path) -> String {
    let path_str = path.with_extension("").to_string_lossy().replace('\\', "/");

    // Index files become the directory URL
    let path_str = if path_str == "index" {
        ""
    } else {
        path_str.strip_suffix("/index").unwrap_or(&path_str)
    };

    format!("/{}", path_str)
}

/// Convert a static file path to a URL path. Static files keep their extension.
///
/// ```ignore
/// static_url("images/screenshot.png") => "/images/screenshot.png"
/// ```
pub fn static_url(path: &Path) -> String {
    format!("/{}", path.to_string_lossy().replace('\\', "/"))
}

/// Convert a URL path to an output file path.
///
/// Documents (no extension) become `path/index.html`.
/// Static files (with extension) keep their path.
///
/// ```ignore
/// url_to_output_path("/guides/installation", output_dir) => output_dir/guides/installation/index.html
/// url_to_output_path("/", output_dir) => output_dir/index.html
/// url_to_output_path("/css/site.css", output_dir) => output_dir/css/site.css
/// ```
pub fn url_to_output_path(url_path: &str, output_dir: &Path) -> PathBuf {
    let url_path = url_path.trim_start_matches('/');

    if url_path.is_empty() {
        output_dir.join("index.html")
    } else if url_path.rsplit('/').next().is_some_and(|last| last.contains('.')) {
        output_dir.join(url_path)
    } else {
        output_dir.join(url_path).join("index.html")
    }
}

/// Get the base path from a config file path (its parent directory).
pub fn base_path_from_config(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
