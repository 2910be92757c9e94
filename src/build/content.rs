//! Content discovery.
//!
//! Walks the content directory and sorts every file into a markdown
//! document or a static file copied verbatim.

use std::path::{Path, PathBuf};

use super::document::{ContentItem, Document, StaticFile};
use super::paths::{document_url, static_url};

#[derive(thiserror::Error, Debug)]
pub enum ContentError {
    #[error("content path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("content path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read directory entry in {path}: {source}")]
    ReadEntry {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read document {path}: {source}")]
    ReadDocument {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Discover all content under `root`, sorted by path.
pub fn discover(root: &Path) -> Result<Vec<ContentItem>, ContentError> {
    if !root.exists() {
        return Err(ContentError::PathNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ContentError::NotADirectory(root.to_path_buf()));
    }

    let mut items = Vec::new();
    walk_directory(root, &PathBuf::new(), &mut items)?;
    items.sort_by(|a, b| item_path(a).cmp(item_path(b)));
    Ok(items)
}

fn item_path(item: &ContentItem) -> &Path {
    match item {
        ContentItem::Document(doc) => &doc.source_path,
        ContentItem::Static(file) => &file.source_path,
    }
}

/// Recursively walk a directory and collect content items.
fn walk_directory(
    dir: &Path,
    relative_path: &Path,
    items: &mut Vec<ContentItem>,
) -> Result<(), ContentError> {
    let entries = std::fs::read_dir(dir).map_err(|e| ContentError::ReadDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| ContentError::ReadEntry {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        let file_name = entry.file_name();
        let file_name_str = file_name.to_string_lossy();

        // Skip hidden files and directories
        if file_name_str.starts_with('.') {
            continue;
        }

        let item_relative_path = relative_path.join(&file_name);

        if path.is_dir() {
            walk_directory(&path, &item_relative_path, items)?;
        } else if path.is_file() {
            items.push(classify_file(&path, &item_relative_path)?);
        }
    }

    Ok(())
}

/// Classify a file as either a Document or StaticFile.
fn classify_file(full_path: &Path, relative_path: &Path) -> Result<ContentItem, ContentError> {
    let extension = relative_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match extension.as_deref() {
        Some("md" | "markdown") => {
            let doc = Document::load(
                full_path,
                relative_path.to_path_buf(),
                document_url(relative_path),
            )
            .map_err(|source| ContentError::ReadDocument {
                path: full_path.to_path_buf(),
                source,
            })?;
            Ok(ContentItem::Document(doc))
        }
        _ => Ok(ContentItem::Static(StaticFile {
            source_path: relative_path.to_path_buf(),
            output_path: static_url(relative_path),
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn urls(items: &[ContentItem]) -> Vec<String> {
        items
            .iter()
            .map(|item| match item {
                ContentItem::Document(doc) => format!("doc {}", doc.url_path),
                ContentItem::Static(file) => format!("static {}", file.output_path),
            })
            .collect()
    }

    #[test]
    fn test_discover_documents_and_static_files() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("guides/img")).unwrap();
        std::fs::write(root.join("index.md"), "# Home").unwrap();
        std::fs::write(
            root.join("guides/setup.md"),
            "---\ntitle: Setup\nsidenav: true\n---\n# Setup",
        )
        .unwrap();
        std::fs::write(root.join("guides/img/a.png"), [0u8; 4]).unwrap();
        std::fs::write(root.join(".hidden.md"), "nope").unwrap();

        let items = discover(root).unwrap();

        assert_eq!(
            urls(&items),
            vec![
                "static /guides/img/a.png",
                "doc /guides/setup",
                "doc /",
            ]
        );
        let ContentItem::Document(setup) = &items[1] else {
            panic!("expected a document");
        };
        assert!(setup.front_matter.sidenav);
        assert_eq!(setup.raw_content, "# Setup");
    }

    #[test]
    fn test_missing_root() {
        let dir = TempDir::new().unwrap();

        let err = discover(&dir.path().join("posts")).unwrap_err();

        assert!(matches!(err, ContentError::PathNotFound(_)));
    }
}
