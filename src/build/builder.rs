use std::path::PathBuf;

use crate::config::{SpyglassConfig, resolve_against};
use crate::tags::{ContentRenderer, TagError};

use super::content::{ContentError, discover};
use super::document::{ContentItem, StaticFile};
use super::paths::url_to_output_path;
use super::pipeline::{Pipeline, PipelineContext, PipelineError, ProcessingDocument};
use super::render::{RenderError, Renderer, SiteContext};

#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("content error: {0}")]
    Content(#[from] ContentError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),

    #[error("liquid setup error: {0}")]
    Tags(#[from] TagError),

    #[error("pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug)]
pub struct BuildResult {
    pub output_dir: PathBuf,
    pub documents: usize,
    pub static_files: usize,
    /// Pages that received a side navigation
    pub sidenav_pages: usize,
}

pub struct Builder {
    config: SpyglassConfig,
    /// Base path for resolving relative paths (typically the config file's directory)
    base_path: PathBuf,
    pipeline: Pipeline,
}

impl Builder {
    pub fn new(config: SpyglassConfig, base_path: PathBuf) -> Self {
        Self {
            config,
            base_path,
            pipeline: Pipeline::default_pipeline(),
        }
    }

    pub fn build(&self) -> Result<BuildResult, BuildError> {
        // 1. Discover content -> ContentItem[]
        // 2. Load renderer (templates)
        // 3. Run documents through the pipeline
        // 4. Copy static files
        let content_dir = self.content_dir();
        let items = discover(&content_dir)?;

        let mut documents = Vec::new();
        let mut static_files = Vec::new();
        for item in items {
            match item {
                ContentItem::Document(doc) => documents.push(ProcessingDocument::new(doc)),
                ContentItem::Static(file) => static_files.push(file),
            }
        }
        tracing::info!(
            documents = documents.len(),
            static_files = static_files.len(),
            path = %content_dir.display(),
            "discovered content"
        );

        let theme_path = self.theme_path();
        let renderer = Renderer::new(&theme_path)?;

        let output_dir = self.output_dir();
        std::fs::create_dir_all(&output_dir)?;

        let site_context = SiteContext {
            name: self.config.site.name.clone(),
            url: self.config.site.url.clone(),
            favicon: self.config.site.favicon.clone(),
        };
        let content = ContentRenderer::new(&self.config.markdown)?;

        let mut ctx = PipelineContext::new(
            &output_dir,
            &site_context,
            &self.config.theme.settings,
            &self.config.markdown,
            &self.config.sidenav,
            &content,
            &renderer,
        );
        self.pipeline.run(&mut documents, &mut ctx)?;
        let sidenav_pages = ctx.sidenav_pages;

        for file in &static_files {
            self.copy_static(file, &content_dir, &output_dir)?;
        }

        tracing::info!(
            pages = documents.len(),
            sidenav_pages,
            path = %output_dir.display(),
            "build finished"
        );

        Ok(BuildResult {
            output_dir,
            documents: documents.len(),
            static_files: static_files.len(),
            sidenav_pages,
        })
    }

    fn copy_static(
        &self,
        file: &StaticFile,
        content_dir: &std::path::Path,
        output_dir: &std::path::Path,
    ) -> Result<(), BuildError> {
        let input_path = content_dir.join(&file.source_path);
        let output_path = url_to_output_path(&file.output_path, output_dir);
        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::copy(&input_path, &output_path)?;
        Ok(())
    }

    /// Get the output directory path, resolved against base_path.
    pub fn output_dir(&self) -> PathBuf {
        resolve_against(&self.config.site.output, &self.base_path)
    }

    fn content_dir(&self) -> PathBuf {
        resolve_against(&self.config.content.path, &self.base_path)
    }

    fn theme_path(&self) -> PathBuf {
        resolve_against(&self.config.theme.path, &self.base_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ContentConfig, MarkdownConfig, SidenavConfig, SiteConfig, SiteTheme};
    use std::path::Path;
    use tempfile::TempDir;

    const PAGE: &str = r#"<html><body><div class="container"><div class="row"><div class="post"><div class="row"><div class="col-lg-10">{{ content | safe }}</div></div></div></div></div></body></html>"#;

    fn site(root: &Path) -> SpyglassConfig {
        std::fs::create_dir_all(root.join("theme/templates")).unwrap();
        std::fs::write(root.join("theme/templates/page.html"), PAGE).unwrap();
        std::fs::create_dir_all(root.join("posts/img")).unwrap();

        SpyglassConfig {
            site: SiteConfig {
                name: "Test".to_string(),
                url: None,
                output: PathBuf::from("out"),
                favicon: None,
            },
            content: ContentConfig::default(),
            theme: SiteTheme {
                path: PathBuf::from("theme"),
                settings: serde_json::Value::Null,
            },
            markdown: MarkdownConfig::default(),
            sidenav: SidenavConfig::default(),
        }
    }

    fn read(path: PathBuf) -> String {
        std::fs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_build_site_with_sidenav() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let config = site(root);
        std::fs::write(
            root.join("posts/guide.md"),
            "---\ntitle: Guide\nsidenav: true\n---\n# Intro\n\n## Install\n\n## Configure\n\n# Usage\n",
        )
        .unwrap();
        std::fs::write(root.join("posts/index.md"), "# Home\n\n## One\n\n## Two\n").unwrap();
        std::fs::write(root.join("posts/img/logo.svg"), "<svg/>").unwrap();

        let result = Builder::new(config, root.to_path_buf()).build().unwrap();

        assert_eq!(result.documents, 2);
        assert_eq!(result.static_files, 1);
        assert_eq!(result.sidenav_pages, 1);

        let guide = read(root.join("out/guide/index.html"));
        assert!(guide.contains(r#"<nav id="sidenav" class="col-xl-2 col-lg-2">"#));
        assert!(guide.contains(r##"<a class="dot" href="#install"></a>"##));
        assert!(guide.contains(r#"id="sidenav-collapsible-1""#));
        assert!(guide.contains(r#"<script src="/assets/js/side-nav.js"></script>"#));

        // no opt-in, so untouched
        let home = read(root.join("out/index.html"));
        assert!(!home.contains("sidenav"));

        assert!(root.join("out/assets/js/side-nav.js").exists());
        assert_eq!(read(root.join("out/img/logo.svg")), "<svg/>");
    }

    #[test]
    fn test_build_renders_tags_and_filters() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let config = site(root);
        std::fs::write(
            root.join("posts/tags.md"),
            "# {{ page.title }}\n\n{% callout warning %}\nFrom **{{ site.name }}** {{ \"hot\" | colorize_red }}\n{% endcallout %}\n",
        )
        .unwrap();

        let result = Builder::new(config, root.to_path_buf()).build().unwrap();

        assert_eq!(result.sidenav_pages, 0);
        let page = read(root.join("out/tags/index.html"));
        assert!(page.contains(r#"<h1 id="tags">Tags</h1>"#));
        assert!(page.contains(r#"<div class="bs-callout bs-callout-warning"><p>From <strong>Test</strong> <span class="text-red">hot</span></p></div>"#));
        assert!(!root.join("out/assets/js/side-nav.js").exists());
    }

    #[test]
    fn test_tag_errors_name_the_document() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let config = site(root);
        std::fs::write(root.join("posts/broken.md"), "{% alert info %}\nnever closed").unwrap();

        let err = Builder::new(config, root.to_path_buf()).build().unwrap_err();

        let message = err.to_string();
        assert!(message.contains("broken.md"), "{message}");
    }
}
