use std::path::Path;

use crate::{
    InitArgs,
    config::{
        CONFIG_FILE_NAME, ContentConfig, MarkdownConfig, SidenavConfig, SiteConfig, SiteTheme,
        SpyglassConfig,
    },
};

const DEFAULT_PAGE_TEMPLATE: &str = include_str!("../../themes/default/templates/page.html");

const SAMPLE_POST: &str = r#"---
title: Welcome
sidenav: true
---

# Getting started

Edit the files under `posts/` and run `spyglass build`.

{% alert info %}
Pages with `sidenav: true` and at least three headings get a side navigation.
{% endalert %}

## Writing posts

Any markdown file becomes a page.

## Template tags

{% callout primary %}
Use `accordion`, `alert`, `callout` and `media` blocks for Bootstrap components.
{% endcallout %}

# Next steps

Build the site and open `_site/index.html`.
"#;

pub async fn run(args: &InitArgs) -> Result<(), anyhow::Error> {
    let path = if args.path.is_relative() {
        std::env::current_dir()?.join(&args.path)
    } else {
        args.path.clone()
    };

    if !path.exists() {
        if args.create {
            tokio::fs::create_dir_all(&path).await?;
            println!("Created directory {path}", path = path.display());
        } else {
            return Err(anyhow::anyhow!(
                "Directory does not exist: {path}",
                path = path.display()
            ));
        }
    }

    let config_file = path.join(CONFIG_FILE_NAME);
    if config_file.exists() {
        return Err(anyhow::anyhow!(
            "Config file already exists: {config_file}",
            config_file = config_file.display()
        ));
    }

    let default_config = SpyglassConfig {
        site: SiteConfig {
            name: "My Spyglass Site".into(),
            url: Some("https://my-spyglass-site.com".into()),
            output: "_site".into(),
            favicon: None,
        },
        content: ContentConfig::default(),
        theme: SiteTheme::default(),
        markdown: MarkdownConfig::default(),
        sidenav: SidenavConfig::default(),
    };

    println!("Initializing project in {}", path.display());

    let config_text = serde_yaml::to_string(&default_config)?;
    tokio::fs::write(&config_file, config_text).await?;
    println!(
        "Created config file {config_file}",
        config_file = config_file.display()
    );

    let page_template = path
        .join(&default_config.theme.path)
        .join("templates/page.html");
    write_if_missing(&page_template, DEFAULT_PAGE_TEMPLATE).await?;

    let sample_post = path.join(&default_config.content.path).join("index.md");
    write_if_missing(&sample_post, SAMPLE_POST).await?;

    Ok(())
}

/// Write a starter file unless the user already has one.
async fn write_if_missing(path: &Path, contents: &str) -> Result<(), anyhow::Error> {
    if path.exists() {
        tracing::info!(path = %path.display(), "keeping existing file");
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, contents).await?;
    println!("Created {}", path.display());
    Ok(())
}
