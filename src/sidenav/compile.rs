//! Injecting the side nav into a rendered page.

use std::borrow::Cow;

use lol_html::html_content::ContentType;
use lol_html::{RewriteStrSettings, Selector, element, end, rewrite_str};

use super::SidenavError;
use super::outline::scan;
use super::tree::SideNav;
use crate::config::SidenavConfig;

/// Add a side nav to `html` if the page asked for one and has enough headings.
///
/// Returns the input untouched (`Cow::Borrowed`) when `enabled` is false,
/// the page has fewer than `config.min_headings` qualifying headings, or
/// none of them is an `h1`.
/// Otherwise the nav is appended to the single element matching
/// `config.container`, and one `<script>` per configured URL is appended to
/// `<body>` (or to the end of the document when there is no body).
pub fn compile<'a>(
    html: &'a str,
    enabled: bool,
    config: &SidenavConfig,
) -> Result<Cow<'a, str>, SidenavError> {
    if !enabled {
        return Ok(Cow::Borrowed(html));
    }

    config
        .container
        .parse::<Selector>()
        .map_err(|source| SidenavError::Selector {
            selector: config.container.clone(),
            source,
        })?;

    let page = scan(html, Some(&config.container))?;
    if page.outline.len() < config.min_headings {
        tracing::debug!(
            headings = page.outline.len(),
            "not enough headings for a side nav"
        );
        return Ok(Cow::Borrowed(html));
    }

    let nav = SideNav::build(&page.outline)?;
    if nav.entries.is_empty() {
        tracing::debug!(
            headings = page.outline.len(),
            "no h1 to anchor a side nav"
        );
        return Ok(Cow::Borrowed(html));
    }

    if page.containers != 1 {
        return Err(SidenavError::Layout {
            selector: config.container.clone(),
            count: page.containers,
        });
    }

    let nav_html = nav.to_html();
    let scripts = script_tags(&config.scripts);

    let mut element_content_handlers = vec![element!(config.container.as_str(), |el| {
        el.append(&nav_html, ContentType::Html);
        Ok(())
    })];
    let mut document_content_handlers = Vec::new();
    if page.has_body {
        element_content_handlers.push(element!("body", |el| {
            el.append(&scripts, ContentType::Html);
            Ok(())
        }));
    } else {
        document_content_handlers.push(end!(|end| {
            end.append(&scripts, ContentType::Html);
            Ok(())
        }));
    }

    let output = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers,
            document_content_handlers,
            ..RewriteStrSettings::new()
        },
    )?;

    Ok(Cow::Owned(output))
}

fn script_tags(urls: &[String]) -> String {
    urls.iter()
        .map(|url| format!("<script src=\"{}\"></script>", url))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sidenav::HeadingOutline;
    use pretty_assertions::assert_eq;

    fn page(body: &str) -> String {
        format!(
            r#"<html><head></head><body><div class="post"><div class="row"><div class="col">{}</div></div></div></body></html>"#,
            body
        )
    }

    fn config() -> SidenavConfig {
        SidenavConfig {
            scripts: vec!["/gumshoe.js".to_string(), "/side-nav.js".to_string()],
            ..SidenavConfig::default()
        }
    }

    const FOUR_HEADINGS: &str = r#"<h1 id="a">A</h1><h2 id="b">B</h2><h2 id="c">C</h2><h1 id="d">D</h1>"#;

    #[test]
    fn test_disabled_page_is_untouched() {
        let html = page(FOUR_HEADINGS);

        let out = compile(&html, false, &config()).unwrap();

        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, html);
    }

    #[test]
    fn test_two_headings_leave_page_byte_identical() {
        let html = page(r#"<h1 id="a">A</h1>  <h2 id="b">B</h2>"#);

        let out = compile(&html, true, &config()).unwrap();

        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, html);
    }

    #[test]
    fn test_only_orphan_h2s_leave_page_untouched() {
        let html = page(r#"<h2 id="a">A</h2><h2 id="b">B</h2><h2 id="c">C</h2>"#);

        let out = compile(&html, true, &config()).unwrap();

        assert!(matches!(out, Cow::Borrowed(_)));
        assert!(!out.contains("<script"));
    }

    #[test]
    fn test_nav_is_appended_to_container() {
        let html = page(FOUR_HEADINGS);

        let out = compile(&html, true, &config()).unwrap();

        let nav = SideNav::build(&HeadingOutline::extract(&html).unwrap()).unwrap();
        let expected_tail = format!(
            "</div>{}</div></div><script src=\"/gumshoe.js\"></script><script src=\"/side-nav.js\"></script></body></html>",
            nav.to_html()
        );
        assert!(out.ends_with(&expected_tail), "unexpected output: {}", out);
        assert_eq!(out.matches("class=\"dot-tooltip-wrapper\"").count(), 4);
        assert_eq!(out.matches("sidenav-collapsible-").count(), 1);
    }

    #[test]
    fn test_missing_container_is_fatal() {
        let html = format!("<body>{}</body>", FOUR_HEADINGS);

        let err = compile(&html, true, &config()).unwrap_err();

        assert!(matches!(err, SidenavError::Layout { count: 0, .. }));
    }

    #[test]
    fn test_duplicate_container_is_fatal() {
        let html = format!(
            r#"<div class="post"><div class="row"></div><div class="row"></div></div>{}"#,
            FOUR_HEADINGS
        );

        let err = compile(&html, true, &config()).unwrap_err();

        assert!(matches!(err, SidenavError::Layout { count: 2, .. }));
        assert!(err.to_string().contains(".post > .row"));
    }

    #[test]
    fn test_fragment_without_body_gets_scripts_at_end() {
        let html = format!(r#"<div class="post"><div class="row"></div></div>{}"#, FOUR_HEADINGS);

        let out = compile(&html, true, &config()).unwrap();

        assert!(out.ends_with(r#"<script src="/side-nav.js"></script>"#));
        assert!(out.contains(r#"<div class="row"><nav id="sidenav""#));
    }

    #[test]
    fn test_invalid_selector_is_reported() {
        let config = SidenavConfig {
            container: "div[".to_string(),
            ..config()
        };

        let err = compile(&page(FOUR_HEADINGS), true, &config).unwrap_err();

        assert!(matches!(err, SidenavError::Selector { .. }));
    }
}
