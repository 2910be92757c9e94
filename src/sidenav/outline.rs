//! Heading outline extraction.

use std::cell::{Cell, RefCell};

use lol_html::{RewriteStrSettings, element, rewrite_str, text};

use super::SidenavError;

/// Which heading element an outline entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// `h1`: becomes a top-level nav entry
    Section,
    /// `h2`: nested under the preceding `h1`
    Subsection,
}

/// A qualifying heading: an `h1` or `h2` with a non-empty `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: HeadingLevel,
    pub id: String,
    /// Text content as it appears in the source HTML (entities left encoded)
    pub text: String,
}

/// Qualifying headings in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadingOutline {
    headings: Vec<Heading>,
}

impl HeadingOutline {
    pub fn new(headings: Vec<Heading>) -> Self {
        Self { headings }
    }

    pub fn len(&self) -> usize {
        self.headings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Heading> {
        self.headings.iter()
    }

    /// Extract the outline of an HTML document.
    pub fn extract(html: &str) -> Result<Self, SidenavError> {
        Ok(scan(html, None)?.outline)
    }
}

/// What a read-only pass over a page found.
#[derive(Debug)]
pub(crate) struct PageScan {
    pub outline: HeadingOutline,
    /// Elements matching the container selector (0 when none was given)
    pub containers: usize,
    /// Whether the page has a `<body>` element
    pub has_body: bool,
}

/// Scan a page for qualifying headings and, optionally, count the elements
/// matching `container`.
///
/// The caller must have validated `container` as a selector.
pub(crate) fn scan(html: &str, container: Option<&str>) -> Result<PageScan, SidenavError> {
    // Empty ids are recorded too so their text has somewhere to go,
    // then filtered out below.
    let found: RefCell<Vec<Heading>> = RefCell::new(Vec::new());
    let containers = Cell::new(0usize);
    let bodies = Cell::new(0usize);

    let open_heading = |level: HeadingLevel, id: Option<String>| {
        found.borrow_mut().push(Heading {
            level,
            id: id.map(|id| id.trim().to_string()).unwrap_or_default(),
            text: String::new(),
        });
    };
    let push_text = |chunk: &str| {
        if let Some(heading) = found.borrow_mut().last_mut() {
            heading.text.push_str(chunk);
        }
    };

    let mut handlers = vec![
        element!("h1[id]", |el| {
            open_heading(HeadingLevel::Section, el.get_attribute("id"));
            Ok(())
        }),
        element!("h2[id]", |el| {
            open_heading(HeadingLevel::Subsection, el.get_attribute("id"));
            Ok(())
        }),
        text!("h1[id]", |t| {
            push_text(t.as_str());
            Ok(())
        }),
        text!("h2[id]", |t| {
            push_text(t.as_str());
            Ok(())
        }),
        element!("body", |_| {
            bodies.set(bodies.get() + 1);
            Ok(())
        }),
    ];
    if let Some(selector) = container {
        handlers.push(element!(selector, |_| {
            containers.set(containers.get() + 1);
            Ok(())
        }));
    }

    rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: handlers,
            ..RewriteStrSettings::new()
        },
    )?;

    let headings = found
        .into_inner()
        .into_iter()
        .filter(|h| !h.id.is_empty())
        .map(|h| Heading {
            text: h.text.split_whitespace().collect::<Vec<_>>().join(" "),
            ..h
        })
        .collect();

    Ok(PageScan {
        outline: HeadingOutline::new(headings),
        containers: containers.get(),
        has_body: bodies.get() > 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn heading(level: HeadingLevel, id: &str, text: &str) -> Heading {
        Heading {
            level,
            id: id.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_extract_keeps_document_order() {
        let html = r#"<h1 id="a">Alpha</h1><p>x</p><h2 id="b">Beta</h2><h3 id="z">Skip</h3><h1 id="c">Gamma</h1>"#;

        let outline = HeadingOutline::extract(html).unwrap();

        assert_eq!(
            outline,
            HeadingOutline::new(vec![
                heading(HeadingLevel::Section, "a", "Alpha"),
                heading(HeadingLevel::Subsection, "b", "Beta"),
                heading(HeadingLevel::Section, "c", "Gamma"),
            ])
        );
    }

    #[test]
    fn test_headings_without_ids_are_ignored() {
        let html = r#"<h1>No id</h1><h1 id="">Empty</h1><h2 id="kept">Kept</h2>"#;

        let outline = HeadingOutline::extract(html).unwrap();

        assert_eq!(outline.len(), 1);
        assert_eq!(outline.iter().next().unwrap().id, "kept");
    }

    #[test]
    fn test_nested_text_is_collected() {
        let html = "<h1 id=\"t\">Using <code>cargo</code>\n  today</h1>";

        let outline = HeadingOutline::extract(html).unwrap();

        assert_eq!(outline.iter().next().unwrap().text, "Using cargo today");
    }

    #[test]
    fn test_scan_counts_containers_and_body() {
        let html = r#"<html><body><div class="post"><div class="row"></div></div></body></html>"#;

        let scan = scan(html, Some(".post > .row")).unwrap();

        assert_eq!(scan.containers, 1);
        assert!(scan.has_body);
        assert!(scan.outline.is_empty());
    }
}
