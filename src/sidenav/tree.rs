//! Navigation tree synthesis and markup.

use super::SidenavError;
use super::outline::{Heading, HeadingLevel, HeadingOutline};

/// Prefix of generated group ids; the group index follows it.
pub const GROUP_ID_PREFIX: &str = "sidenav-collapsible-";

/// A top-level entry (one per `h1`) and its optional group of `h2`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub heading: Heading,
    pub group: Option<NavGroup>,
}

/// A collapsible group. In the markup it is the next sibling of its
/// entry's `li`, not a child, so `:hover` on an entry never covers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavGroup {
    /// 1-based, in order of creation within one page
    pub index: usize,
    pub children: Vec<Heading>,
}

impl NavGroup {
    pub fn id(&self) -> String {
        format!("{}{}", GROUP_ID_PREFIX, self.index)
    }
}

/// The synthesized two-level navigation for one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideNav {
    pub entries: Vec<NavEntry>,
}

/// Whether `id` has the shape of a generated group id.
fn is_group_id(id: &str) -> bool {
    id.strip_prefix(GROUP_ID_PREFIX)
        .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
}

impl SideNav {
    /// Regroup an outline: each `h1` opens a top-level entry, and the `h2`s
    /// after it share one group that is created on the first of them.
    ///
    /// `h2`s before the first `h1` have no entry to attach to and are dropped.
    pub fn build(outline: &HeadingOutline) -> Result<Self, SidenavError> {
        let mut entries: Vec<NavEntry> = Vec::new();
        let mut next_index = 1;

        for heading in outline.iter() {
            if is_group_id(&heading.id) {
                return Err(SidenavError::ReservedId(heading.id.clone()));
            }

            match heading.level {
                HeadingLevel::Section => entries.push(NavEntry {
                    heading: heading.clone(),
                    group: None,
                }),
                HeadingLevel::Subsection => {
                    let Some(entry) = entries.last_mut() else {
                        tracing::debug!(id = %heading.id, "dropping h2 before the first h1");
                        continue;
                    };
                    let group = entry.group.get_or_insert_with(|| {
                        let group = NavGroup {
                            index: next_index,
                            children: Vec::new(),
                        };
                        next_index += 1;
                        group
                    });
                    group.children.push(heading.clone());
                }
            }
        }

        Ok(Self { entries })
    }

    /// All groups in document order.
    pub fn groups(&self) -> impl Iterator<Item = &NavGroup> {
        self.entries.iter().filter_map(|entry| entry.group.as_ref())
    }

    /// Render the `<nav>` element.
    pub fn to_html(&self) -> String {
        let mut html = String::from(r#"<nav id="sidenav" class="col-xl-2 col-lg-2"><ul data-gumshoe>"#);

        for entry in &self.entries {
            push_item(&mut html, &entry.heading);

            if let Some(group) = &entry.group {
                html.push_str(&format!(
                    r#"<div id="{}" class="collapsible-sibling position-relative ml-collapse">"#,
                    group.id()
                ));
                html.push_str(
                    r#"<div class="border-wrapper position-absolute d-flex h-100"><div class="border-left align-self-center"></div></div>"#,
                );
                html.push_str(r#"<ul class="nav dotstyle">"#);
                for child in &group.children {
                    push_item(&mut html, child);
                }
                html.push_str("</ul></div>");
            }
        }

        html.push_str("</ul></nav>");
        html
    }
}

/// Append one `li`: the tooltip with the heading text and the dot linking to it.
fn push_item(html: &mut String, heading: &Heading) {
    html.push_str(&format!(
        r##"<li><div class="dot-tooltip-wrapper"><div class="dot-tooltip">{}</div></div><a class="dot" href="#{}"></a></li>"##,
        heading.text, heading.id
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn outline(spec: &[(HeadingLevel, &str)]) -> HeadingOutline {
        HeadingOutline::new(
            spec.iter()
                .map(|(level, id)| Heading {
                    level: *level,
                    id: id.to_string(),
                    text: id.to_uppercase(),
                })
                .collect(),
        )
    }

    use HeadingLevel::{Section as H1, Subsection as H2};

    #[test]
    fn test_groups_follow_their_h1() {
        let nav = SideNav::build(&outline(&[(H1, "a"), (H2, "b"), (H2, "c"), (H1, "d")])).unwrap();

        assert_eq!(nav.entries.len(), 2);
        let group = nav.entries[0].group.as_ref().unwrap();
        assert_eq!(group.id(), "sidenav-collapsible-1");
        let children: Vec<&str> = group.children.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(children, vec!["b", "c"]);
        assert!(nav.entries[1].group.is_none());
    }

    #[test]
    fn test_group_indices_increase() {
        let nav = SideNav::build(&outline(&[
            (H1, "a"),
            (H2, "a1"),
            (H1, "b"),
            (H1, "c"),
            (H2, "c1"),
            (H2, "c2"),
            (H1, "d"),
            (H2, "d1"),
        ]))
        .unwrap();

        let indices: Vec<usize> = nav.groups().map(|g| g.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        let sizes: Vec<usize> = nav.groups().map(|g| g.children.len()).collect();
        assert_eq!(sizes, vec![1, 2, 1]);
    }

    #[test]
    fn test_orphan_h2_is_dropped() {
        let nav = SideNav::build(&outline(&[(H2, "early"), (H1, "a"), (H2, "b")])).unwrap();

        assert_eq!(nav.entries.len(), 1);
        assert_eq!(nav.groups().count(), 1);
        assert_eq!(nav.entries[0].group.as_ref().unwrap().children[0].id, "b");
    }

    #[test]
    fn test_reserved_heading_id_rejected() {
        let err = SideNav::build(&outline(&[(H1, "a"), (H2, "sidenav-collapsible-7")])).unwrap_err();

        assert!(matches!(err, SidenavError::ReservedId(id) if id == "sidenav-collapsible-7"));
    }

    #[test]
    fn test_similar_ids_are_allowed() {
        assert!(!is_group_id("sidenav-collapsible-"));
        assert!(!is_group_id("sidenav-collapsible-x1"));
        assert!(is_group_id("sidenav-collapsible-12"));
    }

    #[test]
    fn test_markup_places_group_after_entry() {
        let nav = SideNav::build(&outline(&[(H1, "a"), (H2, "b")])).unwrap();

        assert_eq!(
            nav.to_html(),
            concat!(
                r#"<nav id="sidenav" class="col-xl-2 col-lg-2"><ul data-gumshoe>"#,
                r##"<li><div class="dot-tooltip-wrapper"><div class="dot-tooltip">A</div></div><a class="dot" href="#a"></a></li>"##,
                r#"<div id="sidenav-collapsible-1" class="collapsible-sibling position-relative ml-collapse">"#,
                r#"<div class="border-wrapper position-absolute d-flex h-100"><div class="border-left align-self-center"></div></div>"#,
                r#"<ul class="nav dotstyle">"#,
                r##"<li><div class="dot-tooltip-wrapper"><div class="dot-tooltip">B</div></div><a class="dot" href="#b"></a></li>"##,
                "</ul></div></ul></nav>"
            )
        );
    }
}
