//! Scrollspy side navigation.
//!
//! Pages that opt in with `sidenav: true` get a two-level navigation built
//! from their `h1`/`h2` outline:
//!
//! 1. `outline` scans the rendered page for headings and layout anchors
//! 2. `tree` regroups the headings (one collapsible group per `h1`)
//! 3. `compile` writes the nav and its script references into the page
//!
//! In the browser, `assets/js/side-nav.js` keeps the groups in step with
//! scrolling and hovering. `reconciler` is the same state machine in Rust,
//! driven through the [`NavSurface`](reconciler::NavSurface) trait.

mod assets;
mod compile;
#[allow(dead_code)]
pub mod layout;
mod outline;
#[allow(dead_code)]
pub mod reconciler;
mod tree;

pub use assets::SIDE_NAV_JS;
pub use compile::compile;
pub use outline::{Heading, HeadingLevel, HeadingOutline};

use lol_html::errors::{RewritingError, SelectorError};

/// Errors raised while adding a side nav to a page.
#[derive(thiserror::Error, Debug)]
pub enum SidenavError {
    #[error("invalid sidenav container selector '{selector}': {source}")]
    Selector {
        selector: String,
        source: SelectorError,
    },

    #[error(
        "unexpected HTML layout: expected exactly one element matching '{selector}', found {count}"
    )]
    Layout { selector: String, count: usize },

    #[error("heading id '{0}' collides with generated sidenav group ids")]
    ReservedId(String),

    #[error("HTML rewriting failed: {0}")]
    Rewrite(#[from] RewritingError),
}
