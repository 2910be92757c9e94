//! Browser-side half of the side nav.

/// The client script that reconciles hover and scroll state in the browser.
/// It expects gumshoe and jQuery to be loaded first.
pub const SIDE_NAV_JS: &str = include_str!("../../assets/js/side-nav.js");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sidenav::layout::{ACTIVATION_OFFSET_RATIO, BREAKPOINT_PX, GROUP_WIDTH_FACTOR};

    #[test]
    fn test_script_matches_emitted_markup() {
        // Selectors and classes the script relies on
        for needle in [
            "#sidenav > ul[data-gumshoe]",
            "collapsible-sibling",
            "ml-collapse",
            "active-parent",
            "dot-tooltip-wrapper",
        ] {
            assert!(SIDE_NAV_JS.contains(needle), "side-nav.js lacks {}", needle);
        }
    }

    #[test]
    fn test_script_constants_match_layout() {
        for declaration in [
            format!("var BREAKPOINT_PX = {};", BREAKPOINT_PX),
            format!("var ACTIVATION_OFFSET_RATIO = {};", ACTIVATION_OFFSET_RATIO),
            format!("var GROUP_WIDTH_FACTOR = {};", GROUP_WIDTH_FACTOR),
        ] {
            assert!(
                SIDE_NAV_JS.contains(&declaration),
                "side-nav.js lacks `{}`",
                declaration
            );
        }
    }

    #[test]
    fn test_script_uses_the_layout_rules() {
        // group_width and clamp_tooltip, as the script computes them
        assert!(SIDE_NAV_JS.contains("* GROUP_WIDTH_FACTOR"));
        assert!(SIDE_NAV_JS.contains("var overlap = $wrapper.offset().left + width - columnLeft;"));
        assert!(SIDE_NAV_JS.contains("<= BREAKPOINT_PX"));
    }
}
