//! Geometry rules shared by the browser script and the reconciler model.
//!
//! `assets/js/side-nav.js` hard-codes the same numbers; keep them in sync.

/// Viewports at or below this width (CSS pixels) get no side nav behaviour.
pub const BREAKPOINT_PX: f64 = 992.0;

/// Fraction of the viewport height at which a heading becomes active.
pub const ACTIVATION_OFFSET_RATIO: f64 = 0.4;

/// Groups are widened past their list so `overflow: hidden` does not clip
/// the tooltips.
pub const GROUP_WIDTH_FACTOR: f64 = 1.2;

/// Viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Whether the nav is enhanced at all. Evaluated once, at load.
pub fn enhances(viewport: Viewport) -> bool {
    viewport.width > BREAKPOINT_PX
}

/// Scroll offset handed to the scroll tracker.
pub fn activation_offset(viewport_height: f64) -> f64 {
    viewport_height * ACTIVATION_OFFSET_RATIO
}

/// Fixed width of a group given the natural width of its inner list.
pub fn group_width(list_width: f64) -> f64 {
    list_width * GROUP_WIDTH_FACTOR
}

/// New tooltip width when a tooltip starting at `tooltip_left` with
/// `text_width` would run past `column_left` (the left text edge of the
/// main column, padding included). `None` when it already fits.
pub fn clamp_tooltip(tooltip_left: f64, text_width: f64, column_left: f64) -> Option<f64> {
    let overlap = tooltip_left + text_width - column_left;
    (overlap > 0.0).then(|| text_width - overlap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_is_exclusive() {
        assert!(!enhances(Viewport { width: 992.0, height: 800.0 }));
        assert!(enhances(Viewport { width: 993.0, height: 800.0 }));
    }

    #[test]
    fn test_activation_offset() {
        assert_eq!(activation_offset(1000.0), 400.0);
    }

    #[test]
    fn test_group_width() {
        assert_eq!(group_width(150.0), 180.0);
    }

    #[test]
    fn test_clamp_tooltip() {
        assert_eq!(clamp_tooltip(10.0, 100.0, 200.0), None);
        assert_eq!(clamp_tooltip(10.0, 100.0, 110.0), None);
        assert_eq!(clamp_tooltip(50.0, 100.0, 120.0), Some(70.0));
    }
}
