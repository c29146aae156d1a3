//! Reading progress from scroll position

/// Percentage of the scrollable height covered by `scroll_offset`, clamped to 0-100.
///
/// Content that fits in the viewport (`total_scrollable_height <= 0`) reports 0.
/// Negative offsets from overscroll clamp to 0.
pub fn compute_progress(scroll_offset: f64, total_scrollable_height: f64) -> f64 {
    if !scroll_offset.is_finite()
        || !total_scrollable_height.is_finite()
        || total_scrollable_height <= 0.0
    {
        return 0.0;
    }

    let raw = (scroll_offset / total_scrollable_height) * 100.0;
    raw.clamp(0.0, 100.0)
}

/// Scroll position of a page, as reported by the host on each scroll event
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    /// Distance scrolled from the top
    pub scroll_offset: f64,
    /// How far the page can scroll at most
    pub total_scrollable_height: f64,
}

impl ScrollState {
    pub fn new(scroll_offset: f64, total_scrollable_height: f64) -> Self {
        Self { scroll_offset, total_scrollable_height }
    }

    /// Derive the scrollable height from document and viewport sizes
    pub fn from_viewport(scroll_top: f64, document_height: f64, viewport_height: f64) -> Self {
        Self {
            scroll_offset: scroll_top,
            total_scrollable_height: (document_height - viewport_height).max(0.0),
        }
    }

    /// Progress bar fill (0-100)
    pub fn progress_percent(&self) -> f64 {
        compute_progress(self.scroll_offset, self.total_scrollable_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn boundary_values() {
        assert_eq!(compute_progress(0.0, 1000.0), 0.0);
        assert_eq!(compute_progress(1000.0, 1000.0), 100.0);
        assert_eq!(compute_progress(1500.0, 1000.0), 100.0);
        assert_eq!(compute_progress(50.0, 0.0), 0.0);
    }

    #[test]
    fn midpoint_is_fifty_percent() {
        assert_eq!(compute_progress(250.0, 500.0), 50.0);
    }

    #[test]
    fn overscroll_clamps_to_zero() {
        assert_eq!(compute_progress(-40.0, 1000.0), 0.0);
    }

    #[test]
    fn non_finite_input_reports_zero() {
        assert_eq!(compute_progress(f64::NAN, 1000.0), 0.0);
        assert_eq!(compute_progress(10.0, f64::INFINITY), 0.0);
    }

    #[test]
    fn viewport_taller_than_document_reports_zero() {
        let state = ScrollState::from_viewport(0.0, 600.0, 900.0);
        assert_eq!(state.total_scrollable_height, 0.0);
        assert_eq!(state.progress_percent(), 0.0);
    }

    #[test]
    fn from_viewport_subtracts_viewport_height() {
        let state = ScrollState::from_viewport(1200.0, 3000.0, 600.0);
        assert_eq!(state.total_scrollable_height, 2400.0);
        assert_eq!(state.progress_percent(), 50.0);
    }

    proptest! {
        #[test]
        fn progress_stays_in_range(offset in -1.0e6f64..1.0e6, height in -1.0e6f64..1.0e6) {
            let p = compute_progress(offset, height);
            prop_assert!((0.0..=100.0).contains(&p));
        }
    }
}
