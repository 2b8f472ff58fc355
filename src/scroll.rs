/// Offset (px) past which the back-to-top button appears.
pub const BACK_TO_TOP_THRESHOLD: f64 = 400.0;

/// Raw measurements of the root scroll container.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(offset: f64, document_height: f64, viewport_height: f64) -> Self {
        Self {
            offset,
            document_height,
            viewport_height,
        }
    }

    /// Scrollable distance; zero or less when the page fits the viewport.
    pub fn range(&self) -> f64 {
        self.document_height - self.viewport_height
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    pub progress_percent: f64,
    pub past_threshold: bool,
}

impl ScrollState {
    pub fn from_metrics(metrics: ScrollMetrics) -> Self {
        Self {
            progress_percent: progress_percent(metrics),
            past_threshold: metrics.offset > BACK_TO_TOP_THRESHOLD,
        }
    }
}

fn progress_percent(metrics: ScrollMetrics) -> f64 {
    let range = metrics.range();
    if !range.is_finite() || range <= 0.0 || !metrics.offset.is_finite() {
        return 0.0;
    }
    // overscroll (rubber banding) can report offsets outside the range
    (metrics.offset / range * 100.0).clamp(0.0, 100.0)
}

/// Collapses a burst of scroll events into one recomputation per frame.
///
/// `schedule` returns true only for the first event since the last `flush`;
/// the caller requests an animation frame then and calls `flush` inside it.
#[derive(Debug, Default)]
pub struct ScrollCoalescer {
    pending: bool,
}

impl ScrollCoalescer {
    pub fn schedule(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    pub fn flush(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_monotonic_and_bounded() {
        let (doc, view) = (3000.0, 800.0);
        let mut last = -1.0;
        let mut offset = 0.0;
        while offset <= doc - view {
            let state = ScrollState::from_metrics(ScrollMetrics::new(offset, doc, view));
            assert!((0.0..=100.0).contains(&state.progress_percent));
            assert!(state.progress_percent >= last);
            last = state.progress_percent;
            offset += 37.5;
        }
        let end = ScrollState::from_metrics(ScrollMetrics::new(doc - view, doc, view));
        assert_eq!(end.progress_percent, 100.0);
    }

    #[test]
    fn test_progress_halfway() {
        let state = ScrollState::from_metrics(ScrollMetrics::new(500.0, 1500.0, 500.0));
        assert_eq!(state.progress_percent, 50.0);
    }

    #[test]
    fn test_unscrollable_page_reports_zero() {
        let state = ScrollState::from_metrics(ScrollMetrics::new(0.0, 900.0, 900.0));
        assert!(!state.progress_percent.is_nan());
        assert_eq!(state.progress_percent, 0.0);

        // viewport taller than the document
        let state = ScrollState::from_metrics(ScrollMetrics::new(0.0, 600.0, 900.0));
        assert_eq!(state.progress_percent, 0.0);
    }

    #[test]
    fn test_overscroll_is_clamped() {
        let past_end = ScrollState::from_metrics(ScrollMetrics::new(1300.0, 2000.0, 800.0));
        assert_eq!(past_end.progress_percent, 100.0);
        let before_start = ScrollState::from_metrics(ScrollMetrics::new(-40.0, 2000.0, 800.0));
        assert_eq!(before_start.progress_percent, 0.0);
        let nan = ScrollState::from_metrics(ScrollMetrics::new(f64::NAN, 2000.0, 800.0));
        assert_eq!(nan.progress_percent, 0.0);
    }

    #[test]
    fn test_threshold_boundary() {
        let at = |offset| ScrollState::from_metrics(ScrollMetrics::new(offset, 5000.0, 800.0));
        assert!(!at(0.0).past_threshold);
        assert!(!at(400.0).past_threshold);
        assert!(at(400.5).past_threshold);
        assert!(at(401.0).past_threshold);
    }

    #[test]
    fn test_coalescer_schedules_once_per_frame() {
        let mut c = ScrollCoalescer::default();
        assert!(c.schedule());
        assert!(!c.schedule());
        assert!(!c.schedule());
        assert!(c.is_pending());
        c.flush();
        assert!(!c.is_pending());
        assert!(c.schedule());
    }
}
