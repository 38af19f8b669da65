//! Sticky action bar visibility: hidden near the top of the page, shown once
//! the reader is past the threshold unless they are scrolling back up.

pub const DEFAULT_THRESHOLD: f64 = 200.0;

#[derive(Debug, Clone)]
pub struct ActionBarTracker {
    threshold: f64,
    last_y: f64,
    visible: bool,
}

impl ActionBarTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            last_y: 0.0,
            visible: false,
        }
    }

    /// Records a scroll position and returns whether the bar is visible.
    pub fn on_scroll(&mut self, y: f64) -> bool {
        let scrolling_up = y < self.last_y;
        self.visible = y > self.threshold && !scrolling_up;
        self.last_y = y;
        self.visible
    }
}

impl Default for ActionBarTracker {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_until_past_threshold() {
        let mut bar = ActionBarTracker::default();
        assert!(!bar.on_scroll(100.0));
        assert!(!bar.on_scroll(DEFAULT_THRESHOLD));
        assert!(bar.on_scroll(DEFAULT_THRESHOLD + 1.0));
    }

    #[test]
    fn test_scrolling_up_hides_and_down_shows() {
        let mut bar = ActionBarTracker::new(50.0);
        assert!(bar.on_scroll(400.0));
        assert!(!bar.on_scroll(350.0));
        assert!(bar.on_scroll(360.0));
        // holding still past the threshold keeps it shown
        assert!(bar.on_scroll(360.0));
    }

    #[test]
    fn test_back_above_threshold_hides() {
        let mut bar = ActionBarTracker::new(50.0);
        bar.on_scroll(400.0);
        assert!(!bar.on_scroll(10.0));
        assert!(!bar.on_scroll(20.0));
    }
}
