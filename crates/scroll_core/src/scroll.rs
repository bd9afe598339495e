use std::time::{Duration, Instant};

/// Tunables for the scroll fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadPolicy {
    /// Distance from the document bottom, in CSS pixels, that counts as "near".
    pub near_bottom_px: u32,
    /// Quiet period after the last scroll event before the position is checked.
    pub debounce: Duration,
}

impl Default for LoadPolicy {
    fn default() -> Self {
        Self {
            near_bottom_px: 200,
            debounce: Duration::from_millis(100),
        }
    }
}

/// Scroll geometry in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub viewport_height: f64,
    pub scroll_y: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    pub fn new(viewport_height: f64, scroll_y: f64, document_height: f64) -> Self {
        Self {
            viewport_height,
            scroll_y,
            document_height,
        }
    }

    pub fn is_near_bottom(&self, threshold_px: f64) -> bool {
        self.viewport_height + self.scroll_y >= self.document_height - threshold_px
    }
}

/// Trailing-edge debouncer for scroll events. Time is passed in by the caller.
#[derive(Debug, Clone)]
pub struct ScrollDebouncer {
    delay: Duration,
    pending: Option<(Instant, ScrollMetrics)>,
}

impl ScrollDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Records a scroll event, restarting the quiet period.
    pub fn on_scroll(&mut self, now: Instant, metrics: ScrollMetrics) {
        self.pending = Some((now + self.delay, metrics));
    }

    /// Releases the latest metrics once the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<ScrollMetrics> {
        match self.pending {
            Some((deadline, metrics)) if now >= deadline => {
                self.pending = None;
                Some(metrics)
            }
            _ => None,
        }
    }
}
