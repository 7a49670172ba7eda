//! Header styling driven by scroll position.

/// Scroll offset past which the header switches to its compact style.
pub const SCROLLED_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeaderEffect {
    scrolled: bool,
}

impl HeaderEffect {
    /// Pure function of the current offset; returns whether the state flipped.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > SCROLLED_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn class(&self) -> &'static str {
        if self.scrolled {
            "header scrolled"
        } else {
            "header"
        }
    }
}
