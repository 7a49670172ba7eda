//! In-page navigation: anchor scroll targets and current-section tracking.

use serde::Deserialize;

/// Gap kept between the header and a section after an anchor jump.
pub const ANCHOR_MARGIN: f64 = 20.0;
/// Lookahead applied when deciding which section is current.
pub const SECTION_LOOKAHEAD: f64 = 100.0;

/// Document-relative geometry of one `section[id]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// What the page reports on every scroll event.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    pub header_height: f64,
    #[serde(default)]
    pub sections: Vec<SectionBounds>,
}

/// Offset to scroll to so the section sits just below the header.
pub fn scroll_target(section_top: f64, header_height: f64) -> f64 {
    section_top - header_height - ANCHOR_MARGIN
}

/// Last section (in document order) whose adjusted range contains `scroll_y`.
pub fn current_section<'a>(
    sections: &'a [SectionBounds],
    scroll_y: f64,
    header_height: f64,
) -> Option<&'a str> {
    sections
        .iter()
        .filter(|section| {
            let top = section.top - header_height - SECTION_LOOKAHEAD;
            scroll_y >= top && scroll_y < top + section.height
        })
        .last()
        .map(|section| section.id.as_str())
}

/// Fragment form (`#id`) of a section id, as used in nav `href`s.
pub fn fragment(id: &str) -> String {
    format!("#{id}")
}

/// Tracks which nav link is highlighted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavTracker {
    active: Option<String>,
}

impl NavTracker {
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    /// Highlight `id` (after an anchor jump).
    pub fn activate(&mut self, id: &str) {
        self.active = Some(id.to_string());
    }

    /// Recompute from a scroll snapshot. Without a qualifying section the
    /// previous highlight is kept. Returns whether the highlight changed.
    pub fn on_scroll(&mut self, snapshot: &ScrollSnapshot) -> bool {
        match current_section(&snapshot.sections, snapshot.scroll_y, snapshot.header_height) {
            Some(id) if !self.is_active(id) => {
                self.activate(id);
                true
            }
            _ => false,
        }
    }

    /// `base` plus `active` when `id` is the highlighted section.
    pub fn link_class(&self, base: &str, id: &str) -> String {
        if self.is_active(id) {
            format!("{base} active")
        } else {
            base.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, top: f64, height: f64) -> SectionBounds {
        SectionBounds {
            id: id.into(),
            top,
            height,
        }
    }

    fn page() -> Vec<SectionBounds> {
        vec![
            section("home", 0.0, 600.0),
            section("about", 600.0, 500.0),
            section("contact", 1100.0, 700.0),
        ]
    }

    fn snapshot(scroll_y: f64) -> ScrollSnapshot {
        ScrollSnapshot {
            scroll_y,
            header_height: 80.0,
            sections: page(),
        }
    }

    #[test]
    fn anchor_target_subtracts_header_and_margin() {
        assert_eq!(scroll_target(600.0, 80.0), 500.0);
    }

    #[test]
    fn current_section_uses_header_and_lookahead() {
        let sections = page();
        // about starts counting at 600 - 80 - 100 = 420
        assert_eq!(current_section(&sections, 419.0, 80.0), Some("home"));
        assert_eq!(current_section(&sections, 420.0, 80.0), Some("about"));
        assert_eq!(current_section(&sections, 919.0, 80.0), Some("about"));
        assert_eq!(current_section(&sections, 920.0, 80.0), Some("contact"));
    }

    #[test]
    fn later_section_wins_when_ranges_overlap() {
        let sections = vec![section("a", 0.0, 1000.0), section("b", 300.0, 200.0)];
        assert_eq!(current_section(&sections, 250.0, 0.0), Some("b"));
    }

    #[test]
    fn scrolling_into_range_activates_exactly_one_link() {
        let mut nav = NavTracker::default();
        assert!(nav.on_scroll(&snapshot(500.0)));
        let ids = ["home", "about", "contact"];
        let active: Vec<_> = ids.iter().filter(|id| nav.is_active(id)).collect();
        assert_eq!(active, vec![&"about"]);
        assert_eq!(nav.link_class("nav__link", "about"), "nav__link active");
        assert_eq!(nav.link_class("nav__link", "home"), "nav__link");
    }

    #[test]
    fn no_link_is_active_when_nothing_matches() {
        let mut nav = NavTracker::default();
        assert!(!nav.on_scroll(&snapshot(5_000.0)));
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn previous_link_is_kept_outside_all_ranges() {
        let mut nav = NavTracker::default();
        nav.on_scroll(&snapshot(1_000.0));
        assert_eq!(nav.active(), Some("contact"));
        assert!(!nav.on_scroll(&snapshot(5_000.0)));
        assert_eq!(nav.active(), Some("contact"));
    }

    #[test]
    fn snapshot_deserialises_from_bridge_payload() {
        let raw = r#"{"scroll_y":12.5,"header_height":64,"sections":[{"id":"home","top":0,"height":400}]}"#;
        let snap: ScrollSnapshot = serde_json::from_str(raw).unwrap();
        assert_eq!(snap.header_height, 64.0);
        assert_eq!(snap.sections[0].id, "home");
    }
}
