//! One-way "reveal on scroll" state for the card grids.

use std::collections::BTreeSet;

/// Fraction of a card that must be inside the viewport before it is revealed.
pub const VISIBLE_THRESHOLD: f64 = 0.1;
/// Bottom margin pulled off the viewport when testing visibility.
pub const BOTTOM_MARGIN_PX: u32 = 50;

/// Card categories that animate in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    SkillCategory,
    Project,
    Service,
    Education,
}

impl CardKind {
    pub const ALL: [CardKind; 4] = [
        CardKind::SkillCategory,
        CardKind::Project,
        CardKind::Service,
        CardKind::Education,
    ];

    pub fn class(self) -> &'static str {
        match self {
            CardKind::SkillCategory => "skill-category",
            CardKind::Project => "project-card",
            CardKind::Service => "service-card",
            CardKind::Education => "education-card",
        }
    }
}

/// Comma separated selector matching every animated card.
pub fn card_selector() -> String {
    CardKind::ALL
        .iter()
        .map(|kind| format!(".{}", kind.class()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Observer root margin string, e.g. `0px 0px -50px 0px`.
pub fn root_margin() -> String {
    format!("0px 0px -{BOTTOM_MARGIN_PX}px 0px")
}

/// Keys of the cards that have already been seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealTracker {
    visible: BTreeSet<String>,
}

impl RevealTracker {
    /// Mark a card visible. Returns `false` if it already was.
    pub fn reveal(&mut self, key: &str) -> bool {
        if self.visible.contains(key) {
            return false;
        }
        self.visible.insert(key.to_string())
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.visible.contains(key)
    }

    pub fn class_for(&self, kind: CardKind, key: &str) -> String {
        if self.is_visible(key) {
            format!("{} fade-in visible", kind.class())
        } else {
            format!("{} fade-in", kind.class())
        }
    }
}
