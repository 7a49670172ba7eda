//! Hover lift applied to project cards.

/// Inline style for a card given its hover history: untouched cards carry no
/// inline transform, hovered cards lift and settle slightly raised on leave.
pub fn lift_style(hovered: Option<bool>) -> &'static str {
    match hovered {
        None => "",
        Some(true) => "transform: translateY(-8px)",
        Some(false) => "transform: translateY(-4px)",
    }
}
