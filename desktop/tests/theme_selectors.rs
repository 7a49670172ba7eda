#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that the CSS selectors the page controller toggles at runtime
  (header `scrolled`, nav `active`, reveal `visible`, form status classes)
  remain present in the unified shared theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes, preventing a
  silent styling regression in packaged (embedded) desktop builds.

How it works:
- We compile‑time embed the unified theme using `include_str!` pointing to the shared
  `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Extending:
- Add new selectors to REQUIRED_SELECTORS when introducing structural CSS relied
  upon by Rust components.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".loading",
    // Header & navigation
    ".header {",
    ".header.scrolled",
    ".nav__link",
    ".nav__link.active",
    ".lang-btn",
    ".lang-btn.active",
    // Sections
    ".hero",
    ".section {",
    ".section__title",
    // Buttons
    ".btn {",
    ".btn--primary",
    ".btn--ghost",
    // Cards observed by the reveal bridge
    ".skill-category",
    ".project-card",
    ".service-card",
    ".education-card",
    ".fade-in",
    ".fade-in.visible",
    // Contact form
    ".contact-form",
    ".form-group",
    ".form-success",
    ".form-error",
    // Footer
    ".footer",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(**sel))
        .copied()
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn reveal_transition_starts_hidden() {
    let start = THEME_CSS
        .find(".fade-in {")
        .expect("fade-in rule missing");
    let rule = &THEME_CSS[start..];
    let end = rule.find('}').unwrap_or(rule.len());
    assert!(rule[..end].contains("opacity: 0"), "cards must start transparent");
}
