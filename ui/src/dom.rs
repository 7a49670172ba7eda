//! Thin JavaScript bridges for the few things Dioxus does not surface
//! directly: window scroll, intersection, smooth scrolling and uncaught
//! script errors.
//!
//! Each bridge is a short script run through `document::eval`. Scripts only
//! measure and forward; every decision (which link is active, whether the
//! header is compact, which cards are revealed) is taken in `core`.

use dioxus::document::{eval, EvalError};
use dioxus::prelude::spawn;
use dioxus::logger::tracing::{debug, error, warn};
use serde::Deserialize;

use crate::core::language::Language;
use crate::core::navigation::{self, ScrollSnapshot};
use crate::core::reveal;

const SCROLL_WATCH_JS: &str = r#"
const measure = () => {
    const header = document.querySelector('.header');
    const sections = Array.from(document.querySelectorAll('section[id]')).map((section) => ({
        id: section.id,
        top: section.offsetTop,
        height: section.offsetHeight,
    }));
    dioxus.send({
        scroll_y: window.scrollY,
        header_height: header ? header.offsetHeight : 0,
        sections,
    });
};
window.addEventListener('scroll', measure, { passive: true });
window.addEventListener('orientationchange', () => {
    setTimeout(() => window.scrollTo(window.scrollX, window.scrollY), 100);
});
await new Promise(() => {});
"#;

const REVEAL_WATCH_JS: &str = r#"
const observer = new IntersectionObserver((entries) => {
    entries.forEach((entry) => {
        if (entry.isIntersecting && entry.target.dataset.reveal) {
            dioxus.send(entry.target.dataset.reveal);
        }
    });
}, { threshold: __THRESHOLD__, rootMargin: __MARGIN__ });
document.querySelectorAll(__SELECTOR__).forEach((el) => observer.observe(el));
await new Promise(() => {});
"#;

const ERROR_WATCH_JS: &str = r#"
window.addEventListener('error', (event) => {
    dioxus.send(String(event.error ?? event.message));
});
await new Promise(() => {});
"#;

const SECTION_OFFSET_JS: &str = r#"
const target = document.getElementById(__ID__);
if (!target) {
    return null;
}
const header = document.querySelector('.header');
return { top: target.offsetTop, header_height: header ? header.offsetHeight : 0 };
"#;

const DOCUMENT_LANGUAGE_JS: &str = r#"
document.documentElement.lang = __LANG__;
document.body.setAttribute('data-lang', __LANG__);
"#;

#[derive(Debug, Deserialize)]
struct SectionOffset {
    top: f64,
    header_height: f64,
}

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

fn reveal_script() -> String {
    REVEAL_WATCH_JS
        .replace("__THRESHOLD__", &reveal::VISIBLE_THRESHOLD.to_string())
        .replace("__MARGIN__", &js_string(&reveal::root_margin()))
        .replace("__SELECTOR__", &js_string(&reveal::card_selector()))
}

/// Forward every window scroll as a [`ScrollSnapshot`]. Runs until the page goes away.
pub async fn watch_scroll(mut on_scroll: impl FnMut(ScrollSnapshot)) {
    let mut bridge = eval(SCROLL_WATCH_JS);
    loop {
        match bridge.recv::<ScrollSnapshot>().await {
            Ok(snapshot) => on_scroll(snapshot),
            Err(err) => {
                debug!("scroll bridge closed: {err}");
                break;
            }
        }
    }
}

/// Report the `data-reveal` key of each card the first (and every) time it
/// becomes visible.
pub async fn watch_reveals(mut on_visible: impl FnMut(String)) {
    let mut bridge = eval(&reveal_script());
    loop {
        match bridge.recv::<String>().await {
            Ok(key) => on_visible(key),
            Err(err) => {
                debug!("reveal bridge closed: {err}");
                break;
            }
        }
    }
}

/// Log uncaught script errors; nothing else is done with them.
pub async fn watch_errors() {
    let mut bridge = eval(ERROR_WATCH_JS);
    while let Ok(message) = bridge.recv::<String>().await {
        error!("JavaScript error: {message}");
    }
}

/// Smooth-scroll so section `id` sits below the header.
/// Returns `Ok(false)` when the page has no such section.
pub async fn scroll_to_section(id: &str) -> Result<bool, EvalError> {
    let lookup = SECTION_OFFSET_JS.replace("__ID__", &js_string(id));
    let Some(offset) = eval(&lookup).join::<Option<SectionOffset>>().await? else {
        return Ok(false);
    };
    let top = navigation::scroll_target(offset.top, offset.header_height);
    eval(&format!("window.scrollTo({{ top: {top}, behavior: 'smooth' }});")).await?;
    Ok(true)
}

/// Set `<html lang>` and `<body data-lang>`.
pub fn mark_document_language(lang: Language) {
    let script = DOCUMENT_LANGUAGE_JS.replace("__LANG__", &js_string(lang.code()));
    spawn(async move {
        if let Err(err) = eval(&script).await {
            warn!("could not mark document language: {err}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_strings_are_quoted_and_escaped() {
        assert_eq!(js_string("about"), "\"about\"");
        assert_eq!(js_string("a\"b"), "\"a\\\"b\"");
    }

    #[test]
    fn section_offset_accepts_null() {
        let parsed: Option<SectionOffset> = serde_json::from_str("null").unwrap();
        assert!(parsed.is_none());
        let parsed: Option<SectionOffset> =
            serde_json::from_str(r#"{"top":640,"header_height":72}"#).unwrap();
        let offset = parsed.unwrap();
        assert_eq!(navigation::scroll_target(offset.top, offset.header_height), 548.0);
    }

    #[test]
    fn reveal_script_has_no_unfilled_placeholders() {
        let script = reveal_script();
        assert!(!script.contains("__"));
        assert!(script.contains("threshold: 0.1"));
    }

    #[test]
    fn document_language_script_quotes_code() {
        for lang in Language::ALL {
            let script = DOCUMENT_LANGUAGE_JS.replace("__LANG__", &js_string(lang.code()));
            assert!(script.contains(&format!("\"{}\"", lang.code())));
        }
    }
}
