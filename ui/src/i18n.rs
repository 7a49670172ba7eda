//! Internationalization (i18n) support for `itzme-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (asset loading per language)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en/itzme-ui.ftl   (fallback/reference)
//!   nl/itzme-ui.ftl
//! ```
//!
//! Unlike a single global loader, every [`Language`] owns its own
//! `FluentLanguageLoader`. Switching languages is then just a change of the
//! `Language` value held by the page; lookups never depend on hidden global
//! selection state.
//!
//! Usage in a component:
//! ```ignore
//! use crate::core::language::Language;
//! use crate::t;
//! let title = t!(Language::Nl, "about-title");
//! ```
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use dioxus::logger::tracing::warn;

use crate::core::language::Language;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Example:
///     t!(lang, "nav-home")
///
/// Expands to `fl!(i18n::loader(lang), ...)` so every lookup routes through
/// the loader of the requested language.
#[macro_export]
macro_rules! t {
    ($lang:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key)
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en/{DOMAIN}.ftl`. `i18n.toml` sets the
/// same domain for the compile-time `fl!` checks.
const DOMAIN: &str = "itzme-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

static EN: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Language::En));
static NL: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Language::Nl));

/// Loader holding the catalog of `lang` (with English as fallback for missing keys).
pub fn loader(lang: Language) -> &'static FluentLanguageLoader {
    match lang {
        Language::En => &EN,
        Language::Nl => &NL,
    }
}

fn build_loader(lang: Language) -> FluentLanguageLoader {
    let loader = FluentLanguageLoader::new(DOMAIN, fallback_language());
    loader.set_use_isolating(false);
    if let Err(err) = i18n_embed::select(&loader, &Localizations, &[lang.langid()]) {
        warn!(lang = %lang, "[i18n] Failed loading catalog ({err}); continuing with fallback");
    }
    loader
}

fn fallback_language() -> LanguageIdentifier {
    Language::default().langid()
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}
