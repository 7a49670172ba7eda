//! Page-wide state, created once by the root component and shared through
//! the Dioxus context.

use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use crate::core::header::HeaderEffect;
use crate::core::language::Language;
use crate::core::navigation::{NavTracker, ScrollSnapshot};
use crate::core::reveal::RevealTracker;
use crate::core::storage::{self, PreferenceHandle};

/// Delay before the initial `loading` marker is dropped.
pub const LOADING_CLEAR_MS: u64 = 300;

#[derive(Clone, Copy)]
pub struct PageState {
    pub lang: Signal<Language>,
    pub nav: Signal<NavTracker>,
    pub header: Signal<HeaderEffect>,
    pub reveal: Signal<RevealTracker>,
    pub loading: Signal<bool>,
    prefs: Signal<PreferenceHandle>,
}

impl PageState {
    /// Must run inside a hook so the signals belong to the root scope.
    pub fn new(prefs: PreferenceHandle) -> Self {
        let lang = storage::load_language(prefs.0.as_ref());
        info!(lang = %lang, "page controller initialised");
        Self {
            lang: Signal::new(lang),
            nav: Signal::new(NavTracker::default()),
            header: Signal::new(HeaderEffect::default()),
            reveal: Signal::new(RevealTracker::default()),
            loading: Signal::new(true),
            prefs: Signal::new(prefs),
        }
    }

    /// User-initiated language change: switch and remember.
    pub fn set_language(mut self, lang: Language) {
        self.lang.set(lang);
        if let Err(err) = storage::save_language(self.prefs.peek().0.as_ref(), lang) {
            warn!("could not store language preference: {err}");
        }
        info!(lang = %lang, "language switched");
    }

    /// Scroll handler shared by the header effect and nav highlighting.
    /// Signals are only written when something visible changes.
    pub fn on_scroll(mut self, snapshot: &ScrollSnapshot) {
        let mut header = *self.header.peek();
        if header.on_scroll(snapshot.scroll_y) {
            self.header.set(header);
        }

        let mut nav = self.nav.peek().clone();
        if nav.on_scroll(snapshot) {
            self.nav.set(nav);
        }
    }

    pub fn reveal(mut self, key: &str) {
        if !self.reveal.peek().is_visible(key) {
            self.reveal.with_mut(|tracker| tracker.reveal(key));
        }
    }

    pub fn activate_section(mut self, id: &str) {
        self.nav.with_mut(|nav| nav.activate(id));
    }
}
