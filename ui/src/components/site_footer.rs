use dioxus::prelude::*;

use crate::state::PageState;
use crate::t;

#[component]
pub fn SiteFooter() -> Element {
    let lang = (use_context::<PageState>().lang)();

    rsx! {
        footer { class: "footer",
            p { class: "footer__rights", {t!(lang, "footer-rights")} }
            p { class: "footer__built", {t!(lang, "footer-built-with")} }
        }
    }
}
