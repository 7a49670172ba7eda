use dioxus::prelude::*;

use crate::state::PageState;
use crate::t;

#[component]
pub fn About() -> Element {
    let lang = (use_context::<PageState>().lang)();

    rsx! {
        section { id: "about", class: "section about",
            h2 { class: "section__title", {t!(lang, "about-title")} }
            p { {t!(lang, "about-body-1")} }
            p { {t!(lang, "about-body-2")} }
        }
    }
}
