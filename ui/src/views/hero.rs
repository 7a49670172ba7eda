use dioxus::prelude::*;

use crate::components::AnchorLink;
use crate::state::PageState;
use crate::t;

#[component]
pub fn Hero() -> Element {
    let lang = (use_context::<PageState>().lang)();

    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero__content",
                h1 { class: "hero__title", span { {t!(lang, "hero-greeting")} } }
                p { class: "hero__role", {t!(lang, "hero-role")} }
                p { class: "hero__intro", {t!(lang, "hero-intro")} }
                div { class: "hero__actions",
                    AnchorLink { target: "projects", class: "btn btn--primary", {t!(lang, "hero-cta-projects")} }
                    AnchorLink { target: "contact", class: "btn btn--ghost", {t!(lang, "hero-cta-contact")} }
                }
            }
        }
    }
}
