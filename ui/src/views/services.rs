use dioxus::prelude::*;

use crate::components::RevealCard;
use crate::core::reveal::CardKind;
use crate::state::PageState;
use crate::t;

#[component]
pub fn Services() -> Element {
    let lang = (use_context::<PageState>().lang)();
    let services = [
        ("service-web", t!(lang, "service-web-title"), t!(lang, "service-web-body")),
        ("service-design", t!(lang, "service-design-title"), t!(lang, "service-design-body")),
        ("service-support", t!(lang, "service-support-title"), t!(lang, "service-support-body")),
    ];

    rsx! {
        section { id: "services", class: "section services",
            h2 { class: "section__title", {t!(lang, "services-title")} }
            div { class: "services__grid",
                for (key, title, body) in services {
                    RevealCard { key: "{key}", kind: CardKind::Service, reveal_key: key,
                        h3 { "{title}" }
                        p { "{body}" }
                    }
                }
            }
        }
    }
}
