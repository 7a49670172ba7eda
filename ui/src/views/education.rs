use dioxus::prelude::*;

use crate::components::RevealCard;
use crate::core::reveal::CardKind;
use crate::state::PageState;
use crate::t;

#[component]
pub fn Education() -> Element {
    let lang = (use_context::<PageState>().lang)();
    let entries = [
        (
            "education-it",
            t!(lang, "education-it-title"),
            t!(lang, "education-it-period"),
            t!(lang, "education-it-body"),
        ),
        (
            "education-cert",
            t!(lang, "education-cert-title"),
            t!(lang, "education-cert-period"),
            t!(lang, "education-cert-body"),
        ),
    ];

    rsx! {
        section { id: "education", class: "section education",
            h2 { class: "section__title", {t!(lang, "education-title")} }
            div { class: "education__list",
                for (key, title, period, body) in entries {
                    RevealCard { key: "{key}", kind: CardKind::Education, reveal_key: key,
                        h3 { "{title}" }
                        span { class: "education-card__period", "{period}" }
                        p { "{body}" }
                    }
                }
            }
        }
    }
}
