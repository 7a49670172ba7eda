use dioxus::prelude::*;

use crate::components::RevealCard;
use crate::core::reveal::CardKind;
use crate::state::PageState;
use crate::t;

#[component]
pub fn Skills() -> Element {
    let lang = (use_context::<PageState>().lang)();
    let categories = [
        ("skills-frontend", t!(lang, "skills-frontend-title"), t!(lang, "skills-frontend-items")),
        ("skills-backend", t!(lang, "skills-backend-title"), t!(lang, "skills-backend-items")),
        ("skills-tools", t!(lang, "skills-tools-title"), t!(lang, "skills-tools-items")),
    ];

    rsx! {
        section { id: "skills", class: "section skills",
            h2 { class: "section__title", {t!(lang, "skills-title")} }
            div { class: "skills__grid",
                for (key, title, items) in categories {
                    RevealCard { key: "{key}", kind: CardKind::SkillCategory, reveal_key: key,
                        h3 { "{title}" }
                        p { "{items}" }
                    }
                }
            }
        }
    }
}
