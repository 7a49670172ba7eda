use dioxus::prelude::*;

use super::AnchorLink;
use crate::core::language::{self, Language};
use crate::state::PageState;
use crate::t;

#[cfg(debug_assertions)]
fn log_header_render(lang: Language, scrolled: bool) {
    // Lightweight render trace for diagnosing language / scroll refresh issues.
    dioxus::logger::tracing::debug!("[header] render lang={lang} scrolled={scrolled}");
}

/// Fixed page header: brand, section navigation and the language switcher.
#[component]
pub fn SiteHeader() -> Element {
    let state = use_context::<PageState>();
    let lang = (state.lang)();
    let header_effect = (state.header)();

    #[cfg(debug_assertions)]
    {
        log_header_render(lang, header_effect.is_scrolled());
    }

    let links = [
        ("home", t!(lang, "nav-home")),
        ("about", t!(lang, "nav-about")),
        ("skills", t!(lang, "nav-skills")),
        ("projects", t!(lang, "nav-projects")),
        ("services", t!(lang, "nav-services")),
        ("education", t!(lang, "nav-education")),
        ("contact", t!(lang, "nav-contact")),
    ];
    let switcher_label = t!(lang, "nav-language-label");

    rsx! {
        header { class: header_effect.class(),
            div { class: "header__inner",
                AnchorLink { target: "home", class: "header__brand",
                    span { class: "header__brand-mark", "ItzMe" }
                }

                nav { class: "nav",
                    for (target, label) in links {
                        AnchorLink { key: "{target}", target, class: "nav__link", "{label}" }
                    }
                }

                div {
                    class: "lang-switch",
                    role: "group",
                    aria_label: "{switcher_label}",
                    for option in Language::ALL {
                        button {
                            key: "{option}",
                            r#type: "button",
                            class: language::button_class(option, lang),
                            "data-lang": option.code(),
                            onclick: move |_| state.set_language(option),
                            {option.button_label()}
                        }
                    }
                }
            }
        }
    }
}
