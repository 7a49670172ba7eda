use dioxus::prelude::*;

use crate::components::ContactFormView;
use crate::state::PageState;
use crate::t;

#[component]
pub fn Contact() -> Element {
    let lang = (use_context::<PageState>().lang)();

    rsx! {
        section { id: "contact", class: "section contact",
            h2 { class: "section__title", {t!(lang, "contact-title")} }
            p { class: "contact__intro", {t!(lang, "contact-intro")} }
            ContactFormView {}
        }
    }
}
