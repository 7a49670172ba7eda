use dioxus::prelude::*;

use crate::components::ProjectCard;
use crate::state::PageState;
use crate::t;

#[component]
pub fn Projects() -> Element {
    let lang = (use_context::<PageState>().lang)();
    let projects = [
        ("project-portfolio", t!(lang, "project-portfolio-title"), t!(lang, "project-portfolio-body")),
        ("project-dashboard", t!(lang, "project-dashboard-title"), t!(lang, "project-dashboard-body")),
        ("project-automation", t!(lang, "project-automation-title"), t!(lang, "project-automation-body")),
    ];

    rsx! {
        section { id: "projects", class: "section projects",
            h2 { class: "section__title", {t!(lang, "projects-title")} }
            div { class: "projects__grid",
                for (key, title, body) in projects {
                    ProjectCard { key: "{key}", reveal_key: key, title, body }
                }
            }
        }
    }
}
