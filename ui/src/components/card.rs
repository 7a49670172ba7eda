use dioxus::prelude::*;

use crate::core::hover;
use crate::core::reveal::CardKind;
use crate::state::PageState;

/// Card that fades in the first time it scrolls into view.
/// `reveal_key` must be unique on the page.
#[component]
pub fn RevealCard(kind: CardKind, reveal_key: &'static str, children: Element) -> Element {
    let state = use_context::<PageState>();
    let class = state.reveal.read().class_for(kind, reveal_key);

    rsx! {
        div { class: "{class}", "data-reveal": reveal_key, {children} }
    }
}

/// Project card: a [`RevealCard`] that lifts while hovered.
#[component]
pub fn ProjectCard(reveal_key: &'static str, title: String, body: String) -> Element {
    let state = use_context::<PageState>();
    let mut hovered = use_signal(|| Option::<bool>::None);
    let class = state.reveal.read().class_for(CardKind::Project, reveal_key);
    let style = hover::lift_style(hovered());

    rsx! {
        article {
            class: "{class}",
            style: "{style}",
            "data-reveal": reveal_key,
            onmouseenter: move |_| hovered.set(Some(true)),
            onmouseleave: move |_| hovered.set(Some(false)),
            h3 { class: "project-card__title", "{title}" }
            p { class: "project-card__body", "{body}" }
        }
    }
}
