use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use crate::core::navigation;
use crate::dom;
use crate::state::PageState;

/// In-page link to `section#{target}`. Clicks are intercepted and replaced
/// by a smooth scroll that leaves room for the header; Enter on a focused
/// link does the same. The Enter keydown is cancelled so the browser does not
/// follow up with a second, synthetic click.
#[component]
pub fn AnchorLink(target: &'static str, class: &'static str, children: Element) -> Element {
    let state = use_context::<PageState>();
    let class = state.nav.read().link_class(class, target);
    let href = navigation::fragment(target);

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                follow_anchor(state, target);
            },
            onkeydown: move |evt: KeyboardEvent| {
                if is_activation_key(&evt.key()) {
                    evt.prevent_default();
                    follow_anchor(state, target);
                }
            },
            {children}
        }
    }
}

fn is_activation_key(key: &Key) -> bool {
    *key == Key::Enter
}

fn follow_anchor(state: PageState, target: &'static str) {
    spawn(async move {
        match dom::scroll_to_section(target).await {
            Ok(true) => state.activate_section(target),
            Ok(false) => debug!("no section with id {target:?}; ignoring anchor"),
            Err(err) => warn!("smooth scroll to {target:?} failed: {err}"),
        }
    });
}
