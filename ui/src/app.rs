use dioxus::prelude::*;

use crate::components::{SiteFooter, SiteHeader};
use crate::core::storage::PreferenceHandle;
use crate::core::timing;
use crate::dom;
use crate::state::{PageState, LOADING_CLEAR_MS};
use crate::t;
use crate::views::{About, Contact, Education, Hero, Projects, Services, Skills};

/// Root of the portfolio page. Platforms may provide a [`PreferenceHandle`]
/// (and a `SubmitterHandle`) as context before rendering this; otherwise
/// the platform defaults are used.
#[component]
pub fn Portfolio() -> Element {
    let prefs = try_use_context::<PreferenceHandle>();
    let state = use_hook(|| PageState::new(prefs.unwrap_or_else(PreferenceHandle::platform_default)));
    use_context_provider(|| state);

    // Document-level language marker follows the language signal.
    use_effect(move || dom::mark_document_language((state.lang)()));

    // Bridges need the rendered markup, so they start after the first render.
    use_effect(move || {
        spawn(dom::watch_scroll(move |snapshot| state.on_scroll(&snapshot)));
        spawn(dom::watch_reveals(move |key| state.reveal(&key)));
        spawn(dom::watch_errors());
        spawn(async move {
            timing::sleep_ms(LOADING_CLEAR_MS).await;
            let mut loading = state.loading;
            loading.set(false);
        });
    });

    let lang = (state.lang)();
    let title = t!(lang, "page-title");
    let root_class = if (state.loading)() { "page loading" } else { "page" };

    rsx! {
        document::Title { "{title}" }
        div { class: root_class, "data-lang": lang.code(),
            SiteHeader {}
            main {
                Hero {}
                About {}
                Skills {}
                Projects {}
                Services {}
                Education {}
                Contact {}
            }
            SiteFooter {}
        }
    }
}
