use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    ui::core::diagnostics::install_panic_logger();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        ui::Portfolio {}
    }
}
