//! Last-resort error logging. Failures are logged, never surfaced to the visitor.

use dioxus::logger::tracing::error;

/// Route panics through the logger as well as the default hook.
pub fn install_panic_logger() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        error!("uncaught panic: {info}");
        previous(info);
    }));
}
