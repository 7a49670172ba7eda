//! Shared UI crate for the ItzMe portfolio. All page logic and views live
//! here; the `web` and `desktop` crates only launch [`Portfolio`].

use dioxus::prelude::*;

pub mod components;
pub mod core;
pub mod dom;
pub mod i18n;
pub mod state;
pub mod views;

mod app;
pub use app::Portfolio;

/// Shared theme stylesheet (linked by the web build, inlined by desktop).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
