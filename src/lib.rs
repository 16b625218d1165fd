//! # video-notes
//!
//! Leptos + WASM editor for annotating a video with timestamped notes.
//!
//! A single page holds an add-form and a table of notes; each row can be
//! edited in place or deleted. Notes live in memory for the lifetime of the
//! page. State and its view model are plain Rust in `state`; `components`
//! and `pages` render them.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging, read config, mount the app.
#[cfg(feature = "csr")]
pub fn start() {
    use crate::app::App;
    use crate::config::EditorConfig;

    util::logging::init();
    let config = EditorConfig::load();
    util::logging::apply_level(config.log_level);
    log::info!("video notes starting (cancel policy: {:?})", config.cancel_policy);

    leptos::mount::mount_to_body(move || leptos::view! { <App config=config/> });
}
