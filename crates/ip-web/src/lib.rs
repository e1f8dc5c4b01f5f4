//! Public IP and location widget.
//!
//! The browser build (`csr`) mounts [`app::App`]; the native build (`server`)
//! serves the bundled site and can run the same lookup from the command line.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod copy;
pub mod i18n;
pub mod lookup;
pub mod pages;

#[cfg(feature = "server")]
pub mod cli;
#[cfg(feature = "server")]
pub mod server;

/// Mount the widget onto `<body>` (browser entry point)
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
