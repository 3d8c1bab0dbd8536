//! # recruitjob
//!
//! Leptos frontend for the RecruitJob sign-in screen.
//!
//! The crate holds the sign-in page, its presentational components, the
//! `LoginForm` validation state, and the `Authenticator` seam that validated
//! credentials are handed to. It renders under SSR (`ssr` feature, driven by
//! the `server` crate) and hydrates in the browser (`hydrate` feature).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM hydration entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
