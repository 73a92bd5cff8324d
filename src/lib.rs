//! # kyc-admin
//!
//! Leptos + WASM admin dashboard for a user/KYC management backend.
//! Every screen is a thin binding over the backend's REST API: fetch data,
//! render a table or form, submit, show the response.
//!
//! Two pieces carry the actual logic: the session guard
//! ([`components::guard`]) which gates every page except login on the
//! presence of a stored admin token, and the API gateway client
//! ([`net::api`]) which builds requests and injects bearer credentials.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
