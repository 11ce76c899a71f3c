//! # medicare-client
//!
//! Leptos + WASM frontend for the MediCare appointment-booking system.
//! Patients find and book doctors; doctors manage incoming appointments.
//! All business logic (availability, conflicts, persistence, authorization)
//! lives in the external REST backend this client consumes.
//!
//! This crate contains pages, components, form validation, application
//! state, and the REST client. The session (user + bearer token) is the
//! only cross-cutting state, persisted in `localStorage` and rehydrated
//! on load.

pub mod app;
pub mod components;
pub mod forms;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
