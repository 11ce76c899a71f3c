//! Route-level pages.
//!
//! Protected pages gate on the session signal: unauthenticated visitors
//! are sent to `/login`, and a signed-in user of the other role is sent to
//! their own dashboard. This is advisory UX routing, not a security
//! boundary; the backend rejects invalid tokens on every API call.

pub mod doctor_dashboard;
pub mod home;
pub mod login;
pub mod patient_appointments;
pub mod patient_dashboard;
pub mod register;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::auth::AuthState;

/// Redirect away from a protected page unless a session with the expected
/// role is present.
pub(crate) fn require_role(auth: RwSignal<AuthState>, role: Role) {
    let navigate = use_navigate();
    Effect::new(move || {
        let state = auth.get();
        if !state.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        } else if let Some(actual) = state.role() {
            if actual != role {
                navigate(actual.dashboard_path(), NavigateOptions::default());
            }
        }
    });
}
