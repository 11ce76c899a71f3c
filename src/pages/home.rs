//! Root redirect hub.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::auth::AuthState;

/// `/` — forwards an authenticated user to their role's dashboard and
/// everyone else to the login page. Shows a spinner for the brief moment
/// before the redirect lands.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let target = auth
            .get()
            .role()
            .map_or("/login", Role::dashboard_path);
        navigate(target, NavigateOptions::default());
    });

    view! {
        <div class="home-page">
            <div class="spinner"></div>
            <p>"Loading..."</p>
        </div>
    }
}
