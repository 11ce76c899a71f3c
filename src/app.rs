//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::{
    doctor_dashboard::DoctorDashboardPage, home::HomePage, login::LoginPage,
    patient_appointments::PatientAppointmentsPage, patient_dashboard::PatientDashboardPage,
    register::RegisterPage,
};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Rehydrates the persisted session before the first render, provides the
/// shared state contexts, and sets up client-side routing. Public routes
/// (`/login`, `/register`) skip the session gate; everything else redirects
/// through it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Restore a persisted session, if one survives in localStorage.
    let mut initial = AuthState::default();
    if let Some((user, token)) = crate::util::session::load() {
        initial.login(user, token);
    }

    let auth = RwSignal::new(initial);
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/medicare-client.css"/>
        <Title text="MediCare"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=(StaticSegment("patient"), StaticSegment("dashboard"))
                    view=PatientDashboardPage
                />
                <Route
                    path=(StaticSegment("patient"), StaticSegment("appointments"))
                    view=PatientAppointmentsPage
                />
                <Route
                    path=(StaticSegment("doctor"), StaticSegment("dashboard"))
                    view=DoctorDashboardPage
                />
            </Routes>
        </Router>
        <ToastHost/>
    }
}
