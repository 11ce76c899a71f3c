//! Doctor dashboard: manage incoming appointments.

use leptos::prelude::*;

use crate::components::appointment_management::AppointmentManagement;
use crate::components::navbar::Navbar;
use crate::net::types::Role;
use crate::state::auth::AuthState;

/// `/doctor/dashboard` — protected, doctor-only.
#[component]
pub fn DoctorDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    super::require_role(auth, Role::Doctor);

    view! {
        <Navbar/>
        <main class="page">
            <header class="page__header">
                <h1>"Doctor Dashboard"</h1>
                <p>"Manage your appointments and patient interactions"</p>
            </header>
            <AppointmentManagement/>
        </main>
    }
}
