//! Patient dashboard: find and book a doctor.

use leptos::prelude::*;

use crate::components::doctor_list::DoctorList;
use crate::components::navbar::Navbar;
use crate::net::types::Role;
use crate::state::auth::AuthState;

/// `/patient/dashboard` — protected, patient-only.
#[component]
pub fn PatientDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    super::require_role(auth, Role::Patient);

    view! {
        <Navbar/>
        <main class="page">
            <header class="page__header">
                <h1>"Find Your Doctor"</h1>
                <p>"Browse our network of qualified healthcare professionals"</p>
            </header>
            <DoctorList/>
        </main>
    }
}
