//! Patient appointments list with status filter buttons.

use leptos::prelude::*;

use crate::components::appointment_card::AppointmentCard;
use crate::components::navbar::Navbar;
use crate::components::pagination::PaginationControls;
use crate::components::toast_host::notify;
use crate::net::types::{AppointmentStatus, Role};
use crate::state::auth::AuthState;
use crate::state::filters::AppointmentFilters;
use crate::state::toast::{ToastKind, ToastState};

/// `/patient/appointments` — protected, patient-only. Lists the patient's
/// appointments filtered by status; pending ones can be cancelled from
/// their card, which refetches the list.
#[component]
pub fn PatientAppointmentsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    super::require_role(auth, Role::Patient);

    let toasts = expect_context::<RwSignal<ToastState>>();
    let filters = RwSignal::new(AppointmentFilters::default());

    let appointments = LocalResource::new(move || {
        let current = filters.get();
        async move {
            let result = crate::net::api::fetch_patient_appointments(&current).await;
            if let Err(err) = &result {
                notify(
                    toasts,
                    ToastKind::Error,
                    err.user_message("Failed to load appointments"),
                );
            }
            result
        }
    });

    let on_changed = Callback::new(move |()| appointments.refetch());

    let on_page = Callback::new(move |page: u32| {
        filters.update(|f| f.page = page);
    });

    let on_clear = move |_| filters.update(AppointmentFilters::clear);

    let status_button = move |value: Option<AppointmentStatus>, label: &'static str| {
        view! {
            <button
                type="button"
                class=move || {
                    if filters.get().status == value {
                        "filter-card filter-card--selected"
                    } else {
                        "filter-card"
                    }
                }
                on:click=move |_| filters.update(|f| f.status = value)
            >
                {label}
            </button>
        }
    };

    view! {
        <Navbar/>
        <main class="page">
            <header class="page__header">
                <h1>"My Appointments"</h1>
                <p>"Manage your scheduled appointments"</p>
            </header>

            <div class="appointments__filters">
                <div class="appointments__filters-head">
                    <h2>"Filter Appointments"</h2>
                    <Show when=move || filters.get().is_filtered()>
                        <button class="btn btn--outline" on:click=on_clear>
                            "Clear Filters"
                        </button>
                    </Show>
                </div>
                <div class="appointments__filter-row">
                    {status_button(None, "All")}
                    {status_button(Some(AppointmentStatus::Pending), "Pending")}
                    {status_button(Some(AppointmentStatus::Completed), "Completed")}
                    {status_button(Some(AppointmentStatus::Cancelled), "Cancelled")}
                </div>
            </div>

            <Suspense fallback=move || view! { <p>"Loading appointments..."</p> }>
                {move || {
                    appointments
                        .get()
                        .map(|result| match result {
                            Ok(page) if page.data.is_empty() => {
                                let filtered = filters.get_untracked().is_filtered();
                                view! {
                                    <div class="empty-state">
                                        <h3>"No appointments found"</h3>
                                        <p>
                                            {if filtered {
                                                "Try adjusting your filters"
                                            } else {
                                                "You have no appointments yet"
                                            }}
                                        </p>
                                    </div>
                                }
                                    .into_any()
                            }
                            Ok(page) => view! {
                                <div class="appointments__list">
                                    {page
                                        .data
                                        .into_iter()
                                        .map(|appointment| {
                                            view! {
                                                <AppointmentCard
                                                    appointment=appointment
                                                    on_changed=on_changed
                                                />
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                                <PaginationControls pagination=page.pagination on_page=on_page/>
                            }
                                .into_any(),
                            Err(_) => view! {
                                <div class="empty-state">
                                    <h3>"Could not load appointments"</h3>
                                    <p>"Please try again later"</p>
                                </div>
                            }
                                .into_any(),
                        })
                }}
            </Suspense>
        </main>
    }
}
