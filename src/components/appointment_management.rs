//! Doctor-side appointment management: filters, list, status actions.

use leptos::prelude::*;

use crate::net::types::{Appointment, AppointmentStatus, UpdateStatusRequest};
use crate::state::filters::AppointmentFilters;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::format::{format_date_time, initial};

use super::pagination::PaginationControls;
use super::status_badge::StatusBadge;
use super::toast_host::notify;

/// Incoming-appointment list for the signed-in doctor, filterable by
/// status and date. Pending rows offer Complete / Cancel actions; a
/// successful update refetches the list so the row leaves the pending set.
#[component]
pub fn AppointmentManagement() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let filters = RwSignal::new(AppointmentFilters::default());

    let appointments = LocalResource::new(move || {
        let current = filters.get();
        async move {
            let result = crate::net::api::fetch_doctor_appointments(&current).await;
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

    let on_status_filter = move |ev| {
        let value = event_target_value(&ev);
        filters.update(|f| {
            f.status = match value.as_str() {
                "PENDING" => Some(AppointmentStatus::Pending),
                "COMPLETED" => Some(AppointmentStatus::Completed),
                "CANCELLED" => Some(AppointmentStatus::Cancelled),
                _ => None,
            };
        });
    };

    let on_date_filter = move |ev| {
        filters.update(|f| f.date = event_target_value(&ev));
    };

    let on_clear = move |_| filters.update(AppointmentFilters::clear);

    let on_page = Callback::new(move |page: u32| {
        filters.update(|f| f.page = page);
    });

    // Shared by the Complete and Cancel buttons of every row.
    let on_update = Callback::new(move |(id, status): (String, AppointmentStatus)| {
        let action = match status {
            AppointmentStatus::Completed => "mark as completed",
            _ => "cancel",
        };
        let prompt = format!("Are you sure you want to {action} this appointment?");
        if !crate::util::dialog::confirm(&prompt) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let req = UpdateStatusRequest { appointment_id: id, status };
            leptos::task::spawn_local(async move {
                match crate::net::api::update_appointment_status(&req).await {
                    Ok(_) => {
                        notify(
                            toasts,
                            ToastKind::Success,
                            "Appointment status updated successfully",
                        );
                        appointments.refetch();
                    }
                    Err(err) => {
                        notify(
                            toasts,
                            ToastKind::Error,
                            err.user_message("Failed to update appointment status"),
                        );
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="appointment-management">
            <div class="appointment-management__filters">
                <h2>"Appointment Management"</h2>
                <label>
                    "Filter by Status"
                    <select
                        prop:value=move || {
                            filters
                                .get()
                                .status
                                .map_or_else(String::new, |s| s.as_str().to_owned())
                        }
                        on:change=on_status_filter
                    >
                        <option value="">"All Statuses"</option>
                        <option value="PENDING">"Pending"</option>
                        <option value="COMPLETED">"Completed"</option>
                        <option value="CANCELLED">"Cancelled"</option>
                    </select>
                </label>
                <label>
                    "Filter by Date"
                    <input
                        type="date"
                        prop:value=move || filters.get().date
                        on:change=on_date_filter
                    />
                </label>
                <Show when=move || filters.get().is_filtered()>
                    <button class="btn btn--outline" on:click=on_clear>
                        "Clear Filters"
                    </button>
                </Show>
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
                                <div class="appointment-management__list">
                                    {page
                                        .data
                                        .into_iter()
                                        .map(|appointment| {
                                            view! {
                                                <AppointmentRow
                                                    appointment=appointment
                                                    on_update=on_update
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
        </div>
    }
}

/// One appointment row with the patient summary and status actions.
#[component]
fn AppointmentRow(
    appointment: Appointment,
    on_update: Callback<(String, AppointmentStatus)>,
) -> impl IntoView {
    let actionable = appointment.status.is_actionable();
    let complete_id = appointment.id.clone();
    let cancel_id = appointment.id.clone();

    let (patient_name, patient_email, patient_photo) = match &appointment.patient {
        Some(patient) => (
            patient.name.clone(),
            patient.email.clone(),
            patient.photo_url.clone(),
        ),
        None => ("Patient".to_owned(), String::new(), None),
    };

    let avatar = match patient_photo {
        Some(url) => view! {
            <img class="appointment-row__photo" src=url alt=patient_name.clone()/>
        }
            .into_any(),
        None => view! {
            <span class="appointment-row__photo appointment-row__photo--initial">
                {initial(&patient_name)}
            </span>
        }
            .into_any(),
    };

    view! {
        <div class="appointment-row">
            {avatar}
            <div class="appointment-row__body">
                <h3 class="appointment-row__name">{patient_name}</h3>
                <p class="appointment-row__email">{patient_email}</p>
                <p class="appointment-row__date">{format_date_time(&appointment.date)}</p>
                <StatusBadge status=appointment.status/>
            </div>
            <Show when=move || actionable>
                <div class="appointment-row__actions">
                    <button
                        class="btn btn--outline appointment-row__complete"
                        on:click={
                            let id = complete_id.clone();
                            move |_| on_update.run((id.clone(), AppointmentStatus::Completed))
                        }
                    >
                        "Complete"
                    </button>
                    <button
                        class="btn btn--outline appointment-row__cancel"
                        on:click={
                            let id = cancel_id.clone();
                            move |_| on_update.run((id.clone(), AppointmentStatus::Cancelled))
                        }
                    >
                        "Cancel"
                    </button>
                </div>
            </Show>
        </div>
    }
}
