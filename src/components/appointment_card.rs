//! Patient-side card for a single appointment.

use leptos::prelude::*;

use crate::net::types::{Appointment, AppointmentStatus, UpdateStatusRequest};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::format::{format_date_time, initial};

use super::status_badge::StatusBadge;
use super::toast_host::notify;

/// Appointment card showing the doctor, date, and status. Pending
/// appointments carry a cancel action behind a confirm dialog; completed
/// and cancelled ones are display-only.
#[component]
pub fn AppointmentCard(appointment: Appointment, on_changed: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let pending = RwSignal::new(false);

    let appointment_id = appointment.id.clone();
    let actionable = appointment.status.is_actionable();

    let on_cancel = Callback::new(move |()| {
        if pending.get() {
            return;
        }
        if !crate::util::dialog::confirm("Are you sure you want to cancel this appointment?") {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            pending.set(true);
            let req = UpdateStatusRequest {
                appointment_id: appointment_id.clone(),
                status: AppointmentStatus::Cancelled,
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::update_appointment_status(&req).await {
                    Ok(_) => {
                        notify(toasts, ToastKind::Success, "Appointment cancelled successfully");
                        on_changed.run(());
                    }
                    Err(err) => {
                        notify(
                            toasts,
                            ToastKind::Error,
                            err.user_message("Failed to cancel appointment"),
                        );
                    }
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &appointment_id;
        }
    });

    let (doctor_name, doctor_specialization, doctor_photo) = match &appointment.doctor {
        Some(doctor) => (
            format!("Dr. {}", doctor.name),
            doctor.specialization.clone(),
            doctor.photo_url.clone(),
        ),
        None => ("Doctor".to_owned(), String::new(), None),
    };

    let avatar = match doctor_photo {
        Some(url) => view! {
            <img class="appointment-card__photo" src=url alt=doctor_name.clone()/>
        }
            .into_any(),
        None => view! {
            <span class="appointment-card__photo appointment-card__photo--initial">
                {initial(&doctor_name)}
            </span>
        }
            .into_any(),
    };

    view! {
        <div class="appointment-card">
            {avatar}
            <div class="appointment-card__body">
                <h3 class="appointment-card__title">{doctor_name}</h3>
                <p class="appointment-card__specialization">{doctor_specialization}</p>
                <p class="appointment-card__date">{format_date_time(&appointment.date)}</p>
                <StatusBadge status=appointment.status/>
            </div>
            <Show when=move || actionable>
                <button
                    class="btn btn--danger appointment-card__cancel"
                    disabled=move || pending.get()
                    on:click=move |_| on_cancel.run(())
                    title="Cancel appointment"
                >
                    "Cancel"
                </button>
            </Show>
        </div>
    }
}
