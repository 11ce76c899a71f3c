//! Modal dialog for booking an appointment with a selected doctor.

use leptos::prelude::*;

use crate::forms::booking::{BookingForm, min_booking_date};
use crate::net::types::Doctor;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::format::initial;

use super::toast_host::notify;

/// Booking dialog. `selected` doubles as open/closed state: `Some(doctor)`
/// shows the dialog, `None` hides it. The date input's floor and the
/// client-side validation floor are the same value (tomorrow).
#[component]
pub fn BookingModal(selected: RwSignal<Option<Doctor>>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let date = RwSignal::new(String::new());
    let date_error = RwSignal::new(None::<&'static str>);
    let pending = RwSignal::new(false);

    let close = Callback::new(move |()| {
        selected.set(None);
        date.set(String::new());
        date_error.set(None);
        pending.set(false);
    });

    let submit = Callback::new(move |()| {
        let Some(doctor) = selected.get() else {
            return;
        };
        let form = BookingForm { date: date.get() };
        let errors = form.validate(&min_booking_date());
        date_error.set(errors.date);
        if !errors.is_valid() || pending.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            pending.set(true);
            let req = form.to_request(&doctor.id);
            leptos::task::spawn_local(async move {
                match crate::net::api::create_appointment(&req).await {
                    Ok(_) => {
                        notify(toasts, ToastKind::Success, "Appointment booked successfully!");
                        close.run(());
                    }
                    Err(err) => {
                        pending.set(false);
                        notify(
                            toasts,
                            ToastKind::Error,
                            err.user_message("Failed to book appointment"),
                        );
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (doctor, form);
        }
    });

    view! {
        <Show when=move || selected.get().is_some()>
            <div class="dialog-backdrop" on:click=move |_| close.run(())>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Book Appointment"</h2>
                    {move || {
                        selected
                            .get()
                            .map(|doctor| {
                                view! {
                                    <div class="dialog__doctor">
                                        <span class="dialog__doctor-initial">
                                            {initial(&doctor.name)}
                                        </span>
                                        <div>
                                            <h4>{format!("Dr. {}", doctor.name)}</h4>
                                            <p class="dialog__doctor-specialization">
                                                {doctor.specialization}
                                            </p>
                                        </div>
                                    </div>
                                }
                            })
                    }}
                    <label class="dialog__label">
                        "Appointment Date"
                        <input
                            class="dialog__input"
                            type="date"
                            min=min_booking_date()
                            prop:value=move || date.get()
                            on:input=move |ev| {
                                date.set(event_target_value(&ev));
                                date_error.set(None);
                            }
                        />
                    </label>
                    {move || {
                        date_error
                            .get()
                            .map(|msg| view! { <p class="dialog__error">{msg}</p> })
                    }}
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| close.run(())>
                            "Cancel"
                        </button>
                        <button
                            class="btn btn--primary"
                            disabled=move || pending.get()
                            on:click=move |_| submit.run(())
                        >
                            "Book Appointment"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
