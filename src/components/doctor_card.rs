//! Directory card for a single doctor.

use leptos::prelude::*;

use crate::net::types::Doctor;
use crate::util::format::initial;

/// Doctor summary card with a book-appointment action.
#[component]
pub fn DoctorCard(doctor: Doctor, on_book: Callback<Doctor>) -> impl IntoView {
    let for_booking = doctor.clone();

    let avatar = match doctor.photo_url.clone() {
        Some(url) => view! {
            <img class="doctor-card__photo" src=url alt=doctor.name.clone()/>
        }
            .into_any(),
        None => view! {
            <span class="doctor-card__photo doctor-card__photo--initial">
                {initial(&doctor.name)}
            </span>
        }
            .into_any(),
    };

    view! {
        <div class="doctor-card">
            {avatar}
            <div class="doctor-card__body">
                <h3 class="doctor-card__name">{format!("Dr. {}", doctor.name)}</h3>
                <p class="doctor-card__specialization">{doctor.specialization.clone()}</p>
                <button
                    class="btn btn--primary"
                    on:click=move |_| on_book.run(for_booking.clone())
                >
                    "Book Appointment"
                </button>
            </div>
        </div>
    }
}
