//! Searchable, filterable, paginated doctor directory.

use leptos::prelude::*;

use crate::net::types::Doctor;
use crate::state::filters::DoctorFilters;
use crate::state::toast::{ToastKind, ToastState};

use super::booking_modal::BookingModal;
use super::doctor_card::DoctorCard;
use super::pagination::PaginationControls;
use super::toast_host::notify;

/// Doctor directory with name search, specialization filter, and a 3x3
/// paginated grid. Selecting a card opens the booking dialog.
#[component]
pub fn DoctorList() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let filters = RwSignal::new(DoctorFilters::default());
    // Search box contents; applied to the filters only on submit.
    let search_input = RwSignal::new(String::new());
    let selected_doctor = RwSignal::new(None::<Doctor>);

    let specializations = LocalResource::new(|| async {
        crate::net::api::fetch_specializations().await.unwrap_or_default()
    });

    let doctors = LocalResource::new(move || {
        let current = filters.get();
        async move {
            let result = crate::net::api::fetch_doctors(&current).await;
            if let Err(err) = &result {
                notify(toasts, ToastKind::Error, err.user_message("Failed to load doctors"));
            }
            result
        }
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        filters.update(|f| f.apply_search(search_input.get()));
    };

    let on_specialization = move |ev| {
        filters.update(|f| f.set_specialization(event_target_value(&ev)));
    };

    let on_clear = move |_| {
        search_input.set(String::new());
        filters.update(DoctorFilters::clear);
    };

    let on_book = Callback::new(move |doctor: Doctor| {
        selected_doctor.set(Some(doctor));
    });

    let on_page = Callback::new(move |page: u32| {
        filters.update(|f| f.page = page);
    });

    view! {
        <div class="doctor-list">
            <div class="doctor-list__filters">
                <h2>"Find a Doctor"</h2>
                <form class="doctor-list__search" on:submit=on_search>
                    <input
                        type="text"
                        placeholder="Search by doctor name..."
                        prop:value=move || search_input.get()
                        on:input=move |ev| search_input.set(event_target_value(&ev))
                    />
                </form>
                <select
                    prop:value=move || filters.get().specialization
                    on:change=on_specialization
                >
                    <option value="">"All Specializations"</option>
                    {move || {
                        specializations
                            .get()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|spec| {
                                view! { <option value=spec.clone()>{spec.clone()}</option> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
                <Show when=move || filters.get().is_filtered()>
                    <button class="btn btn--outline" on:click=on_clear>
                        "Clear"
                    </button>
                </Show>
            </div>

            <Suspense fallback=move || view! { <p>"Loading doctors..."</p> }>
                {move || {
                    doctors
                        .get()
                        .map(|result| match result {
                            Ok(page) if page.data.is_empty() => view! {
                                <div class="empty-state">
                                    <h3>"No doctors found"</h3>
                                    <p>"Try adjusting your search criteria"</p>
                                </div>
                            }
                                .into_any(),
                            Ok(page) => view! {
                                <div class="doctor-list__grid">
                                    {page
                                        .data
                                        .into_iter()
                                        .map(|doctor| {
                                            view! { <DoctorCard doctor=doctor on_book=on_book/> }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                                <PaginationControls pagination=page.pagination on_page=on_page/>
                            }
                                .into_any(),
                            Err(_) => view! {
                                <div class="empty-state">
                                    <h3>"Could not load doctors"</h3>
                                    <p>"Please try again later"</p>
                                </div>
                            }
                                .into_any(),
                        })
                }}
            </Suspense>

            <BookingModal selected=selected_doctor/>
        </div>
    }
}
