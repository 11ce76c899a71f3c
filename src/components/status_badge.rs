//! Color-coded pill showing an appointment's status.

use leptos::prelude::*;

use crate::net::types::AppointmentStatus;

/// CSS modifier class for a status value.
fn badge_class(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Pending => "status-badge status-badge--pending",
        AppointmentStatus::Completed => "status-badge status-badge--completed",
        AppointmentStatus::Cancelled => "status-badge status-badge--cancelled",
    }
}

/// Status pill: yellow for pending, green for completed, red for cancelled.
#[component]
pub fn StatusBadge(status: AppointmentStatus) -> impl IntoView {
    view! { <span class=badge_class(status)>{status.as_str()}</span> }
}
