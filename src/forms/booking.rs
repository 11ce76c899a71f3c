//! Booking form model for the appointment modal.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use crate::net::types::CreateAppointmentRequest;

/// Raw booking input: the chosen date as an ISO `YYYY-MM-DD` string,
/// straight from the date input.
#[derive(Clone, Debug, Default)]
pub struct BookingForm {
    pub date: String,
}

/// Per-field booking errors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingErrors {
    pub date: Option<&'static str>,
}

impl BookingErrors {
    pub fn is_valid(&self) -> bool {
        self.date.is_none()
    }
}

impl BookingForm {
    /// Validate against the minimum selectable date (tomorrow, computed
    /// from the browser clock). ISO date strings order lexicographically,
    /// so a plain string comparison is the date comparison.
    pub fn validate(&self, min_date: &str) -> BookingErrors {
        BookingErrors {
            date: if self.date.is_empty() {
                Some("Appointment date is required")
            } else if self.date.as_str() < min_date {
                Some("Appointment date must be tomorrow or later")
            } else {
                None
            },
        }
    }

    /// Request body for `POST /appointments`. Call only after validation.
    pub fn to_request(&self, doctor_id: &str) -> CreateAppointmentRequest {
        CreateAppointmentRequest {
            doctor_id: doctor_id.to_owned(),
            date: self.date.clone(),
        }
    }
}

/// Tomorrow's date from the browser clock, as `YYYY-MM-DD`. Used both as
/// the `min` attribute of the date input and as the validation floor.
pub fn min_booking_date() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let tomorrow = js_sys::Date::new_0();
        tomorrow.set_date(now.get_date() + 1);
        format!(
            "{:04}-{:02}-{:02}",
            tomorrow.get_full_year(),
            tomorrow.get_month() + 1,
            tomorrow.get_date()
        )
    }
    #[cfg(not(feature = "hydrate"))]
    {
        // No clock on the server; validation there never runs.
        String::new()
    }
}
