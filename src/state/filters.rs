#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

use crate::net::types::AppointmentStatus;

/// Filter state for the doctor directory (patient dashboard).
///
/// Applying a search or changing the specialization resets pagination so
/// the user never lands on an out-of-range page of the narrowed result set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DoctorFilters {
    pub search: String,
    pub specialization: String,
    pub page: u32,
}

impl Default for DoctorFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            specialization: String::new(),
            page: 1,
        }
    }
}

impl DoctorFilters {
    /// Whether any narrowing filter is active (drives the Clear button).
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty() || !self.specialization.is_empty()
    }

    /// Re-run the current search from the first page.
    pub fn apply_search(&mut self, search: String) {
        self.search = search;
        self.page = 1;
    }

    /// Switch specialization and restart from the first page.
    pub fn set_specialization(&mut self, specialization: String) {
        self.specialization = specialization;
        self.page = 1;
    }

    /// Reset every filter to empty and pagination to page 1.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Filter state for appointment lists.
///
/// Shared by both roles: patients filter by status only, doctors also by
/// date. The `date` field is an ISO `YYYY-MM-DD` string straight from the
/// date input, empty when inactive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppointmentFilters {
    pub status: Option<AppointmentStatus>,
    pub date: String,
    pub page: u32,
}

impl Default for AppointmentFilters {
    fn default() -> Self {
        Self {
            status: None,
            date: String::new(),
            page: 1,
        }
    }
}

impl AppointmentFilters {
    /// Whether any narrowing filter is active (drives the Clear button).
    pub fn is_filtered(&self) -> bool {
        self.status.is_some() || !self.date.is_empty()
    }

    /// Reset every filter to empty and pagination to page 1.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
