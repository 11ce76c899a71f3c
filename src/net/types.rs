//! Wire types mirrored from the clinic backend.
//!
//! The client never owns this data; every struct here is a read-through
//! snapshot of whatever the server last returned. Field names follow the
//! backend JSON exactly, including its mixed camelCase/snake_case.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role. Determines which dashboard and endpoints apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "DOCTOR")]
    Doctor,
    #[serde(rename = "PATIENT")]
    Patient,
}

impl Role {
    /// Route of the dashboard this role lands on after login.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::Doctor => "/doctor/dashboard",
            Role::Patient => "/patient/dashboard",
        }
    }

    /// Lowercase label for display ("doctor" / "patient").
    pub fn label(self) -> &'static str {
        match self {
            Role::Doctor => "doctor",
            Role::Patient => "patient",
        }
    }
}

/// Lifecycle of an appointment. Transitions only leave `Pending`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "COMPLETED")]
    Completed,
    #[serde(rename = "CANCELLED")]
    Cancelled,
}

impl AppointmentStatus {
    /// Wire value, also used as the query-parameter value.
    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "PENDING",
            AppointmentStatus::Completed => "COMPLETED",
            AppointmentStatus::Cancelled => "CANCELLED",
        }
    }

    /// Whether status-changing actions (complete / cancel) still apply.
    pub fn is_actionable(self) -> bool {
        self == AppointmentStatus::Pending
    }
}

/// Authenticated account as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
}

/// Doctor summary from the directory listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub email: String,
    pub specialization: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Appointment record, optionally carrying embedded party summaries
/// depending on which listing endpoint produced it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    #[serde(rename = "doctorId")]
    pub doctor_id: String,
    #[serde(rename = "patientId")]
    pub patient_id: String,
    pub date: String,
    pub status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor: Option<Doctor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient: Option<User>,
}

/// Pagination block attached to every list response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u32,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

impl Pagination {
    /// "Previous" is enabled only past the first page.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// "Next" is enabled only strictly before the last page.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Envelope for paginated list endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

/// Envelope for auth and mutation endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Payload of a successful login or registration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthPayload {
    pub user: User,
    pub token: String,
}

/// Body for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Body for `POST /auth/register/patient`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterPatientRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Body for `POST /auth/register/doctor`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterDoctorRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub specialization: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Body for `POST /appointments`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    #[serde(rename = "doctorId")]
    pub doctor_id: String,
    pub date: String,
}

/// Body for `PATCH /appointments/update-status`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub appointment_id: String,
    pub status: AppointmentStatus,
}
