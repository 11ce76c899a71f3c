//! REST API client for the clinic backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the bearer
//! token from session storage attached to every request.
//! Server-side (SSR): stubs returning `ApiError::Network` since these
//! endpoints are only meaningful in the browser.
//!
//! Query parameters are assembled by pure functions so the request shapes
//! stay testable without a browser. Empty filters are omitted from the
//! query string; `page` is always sent.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::{ApiError, ApiResult};
use super::types::{
    Appointment, AuthPayload, CreateAppointmentRequest, Doctor, LoginRequest, Paginated,
    RegisterDoctorRequest, RegisterPatientRequest, UpdateStatusRequest,
};
use crate::state::filters::{AppointmentFilters, DoctorFilters};

/// Base URL of the external clinic API. The client has no backend of its own.
pub const API_BASE_URL: &str = "https://appointment-manager-node.onrender.com/api/v1";

/// Page size for the doctor directory grid (3 columns x 3 rows).
pub const DOCTORS_PAGE_SIZE: u32 = 9;

/// Query parameters for `GET /doctors`.
pub fn doctors_params(filters: &DoctorFilters) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("page", filters.page.to_string()),
        ("limit", DOCTORS_PAGE_SIZE.to_string()),
    ];
    if !filters.search.trim().is_empty() {
        params.push(("search", filters.search.trim().to_owned()));
    }
    if !filters.specialization.is_empty() {
        params.push(("specialization", filters.specialization.clone()));
    }
    params
}

/// Query parameters for `GET /appointments/patient`.
pub fn patient_appointment_params(filters: &AppointmentFilters) -> Vec<(&'static str, String)> {
    let mut params = vec![("page", filters.page.to_string())];
    if let Some(status) = filters.status {
        params.push(("status", status.as_str().to_owned()));
    }
    params
}

/// Query parameters for `GET /appointments/doctor`.
pub fn doctor_appointment_params(filters: &AppointmentFilters) -> Vec<(&'static str, String)> {
    let mut params = vec![("page", filters.page.to_string())];
    if let Some(status) = filters.status {
        params.push(("status", status.as_str().to_owned()));
    }
    if !filters.date.is_empty() {
        params.push(("date", filters.date.clone()));
    }
    params
}

// =============================================================
// Request plumbing (browser only)
// =============================================================

#[cfg(feature = "hydrate")]
mod plumbing {
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::{API_BASE_URL, ApiError, ApiResult};

    /// Error body the backend sends alongside non-2xx statuses.
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        message: Option<String>,
    }

    fn authorize(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match crate::util::session::token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    async fn check(resp: gloo_net::http::Response) -> ApiResult<gloo_net::http::Response> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let message = resp.json::<ErrorBody>().await.ok().and_then(|b| b.message);
        log::warn!("api call failed with status {status}");
        Err(ApiError::Http { status, message })
    }

    async fn decode<T: DeserializeOwned>(resp: gloo_net::http::Response) -> ApiResult<T> {
        check(resp)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn get_json<T: DeserializeOwned>(
        path: &str,
        params: &[(&'static str, String)],
    ) -> ApiResult<T> {
        let url = format!("{API_BASE_URL}{path}");
        let builder = gloo_net::http::Request::get(&url)
            .query(params.iter().map(|(k, v)| (*k, v.as_str())));
        let resp = authorize(builder)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let url = format!("{API_BASE_URL}{path}");
        let resp = authorize(gloo_net::http::Request::post(&url))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }

    pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let url = format!("{API_BASE_URL}{path}");
        let resp = authorize(gloo_net::http::Request::patch(&url))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }
}

#[cfg(not(feature = "hydrate"))]
fn server_stub<T>() -> ApiResult<T> {
    Err(ApiError::Network("not available on the server".to_owned()))
}

// =============================================================
// Endpoints
// =============================================================

/// `POST /auth/login` — authenticate with email, password, and role.
pub async fn login(req: &LoginRequest) -> ApiResult<AuthPayload> {
    #[cfg(feature = "hydrate")]
    {
        let env: super::types::ApiEnvelope<AuthPayload> =
            plumbing::post_json("/auth/login", req).await?;
        Ok(env.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        server_stub()
    }
}

/// `POST /auth/register/patient` — create a patient account.
pub async fn register_patient(req: &RegisterPatientRequest) -> ApiResult<AuthPayload> {
    #[cfg(feature = "hydrate")]
    {
        let env: super::types::ApiEnvelope<AuthPayload> =
            plumbing::post_json("/auth/register/patient", req).await?;
        Ok(env.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        server_stub()
    }
}

/// `POST /auth/register/doctor` — create a doctor account.
pub async fn register_doctor(req: &RegisterDoctorRequest) -> ApiResult<AuthPayload> {
    #[cfg(feature = "hydrate")]
    {
        let env: super::types::ApiEnvelope<AuthPayload> =
            plumbing::post_json("/auth/register/doctor", req).await?;
        Ok(env.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        server_stub()
    }
}

/// `GET /specializations` — flat list of specialization names.
pub async fn fetch_specializations() -> ApiResult<Vec<String>> {
    #[cfg(feature = "hydrate")]
    {
        plumbing::get_json("/specializations", &[]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        server_stub()
    }
}

/// `GET /doctors` — paginated doctor directory with search and
/// specialization filters.
pub async fn fetch_doctors(filters: &DoctorFilters) -> ApiResult<Paginated<Doctor>> {
    #[cfg(feature = "hydrate")]
    {
        plumbing::get_json("/doctors", &doctors_params(filters)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = filters;
        server_stub()
    }
}

/// `POST /appointments` — book an appointment with a doctor.
pub async fn create_appointment(req: &CreateAppointmentRequest) -> ApiResult<Appointment> {
    #[cfg(feature = "hydrate")]
    {
        let env: super::types::ApiEnvelope<Appointment> =
            plumbing::post_json("/appointments", req).await?;
        Ok(env.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        server_stub()
    }
}

/// `GET /appointments/patient` — the signed-in patient's appointments.
pub async fn fetch_patient_appointments(
    filters: &AppointmentFilters,
) -> ApiResult<Paginated<Appointment>> {
    #[cfg(feature = "hydrate")]
    {
        plumbing::get_json("/appointments/patient", &patient_appointment_params(filters)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = filters;
        server_stub()
    }
}

/// `GET /appointments/doctor` — the signed-in doctor's appointments.
pub async fn fetch_doctor_appointments(
    filters: &AppointmentFilters,
) -> ApiResult<Paginated<Appointment>> {
    #[cfg(feature = "hydrate")]
    {
        plumbing::get_json("/appointments/doctor", &doctor_appointment_params(filters)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = filters;
        server_stub()
    }
}

/// `PATCH /appointments/update-status` — move a PENDING appointment to
/// COMPLETED or CANCELLED.
pub async fn update_appointment_status(req: &UpdateStatusRequest) -> ApiResult<Appointment> {
    #[cfg(feature = "hydrate")]
    {
        let env: super::types::ApiEnvelope<Appointment> =
            plumbing::patch_json("/appointments/update-status", req).await?;
        Ok(env.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        server_stub()
    }
}
