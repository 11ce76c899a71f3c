use super::*;
use crate::net::types::AppointmentStatus;

fn has(params: &[(&'static str, String)], key: &str, value: &str) -> bool {
    params.iter().any(|(k, v)| *k == key && v == value)
}

fn lacks(params: &[(&'static str, String)], key: &str) -> bool {
    !params.iter().any(|(k, _)| *k == key)
}

// =============================================================
// Doctor directory params
// =============================================================

#[test]
fn doctors_params_defaults_to_page_and_limit_only() {
    let params = doctors_params(&DoctorFilters::default());
    assert!(has(&params, "page", "1"));
    assert!(has(&params, "limit", "9"));
    assert!(lacks(&params, "search"));
    assert!(lacks(&params, "specialization"));
}

#[test]
fn doctors_params_includes_active_filters() {
    let filters = DoctorFilters {
        search: "cho".to_owned(),
        specialization: "Cardiology".to_owned(),
        page: 3,
    };
    let params = doctors_params(&filters);
    assert!(has(&params, "page", "3"));
    assert!(has(&params, "search", "cho"));
    assert!(has(&params, "specialization", "Cardiology"));
}

#[test]
fn doctors_params_trims_search_whitespace() {
    let filters = DoctorFilters { search: "  cho  ".to_owned(), ..Default::default() };
    let params = doctors_params(&filters);
    assert!(has(&params, "search", "cho"));
}

#[test]
fn doctors_params_omits_blank_search() {
    let filters = DoctorFilters { search: "   ".to_owned(), ..Default::default() };
    assert!(lacks(&doctors_params(&filters), "search"));
}

// =============================================================
// Appointment list params
// =============================================================

#[test]
fn patient_params_default_is_page_only() {
    let params = patient_appointment_params(&AppointmentFilters::default());
    assert_eq!(params, vec![("page", "1".to_owned())]);
}

#[test]
fn patient_params_includes_status_filter() {
    let filters = AppointmentFilters {
        status: Some(AppointmentStatus::Pending),
        ..Default::default()
    };
    let params = patient_appointment_params(&filters);
    assert!(has(&params, "status", "PENDING"));
}

#[test]
fn patient_params_never_includes_date() {
    let filters = AppointmentFilters { date: "2026-09-15".to_owned(), ..Default::default() };
    assert!(lacks(&patient_appointment_params(&filters), "date"));
}

#[test]
fn doctor_params_includes_status_and_date() {
    let filters = AppointmentFilters {
        status: Some(AppointmentStatus::Completed),
        date: "2026-09-15".to_owned(),
        page: 2,
    };
    let params = doctor_appointment_params(&filters);
    assert!(has(&params, "page", "2"));
    assert!(has(&params, "status", "COMPLETED"));
    assert!(has(&params, "date", "2026-09-15"));
}

#[test]
fn doctor_params_omits_empty_date() {
    let params = doctor_appointment_params(&AppointmentFilters::default());
    assert!(lacks(&params, "date"));
    assert!(lacks(&params, "status"));
}
