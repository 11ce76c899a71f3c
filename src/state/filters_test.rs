use super::*;

// =============================================================
// DoctorFilters
// =============================================================

#[test]
fn doctor_filters_default_is_unfiltered_page_one() {
    let f = DoctorFilters::default();
    assert!(f.search.is_empty());
    assert!(f.specialization.is_empty());
    assert_eq!(f.page, 1);
    assert!(!f.is_filtered());
}

#[test]
fn apply_search_resets_page() {
    let mut f = DoctorFilters { page: 4, ..Default::default() };
    f.apply_search("cho".to_owned());
    assert_eq!(f.search, "cho");
    assert_eq!(f.page, 1);
    assert!(f.is_filtered());
}

#[test]
fn set_specialization_resets_page() {
    let mut f = DoctorFilters { page: 2, ..Default::default() };
    f.set_specialization("Cardiology".to_owned());
    assert_eq!(f.specialization, "Cardiology");
    assert_eq!(f.page, 1);
}

#[test]
fn clear_resets_everything() {
    let mut f = DoctorFilters {
        search: "cho".to_owned(),
        specialization: "Cardiology".to_owned(),
        page: 3,
    };
    f.clear();
    assert_eq!(f, DoctorFilters::default());
}

// =============================================================
// AppointmentFilters
// =============================================================

#[test]
fn appointment_filters_default_is_unfiltered_page_one() {
    let f = AppointmentFilters::default();
    assert!(f.status.is_none());
    assert!(f.date.is_empty());
    assert_eq!(f.page, 1);
    assert!(!f.is_filtered());
}

#[test]
fn status_filter_marks_filtered() {
    let f = AppointmentFilters {
        status: Some(AppointmentStatus::Pending),
        ..Default::default()
    };
    assert!(f.is_filtered());
}

#[test]
fn date_filter_marks_filtered() {
    let f = AppointmentFilters { date: "2026-09-15".to_owned(), ..Default::default() };
    assert!(f.is_filtered());
}

#[test]
fn clear_resets_status_date_and_page() {
    let mut f = AppointmentFilters {
        status: Some(AppointmentStatus::Cancelled),
        date: "2026-09-15".to_owned(),
        page: 5,
    };
    f.clear();
    assert_eq!(f, AppointmentFilters::default());
}
