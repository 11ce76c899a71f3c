use super::*;

const MIN: &str = "2026-09-01";

#[test]
fn empty_date_is_rejected() {
    let form = BookingForm::default();
    assert_eq!(form.validate(MIN).date, Some("Appointment date is required"));
}

#[test]
fn date_before_tomorrow_is_rejected() {
    let form = BookingForm { date: "2026-08-31".to_owned() };
    assert_eq!(
        form.validate(MIN).date,
        Some("Appointment date must be tomorrow or later")
    );
}

#[test]
fn tomorrow_is_accepted() {
    let form = BookingForm { date: MIN.to_owned() };
    assert!(form.validate(MIN).is_valid());
}

#[test]
fn later_date_is_accepted() {
    let form = BookingForm { date: "2027-01-05".to_owned() };
    assert!(form.validate(MIN).is_valid());
}

#[test]
fn year_boundary_orders_correctly() {
    // Lexicographic comparison on ISO dates must also hold across years.
    let form = BookingForm { date: "2025-12-31".to_owned() };
    assert!(!form.validate("2026-01-01").is_valid());
}

#[test]
fn request_carries_doctor_id_and_date() {
    let form = BookingForm { date: "2026-09-15".to_owned() };
    let req = form.to_request("d1");
    assert_eq!(req.doctor_id, "d1");
    assert_eq!(req.date, "2026-09-15");
}
