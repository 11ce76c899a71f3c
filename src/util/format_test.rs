use super::*;

// =============================================================
// format_date_time
// =============================================================

#[test]
fn formats_plain_date() {
    assert_eq!(format_date_time("2026-09-15"), "Sep 15, 2026");
}

#[test]
fn formats_date_with_time() {
    assert_eq!(format_date_time("2026-09-15T14:30:00.000Z"), "Sep 15, 2026 at 14:30");
}

#[test]
fn midnight_renders_date_only() {
    assert_eq!(format_date_time("2026-09-15T00:00:00.000Z"), "Sep 15, 2026");
}

#[test]
fn strips_leading_zero_from_day() {
    assert_eq!(format_date_time("2026-01-05"), "Jan 5, 2026");
}

#[test]
fn december_maps_to_dec() {
    assert_eq!(format_date_time("2025-12-31"), "Dec 31, 2025");
}

#[test]
fn malformed_input_passes_through() {
    assert_eq!(format_date_time("soon"), "soon");
    assert_eq!(format_date_time("2026-13-01"), "2026-13-01");
    assert_eq!(format_date_time(""), "");
}

// =============================================================
// initial
// =============================================================

#[test]
fn initial_is_uppercased_first_char() {
    assert_eq!(initial("helen cho"), "H");
    assert_eq!(initial("Ana"), "A");
}

#[test]
fn initial_of_empty_name_is_placeholder() {
    assert_eq!(initial("  "), "?");
}
