use super::*;

// =============================================================
// Email shape
// =============================================================

#[test]
fn accepts_plain_address() {
    assert!(is_valid_email("ana@example.com"));
}

#[test]
fn rejects_missing_at_sign() {
    assert!(!is_valid_email("ana.example.com"));
}

#[test]
fn rejects_empty_local_part() {
    assert!(!is_valid_email("@example.com"));
}

#[test]
fn rejects_domain_without_dot() {
    assert!(!is_valid_email("ana@example"));
}

#[test]
fn rejects_dot_at_domain_edge() {
    assert!(!is_valid_email("ana@.com"));
    assert!(!is_valid_email("ana@example."));
}

#[test]
fn rejects_double_at_sign() {
    assert!(!is_valid_email("ana@@example.com"));
}

// =============================================================
// Photo URL
// =============================================================

#[test]
fn accepts_http_and_https_urls() {
    assert!(is_valid_photo_url("https://example.com/photo.jpg"));
    assert!(is_valid_photo_url("http://example.com/photo.jpg"));
}

#[test]
fn rejects_other_schemes_and_bare_prefixes() {
    assert!(!is_valid_photo_url("ftp://example.com/photo.jpg"));
    assert!(!is_valid_photo_url("example.com/photo.jpg"));
    assert!(!is_valid_photo_url("https://"));
}

// =============================================================
// Optional normalization
// =============================================================

#[test]
fn blank_optional_becomes_none() {
    assert_eq!(normalize_optional(""), None);
    assert_eq!(normalize_optional("   "), None);
}

#[test]
fn optional_is_trimmed() {
    assert_eq!(
        normalize_optional("  https://example.com/p.jpg "),
        Some("https://example.com/p.jpg".to_owned())
    );
}
