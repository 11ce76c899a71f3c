use super::*;

#[test]
fn http_error_prefers_backend_message() {
    let err = ApiError::Http {
        status: 409,
        message: Some("Doctor is not available on that date".to_owned()),
    };
    assert_eq!(
        err.user_message("Failed to book appointment"),
        "Doctor is not available on that date"
    );
}

#[test]
fn http_error_without_message_uses_fallback() {
    let err = ApiError::Http { status: 500, message: None };
    assert_eq!(err.user_message("Login failed"), "Login failed");
}

#[test]
fn network_error_uses_fallback() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.user_message("Login failed"), "Login failed");
}

#[test]
fn display_includes_status() {
    let err = ApiError::Http { status: 404, message: None };
    assert_eq!(err.to_string(), "server responded with status 404");
}
