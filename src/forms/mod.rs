//! Client-side form validation.
//!
//! Field-level checks that block submission; they mirror what the backend
//! enforces but exist purely for immediate feedback. Each form struct holds
//! raw input strings and produces a per-field error set from `validate`.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod auth;
pub mod booking;

/// Loose email shape check: one `@`, non-empty local part, and a dot
/// inside the domain. The backend does the authoritative validation.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.split_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Accept only absolute http(s) URLs for optional photo fields.
pub fn is_valid_photo_url(value: &str) -> bool {
    (value.starts_with("http://") || value.starts_with("https://"))
        && value.len() > "https://".len()
}

/// Empty or whitespace-only optional input becomes `None` so the field is
/// omitted from the request body entirely.
pub fn normalize_optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
