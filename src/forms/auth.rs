//! Login and registration form models.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::{is_valid_email, is_valid_photo_url, normalize_optional};
use crate::net::types::{LoginRequest, RegisterDoctorRequest, RegisterPatientRequest, Role};

/// Raw login inputs. `role` defaults to patient, matching the pre-selected
/// radio card on the login page.
#[derive(Clone, Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            role: Role::Patient,
        }
    }
}

/// Per-field login errors. All `None` means the form may be submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginErrors {
    pub fn is_valid(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

impl LoginForm {
    pub fn validate(&self) -> LoginErrors {
        LoginErrors {
            email: if is_valid_email(self.email.trim()) {
                None
            } else {
                Some("Invalid email address")
            },
            password: if self.password.is_empty() {
                Some("Password is required")
            } else {
                None
            },
        }
    }

    /// Request body for `POST /auth/login`. Call only after validation.
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            role: self.role,
        }
    }
}

/// Raw patient registration inputs.
#[derive(Clone, Debug, Default)]
pub struct PatientRegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub photo_url: String,
}

/// Raw doctor registration inputs. Specialization is chosen from the
/// backend's `GET /specializations` list.
#[derive(Clone, Debug, Default)]
pub struct DoctorRegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub specialization: String,
    pub photo_url: String,
}

/// Per-field registration errors shared by both role forms; the
/// specialization slot stays `None` for patients.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub specialization: Option<&'static str>,
    pub photo_url: Option<&'static str>,
}

impl RegisterErrors {
    pub fn is_valid(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.specialization.is_none()
            && self.photo_url.is_none()
    }
}

fn validate_common(name: &str, email: &str, password: &str, photo_url: &str) -> RegisterErrors {
    RegisterErrors {
        name: if name.trim().is_empty() {
            Some("Name is required")
        } else {
            None
        },
        email: if is_valid_email(email.trim()) {
            None
        } else {
            Some("Invalid email address")
        },
        password: if password.len() < 6 {
            Some("Password must be at least 6 characters")
        } else {
            None
        },
        specialization: None,
        photo_url: match normalize_optional(photo_url) {
            Some(url) if !is_valid_photo_url(&url) => Some("Photo URL must be a valid URL"),
            _ => None,
        },
    }
}

impl PatientRegisterForm {
    pub fn validate(&self) -> RegisterErrors {
        validate_common(&self.name, &self.email, &self.password, &self.photo_url)
    }

    /// Request body for `POST /auth/register/patient`. Call only after
    /// validation.
    pub fn to_request(&self) -> RegisterPatientRequest {
        RegisterPatientRequest {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            photo_url: normalize_optional(&self.photo_url),
        }
    }
}

impl DoctorRegisterForm {
    pub fn validate(&self) -> RegisterErrors {
        let mut errors = validate_common(&self.name, &self.email, &self.password, &self.photo_url);
        if self.specialization.is_empty() {
            errors.specialization = Some("Please select a specialization");
        }
        errors
    }

    /// Request body for `POST /auth/register/doctor`. Call only after
    /// validation.
    pub fn to_request(&self) -> RegisterDoctorRequest {
        RegisterDoctorRequest {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            specialization: self.specialization.clone(),
            photo_url: normalize_optional(&self.photo_url),
        }
    }
}
