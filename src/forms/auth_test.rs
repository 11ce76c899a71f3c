use super::*;

// =============================================================
// Login
// =============================================================

#[test]
fn login_default_role_is_patient() {
    assert_eq!(LoginForm::default().role, Role::Patient);
}

#[test]
fn login_valid_inputs_pass() {
    let form = LoginForm {
        email: "ana@example.com".to_owned(),
        password: "secret".to_owned(),
        role: Role::Patient,
    };
    assert!(form.validate().is_valid());
}

#[test]
fn login_rejects_bad_email_and_empty_password() {
    let form = LoginForm {
        email: "not-an-email".to_owned(),
        password: String::new(),
        role: Role::Doctor,
    };
    let errors = form.validate();
    assert_eq!(errors.email, Some("Invalid email address"));
    assert_eq!(errors.password, Some("Password is required"));
    assert!(!errors.is_valid());
}

#[test]
fn login_request_trims_email_and_keeps_role() {
    let form = LoginForm {
        email: " cho@example.com ".to_owned(),
        password: "secret".to_owned(),
        role: Role::Doctor,
    };
    let req = form.to_request();
    assert_eq!(req.email, "cho@example.com");
    assert_eq!(req.role, Role::Doctor);
}

// =============================================================
// Patient registration
// =============================================================

#[test]
fn patient_register_valid_inputs_pass() {
    let form = PatientRegisterForm {
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        password: "secret1".to_owned(),
        photo_url: String::new(),
    };
    assert!(form.validate().is_valid());
}

#[test]
fn patient_register_requires_name() {
    let form = PatientRegisterForm {
        name: "   ".to_owned(),
        email: "ana@example.com".to_owned(),
        password: "secret1".to_owned(),
        photo_url: String::new(),
    };
    assert_eq!(form.validate().name, Some("Name is required"));
}

#[test]
fn patient_register_enforces_password_length() {
    let form = PatientRegisterForm {
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        password: "short".to_owned(),
        photo_url: String::new(),
    };
    assert_eq!(
        form.validate().password,
        Some("Password must be at least 6 characters")
    );
}

#[test]
fn patient_register_rejects_malformed_photo_url() {
    let form = PatientRegisterForm {
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        password: "secret1".to_owned(),
        photo_url: "not a url".to_owned(),
    };
    assert_eq!(form.validate().photo_url, Some("Photo URL must be a valid URL"));
}

#[test]
fn patient_register_blank_photo_url_is_omitted() {
    let form = PatientRegisterForm {
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        password: "secret1".to_owned(),
        photo_url: "  ".to_owned(),
    };
    assert!(form.validate().is_valid());
    assert!(form.to_request().photo_url.is_none());
}

// =============================================================
// Doctor registration
// =============================================================

#[test]
fn doctor_register_requires_specialization() {
    let form = DoctorRegisterForm {
        name: "Helen Cho".to_owned(),
        email: "cho@example.com".to_owned(),
        password: "secret1".to_owned(),
        specialization: String::new(),
        photo_url: String::new(),
    };
    assert_eq!(
        form.validate().specialization,
        Some("Please select a specialization")
    );
}

#[test]
fn doctor_register_valid_inputs_pass() {
    let form = DoctorRegisterForm {
        name: "Helen Cho".to_owned(),
        email: "cho@example.com".to_owned(),
        password: "secret1".to_owned(),
        specialization: "Cardiology".to_owned(),
        photo_url: "https://example.com/cho.jpg".to_owned(),
    };
    assert!(form.validate().is_valid());
    let req = form.to_request();
    assert_eq!(req.specialization, "Cardiology");
    assert_eq!(req.photo_url.as_deref(), Some("https://example.com/cho.jpg"));
}
