use super::*;

fn patient() -> User {
    User {
        id: "u1".to_owned(),
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        role: Role::Patient,
        photo_url: None,
        specialization: None,
    }
}

fn doctor() -> User {
    User {
        id: "u2".to_owned(),
        name: "Helen Cho".to_owned(),
        email: "cho@example.com".to_owned(),
        role: Role::Doctor,
        photo_url: None,
        specialization: Some("Cardiology".to_owned()),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_unauthenticated() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(!state.is_authenticated());
    assert!(state.role().is_none());
}

// =============================================================
// Login / logout transitions
// =============================================================

#[test]
fn login_enters_authenticated_state() {
    let mut state = AuthState::default();
    state.login(patient(), "jwt".to_owned());
    assert!(state.is_authenticated());
    assert_eq!(state.role(), Some(Role::Patient));
    assert_eq!(state.token.as_deref(), Some("jwt"));
}

#[test]
fn login_role_drives_dashboard_path() {
    let mut state = AuthState::default();
    state.login(doctor(), "jwt".to_owned());
    assert_eq!(state.role().map(Role::dashboard_path), Some("/doctor/dashboard"));

    state.login(patient(), "jwt".to_owned());
    assert_eq!(state.role().map(Role::dashboard_path), Some("/patient/dashboard"));
}

#[test]
fn logout_clears_user_and_token() {
    let mut state = AuthState::default();
    state.login(patient(), "jwt".to_owned());
    state.logout();
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
    assert!(state.token.is_none());
}

#[test]
fn user_without_token_is_not_authenticated() {
    let state = AuthState { user: Some(patient()), token: None };
    assert!(!state.is_authenticated());
}
