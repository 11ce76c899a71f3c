#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, User};

/// Session state tracking the current user and bearer token.
///
/// Transitions are synchronous and driven entirely by API call results:
/// unauthenticated until `login`, back to unauthenticated on `logout`.
/// The token is advisory client-side; the backend is the real boundary
/// and rejects stale tokens on every call.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl AuthState {
    /// Whether a session is present (shape-valid, not server-verified).
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// Role of the signed-in user, if any.
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// Enter the authenticated state after a successful login/register.
    pub fn login(&mut self, user: User, token: String) {
        self.user = Some(user);
        self.token = Some(token);
    }

    /// Drop the session. Storage cleanup is the caller's job.
    pub fn logout(&mut self) {
        self.user = None;
        self.token = None;
    }
}
