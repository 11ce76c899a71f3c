//! Session persistence in `localStorage`.
//!
//! Stores the bearer token and a JSON snapshot of the signed-in user under
//! two keys, rehydrated once at application start. Malformed stored JSON is
//! treated as no session. Requires a browser environment; server builds get
//! no-op fallbacks.

use crate::net::types::User;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "medicare_token";
#[cfg(feature = "hydrate")]
const USER_KEY: &str = "medicare_user";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the persisted bearer token, if any. Called per outgoing request.
pub fn token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Load the persisted session. Both keys must be present and the user
/// snapshot must still decode; otherwise the session is treated as absent.
pub fn load() -> Option<(User, String)> {
    #[cfg(feature = "hydrate")]
    {
        let storage = storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
        let raw_user = storage.get_item(USER_KEY).ok().flatten()?;
        let user = serde_json::from_str::<User>(&raw_user).ok()?;
        Some((user, token))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the session after a successful login or registration.
pub fn save(user: &User, token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
            if let Ok(json) = serde_json::to_string(user) {
                let _ = storage.set_item(USER_KEY, &json);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user, token);
    }
}

/// Drop the persisted session on logout.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}
