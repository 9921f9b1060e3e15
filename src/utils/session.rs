//! Persisted session store.
//!
//! Two fixed keys survive page reloads: the bearer token and the
//! JSON-encoded user profile. They are written together on login and
//! removed together on logout; the gateway reads the token back on every
//! call instead of caching it. Backed by `localStorage` in the browser
//! and by a thread-local map on host targets so the session pipeline can
//! be exercised in native tests.

use crate::api::types::SessionUser;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "hrms_user";

#[cfg(target_arch = "wasm32")]
mod backend {
    use web_sys::Storage;

    fn local_storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    pub fn get_item(key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), String> {
        local_storage()
            .ok_or_else(|| "No localStorage".to_string())?
            .set_item(key, value)
            .map_err(|_| "Failed to write localStorage".to_string())
    }

    pub fn remove_item(key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get_item(key: &str) -> Option<String> {
        STORE.with(|store| store.borrow().get(key).cloned())
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), String> {
        STORE.with(|store| {
            store.borrow_mut().insert(key.to_string(), value.to_string());
        });
        Ok(())
    }

    pub fn remove_item(key: &str) {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
    }
}

pub fn persist(token: &str, user: &SessionUser) -> Result<(), String> {
    let profile = serde_json::to_string(user)
        .map_err(|_| "Failed to serialize user profile".to_string())?;
    backend::set_item(TOKEN_KEY, token)?;
    backend::set_item(USER_KEY, &profile)
}

/// Restores the persisted session, requiring both keys. A missing key or
/// a profile that no longer deserializes reads as no session at all.
pub fn load() -> Option<SessionUser> {
    let token = backend::get_item(TOKEN_KEY)?;
    if token.is_empty() {
        return None;
    }
    let profile = backend::get_item(USER_KEY)?;
    serde_json::from_str(&profile).ok()
}

/// Read-through accessor used by the request gateway on every call, so a
/// logout in another tab sharing the store is picked up immediately.
pub fn stored_token() -> Option<String> {
    backend::get_item(TOKEN_KEY)
}

pub fn is_active() -> bool {
    stored_token().is_some()
}

pub fn clear() {
    backend::remove_item(TOKEN_KEY);
    backend::remove_item(USER_KEY);
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod testing {
    use super::*;

    pub fn reset() {
        clear();
    }

    pub fn seed_raw(token: &str, profile_json: &str) {
        let _ = backend::set_item(TOKEN_KEY, token);
        let _ = backend::set_item(USER_KEY, profile_json);
    }

    pub fn seed_token_only(token: &str) {
        let _ = backend::set_item(TOKEN_KEY, token);
    }
}
