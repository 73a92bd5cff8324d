//! Credential token persistence in `localStorage`.
//!
//! Two fixed keys hold the two credential classes: the admin token (set by
//! admin login/registration) and the regular-user token (set by user login,
//! signup, or OTP verification). This is the only module that touches
//! browser storage; everything else goes through [`crate::state::session`].
//!
//! Writes from multiple tabs are not coordinated — last write wins.

/// Storage key for the admin credential token.
pub const ADMIN_TOKEN_KEY: &str = "admin_token";

/// Storage key for the regular-user credential token.
pub const USER_TOKEN_KEY: &str = "token";

/// Read a value from localStorage. Returns `None` outside the browser or
/// when storage is unavailable.
pub fn read(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write a value to localStorage. Silently does nothing outside the browser.
pub fn write(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove a key from localStorage. Silently does nothing outside the browser.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(key);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
