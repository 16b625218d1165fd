//! Read-only access to browser `localStorage`.
//!
//! Only string reads are needed: editor configuration is set by hand in the
//! devtools console, never written by the app. Requires a browser
//! environment; native builds always see an empty store.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

/// Read the raw string stored under `key`.
#[cfg(feature = "csr")]
pub fn read(key: &str) -> Option<String> {
    let Ok(Some(storage)) = web_sys::window()?.local_storage() else {
        return None;
    };
    match storage.get_item(key) {
        Ok(value) => value,
        Err(_) => None,
    }
}

/// Read the raw string stored under `key`.
#[cfg(not(feature = "csr"))]
pub fn read(_key: &str) -> Option<String> {
    None
}
