//! # Session storage: a small key/value abstraction
//!
//! The browser keeps the signed-in user in `localStorage` so a reload can restore
//! the session without a round trip. [`SessionStorage`] hides where those bytes
//! live so the session logic runs unchanged against:
//!
//! | Backend | Platform |
//! |---------|----------|
//! | [`crate::LocalStorage`] | web (`wasm32` + `web` feature) |
//! | [`crate::FileStorage`] | native builds, one file per key |
//! | [`crate::MemoryStorage`] | tests |
//!
//! Values are strings. [`load_json`] and [`save_json`] layer serde on top.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Key holding the serialized session user.
pub const SESSION_USER_KEY: &str = "user";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to write key `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String key/value storage.
///
/// Reads never fail: a missing key and an unreadable backend both yield `None`.
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str);
}

/// Read and decode a JSON value. `Ok(None)` when the key is absent.
pub fn load_json<T, S>(storage: &S, key: &str) -> Result<Option<T>, serde_json::Error>
where
    T: DeserializeOwned,
    S: SessionStorage + ?Sized,
{
    match storage.get_item(key) {
        Some(raw) => serde_json::from_str(&raw).map(Some),
        None => Ok(None),
    }
}

/// Encode a value as JSON and store it under `key`.
pub fn save_json<T, S>(storage: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize,
    S: SessionStorage + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    storage.set_item(key, &raw)
}
