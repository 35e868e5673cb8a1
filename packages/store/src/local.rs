//! # Browser `localStorage` backend
//!
//! [`LocalStorage`] is the [`SessionStorage`] used on the web platform. It looks up
//! `window.localStorage` on every call instead of holding a `web_sys::Storage`,
//! which keeps the type `Clone` and cheap to pass around. Access can fail in
//! private browsing modes, in which case reads return `None` and writes report
//! [`StorageError::Unavailable`].

use crate::storage::{SessionStorage, StorageError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}
