//! # Filesystem-backed session storage
//!
//! [`FileStorage`] is the [`SessionStorage`] used by native builds, where there is
//! no `localStorage`. Each key is one file under the base directory:
//!
//! ```text
//! <base_dir>/
//! └── <key>.json
//! ```
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base, e.g.
//! `~/.local/share/bookshelf/` on Linux.

use std::path::PathBuf;

use crate::storage::{SessionStorage, StorageError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn item_path(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl SessionStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.item_path(key)).ok()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let write_err = |e: std::io::Error| StorageError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        };
        std::fs::create_dir_all(&self.base).map_err(write_err)?;
        std::fs::write(self.item_path(key), value).map_err(write_err)
    }

    fn remove_item(&self, key: &str) {
        let _ = std::fs::remove_file(self.item_path(key));
    }
}
