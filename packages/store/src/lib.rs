pub mod config;
pub mod storage;

mod file_store;
pub use file_store::FileStorage;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use config::BookshelfConfig;
pub use storage::{load_json, save_json, SessionStorage, StorageError, SESSION_USER_KEY};
