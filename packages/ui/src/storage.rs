//! Shared session storage constructor for all platforms.
//!
//! Returns the [`store::SessionStorage`] the session persists the signed-in user to:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorage`]
//! - **Native**: one JSON file per key via [`store::FileStorage`]

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = store::LocalStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStorage = store::FileStorage;

/// Create the platform-appropriate storage.
///
/// On native builds the files live under `<data_dir>/bookshelf/`.
pub fn make_storage() -> PlatformStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("bookshelf");
        store::FileStorage::new(base)
    }
}
