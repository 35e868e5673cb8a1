//! Blocking browser dialogs and location lookups.
//!
//! Native builds have no `window`: alerts are logged and confirmations answer yes.

/// Show a blocking alert.
pub fn alert(message: &str) {
    tracing::warn!("{message}");
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

/// Ask the user to confirm an action.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("Auto-confirming: {message}");
        true
    }
}

/// Path of the page currently shown, e.g. `"/login"`.
pub fn current_path() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "/".to_string()
    }
}

pub fn on_login_page() -> bool {
    is_login_path(&current_path())
}

fn is_login_path(path: &str) -> bool {
    path.contains("/login")
}
