//! # Client configuration: `bookshelf.toml`
//!
//! The web binary embeds a `bookshelf.toml` at build time and parses it with
//! [`BookshelfConfig::from_toml`]. Every field has a default, so a missing or empty
//! file is equivalent to [`BookshelfConfig::default`].
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3000/api"
//!
//! [session]
//! refresh_interval_secs = 1800   # 0 disables the refresh timer
//!
//! [ui]
//! cover_placeholder = "https://via.placeholder.com/60x80?text=No+Cover"
//! ```

use serde::{Deserialize, Serialize};

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookshelfConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Backend location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every REST path is appended to, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Session refresh behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seconds between silent `POST /auth/refresh` calls. 0 disables the timer.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Image shown for books without a cover.
    #[serde(default = "default_cover_placeholder")]
    pub cover_placeholder: String,
}

fn default_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

// Backend tokens live for 60 minutes
fn default_refresh_interval() -> u64 {
    30 * 60
}

fn default_cover_placeholder() -> String {
    "https://via.placeholder.com/60x80?text=No+Cover".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            cover_placeholder: default_cover_placeholder(),
        }
    }
}

impl BookshelfConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "bookshelf.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Builder method to override the backend URL. Trailing slashes are dropped.
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.api.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Builder method to set the refresh interval.
    pub fn with_refresh_interval(mut self, secs: u64) -> Self {
        self.session.refresh_interval_secs = secs;
        self
    }

    /// `None` when the refresh timer is disabled.
    pub fn refresh_interval(&self) -> Option<std::time::Duration> {
        match self.session.refresh_interval_secs {
            0 => None,
            secs => Some(std::time::Duration::from_secs(secs)),
        }
    }
}
