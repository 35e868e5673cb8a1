//! # User records for the authenticated session
//!
//! The backend and the browser hold the user in two slightly different shapes:
//!
//! ## [`UserInfo`]
//!
//! The wire record returned inside every auth response (`{ "user": { ... } }`) by
//! `POST /auth/login`, `/auth/register` and `/auth/refresh`. Keys are camelCase.
//!
//! ## [`AuthUser`]
//!
//! The session record kept in memory and persisted to `localStorage` under the
//! `user` key. It adds a derived `name` (`"{first} {last}"`) so views can render
//! it without recomputing. Built with [`AuthUser::from`].
//!
//! The session cookie itself never reaches Rust code: it is `httpOnly` and
//! travels with each credentialed request.

use serde::{Deserialize, Serialize};

/// User as returned by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Body of every successful auth response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub user: UserInfo,
}

pub type LoginResponse = AuthResponse;
pub type RegisterResponse = AuthResponse;

/// The signed-in user, as held by the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
}

impl AuthUser {
    /// Get display name, falling back to email if the name is blank.
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() {
            &self.email
        } else {
            name
        }
    }
}

impl From<UserInfo> for AuthUser {
    fn from(info: UserInfo) -> Self {
        Self {
            name: format!("{} {}", info.first_name, info.last_name),
            id: info.id,
            email: info.email,
            first_name: info.first_name,
            last_name: info.last_name,
        }
    }
}

/// Login form payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration form payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}
