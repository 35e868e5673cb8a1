//! Login and registration form state.

use api::{ApiError, Credentials, Fault, Registration};

pub const MISSING_CREDENTIALS: &str = "Please enter email and password";
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
pub const CANNOT_CONNECT: &str = "Cannot connect to server. Please try again.";
pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const PASSWORDS_DIFFER: &str = "Passwords do not match";
pub const MISSING_FIELDS: &str = "Please fill in all fields";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const REGISTRATION_SUCCEEDED: &str = "Registration successful! Redirecting...";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn credentials(&self) -> Result<Credentials, &'static str> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(MISSING_CREDENTIALS);
        }
        Ok(Credentials {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

/// Message shown under the login form for a failed attempt.
pub fn login_error_message(err: &ApiError) -> String {
    match err.fault() {
        Fault::Unauthorized => INVALID_CREDENTIALS.to_string(),
        Fault::Network => CANNOT_CONNECT.to_string(),
        _ => err
            .server_message()
            .unwrap_or(LOGIN_FAILED)
            .to_string(),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn registration(&self) -> Result<Registration, &'static str> {
        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        let email = self.email.trim();
        if first_name.is_empty() || last_name.is_empty() || email.is_empty() || self.password.is_empty() {
            return Err(MISSING_FIELDS);
        }
        if self.password != self.confirm_password {
            return Err(PASSWORDS_DIFFER);
        }
        Ok(Registration {
            email: email.to_string(),
            password: self.password.clone(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        })
    }
}

pub fn register_error_message(err: &ApiError) -> String {
    err.server_message()
        .unwrap_or(REGISTRATION_FAILED)
        .to_string()
}

/// Where to go after signing in. Only local paths are honoured, and never
/// back to the auth pages themselves.
pub fn resolve_return_url(raw: &str) -> String {
    let raw = raw.trim();
    let local = raw.starts_with('/') && !raw.starts_with("//") && !raw.contains('\\');
    let auth_page = raw.starts_with("/login") || raw.starts_with("/register");
    if local && !auth_page {
        raw.to_string()
    } else {
        "/".to_string()
    }
}
