//! Route access rules shared by the guard layouts of the app.

/// Outcome of checking a route against the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Allow,
    /// Send the visitor to the sign-in page, remembering where they were headed.
    Login { return_url: String },
    /// Send the visitor to the home page.
    Home,
}

/// Pages behind sign-in.
pub fn require_auth(authenticated: bool, requested: &str) -> Access {
    if authenticated {
        Access::Allow
    } else {
        Access::Login {
            return_url: requested.to_string(),
        }
    }
}

/// The login and register pages, which signed-in users have no use for.
pub fn public_only(authenticated: bool) -> Access {
    if authenticated {
        Access::Home
    } else {
        Access::Allow
    }
}
