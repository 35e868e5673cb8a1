//! # HTTP fault classification
//!
//! Every failed request passes through the client's fault hook before the error
//! reaches the caller. The hook owner uses [`FaultAction::resolve`] to decide
//! whether the failure ends the session and which alert, if any, to show. The
//! error itself is always handed back to the caller afterwards.
//!
//! | Status | [`Fault`] | Action |
//! |--------|-----------|--------|
//! | 401 | `Unauthorized` | log out + [`SESSION_EXPIRED`], only while signed in; no alert on the login page |
//! | 403 | `Forbidden` | [`FORBIDDEN`] |
//! | 500 | `Server` | [`SERVER_ERROR`] |
//! | 0 | `Network` | [`NETWORK_ERROR`] |
//! | other | `Other` | none |

pub const SESSION_EXPIRED: &str = "Your session has expired. Please login again.";
pub const FORBIDDEN: &str = "You do not have permission to access this resource.";
pub const SERVER_ERROR: &str = "A server error occurred. Please try again later.";
pub const NETWORK_ERROR: &str =
    "Unable to connect to the server. Please check your internet connection.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    Unauthorized,
    Forbidden,
    Server,
    Network,
    Other,
}

impl Fault {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Fault::Unauthorized,
            403 => Fault::Forbidden,
            500 => Fault::Server,
            0 => Fault::Network,
            _ => Fault::Other,
        }
    }
}

/// What the interception point should do about a fault.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaultAction {
    pub logout: bool,
    pub alert: Option<&'static str>,
}

impl FaultAction {
    pub fn resolve(fault: Fault, authenticated: bool, on_login_page: bool) -> Self {
        match fault {
            // A 401 without a session is a failed login, which the form reports
            Fault::Unauthorized if authenticated => FaultAction {
                logout: true,
                alert: (!on_login_page).then_some(SESSION_EXPIRED),
            },
            Fault::Unauthorized => FaultAction::default(),
            Fault::Forbidden => FaultAction::alert(FORBIDDEN),
            Fault::Server => FaultAction::alert(SERVER_ERROR),
            Fault::Network => FaultAction::alert(NETWORK_ERROR),
            Fault::Other => FaultAction::default(),
        }
    }

    fn alert(message: &'static str) -> Self {
        FaultAction {
            logout: false,
            alert: Some(message),
        }
    }

    pub fn is_noop(&self) -> bool {
        !self.logout && self.alert.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert_eq!(Fault::from_status(401), Fault::Unauthorized);
        assert_eq!(Fault::from_status(403), Fault::Forbidden);
        assert_eq!(Fault::from_status(500), Fault::Server);
        assert_eq!(Fault::from_status(0), Fault::Network);
        assert_eq!(Fault::from_status(404), Fault::Other);
        // Only a plain 500 is treated as a server fault
        assert_eq!(Fault::from_status(502), Fault::Other);
    }

    #[test]
    fn test_expired_session_logs_out_with_notice() {
        let action = FaultAction::resolve(Fault::Unauthorized, true, false);
        assert!(action.logout);
        assert_eq!(action.alert, Some(SESSION_EXPIRED));
    }

    #[test]
    fn test_expired_session_on_login_page_is_silent() {
        let action = FaultAction::resolve(Fault::Unauthorized, true, true);
        assert!(action.logout);
        assert!(action.alert.is_none());
    }

    #[test]
    fn test_failed_login_does_not_log_out() {
        let action = FaultAction::resolve(Fault::Unauthorized, false, true);
        assert!(action.is_noop());
        let action = FaultAction::resolve(Fault::Unauthorized, false, false);
        assert!(action.is_noop());
    }

    #[test]
    fn test_alerts_regardless_of_session() {
        for authenticated in [true, false] {
            assert_eq!(
                FaultAction::resolve(Fault::Forbidden, authenticated, false).alert,
                Some(FORBIDDEN)
            );
            assert_eq!(
                FaultAction::resolve(Fault::Server, authenticated, false).alert,
                Some(SERVER_ERROR)
            );
            assert_eq!(
                FaultAction::resolve(Fault::Network, authenticated, true).alert,
                Some(NETWORK_ERROR)
            );
            assert!(!FaultAction::resolve(Fault::Network, authenticated, false).logout);
        }
        assert!(FaultAction::resolve(Fault::Other, true, false).is_noop());
    }
}
