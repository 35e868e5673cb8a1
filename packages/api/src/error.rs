//! Errors returned by [`crate::ApiClient`].

use crate::fault::Fault;

/// A failed backend call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("{}", .message.as_deref().unwrap_or("request failed"))]
    Status { status: u16, message: Option<String> },
    /// The backend could not be reached.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered 2xx but the body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// The request could not be built, e.g. a malformed base URL.
    #[error("invalid request: {0}")]
    Request(String),
}

impl ApiError {
    /// HTTP status of the failure, 0 when the backend could not be reached.
    /// `None` when the failure was local: the request could not be built or
    /// the body could not be read.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Network(_) => Some(0),
            ApiError::Decode(_) | ApiError::Request(_) => None,
        }
    }

    /// Message supplied by the backend in a `{ "message": ... }` body.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn fault(&self) -> Fault {
        match self {
            ApiError::Status { status, .. } => Fault::from_status(*status),
            ApiError::Network(_) => Fault::Network,
            ApiError::Decode(_) | ApiError::Request(_) => Fault::Other,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.fault() == Fault::Unauthorized
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status {
                status: status.as_u16(),
                message: None,
            }
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
