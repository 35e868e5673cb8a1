//! # API crate: typed client for the Bookshelf REST backend
//!
//! Everything the frontend knows about the backend lives here. The crate does
//! not depend on Dioxus, so its logic is testable natively.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: credentialed requests for the auth and books endpoints, plus the fault hook |
//! | [`error`] | [`ApiError`]: status, network, decode and request failures |
//! | [`fault`] | [`Fault`] classification by HTTP status and the [`FaultAction`] the interception point takes |
//! | [`models`] | [`Book`], [`UserInfo`], [`AuthUser`] and the request payloads |

pub mod client;
pub mod error;
pub mod fault;
pub mod models;

pub use client::{ApiClient, FaultHook};
pub use error::ApiError;
pub use fault::{Fault, FaultAction};
pub use models::{
    AuthResponse, AuthUser, Book, Credentials, LoginResponse, RegisterResponse, Registration,
    UserInfo,
};
