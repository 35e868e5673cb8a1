//! Data models exchanged with the backend.

pub mod book;
pub mod user;

pub use book::Book;
pub use user::{
    AuthResponse, AuthUser, Credentials, LoginResponse, RegisterResponse, Registration, UserInfo,
};
