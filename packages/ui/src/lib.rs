//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const BOOKSHELF_CSS: Asset = asset!("/assets/bookshelf.css");

mod navbar;
pub use navbar::Navbar;

mod auth;
pub use auth::{
    forget_user, persist_user, restore_user, use_api, use_session, LogoutButton, Session,
    SessionProvider,
};

pub mod auth_forms;
pub use auth_forms::{resolve_return_url, LoginForm, RegisterForm};

pub mod guard;
pub use guard::Access;

pub mod books;
pub use books::{use_book_list, BookList};

pub mod book_form;
pub use book_form::{BookForm, FormError};

pub mod isbn;
pub use isbn::{normalize_isbn, IsbnEntry};

pub mod scanner;
pub use scanner::{BarcodeScanner, ZXING_BROWSER_JS};

pub mod notify;

mod storage;
pub use storage::PlatformStorage;
mod time;
pub use time::sleep;
