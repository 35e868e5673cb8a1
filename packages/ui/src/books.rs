//! # Book list view-model
//!
//! [`BookList`] is the in-memory copy of the user's collection. It is loaded once
//! on mount and afterwards mirrors each successful backend call locally instead
//! of re-fetching:
//!
//! | Backend call | Local update |
//! |--------------|--------------|
//! | `POST /books/isbn/:isbn` | [`BookList::insert`] appends the returned book |
//! | `PUT /books/:id` | [`BookList::replace`] swaps the entry with the same id |
//! | `DELETE /books/:id` | [`BookList::remove`] drops the entries with that id |

use api::{ApiError, Book};
use dioxus::prelude::*;

use crate::auth::use_api;

pub const LOAD_FAILED: &str = "Failed to load books. Please try again.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookList {
    pub books: Vec<Book>,
    pub loading: bool,
    /// Banner message, cleared on dismiss or reload.
    pub error: Option<String>,
}

impl BookList {
    pub fn start_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_loading(&mut self, result: Result<Vec<Book>, ApiError>) {
        self.loading = false;
        match result {
            Ok(books) => self.books = books,
            Err(err) => {
                tracing::error!("Error fetching books: {err}");
                // 401s are handled by the session's fault hook
                if !err.is_unauthorized() {
                    self.error = Some(LOAD_FAILED.to_string());
                }
            }
        }
    }

    pub fn insert(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Replace the entry whose id matches `book.id`. Returns whether one matched.
    pub fn replace(&mut self, book: Book) -> bool {
        let Some(id) = book.id.as_deref() else {
            return false;
        };
        match self.books.iter_mut().find(|b| b.id.as_deref() == Some(id)) {
            Some(slot) => {
                *slot = book;
                true
            }
            None => false,
        }
    }

    /// Remove every entry with the given id. Returns how many were removed.
    pub fn remove(&mut self, id: &str) -> usize {
        let before = self.books.len();
        self.books.retain(|b| b.id.as_deref() != Some(id));
        before - self.books.len()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

/// Book list state for the current view, loaded from the backend on mount.
pub fn use_book_list() -> Signal<BookList> {
    let client = use_api();
    let mut list = use_signal(BookList::default);

    let _loader = use_resource(move || {
        let client = client.clone();
        async move {
            list.write().start_loading();
            let result = client.list_books().await;
            list.write().finish_loading(result);
        }
    });

    list
}
