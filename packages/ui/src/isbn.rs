//! # Add-by-ISBN entry state
//!
//! The add dialog holds an [`IsbnEntry`]. A submission, typed or scanned, goes
//! through three steps:
//!
//! 1. [`IsbnEntry::begin`] normalizes the input and takes the in-flight guard.
//!    It returns `None` for blank input or while another add is running.
//! 2. The caller sends `POST /books/isbn/:isbn`.
//! 3. [`IsbnEntry::settle`] releases the guard. On success it hands back the book,
//!    which the caller appends before closing the dialog. On failure the list is
//!    left alone and the entry carries [`ADD_FAILED`].

use api::{ApiError, Book};

pub const ADD_FAILED: &str = "Book not found or could not be added.";
pub const SCAN_SUCCEEDED: &str = "Successfully scanned!";

/// Strip whitespace and hyphens, e.g. `"978-0-441-17271-9"` -> `"9780441172719"`.
/// `None` when nothing is left.
pub fn normalize_isbn(raw: &str) -> Option<String> {
    let isbn: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    (!isbn.is_empty()).then_some(isbn)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct IsbnEntry {
    pub input: String,
    pub processing: bool,
    pub error: Option<String>,
    pub scan_message: Option<String>,
}

impl IsbnEntry {
    /// Start an add. Returns the ISBN to submit.
    pub fn begin(&mut self) -> Option<String> {
        if self.processing {
            return None;
        }
        let isbn = normalize_isbn(&self.input)?;
        self.processing = true;
        self.error = None;
        Some(isbn)
    }

    /// Finish an add. `Some(book)` means append it and close the dialog.
    pub fn settle(&mut self, result: Result<Book, ApiError>) -> Option<Book> {
        self.processing = false;
        match result {
            Ok(book) => {
                self.input.clear();
                Some(book)
            }
            Err(err) => {
                tracing::error!("Error adding book: {err}");
                self.error = Some(ADD_FAILED.to_string());
                None
            }
        }
    }

    /// Accept a scanned code into the input. Ignored while an add is running.
    pub fn scanned(&mut self, code: String) -> bool {
        if self.processing {
            return false;
        }
        self.input = code;
        self.scan_message = Some(SCAN_SUCCEEDED.to_string());
        true
    }

    pub fn clear_scan_message(&mut self) {
        self.scan_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::books::BookList;

    fn dune() -> Book {
        Book {
            id: Some("b-9".to_string()),
            ..Book::new("Dune", "Frank Herbert")
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize_isbn(" 978-0-441-17271-9 ").as_deref(),
            Some("9780441172719")
        );
        assert_eq!(normalize_isbn("0 441 17271 7").as_deref(), Some("0441172717"));
        assert!(normalize_isbn("  - ").is_none());
        assert!(normalize_isbn("").is_none());
    }

    #[test]
    fn test_blank_input_does_nothing() {
        let mut entry = IsbnEntry::default();
        entry.input = "   ".to_string();
        assert!(entry.begin().is_none());
        assert!(!entry.processing);
    }

    #[test]
    fn test_reentry_is_ignored() {
        let mut entry = IsbnEntry {
            input: "9780441172719".to_string(),
            ..IsbnEntry::default()
        };
        assert_eq!(entry.begin().as_deref(), Some("9780441172719"));
        assert!(entry.begin().is_none());
        assert!(!entry.scanned("9780000000002".to_string()));
        assert_eq!(entry.input, "9780441172719");
    }

    #[test]
    fn test_successful_add_appends_and_closes() {
        let mut list = BookList::default();
        let mut entry = IsbnEntry {
            input: "9780441172719".to_string(),
            ..IsbnEntry::default()
        };
        entry.begin().unwrap();

        let added = entry.settle(Ok(dune()));
        assert!(added.is_some());
        if let Some(book) = added {
            list.insert(book);
        }
        assert_eq!(list.books, vec![dune()]);
        assert!(entry.input.is_empty());
        assert!(!entry.processing);
        assert!(entry.error.is_none());
    }

    #[test]
    fn test_failed_add_leaves_list_and_reports() {
        let mut list = BookList {
            books: vec![dune()],
            ..BookList::default()
        };
        let before = list.clone();
        let mut entry = IsbnEntry {
            input: "0000000000".to_string(),
            ..IsbnEntry::default()
        };
        entry.begin().unwrap();

        let added = entry.settle(Err(ApiError::Status {
            status: 404,
            message: Some("Not found".to_string()),
        }));
        assert!(added.is_none());
        if let Some(book) = added {
            list.insert(book);
        }
        assert_eq!(list, before);
        assert_eq!(entry.error.as_deref(), Some(ADD_FAILED));
        // Input stays so the user can correct it
        assert_eq!(entry.input, "0000000000");
        assert!(!entry.processing);
    }

    #[test]
    fn test_scan_fills_input() {
        let mut entry = IsbnEntry::default();
        assert!(entry.scanned("9780441172719".to_string()));
        assert_eq!(entry.input, "9780441172719");
        assert_eq!(entry.scan_message.as_deref(), Some(SCAN_SUCCEEDED));
        entry.clear_scan_message();
        assert!(entry.scan_message.is_none());
    }
}
