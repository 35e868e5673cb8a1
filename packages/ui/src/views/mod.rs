mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod error_alert;
pub use error_alert::ErrorAlert;

mod books_table;
pub use books_table::BooksTable;

mod add_book_dialog;
pub use add_book_dialog::AddBookDialog;

mod edit_book_dialog;
pub use edit_book_dialog::EditBookDialog;
