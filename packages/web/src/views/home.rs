use api::Book;
use dioxus::prelude::*;
use store::BookshelfConfig;
use ui::icons::FaPlus;
use ui::views::{AddBookDialog, BooksTable, EditBookDialog, ErrorAlert, ModalOverlay};
use ui::{use_book_list, Icon};

/// The collection page: the books table plus the add and edit modals.
#[component]
pub fn Home() -> Element {
    let config = use_context::<BookshelfConfig>();
    let placeholder = config.ui.cover_placeholder.clone();
    let mut books = use_book_list();
    let mut adding = use_signal(|| false);
    let mut selected = use_signal(|| Option::<Book>::None);

    let state = books();

    rsx! {
        div {
            class: "home",
            div {
                class: "home-header",
                h1 { "My Books" }
                button {
                    class: "primary",
                    onclick: move |_| adding.set(true),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " Add Book"
                }
            }

            if let Some(message) = state.error.clone() {
                ErrorAlert {
                    message,
                    on_dismiss: move |_| books.write().dismiss_error(),
                }
            }

            if state.loading {
                div { class: "loading", "Loading books..." }
            } else {
                BooksTable {
                    books: state.books.clone(),
                    placeholder: placeholder.clone(),
                    on_select: move |book: Book| selected.set(Some(book)),
                }
            }
        }

        if adding() {
            ModalOverlay {
                title: "Add Book by ISBN",
                on_close: move |_| adding.set(false),
                AddBookDialog {
                    on_added: move |book: Book| books.write().insert(book),
                    on_close: move |_| adding.set(false),
                }
            }
        }

        if let Some(book) = selected() {
            ModalOverlay {
                title: book.title.clone(),
                on_close: move |_| selected.set(None),
                EditBookDialog {
                    book,
                    placeholder,
                    on_saved: move |book: Book| {
                        if !books.write().replace(book) {
                            tracing::warn!("Saved book is no longer in the list");
                        }
                        selected.set(None);
                    },
                    on_deleted: move |id: String| {
                        let removed = books.write().remove(&id);
                        tracing::info!(id = %id, removed, "Deleted book");
                        selected.set(None);
                    },
                }
            }
        }
    }
}
