use api::Book;
use dioxus::prelude::*;

/// The collection as a table. Clicking a row selects the book.
#[component]
pub fn BooksTable(books: Vec<Book>, placeholder: String, on_select: EventHandler<Book>) -> Element {
    if books.is_empty() {
        return rsx! {
            div {
                class: "books-empty",
                p { "No books yet. Add one by ISBN to get started." }
            }
        };
    }

    rsx! {
        table {
            class: "books-table",
            thead {
                tr {
                    th { "Cover" }
                    th { "Title" }
                    th { "Author" }
                    th { "Categories" }
                }
            }
            tbody {
                for (row, book) in books.into_iter().enumerate().map(|(i, b)| (row_key(&b, i), b)) {
                    BookRow {
                        key: "{row}",
                        book,
                        placeholder: placeholder.clone(),
                        on_select,
                    }
                }
            }
        }
    }
}

fn row_key(book: &Book, index: usize) -> String {
    book.id.clone().unwrap_or_else(|| format!("unsaved-{index}"))
}

#[component]
fn BookRow(book: Book, placeholder: String, on_select: EventHandler<Book>) -> Element {
    let cover = book.cover_url.clone().unwrap_or(placeholder);
    let selected = book.clone();

    rsx! {
        tr {
            class: "books-row",
            onclick: move |_| on_select.call(selected.clone()),
            td {
                img {
                    class: "book-cover-thumb",
                    src: "{cover}",
                    alt: "Cover of {book.title}",
                }
            }
            td { class: "book-title", "{book.title}" }
            td { "{book.author}" }
            td {
                for category in book.categories.iter() {
                    span { key: "{category}", class: "tag", "{category}" }
                }
            }
        }
    }
}
