use std::time::Duration;

use api::Book;
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::isbn::IsbnEntry;
use crate::scanner::BarcodeScanner;
use crate::time::sleep;

const SCANNER_START_DELAY: Duration = Duration::from_millis(100);
const SCAN_MESSAGE_TTL: Duration = Duration::from_millis(2500);

/// Dialog body for adding a book by ISBN, typed or scanned.
///
/// The dialog calls the backend itself and emits `on_added` with the created
/// book, followed by `on_close`. On failure it stays open with an error.
#[component]
pub fn AddBookDialog(on_added: EventHandler<Book>, on_close: EventHandler<()>) -> Element {
    let client = use_api();
    let mut entry = use_signal(IsbnEntry::default);
    let mut scanner_enabled = use_signal(|| false);

    // Give the modal a moment to lay out before grabbing the camera
    use_future(move || async move {
        sleep(SCANNER_START_DELAY).await;
        scanner_enabled.set(true);
    });

    let submit = move || {
        let Some(isbn) = entry.write().begin() else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            let result = client.add_book_by_isbn(&isbn).await;
            let added = entry.write().settle(result);
            if let Some(book) = added {
                tracing::info!(isbn = %isbn, "Added book {:?}", book.title);
                on_added.call(book);
                on_close.call(());
            }
        });
    };

    let mut submit_typed = submit.clone();
    let mut submit_scanned = submit;

    let on_scan = move |code: String| {
        if !entry.write().scanned(code) {
            return;
        }
        spawn(async move {
            sleep(SCAN_MESSAGE_TTL).await;
            entry.write().clear_scan_message();
        });
        submit_scanned();
    };

    let state = entry();

    rsx! {
        form {
            class: "add-book-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                submit_typed();
            },

            if let Some(err) = state.error.clone() {
                div { class: "form-error", "{err}" }
            }

            label { r#for: "isbn-input", "ISBN" }
            input {
                id: "isbn-input",
                r#type: "text",
                "inputmode": "numeric",
                placeholder: "978-0-441-17271-9",
                value: "{state.input}",
                disabled: state.processing,
                oninput: move |evt: FormEvent| entry.write().input = evt.value(),
            }

            if scanner_enabled() {
                div {
                    class: "scanner",
                    BarcodeScanner { on_scan }
                    if let Some(message) = state.scan_message.clone() {
                        div { class: "scan-success", "{message}" }
                    }
                }
            }

            div {
                class: "form-actions",
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: state.processing,
                    if state.processing { "Adding..." } else { "Add Book" }
                }
                button {
                    class: "secondary",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
            }
        }
    }
}
