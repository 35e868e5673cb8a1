use api::Book;
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::book_form::{is_category_commit_key, BookForm};
use crate::icons::{FaPen, FaTrash};
use crate::notify;
use crate::Icon;

const SAVE_FAILED: &str = "Could not save changes. Please try again.";
const DELETE_FAILED: &str = "Could not delete this book. Please try again.";
const CONFIRM_DELETE: &str = "Are you sure you want to delete this book?";

/// Dialog body showing one book, with an edit mode and delete.
///
/// Emits `on_saved` with the updated book after `PUT /books/:id` succeeds, and
/// `on_deleted` with the id after `DELETE /books/:id` succeeds.
#[component]
pub fn EditBookDialog(
    book: Book,
    placeholder: String,
    on_saved: EventHandler<Book>,
    on_deleted: EventHandler<String>,
) -> Element {
    let client = use_api();
    let original = book.clone();
    let mut form = use_signal(move || BookForm::from_book(&original));
    let mut editing = use_signal(|| false);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let save = {
        let book = book.clone();
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let Some(id) = book.id.clone() else {
                return;
            };
            let updated = match form.read().apply(&book) {
                Ok(updated) => updated,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            let client = client.clone();
            busy.set(true);
            error.set(None);
            spawn(async move {
                match client.update_book(&id, &updated).await {
                    Ok(()) => on_saved.call(updated),
                    Err(e) => {
                        tracing::error!("Update failed: {e}");
                        error.set(Some(SAVE_FAILED.to_string()));
                    }
                }
                busy.set(false);
            });
        }
    };

    let delete = {
        let id = book.id.clone();
        move |_| {
            let Some(id) = id.clone() else {
                return;
            };
            if !notify::confirm(CONFIRM_DELETE) {
                return;
            }
            let client = client.clone();
            busy.set(true);
            spawn(async move {
                match client.delete_book(&id).await {
                    Ok(()) => on_deleted.call(id),
                    Err(e) => {
                        tracing::error!("Delete failed: {e}");
                        error.set(Some(DELETE_FAILED.to_string()));
                        busy.set(false);
                    }
                }
            });
        }
    };

    let cover = book.cover_url.clone().unwrap_or(placeholder);
    let draft = form();

    rsx! {
        div {
            class: "book-detail",

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            div {
                class: "book-detail-body",
                img { class: "book-cover", src: "{cover}", alt: "Cover of {book.title}" }

                if editing() {
                    form {
                        class: "edit-book-form",
                        onsubmit: save,

                        label { r#for: "edit-title", "Title" }
                        input {
                            id: "edit-title",
                            r#type: "text",
                            required: true,
                            value: "{draft.title}",
                            oninput: move |evt: FormEvent| form.write().title = evt.value(),
                        }

                        label { r#for: "edit-author", "Author" }
                        input {
                            id: "edit-author",
                            r#type: "text",
                            required: true,
                            value: "{draft.author}",
                            oninput: move |evt: FormEvent| form.write().author = evt.value(),
                        }

                        label { r#for: "edit-description", "Description" }
                        textarea {
                            id: "edit-description",
                            rows: 4,
                            value: "{draft.description}",
                            oninput: move |evt: FormEvent| form.write().description = evt.value(),
                        }

                        label { r#for: "edit-cover", "Cover URL" }
                        input {
                            id: "edit-cover",
                            r#type: "url",
                            value: "{draft.cover_url}",
                            oninput: move |evt: FormEvent| form.write().cover_url = evt.value(),
                        }

                        label { r#for: "edit-category", "Categories" }
                        div {
                            class: "tag-input",
                            for category in draft.categories.clone() {
                                span {
                                    key: "{category}",
                                    class: "tag",
                                    "{category}"
                                    button {
                                        class: "tag-remove",
                                        r#type: "button",
                                        title: "Remove",
                                        onclick: {
                                            let category = category.clone();
                                            move |_| form.write().remove_category(&category)
                                        },
                                        "×"
                                    }
                                }
                            }
                            input {
                                id: "edit-category",
                                r#type: "text",
                                placeholder: "Type and press Enter",
                                value: "{draft.category_input}",
                                oninput: move |evt: FormEvent| form.write().category_input = evt.value(),
                                onkeydown: move |evt: KeyboardEvent| {
                                    if is_category_commit_key(&evt.key().to_string()) {
                                        evt.prevent_default();
                                        form.write().commit_category_input();
                                    }
                                },
                            }
                        }

                        div {
                            class: "form-actions",
                            button {
                                class: "primary",
                                r#type: "submit",
                                disabled: busy(),
                                if busy() { "Saving..." } else { "Save" }
                            }
                            button {
                                class: "secondary",
                                r#type: "button",
                                onclick: move |_| editing.set(false),
                                "Cancel"
                            }
                        }
                    }
                } else {
                    div {
                        class: "book-summary",
                        h3 { "{book.title}" }
                        p { class: "book-author", "{book.author}" }
                        if let Some(date) = book.published_date.clone() {
                            p { class: "book-published", "Published {date}" }
                        }
                        if let Some(description) = book.description.clone() {
                            p { class: "book-description", "{description}" }
                        }
                        div {
                            for category in book.categories.iter() {
                                span { key: "{category}", class: "tag", "{category}" }
                            }
                        }
                        div {
                            class: "form-actions",
                            button {
                                class: "primary",
                                onclick: move |_| editing.set(true),
                                Icon { icon: FaPen, width: 12, height: 12 }
                                " Edit"
                            }
                            button {
                                class: "danger",
                                disabled: busy(),
                                onclick: delete,
                                Icon { icon: FaTrash, width: 12, height: 12 }
                                if busy() { " Deleting..." } else { " Delete" }
                            }
                        }
                    }
                }
            }
        }
    }
}
