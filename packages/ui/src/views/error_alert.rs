use dioxus::prelude::*;

/// Inline error banner with a dismiss button.
#[component]
pub fn ErrorAlert(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "error-alert",
            role: "alert",
            span { "{message}" }
            button {
                class: "error-alert-dismiss",
                onclick: move |_| on_dismiss.call(()),
                "Dismiss"
            }
        }
    }
}
