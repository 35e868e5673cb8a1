use dioxus::prelude::*;

use crate::auth::{use_session, LogoutButton};
use crate::icons::{FaBook, FaUser};
use crate::Icon;

/// Top bar with the app title and the session controls.
#[component]
pub fn Navbar(#[props(default = "My Bookshelf".to_string())] title: String) -> Element {
    let session = use_session();
    let display_name = session.user().map(|user| user.display_name().to_string());

    rsx! {
        nav {
            class: "navbar",
            Link {
                class: "navbar-brand",
                to: "/",
                Icon { icon: FaBook, width: 18, height: 18 }
                span { "{title}" }
            }
            div {
                class: "navbar-actions",
                if let Some(name) = display_name {
                    span {
                        class: "navbar-user",
                        Icon { icon: FaUser, width: 12, height: 12 }
                        " {name}"
                    }
                    LogoutButton { class: "secondary" }
                } else {
                    Link { class: "navbar-link", to: "/login", "Login" }
                    Link { class: "navbar-link", to: "/register", "Register" }
                }
            }
        }
    }
}
