//! Layouts wrapping the routes: the app shell and the two access guards.

use dioxus::prelude::*;
use ui::guard::{public_only, require_auth};
use ui::{use_session, Access, Navbar};

use crate::Route;

fn redirect(nav: Navigator, access: Access) {
    match access {
        Access::Allow => {}
        Access::Login { return_url } => {
            nav.replace(Route::Login { return_url });
        }
        Access::Home => {
            nav.replace(Route::Home {});
        }
    }
}

#[component]
pub fn Shell() -> Element {
    rsx! {
        Navbar {}
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}

/// Pages for signed-in users. Re-checked whenever the session changes, so a
/// logout or an expired session sends the visitor to the login page.
#[component]
pub fn RequireAuth() -> Element {
    let session = use_session();
    let route = use_route::<Route>();
    let nav = use_navigator();

    let access = require_auth(session.is_authenticated(), &route.to_string());
    if access != Access::Allow {
        redirect(nav, access);
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}

/// Login and register. Checked on entry only, so the register page can show
/// its success message before moving on.
#[component]
pub fn PublicOnly() -> Element {
    let session = use_session();
    let nav = use_navigator();

    let access = public_only(session.peek_authenticated());
    if access != Access::Allow {
        redirect(nav, access);
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}

/// Unknown paths go home.
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("No route for /{}", segments.join("/"));
    nav.replace(Route::Home {});
    rsx! {}
}
