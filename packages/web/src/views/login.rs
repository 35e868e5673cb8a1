//! Login page view with an email/password form.

use dioxus::prelude::*;
use ui::auth_forms::login_error_message;
use ui::{resolve_return_url, use_session, LoginForm};

use crate::Route;

/// Login page component. `return_url` is where the visitor was headed.
#[component]
pub fn Login(return_url: String) -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut form = use_signal(LoginForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let credentials = match form.read().credentials() {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message.to_string()));
                return;
            }
        };

        let session = session.clone();
        let target = resolve_return_url(&return_url);
        error.set(None);
        loading.set(true);
        spawn(async move {
            match session.login(credentials).await {
                Ok(_) => {
                    let route = target.parse::<Route>().unwrap_or(Route::Home {});
                    nav.replace(route);
                }
                Err(e) => {
                    tracing::error!("Login failed: {e}");
                    error.set(Some(login_error_message(&e)));
                }
            }
            loading.set(false);
        });
    };

    let draft = form();

    rsx! {
        div {
            class: "auth-page",
            h1 { "Sign in" }

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                label { r#for: "login-email", "Email" }
                input {
                    id: "login-email",
                    r#type: "email",
                    autocomplete: "email",
                    value: "{draft.email}",
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }

                label { r#for: "login-password", "Password" }
                input {
                    id: "login-password",
                    r#type: "password",
                    autocomplete: "current-password",
                    value: "{draft.password}",
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }

                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Login" }
                }
            }

            p {
                class: "auth-switch",
                "No account yet? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
