//! Registration page view with email/password form.

use std::time::Duration;

use dioxus::prelude::*;
use ui::auth_forms::{register_error_message, REGISTRATION_SUCCEEDED};
use ui::{sleep, use_session, RegisterForm};

use crate::Route;

const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Register page component.
#[component]
pub fn Register() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut form = use_signal(RegisterForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<&'static str>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() || success().is_some() {
            return;
        }
        let registration = match form.read().registration() {
            Ok(registration) => registration,
            Err(message) => {
                error.set(Some(message.to_string()));
                return;
            }
        };

        let session = session.clone();
        error.set(None);
        loading.set(true);
        spawn(async move {
            match session.register(registration).await {
                Ok(_) => {
                    success.set(Some(REGISTRATION_SUCCEEDED));
                    loading.set(false);
                    sleep(REDIRECT_DELAY).await;
                    nav.replace(Route::Home {});
                }
                Err(e) => {
                    tracing::error!("Registration failed: {e}");
                    error.set(Some(register_error_message(&e)));
                    loading.set(false);
                }
            }
        });
    };

    let draft = form();

    rsx! {
        div {
            class: "auth-page",
            h1 { "Create an account" }

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }
            if let Some(message) = success() {
                div { class: "form-success", "{message}" }
            }

            form {
                class: "auth-form",
                onsubmit: handle_register,

                label { r#for: "register-first-name", "First name" }
                input {
                    id: "register-first-name",
                    r#type: "text",
                    value: "{draft.first_name}",
                    oninput: move |evt: FormEvent| form.write().first_name = evt.value(),
                }

                label { r#for: "register-last-name", "Last name" }
                input {
                    id: "register-last-name",
                    r#type: "text",
                    value: "{draft.last_name}",
                    oninput: move |evt: FormEvent| form.write().last_name = evt.value(),
                }

                label { r#for: "register-email", "Email" }
                input {
                    id: "register-email",
                    r#type: "email",
                    autocomplete: "email",
                    value: "{draft.email}",
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }

                label { r#for: "register-password", "Password" }
                input {
                    id: "register-password",
                    r#type: "password",
                    autocomplete: "new-password",
                    value: "{draft.password}",
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }

                label { r#for: "register-confirm-password", "Confirm password" }
                input {
                    id: "register-confirm-password",
                    r#type: "password",
                    autocomplete: "new-password",
                    value: "{draft.confirm_password}",
                    oninput: move |evt: FormEvent| form.write().confirm_password = evt.value(),
                }

                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Register" }
                }
            }

            p {
                class: "auth-switch",
                "Already registered? "
                Link { to: Route::Login { return_url: String::new() }, "Login" }
            }
        }
    }
}
