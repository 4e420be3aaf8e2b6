//! Sign-in page component.

use crate::frontend::services::context::AuthState;
use dioxus::{events::KeyboardEvent, prelude::*};
use dioxus_router::use_navigator;

#[component]
pub fn Auth() -> Element {
    let nav = use_navigator();
    let auth = use_context::<AuthState>();
    let mut username = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    // Already signed in, nothing to ask
    use_effect(move || {
        if *auth.is_authenticated.read() {
            nav.replace("/home");
        }
    });

    let submit = move || {
        let value = username.read().trim().to_string();
        let mut auth = auth;
        let nav = nav;
        let mut error = error;
        spawn(async move {
            match auth.login(value).await {
                Ok(()) => {
                    nav.replace("/home");
                }
                Err(message) => error.set(Some(message)),
            }
        });
    };

    let on_keydown = move |e: KeyboardEvent| {
        if e.key() == Key::Enter {
            submit();
        }
    };

    rsx! {
        main {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 {
                    class: "auth-title",
                    "Welcome to Statusdeck"
                }
                p {
                    class: "auth-hint",
                    "Pick a username to get started."
                }
                input {
                    class: "auth-input",
                    r#type: "text",
                    value: "{username()}",
                    maxlength: "16",
                    placeholder: "Enter username...",
                    autofocus: true,
                    oninput: move |e| {
                        username.set(e.value().trim().to_string());
                        error.set(None);
                    },
                    onkeydown: on_keydown,
                }
                button {
                    class: "auth-button",
                    onclick: move |_| submit(),
                    "Sign in"
                }
                if let Some(message) = error() {
                    div {
                        class: "auth-error",
                        "{message}"
                    }
                }
            }
        }
    }
}
