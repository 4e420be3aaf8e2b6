//! Status board page with authentication guard.

use crate::frontend::components::status_badge::StatusBadge;
use crate::frontend::services::context::AuthState;
use crate::frontend::services::status::StatusBoard;
use dioxus::prelude::*;
use dioxus_router::navigator;

#[component]
pub fn Home() -> Element {
    let nav = navigator();
    let auth = use_context::<AuthState>();
    let mut board = use_signal(|| None::<StatusBoard>);

    use_future(move || async move {
        board.set(Some(StatusBoard::load().await));
    });

    if !(auth.is_authenticated)() {
        nav.replace("/auth");
        return rsx! { div {} };
    }

    let rows = board.read().as_ref().map(|board| {
        board
            .services
            .iter()
            .map(|service| {
                (
                    service.name.clone(),
                    service.level,
                    service.checked_at.format("%Y-%m-%d %H:%M").to_string(),
                )
            })
            .collect::<Vec<_>>()
    });

    rsx! {
        div {
            class: "home",
            header {
                class: "home-header",
                h1 { "Service status" }
                div {
                    class: "home-session",
                    span {
                        class: "home-username",
                        "{auth.username()}"
                    }
                    button {
                        class: "signout-button",
                        onclick: move |_| {
                            let mut auth = auth;
                            let nav = nav;
                            spawn(async move {
                                auth.logout().await;
                                nav.replace("/auth");
                            });
                        },
                        "Sign out"
                    }
                }
            }
            if let Some(rows) = rows {
                ul {
                    class: "status-list",
                    for (name, level, checked) in rows {
                        li {
                            key: "{name}",
                            class: "status-row",
                            span {
                                class: "status-name",
                                "{name}"
                            }
                            StatusBadge { level }
                            span {
                                class: "status-checked",
                                "checked {checked} UTC"
                            }
                        }
                    }
                }
            } else {
                div {
                    class: "status-loading",
                    "Loading status board..."
                }
            }
        }
    }
}
