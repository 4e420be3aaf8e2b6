//! Page footer component.

use dioxus::prelude::*;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "app-footer",
            div {
                class: "footer-content",
                span {
                    class: "footer-version",
                    "Statusdeck v{VERSION}"
                }
                a {
                    href: "https://github.com/statusdeck/statusdeck",
                    target: "_blank",
                    class: "footer-link",
                    "Source"
                }
            }
        }
    }
}
