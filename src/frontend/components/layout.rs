//! Shell layout wrapping the signed-in pages.

use crate::frontend::app::main::Route;
use crate::frontend::components::footer::Footer;
use dioxus::prelude::*;
use dioxus_router::components::Outlet;

#[component]
pub fn Shell() -> Element {
    rsx! {
        div {
            class: "shell",
            main {
                class: "shell-body",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}
