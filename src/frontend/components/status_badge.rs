//! Status badge component.

use crate::frontend::services::status::StatusLevel;
use dioxus::prelude::*;

#[component]
pub fn StatusBadge(level: StatusLevel) -> Element {
    rsx! {
        span {
            class: "status-badge {level.css_class()}",
            "{level.label()}"
        }
    }
}
