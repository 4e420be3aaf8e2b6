mod frontend;
mod utils;

use crate::frontend::app::main::Route;
use crate::frontend::services::context::AuthState;
use dioxus::LaunchBuilder;
use dioxus::prelude::*;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use dioxus_router::Router;
use std::sync::OnceLock;
use tokio::runtime::Runtime;

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

fn main() {
    // Logging setup
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Initialize runtime once
    let _rt = RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("Failed to create runtime")
    });

    let size = LogicalSize::new(1120.0, 760.0);

    let config = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title("Statusdeck")
                .with_inner_size(size)
                .with_min_inner_size(size)
                .with_resizable(false),
        )
        .with_menu(None);

    LaunchBuilder::new().with_cfg(config).launch(AppRoot);
}

#[component]
fn AppRoot() -> Element {
    let is_authenticated = use_signal(|| false);
    let current_user = use_signal(|| None);
    let auth = AuthState {
        is_authenticated,
        current_user,
    };
    provide_context(auth);

    // Restore a persisted session; the entry route reacts once the flag flips
    use_future(move || async move {
        let mut auth = auth;
        auth.load_saved_user().await;
    });

    rsx! {
        style { dangerous_inner_html: include_str!("../assets/styles.css") }
        Router::<Route> {}
    }
}
