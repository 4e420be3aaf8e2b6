//! Application routing system.

use crate::frontend::components::layout::Shell;
use crate::frontend::pages::auth::Auth;
use crate::frontend::pages::entry::Entry;
use crate::frontend::pages::home::Home;

use dioxus::prelude::*;
use dioxus_router::Routable;

/// Main routing enum for the application.
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
pub enum Route {
    /// Entry route that picks the initial destination.
    #[route("/")]
    Entry {},
    /// Sign-in page route.
    #[route("/auth")]
    Auth {},
    /// Shell layout wrapper around the signed-in pages.
    #[layout(Shell)]
    /// Status board page.
    #[route("/home")]
    Home {},
}
