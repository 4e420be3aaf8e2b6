//! Entry route that decides the initial destination.
//!
//! On first render the authentication flag is read from the shared
//! [`AuthState`] context and the user is sent to the status board or the
//! sign-in page. An absent session counts as signed out. The effect stays
//! subscribed to the flag, so a later change picks the destination again,
//! but re-evaluating an unchanged flag never issues another navigation.

use crate::frontend::app::main::Route;
use crate::frontend::services::context::AuthState;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

/// Where the entry route should send the user, given the flag value the
/// last navigation was based on. `None` means stay put.
fn next_redirect(last_seen: Option<bool>, authenticated: bool) -> Option<Route> {
    if last_seen == Some(authenticated) {
        return None;
    }
    if authenticated {
        Some(Route::Home {})
    } else {
        Some(Route::Auth {})
    }
}

#[component]
pub fn Entry() -> Element {
    let nav = use_navigator();
    let auth = use_context::<AuthState>();
    let mut last_seen = use_signal(|| None::<bool>);

    use_effect(move || {
        let flag = *auth.is_authenticated.read();
        let seen = *last_seen.peek();
        if let Some(target) = next_redirect(seen, flag) {
            log::debug!("entry redirect, authenticated: {flag}");
            last_seen.set(Some(flag));
            nav.replace(target);
        }
    });

    rsx! { div { class: "entry-pending" } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_on_first_evaluation_goes_to_home() {
        assert_eq!(next_redirect(None, true), Some(Route::Home {}));
    }

    #[test]
    fn signed_out_on_first_evaluation_goes_to_sign_in() {
        assert_eq!(next_redirect(None, false), Some(Route::Auth {}));
    }

    #[test]
    fn signing_in_after_mount_redirects_once_more() {
        assert_eq!(next_redirect(Some(false), true), Some(Route::Home {}));
    }

    #[test]
    fn unchanged_flag_does_not_navigate_again() {
        assert_eq!(next_redirect(Some(true), true), None);
        assert_eq!(next_redirect(Some(false), false), None);
    }
}
