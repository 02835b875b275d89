//! Sign-in / sign-up page.

use dioxus::prelude::*;
use portal::{FormMode, IdentityToken};
use ui::{use_identity, AuthScreen, IdentityState};

use crate::Route;

/// Auth page component.
#[component]
pub fn Auth() -> Element {
    let mut identity = use_identity();
    let nav = use_navigator();

    // If already signed in, go straight to the welcome page
    if identity().is_signed_in() {
        nav.replace(Route::Welcome {});
    }

    // A registration leaves the user on the reset form to sign in
    let on_success = move |(mode, token): (FormMode, IdentityToken)| {
        if !mode.is_login() {
            return;
        }
        tracing::info!(identity = ?token.identity(), "signed in");
        identity.set(IdentityState { token: Some(token) });
        nav.push(Route::Welcome {});
    };

    let on_cancel = move |_| {
        if nav.can_go_back() {
            nav.go_back();
        } else {
            nav.push(Route::Help {});
        }
    };

    rsx! {
        AuthScreen { on_success, on_cancel }
    }
}
