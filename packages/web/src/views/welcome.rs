use dioxus::prelude::*;
use ui::{use_identity, SignOutButton};

use crate::Route;

/// Landing page after a successful sign-in.
#[component]
pub fn Welcome() -> Element {
    let identity = use_identity();
    let nav = use_navigator();

    let state = identity();
    let Some(token) = state.token.as_ref() else {
        nav.replace(Route::Auth {});
        return rsx! {};
    };
    let role = if state.is_admin() { "administrator" } else { "member" };

    rsx! {
        section {
            class: "welcome",
            h1 { "You're signed in" }
            p { "Signed in as {role}." }
            p {
                class: "welcome__token",
                "Session token: "
                code { "{token}" }
            }
            SignOutButton {
                class: "btn btn--outline",
                on_signed_out: move |_| {
                    nav.replace(Route::Auth {});
                },
            }
        }
    }
}
