//! Signed-in identity context and hooks for the UI.

use dioxus::prelude::*;
use portal::IdentityToken;

/// Who is signed in, if anyone. Lives only as long as the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentityState {
    pub token: Option<IdentityToken>,
}

impl IdentityState {
    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.token.as_ref().is_some_and(IdentityToken::is_admin)
    }
}

/// Get the current identity state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_identity() -> Signal<IdentityState> {
    use_context::<Signal<IdentityState>>()
}

/// Provider component that owns the identity state.
/// Wrap your app with this component to enable sign-in.
#[component]
pub fn IdentityProvider(children: Element) -> Element {
    let identity = use_signal(IdentityState::default);
    use_context_provider(|| identity);

    rsx! {
        {children}
    }
}

/// Button that forgets the current identity.
#[component]
pub fn SignOutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_signed_out: Option<EventHandler<()>>,
) -> Element {
    let mut identity = use_identity();

    let onclick = move |_| {
        tracing::info!("signing out");
        identity.set(IdentityState::default());
        if let Some(handler) = on_signed_out {
            handler.call(());
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
