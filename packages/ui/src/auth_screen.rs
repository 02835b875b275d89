//! Container that shows the credential form or a legal document over it.

use dioxus::prelude::*;
use portal::{FormMode, IdentityToken, Navigator, Screen};

use crate::credential_form::CredentialForm;
use crate::legal_view::LegalDocumentView;

/// Auth screen container.
///
/// The form stays mounted while a document is open so entered values survive
/// the round trip; only its visibility changes.
#[component]
pub fn AuthScreen(
    on_success: EventHandler<(FormMode, IdentityToken)>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut navigator = use_signal(Navigator::new);
    let screen = navigator.read().current();

    rsx! {
        div {
            class: "auth-screen",
            hidden: screen != Screen::Form,
            CredentialForm {
                on_success,
                on_cancel,
                on_open_document: move |document| navigator.write().open(Screen::from(document)),
            }
        }
        if let Some(document) = screen.legal_document() {
            LegalDocumentView {
                document,
                on_back: move |_| {
                    navigator.write().back();
                },
            }
        }
    }
}
