use dioxus::prelude::*;
use portal::LegalDocument;
use ui::LegalDocumentView;

use crate::Route;

/// Stand-alone legal document page, addressed by slug.
#[component]
pub fn Legal(document: String) -> Element {
    let nav = use_navigator();

    let on_back = move |_| {
        if nav.can_go_back() {
            nav.go_back();
        } else {
            nav.push(Route::Auth {});
        }
    };

    match document.parse::<LegalDocument>() {
        Ok(document) => rsx! {
            LegalDocumentView { document, on_back }
        },
        Err(e) => {
            tracing::warn!(error = %e, "unknown legal document requested");
            rsx! {
                section {
                    class: "legal",
                    p { "{e}" }
                    Link { to: Route::Auth {}, "Back to sign in" }
                }
            }
        }
    }
}
