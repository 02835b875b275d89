use dioxus::prelude::*;
use portal::LegalDocument;

use crate::components::{Button, ButtonVariant};
use crate::icons::FaArrowLeft;
use crate::markdown::render_markdown;
use crate::Icon;

/// Full-page view of one legal document with a back button.
#[component]
pub fn LegalDocumentView(document: LegalDocument, on_back: EventHandler<()>) -> Element {
    let body = render_markdown(document.markdown());
    let title = document.title();
    let updated = document.last_updated();

    rsx! {
        article {
            class: "legal",
            header {
                class: "legal__header",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_back.call(()),
                    Icon { icon: FaArrowLeft, width: 14, height: 14 }
                    " Back"
                }
                h1 { class: "legal__title", "{title}" }
                p { class: "legal__updated", "Last updated: {updated}" }
            }
            div {
                class: "legal__body",
                dangerous_inner_html: "{body}",
            }
        }
    }
}
