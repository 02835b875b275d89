use dioxus::prelude::*;
use ui::FaqBrowser;

#[component]
pub fn Help() -> Element {
    rsx! {
        FaqBrowser {}
    }
}
