use dioxus::prelude::*;

use crate::icons::FaShieldHalved;
use crate::Icon;

/// Top bar with the brand mark; links are passed as children.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            span {
                class: "navbar__brand",
                Icon { icon: FaShieldHalved, width: 18, height: 18 }
                " CipherLuma"
            }
            div {
                class: "navbar__links",
                {children}
            }
        }
    }
}
