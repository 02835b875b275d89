use dioxus::prelude::*;
use ui::{GuideList, GuideViewer};

use crate::Route;

#[component]
pub fn Guides() -> Element {
    let nav = use_navigator();

    rsx! {
        GuideList {
            on_open: move |slug: String| {
                nav.push(Route::GuideDetail { slug });
            },
        }
    }
}

#[component]
pub fn GuideDetail(slug: String) -> Element {
    let nav = use_navigator();

    rsx! {
        GuideViewer {
            slug,
            on_back: move |_| {
                nav.push(Route::Guides {});
            },
        }
    }
}
