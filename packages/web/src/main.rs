use dioxus::prelude::*;

use portal::LegalDocument;
use ui::{IdentityProvider, Navbar};
use views::{Auth, GuideDetail, Guides, Help, Legal, Welcome};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
        #[route("/")]
        Auth {},
        #[route("/welcome")]
        Welcome {},
        #[route("/help")]
        Help {},
        #[route("/guides")]
        Guides {},
        #[route("/guides/:slug")]
        GuideDetail { slug: String },
        #[route("/legal/:document")]
        Legal { document: String },
}

impl Route {
    fn legal(document: LegalDocument) -> Self {
        Route::Legal {
            document: document.slug().to_string(),
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        IdentityProvider {
            Router::<Route> {}
        }
    }
}

/// Navigation bar shared by every page.
#[component]
fn Layout() -> Element {
    rsx! {
        Navbar {
            Link { to: Route::Auth {}, "Sign in" }
            Link { to: Route::Help {}, "Help" }
            Link { to: Route::Guides {}, "Guides" }
            Link { to: Route::legal(LegalDocument::Terms), "Terms" }
            Link { to: Route::legal(LegalDocument::Privacy), "Privacy" }
        }
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}
