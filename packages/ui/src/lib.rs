//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod markdown;

mod identity;
pub use identity::{use_identity, IdentityProvider, IdentityState, SignOutButton};

mod strength_meter;
pub use strength_meter::PasswordStrengthMeter;

mod credential_form;
pub use credential_form::CredentialForm;

mod legal_view;
pub use legal_view::LegalDocumentView;

mod auth_screen;
pub use auth_screen::AuthScreen;

mod faq_browser;
pub use faq_browser::FaqBrowser;

mod guide_viewer;
pub use guide_viewer::{GuideList, GuideViewer};

mod navbar;
pub use navbar::Navbar;
