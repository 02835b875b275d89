//! # Portal — platform-agnostic core of the CipherLuma web app
//!
//! Everything here is plain Rust with no UI dependency, so it can be tested
//! natively and shared by every frontend.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`form`] | Form fields, values, modes and the [`FormState`] they live in |
//! | [`strength`] | Password strength scoring and labels |
//! | [`validation`] | Ordered submission preconditions |
//! | [`controller`] | [`FormController`]: state ownership, observers and the submission state machine |
//! | [`auth`] | [`Authenticator`] contract, submissions and identity tokens |
//! | [`country`] | Country reference table |
//! | [`navigation`] | Form ↔ legal document screen stack |
//! | [`legal`] | Terms, Privacy Policy and User Agreement text |
//! | [`help`] | FAQ entries and filtering |
//! | [`guide`] | Step-by-step guides and progress tracking |
//! | [`config`] | `cipherluma.toml` configuration |

pub mod auth;
pub mod config;
pub mod controller;
pub mod country;
pub mod form;
pub mod guide;
pub mod help;
pub mod legal;
pub mod navigation;
pub mod strength;
pub mod validation;

pub use auth::{AuthError, Authenticator, Credentials, Identity, IdentityToken, Submission, SubmissionId};
pub use config::PortalConfig;
pub use controller::{Change, FormController, Phase, SubmitError};
pub use country::{find_country, Country, COUNTRIES};
pub use form::{Field, FieldKind, FieldValue, FormMode, FormState, UnknownField};
pub use guide::{find_guide, Guide, GuideProgress, GuideStep, GUIDES};
pub use help::{filter_faqs, FaqCategory, FaqEntry, FAQS};
pub use legal::LegalDocument;
pub use navigation::{Navigator, Screen};
pub use strength::{compute_password_strength, PasswordStrength, StrengthLabel};
pub use validation::{validate, ValidationError};
