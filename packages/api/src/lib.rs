//! # API crate — simulated backend for the CipherLuma portal
//!
//! The portal has no server. This crate stands in for one: it implements
//! [`portal::Authenticator`] with a fixed delay instead of a network round
//! trip, and loads the [`PortalConfig`] that tunes that delay.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | [`SimulatedAuth`] and identity token minting |
//! | [`config`] | Configuration loading (`.env` + environment on native, defaults on wasm) |
//! | [`time`] | Platform-aware `sleep` and wall clock |

pub mod auth;
pub mod config;
pub mod time;

pub use auth::{mint_token, SimulatedAuth, ADMIN_EMAIL, ADMIN_PASSWORD};
pub use config::load_config;
pub use portal::PortalConfig;
