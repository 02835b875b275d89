//! Simulated authentication.

mod simulated;
mod token;

pub use simulated::SimulatedAuth;
pub use token::{mint_token, ADMIN_EMAIL, ADMIN_PASSWORD};
