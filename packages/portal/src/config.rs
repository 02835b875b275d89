//! # Portal configuration — `cipherluma.toml`
//!
//! ```toml
//! [submit]
//! delay_ms = 1500   # simulated backend latency
//! ```
//!
//! Every section is optional; a missing or empty file is the default
//! configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub submit: SubmitConfig,
}

/// Simulated submission settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmitConfig {
    /// Delay before a submission resolves, in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_delay_ms() -> u64 {
    1500
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

impl PortalConfig {
    pub fn with_submit_delay(mut self, delay_ms: u64) -> Self {
        self.submit.delay_ms = delay_ms;
        self
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit.delay_ms)
    }

    pub fn filename() -> &'static str {
        "cipherluma.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
