use std::time::Duration;

use portal::{AuthError, Authenticator, IdentityToken, PortalConfig, Submission};

use super::token::mint_token;
use crate::time::{now_millis, sleep};

/// Authenticator that waits a fixed delay and then always succeeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulatedAuth {
    delay: Duration,
}

impl Default for SimulatedAuth {
    fn default() -> Self {
        Self::from_config(&PortalConfig::default())
    }
}

impl SimulatedAuth {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &PortalConfig) -> Self {
        Self::new(config.submit_delay())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Authenticator for SimulatedAuth {
    async fn authenticate(&self, submission: &Submission) -> Result<IdentityToken, AuthError> {
        tracing::debug!(
            id = ?submission.id,
            mode = ?submission.mode,
            delay_ms = self.delay.as_millis() as u64,
            "simulating authentication"
        );
        sleep(self.delay).await;
        Ok(mint_token(&submission.credentials, now_millis()))
    }
}
