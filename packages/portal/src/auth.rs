//! # Authentication contract
//!
//! The form controller never talks to a backend itself. It hands out a
//! [`Submission`] and later accepts its result; whoever drives the form awaits
//! an [`Authenticator`] in between. The `api` crate provides the simulated
//! implementation used by the application; tests use instant in-memory ones.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::form::FormMode;

/// Identifies one call to [`begin_submit`](crate::FormController::begin_submit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubmissionId(pub(crate) u64);

/// Email and password as they were when the submission started.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A pending submission, detached from the form so it can cross an `.await`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub id: SubmissionId,
    pub mode: FormMode,
    pub credentials: Credentials,
}

/// Who the backend decided the user is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Identity {
    Admin,
    Generic,
}

/// Opaque token returned by a successful authentication.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityToken {
    identity: Identity,
    value: String,
}

impl IdentityToken {
    pub fn new(identity: Identity, value: impl Into<String>) -> Self {
        Self {
            identity,
            value: value.into(),
        }
    }

    pub fn identity(&self) -> Identity {
        self.identity
    }

    pub fn is_admin(&self) -> bool {
        self.identity == Identity::Admin
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for IdentityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Failures a real backend could report. The simulated one never does.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Server error: {0}")]
    Server(String),
}

/// Resolves a submission to an identity.
pub trait Authenticator {
    fn authenticate(
        &self,
        submission: &Submission,
    ) -> impl std::future::Future<Output = Result<IdentityToken, AuthError>>;
}
