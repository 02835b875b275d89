//! # Password strength scoring
//!
//! A password earns one point for each satisfied heuristic:
//!
//! | Heuristic | Points |
//! |-----------|--------|
//! | at least 8 characters | +1 |
//! | at least 12 characters | +1 |
//! | an ASCII lowercase letter | +1 |
//! | an ASCII uppercase letter | +1 |
//! | an ASCII digit | +1 |
//! | any character that is not an ASCII letter or digit | +1 |
//!
//! The resulting score is in `0..=6`. Registration requires at least
//! [`MIN_REGISTRATION_SCORE`]; the labels shown next to the meter use the same
//! boundaries (see [`StrengthLabel`]).

use std::fmt;

/// Highest possible score.
pub const MAX_SCORE: u8 = 6;

/// Minimum score a registration password must reach.
pub const MIN_REGISTRATION_SCORE: u8 = 3;

const MEDIUM_FROM: u8 = MIN_REGISTRATION_SCORE;
const STRONG_FROM: u8 = 5;

/// Score of a password, always in `0..=6`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PasswordStrength(u8);

impl PasswordStrength {
    /// Numeric score.
    pub fn score(self) -> u8 {
        self.0
    }

    pub fn label(self) -> StrengthLabel {
        match self.0 {
            s if s >= STRONG_FROM => StrengthLabel::Strong,
            s if s >= MEDIUM_FROM => StrengthLabel::Medium,
            _ => StrengthLabel::Weak,
        }
    }

    /// Whether the score passes the registration gate.
    pub fn meets_registration_minimum(self) -> bool {
        self.0 >= MIN_REGISTRATION_SCORE
    }

    /// Fill ratio for a meter, `0.0..=1.0`.
    pub fn ratio(self) -> f32 {
        f32::from(self.0) / f32::from(MAX_SCORE)
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_SCORE)
    }
}

/// Presentational bucket for a score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score a password. Pure and deterministic.
pub fn compute_password_strength(password: &str) -> PasswordStrength {
    let len = password.chars().count();
    let checks = [
        len >= 8,
        len >= 12,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    PasswordStrength(checks.iter().filter(|&&hit| hit).count() as u8)
}
