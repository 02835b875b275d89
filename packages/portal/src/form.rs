//! # Credential form state
//!
//! [`FormState`] holds the values of one registration/login form. The form is
//! shown in one of two [`FormMode`]s; the mode only decides which fields are
//! required, so switching back and forth never loses input.
//!
//! Fields are addressed with [`Field`], whose [`name`](Field::name) matches
//! the HTML `name` attribute of the corresponding input, and written with a
//! [`FieldValue`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::strength::{compute_password_strength, PasswordStrength};

/// One input of the credential form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
    FirstName,
    LastName,
    Country,
    PhoneNumber,
    DateOfBirth,
    AcceptTerms,
    AcceptPrivacy,
}

/// How a field is edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Checkbox,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::FirstName,
        Field::LastName,
        Field::Country,
        Field::PhoneNumber,
        Field::DateOfBirth,
        Field::AcceptTerms,
        Field::AcceptPrivacy,
    ];

    pub fn kind(self) -> FieldKind {
        match self {
            Field::AcceptTerms | Field::AcceptPrivacy => FieldKind::Checkbox,
            _ => FieldKind::Text,
        }
    }

    /// The HTML input name.
    pub fn name(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Country => "country",
            Field::PhoneNumber => "phoneNumber",
            Field::DateOfBirth => "dateOfBirth",
            Field::AcceptTerms => "acceptTerms",
            Field::AcceptPrivacy => "acceptPrivacy",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// A value typed by the input that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// Which variant of the form is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormMode {
    #[default]
    Login,
    Registration,
}

impl FormMode {
    pub fn is_login(self) -> bool {
        self == FormMode::Login
    }

    pub fn toggled(self) -> Self {
        match self {
            FormMode::Login => FormMode::Registration,
            FormMode::Registration => FormMode::Login,
        }
    }

    /// Fields that must be filled in before submitting in this mode.
    pub fn required_fields(self) -> &'static [Field] {
        const LOGIN: &[Field] = &[Field::Email, Field::Password];
        const REGISTRATION: &[Field] = &Field::ALL;
        match self {
            FormMode::Login => LOGIN,
            FormMode::Registration => REGISTRATION,
        }
    }

    pub fn is_required(self, field: Field) -> bool {
        self.required_fields().contains(&field)
    }
}

/// Values entered into one credential form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    /// Country code from [`crate::country::COUNTRIES`]; empty until one is picked.
    pub country: String,
    pub phone_number: String,
    /// `YYYY-MM-DD` as produced by a date input.
    pub date_of_birth: String,
    pub accept_terms: bool,
    pub accept_privacy: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strength of the current password, recomputed on every call.
    pub fn password_strength(&self) -> PasswordStrength {
        compute_password_strength(&self.password)
    }

    /// Text value of a field, `None` for checkboxes.
    pub fn text(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Country => &self.country,
            Field::PhoneNumber => &self.phone_number,
            Field::DateOfBirth => &self.date_of_birth,
            Field::AcceptTerms | Field::AcceptPrivacy => return None,
        };
        Some(value.as_str())
    }

    /// Checkbox value of a field, `None` for text inputs.
    pub fn flag(&self, field: Field) -> Option<bool> {
        match field {
            Field::AcceptTerms => Some(self.accept_terms),
            Field::AcceptPrivacy => Some(self.accept_privacy),
            _ => None,
        }
    }

    pub(crate) fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        let value = match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Country => &mut self.country,
            Field::PhoneNumber => &mut self.phone_number,
            Field::DateOfBirth => &mut self.date_of_birth,
            Field::AcceptTerms | Field::AcceptPrivacy => return None,
        };
        Some(value)
    }

    pub(crate) fn flag_mut(&mut self, field: Field) -> Option<&mut bool> {
        match field {
            Field::AcceptTerms => Some(&mut self.accept_terms),
            Field::AcceptPrivacy => Some(&mut self.accept_privacy),
            _ => None,
        }
    }

    /// Whether a field holds a value (non-empty text or a ticked checkbox).
    pub fn is_filled(&self, field: Field) -> bool {
        match field.kind() {
            FieldKind::Checkbox => self.flag(field).unwrap_or(false),
            FieldKind::Text => self.text(field).is_some_and(|v| !v.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_roundtrip() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>(), Ok(field));
        }
        assert_eq!(
            "nickname".parse::<Field>(),
            Err(UnknownField("nickname".to_string()))
        );
    }

    #[test]
    fn test_text_and_flag_accessors_are_disjoint() {
        let state = FormState::new();
        for field in Field::ALL {
            match field.kind() {
                FieldKind::Text => {
                    assert_eq!(state.text(field), Some(""));
                    assert_eq!(state.flag(field), None);
                }
                FieldKind::Checkbox => {
                    assert_eq!(state.text(field), None);
                    assert_eq!(state.flag(field), Some(false));
                }
            }
        }
    }

    #[test]
    fn test_required_fields_per_mode() {
        assert_eq!(
            FormMode::Login.required_fields(),
            &[Field::Email, Field::Password]
        );
        assert_eq!(FormMode::Registration.required_fields().len(), 10);
        assert!(!FormMode::Login.is_required(Field::Country));
        assert!(FormMode::Registration.is_required(Field::AcceptPrivacy));
    }

    #[test]
    fn test_toggled_twice_is_identity() {
        for mode in [FormMode::Login, FormMode::Registration] {
            assert_eq!(mode.toggled().toggled(), mode);
            assert_ne!(mode.toggled(), mode);
        }
        assert_eq!(FormMode::default(), FormMode::Login);
    }

    #[test]
    fn test_is_filled_counts_any_text() {
        let mut state = FormState::new();
        assert!(!state.is_filled(Field::FirstName));
        state.first_name = "   ".to_string();
        assert!(state.is_filled(Field::FirstName));
        assert!(!state.is_filled(Field::AcceptTerms));
        state.accept_terms = true;
        assert!(state.is_filled(Field::AcceptTerms));
    }
}
