//! Submission preconditions for the credential form.
//!
//! Checks run in a fixed order and the first failure is reported, so the user
//! always sees the earliest problem first. Login mode has no preconditions of
//! its own: email and password presence is enforced by the inputs.

use crate::form::{Field, FormMode, FormState};

/// A failed submission precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your first and last name")]
    NameRequired,

    #[error("Please select your country")]
    CountryRequired,

    #[error("Please enter your phone number")]
    PhoneRequired,

    #[error("Please enter your date of birth")]
    DateOfBirthRequired,

    #[error("Password is too weak. Use upper and lower case letters, numbers and symbols")]
    WeakPassword,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Please accept the Terms of Service and Privacy Policy")]
    TermsNotAccepted,
}

impl ValidationError {
    /// The field the error should be shown next to.
    pub fn field(self) -> Field {
        match self {
            ValidationError::NameRequired => Field::FirstName,
            ValidationError::CountryRequired => Field::Country,
            ValidationError::PhoneRequired => Field::PhoneNumber,
            ValidationError::DateOfBirthRequired => Field::DateOfBirth,
            ValidationError::WeakPassword => Field::Password,
            ValidationError::PasswordMismatch => Field::ConfirmPassword,
            ValidationError::TermsNotAccepted => Field::AcceptTerms,
        }
    }
}

/// Check `state` against the preconditions of `mode`.
pub fn validate(state: &FormState, mode: FormMode) -> Result<(), ValidationError> {
    if mode.is_login() {
        return Ok(());
    }

    if !state.is_filled(Field::FirstName) || !state.is_filled(Field::LastName) {
        return Err(ValidationError::NameRequired);
    }
    if !state.is_filled(Field::Country) {
        return Err(ValidationError::CountryRequired);
    }
    if !state.is_filled(Field::PhoneNumber) {
        return Err(ValidationError::PhoneRequired);
    }
    if !state.is_filled(Field::DateOfBirth) {
        return Err(ValidationError::DateOfBirthRequired);
    }
    if !state.password_strength().meets_registration_minimum() {
        return Err(ValidationError::WeakPassword);
    }
    if state.password != state.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if !state.accept_terms || !state.accept_privacy {
        return Err(ValidationError::TermsNotAccepted);
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn complete_registration() -> FormState {
    FormState {
        email: "ada@example.com".to_string(),
        password: "Str0ng!Passw0rd".to_string(),
        confirm_password: "Str0ng!Passw0rd".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        country: "GB".to_string(),
        phone_number: "+44 20 7946 0000".to_string(),
        date_of_birth: "1990-12-10".to_string(),
        accept_terms: true,
        accept_privacy: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_always_passes() {
        assert_eq!(validate(&FormState::new(), FormMode::Login), Ok(()));

        let mut state = complete_registration();
        state.confirm_password = "something else".to_string();
        state.password = "x".to_string();
        state.accept_terms = false;
        assert_eq!(validate(&state, FormMode::Login), Ok(()));
    }

    #[test]
    fn test_complete_registration_passes() {
        assert_eq!(validate(&complete_registration(), FormMode::Registration), Ok(()));
    }

    #[test]
    fn test_empty_registration_reports_name_first() {
        assert_eq!(
            validate(&FormState::new(), FormMode::Registration),
            Err(ValidationError::NameRequired)
        );
    }

    #[test]
    fn test_missing_last_name_alone_fails() {
        let mut state = complete_registration();
        state.last_name.clear();
        assert_eq!(
            validate(&state, FormMode::Registration),
            Err(ValidationError::NameRequired)
        );
    }

    #[test]
    fn test_whitespace_counts_as_entered() {
        let mut state = complete_registration();
        state.first_name = " ".to_string();
        state.phone_number = "  ".to_string();
        assert_eq!(validate(&state, FormMode::Registration), Ok(()));
    }

    #[test]
    fn test_failures_follow_check_order() {
        // Break every precondition, then repair them one at a time; the
        // reported error must walk down the list in order.
        let mut state = FormState {
            password: "weak".to_string(),
            confirm_password: "other".to_string(),
            ..FormState::new()
        };
        let good = complete_registration();
        let expected = [
            ValidationError::NameRequired,
            ValidationError::CountryRequired,
            ValidationError::PhoneRequired,
            ValidationError::DateOfBirthRequired,
            ValidationError::WeakPassword,
            ValidationError::PasswordMismatch,
            ValidationError::TermsNotAccepted,
        ];
        for error in expected {
            assert_eq!(validate(&state, FormMode::Registration), Err(error));
            match error {
                ValidationError::NameRequired => {
                    state.first_name = good.first_name.clone();
                    state.last_name = good.last_name.clone();
                }
                ValidationError::CountryRequired => state.country = good.country.clone(),
                ValidationError::PhoneRequired => state.phone_number = good.phone_number.clone(),
                ValidationError::DateOfBirthRequired => {
                    state.date_of_birth = good.date_of_birth.clone()
                }
                ValidationError::WeakPassword => state.password = good.password.clone(),
                ValidationError::PasswordMismatch => {
                    state.confirm_password = good.confirm_password.clone()
                }
                ValidationError::TermsNotAccepted => {
                    state.accept_terms = true;
                    state.accept_privacy = true;
                }
            }
        }
        assert_eq!(validate(&state, FormMode::Registration), Ok(()));
    }

    #[test]
    fn test_unaccepted_terms_reported_last() {
        let mut state = complete_registration();
        state.accept_terms = false;
        assert_eq!(
            validate(&state, FormMode::Registration),
            Err(ValidationError::TermsNotAccepted)
        );

        let mut state = complete_registration();
        state.accept_privacy = false;
        assert_eq!(
            validate(&state, FormMode::Registration),
            Err(ValidationError::TermsNotAccepted)
        );
    }

    #[test]
    fn test_mismatch_reached_with_medium_password() {
        let mut state = complete_registration();
        state.password = "Password1".to_string();
        state.confirm_password = "Password2".to_string();
        assert_eq!(state.password_strength().score(), 4);
        assert_eq!(
            validate(&state, FormMode::Registration),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_weak_password_checked_before_mismatch() {
        let mut state = complete_registration();
        state.password = "password".to_string();
        state.confirm_password = "different".to_string();
        assert_eq!(
            validate(&state, FormMode::Registration),
            Err(ValidationError::WeakPassword)
        );
    }

    #[test]
    fn test_error_points_at_field() {
        assert_eq!(ValidationError::PasswordMismatch.field(), Field::ConfirmPassword);
        assert_eq!(ValidationError::CountryRequired.field(), Field::Country);
    }
}
