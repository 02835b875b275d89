//! # Credential form controller
//!
//! [`FormController`] owns the [`FormState`] of one rendered form together
//! with its mode and submission [`Phase`]:
//!
//! ```text
//! Editing --begin_submit--> Submitting --complete(Ok)--> Resolved   (login)
//!    ^                          |        --complete(Ok)--> Editing  (registration, form reset)
//!    |                          |
//!    +-- cancel_submission / complete(Err)
//! ```
//!
//! Field edits and mode toggles never change the phase. Submitting is split
//! in two so the host can await the backend without holding the controller:
//! [`begin_submit`](FormController::begin_submit) validates and returns a
//! detached [`Submission`], and [`complete`](FormController::complete) applies
//! its result. [`submit`](FormController::submit) does both around a single
//! `.await` for hosts that can lend the controller for the whole call.
//!
//! Completions are matched by [`SubmissionId`]; anything that does not match
//! the pending submission (cancelled, superseded, or arriving after the form
//! was reset) is dropped.

use std::fmt;

use crate::auth::{AuthError, Authenticator, Credentials, IdentityToken, Submission, SubmissionId};
use crate::form::{Field, FieldKind, FieldValue, FormMode, FormState};
use crate::strength::PasswordStrength;
use crate::validation::{validate, ValidationError};

/// Where the form is in its submission lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    Resolved,
}

/// What an `on_change` observer is told after each effective mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    Field(Field),
    Mode(FormMode),
    Phase(Phase),
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("A submission is already in progress")]
    Pending,

    #[error(transparent)]
    Backend(#[from] AuthError),

    #[error("Submission is no longer pending")]
    Stale,
}

#[derive(Clone, Copy, Debug)]
struct Pending {
    id: SubmissionId,
    mode: FormMode,
}

type SuccessCallback = Box<dyn FnMut(&IdentityToken)>;
type CancelCallback = Box<dyn FnMut()>;
type ChangeCallback = Box<dyn FnMut(Change)>;

/// State and submission orchestration for one credential form.
pub struct FormController {
    state: FormState,
    mode: FormMode,
    phase: Phase,
    pending: Option<Pending>,
    next_id: u64,
    on_success: Option<SuccessCallback>,
    on_cancel_navigation: Option<CancelCallback>,
    on_change: Option<ChangeCallback>,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FormController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormController")
            .field("mode", &self.mode)
            .field("phase", &self.phase)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl FormController {
    /// Empty form in login mode.
    pub fn new() -> Self {
        Self {
            state: FormState::default(),
            mode: FormMode::Login,
            phase: Phase::Editing,
            pending: None,
            next_id: 0,
            on_success: None,
            on_cancel_navigation: None,
            on_change: None,
        }
    }

    pub fn with_mode(mut self, mode: FormMode) -> Self {
        self.mode = mode;
        self
    }

    /// Called once per successful submission with the issued token.
    ///
    /// The callback runs inside [`FormController::complete`], after the form
    /// has settled, while the caller still holds `&mut self`.
    pub fn on_success(mut self, callback: impl FnMut(&IdentityToken) + 'static) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    /// Called when the user abandons the form.
    pub fn on_cancel_navigation(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_cancel_navigation = Some(Box::new(callback));
        self
    }

    pub fn on_change(mut self, callback: impl FnMut(Change) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while a submission is pending.
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn password_strength(&self) -> PasswordStrength {
        self.state.password_strength()
    }

    /// Set one field.
    ///
    /// Checkbox fields also accept text using HTML checkbox semantics
    /// (`"on"`, `"true"`, `"1"` mean checked). A boolean sent to a text field
    /// is ignored.
    pub fn update_field(&mut self, field: Field, value: impl Into<FieldValue>) {
        let changed = match (field.kind(), value.into()) {
            (FieldKind::Checkbox, FieldValue::Flag(checked)) => self.set_flag(field, checked),
            (FieldKind::Checkbox, FieldValue::Text(text)) => {
                self.set_flag(field, checkbox_text_is_checked(&text))
            }
            (FieldKind::Text, FieldValue::Text(text)) => self.set_text(field, text),
            (FieldKind::Text, FieldValue::Flag(_)) => {
                tracing::warn!(%field, "ignoring boolean value for text field");
                false
            }
        };

        if !changed {
            return;
        }
        if field == Field::Password {
            tracing::debug!(strength = %self.state.password_strength(), "password changed");
        }
        self.notify(Change::Field(field));
    }

    fn set_text(&mut self, field: Field, text: String) -> bool {
        match self.state.text_mut(field) {
            Some(slot) if *slot != text => {
                *slot = text;
                true
            }
            _ => false,
        }
    }

    fn set_flag(&mut self, field: Field, checked: bool) -> bool {
        match self.state.flag_mut(field) {
            Some(slot) if *slot != checked => {
                *slot = checked;
                true
            }
            _ => false,
        }
    }

    /// Switch between login and registration. Entered values are kept.
    pub fn set_mode(&mut self, mode: FormMode) {
        if self.mode == mode {
            return;
        }
        tracing::debug!(?mode, "form mode changed");
        self.mode = mode;
        self.notify(Change::Mode(mode));
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    /// Check the current values against the current mode.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(&self.state, self.mode)
    }

    /// Validate and enter [`Phase::Submitting`].
    ///
    /// On a validation failure the phase is left alone and no values are
    /// touched.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitError> {
        if self.pending.is_some() {
            return Err(SubmitError::Pending);
        }
        self.validate()?;

        let id = SubmissionId(self.next_id);
        self.next_id += 1;
        self.pending = Some(Pending {
            id,
            mode: self.mode,
        });
        self.set_phase(Phase::Submitting);

        Ok(Submission {
            id,
            mode: self.mode,
            credentials: Credentials {
                email: self.state.email.clone(),
                password: self.state.password.clone(),
            },
        })
    }

    /// Apply the backend result of submission `id`.
    ///
    /// On success a registration form is reset to empty values while a login
    /// form stays [`Phase::Resolved`], then the `on_success` callback runs.
    /// A failure returns the form to editing with its values intact.
    pub fn complete(
        &mut self,
        id: SubmissionId,
        result: Result<IdentityToken, AuthError>,
    ) -> Result<IdentityToken, SubmitError> {
        let pending = match self.pending {
            Some(pending) if pending.id == id => pending,
            _ => {
                tracing::warn!(?id, "dropping completion for a submission that is not pending");
                return Err(SubmitError::Stale);
            }
        };
        self.pending = None;

        match result {
            Ok(token) => {
                tracing::info!(identity = ?token.identity(), mode = ?pending.mode, "submission resolved");
                match pending.mode {
                    FormMode::Registration => {
                        self.state = FormState::default();
                        self.notify(Change::Reset);
                        self.set_phase(Phase::Editing);
                    }
                    FormMode::Login => self.set_phase(Phase::Resolved),
                }
                if let Some(callback) = self.on_success.as_mut() {
                    callback(&token);
                }
                Ok(token)
            }
            Err(err) => {
                tracing::error!(%err, "submission failed");
                self.set_phase(Phase::Editing);
                Err(SubmitError::Backend(err))
            }
        }
    }

    /// Abandon the pending submission, if any. Its completion will be dropped.
    pub fn cancel_submission(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        tracing::debug!(id = ?pending.id, "submission cancelled");
        self.set_phase(Phase::Editing);
        true
    }

    /// Validate, authenticate and complete in one call.
    ///
    /// Dropping the returned future before it finishes cancels the submission.
    pub async fn submit<A: Authenticator>(
        &mut self,
        authenticator: &A,
    ) -> Result<IdentityToken, SubmitError> {
        let submission = self.begin_submit()?;
        let guard = CancelOnDrop {
            form: self,
            id: submission.id,
        };
        let result = authenticator.authenticate(&submission).await;
        guard.form.complete(submission.id, result)
    }

    /// The user backed out of the form.
    pub fn cancel_navigation(&mut self) {
        self.cancel_submission();
        if let Some(callback) = self.on_cancel_navigation.as_mut() {
            callback();
        }
    }

    /// Clear every value and any pending submission. The mode is kept.
    pub fn reset(&mut self) {
        self.cancel_submission();
        self.state = FormState::default();
        self.set_phase(Phase::Editing);
        self.notify(Change::Reset);
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase == phase {
            return;
        }
        tracing::debug!(from = ?self.phase, to = ?phase, "form phase changed");
        self.phase = phase;
        self.notify(Change::Phase(phase));
    }

    fn notify(&mut self, change: Change) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(change);
        }
    }
}

struct CancelOnDrop<'a> {
    form: &'a mut FormController,
    id: SubmissionId,
}

impl Drop for CancelOnDrop<'_> {
    fn drop(&mut self) {
        if self.form.pending.is_some_and(|pending| pending.id == self.id) {
            self.form.cancel_submission();
        }
    }
}

fn checkbox_text_is_checked(text: &str) -> bool {
    matches!(text.trim().to_ascii_lowercase().as_str(), "on" | "true" | "1")
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::auth::Identity;
    use crate::validation::complete_registration;

    /// Resolves immediately; the admin pair mirrors the simulated backend.
    struct InstantAuth;

    impl Authenticator for InstantAuth {
        async fn authenticate(&self, submission: &Submission) -> Result<IdentityToken, AuthError> {
            let c = &submission.credentials;
            if c.email == "admin@cipherluma.com" && c.password == "admin123" {
                Ok(IdentityToken::new(Identity::Admin, "admin-token-1"))
            } else {
                Ok(IdentityToken::new(Identity::Generic, "user-token-1"))
            }
        }
    }

    struct FailingAuth;

    impl Authenticator for FailingAuth {
        async fn authenticate(&self, _: &Submission) -> Result<IdentityToken, AuthError> {
            Err(AuthError::Network("offline".to_string()))
        }
    }

    struct NeverAuth;

    impl Authenticator for NeverAuth {
        async fn authenticate(&self, _: &Submission) -> Result<IdentityToken, AuthError> {
            std::future::pending().await
        }
    }

    fn fill(form: &mut FormController, state: &FormState) {
        for field in Field::ALL {
            match field.kind() {
                FieldKind::Text => form.update_field(field, state.text(field).unwrap_or_default()),
                FieldKind::Checkbox => form.update_field(field, state.flag(field).unwrap_or_default()),
            }
        }
    }

    #[test]
    fn test_new_form_is_empty_login() {
        let form = FormController::new();
        assert_eq!(form.mode(), FormMode::Login);
        assert_eq!(form.phase(), Phase::Editing);
        assert!(!form.is_loading());
        assert_eq!(form.state(), &FormState::default());
        assert_eq!(form.password_strength().score(), 0);
    }

    #[test]
    fn test_update_field_sets_values_and_strength() {
        let mut form = FormController::new();
        form.update_field(Field::Email, "ada@example.com");
        form.update_field(Field::Password, "Password1");
        form.update_field(Field::AcceptTerms, true);

        assert_eq!(form.state().email, "ada@example.com");
        assert_eq!(form.password_strength().score(), 4);
        assert!(form.state().accept_terms);
    }

    #[test]
    fn test_strength_tracks_password_in_any_mode() {
        let mut form = FormController::new();
        form.update_field(Field::Password, "Abc12345!");
        form.set_mode(FormMode::Registration);
        assert_eq!(form.password_strength().score(), 5);
        form.update_field(Field::Password, "");
        assert_eq!(form.password_strength().score(), 0);
    }

    #[test]
    fn test_checkbox_accepts_html_text() {
        let mut form = FormController::new();
        form.update_field(Field::AcceptPrivacy, "on");
        assert!(form.state().accept_privacy);
        form.update_field(Field::AcceptPrivacy, "");
        assert!(!form.state().accept_privacy);
    }

    #[test]
    fn test_boolean_for_text_field_is_ignored() {
        let mut form = FormController::new();
        form.update_field(Field::FirstName, "Ada");
        form.update_field(Field::FirstName, true);
        assert_eq!(form.state().first_name, "Ada");
    }

    #[test]
    fn test_repeated_update_is_idempotent() {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let log = changes.clone();
        let mut form = FormController::new().on_change(move |c| log.borrow_mut().push(c));

        form.update_field(Field::PhoneNumber, "555-0100");
        let after_first = form.state().clone();
        form.update_field(Field::PhoneNumber, "555-0100");

        assert_eq!(form.state(), &after_first);
        assert_eq!(*changes.borrow(), vec![Change::Field(Field::PhoneNumber)]);
    }

    #[test]
    fn test_toggling_mode_twice_keeps_values() {
        let mut form = FormController::new();
        fill(&mut form, &complete_registration());
        let before = form.state().clone();
        let required = form.mode().required_fields();

        form.toggle_mode();
        assert_eq!(form.mode(), FormMode::Registration);
        form.toggle_mode();

        assert_eq!(form.mode().required_fields(), required);
        assert_eq!(form.state(), &before);
    }

    #[test]
    fn test_invalid_registration_never_enters_pending() {
        let mut form = FormController::new().with_mode(FormMode::Registration);
        fill(&mut form, &complete_registration());
        form.update_field(Field::AcceptTerms, false);
        let before = form.state().clone();

        assert_eq!(
            form.begin_submit(),
            Err(SubmitError::Invalid(ValidationError::TermsNotAccepted))
        );
        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.state(), &before);
    }

    #[test]
    fn test_second_submit_while_pending_is_rejected() {
        let mut form = FormController::new();
        let first = form.begin_submit().unwrap();
        assert!(form.is_loading());
        assert_eq!(form.begin_submit(), Err(SubmitError::Pending));

        let token = IdentityToken::new(Identity::Generic, "user-token-7");
        assert_eq!(form.complete(first.id, Ok(token.clone())), Ok(token));
        assert!(!form.is_loading());
    }

    #[test]
    fn test_submission_snapshots_credentials() {
        let mut form = FormController::new();
        form.update_field(Field::Email, "ada@example.com");
        form.update_field(Field::Password, "secret");
        let submission = form.begin_submit().unwrap();
        form.update_field(Field::Password, "changed");

        assert_eq!(submission.mode, FormMode::Login);
        assert_eq!(submission.credentials.password, "secret");
    }

    #[tokio::test]
    async fn test_admin_login_resolves_with_admin_token() {
        let tokens = Rc::new(RefCell::new(Vec::new()));
        let sink = tokens.clone();
        let mut form = FormController::new().on_success(move |t| sink.borrow_mut().push(t.clone()));
        form.update_field(Field::Email, "admin@cipherluma.com");
        form.update_field(Field::Password, "admin123");

        let token = form.submit(&InstantAuth).await.unwrap();

        assert_eq!(token.identity(), Identity::Admin);
        assert_eq!(*tokens.borrow(), vec![token]);
        assert_eq!(form.phase(), Phase::Resolved);
        assert_eq!(form.state().email, "admin@cipherluma.com");
    }

    #[tokio::test]
    async fn test_other_login_resolves_with_generic_token() {
        let mut form = FormController::new();
        form.update_field(Field::Email, "admin@cipherluma.com");
        form.update_field(Field::Password, "admin1234");

        let token = form.submit(&InstantAuth).await.unwrap();
        assert_eq!(token.identity(), Identity::Generic);
    }

    #[tokio::test]
    async fn test_registration_success_resets_form() {
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        let mut form = FormController::new()
            .with_mode(FormMode::Registration)
            .on_success(move |_| *counter.borrow_mut() += 1);
        fill(&mut form, &complete_registration());

        let token = form.submit(&InstantAuth).await.unwrap();

        assert!(!token.is_admin());
        assert_eq!(*calls.borrow(), 1);
        assert_eq!(form.state(), &FormState::default());
        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.mode(), FormMode::Registration);
    }

    #[tokio::test]
    async fn test_backend_failure_keeps_values() {
        let mut form = FormController::new().on_success(|_| panic!("must not succeed"));
        form.update_field(Field::Email, "ada@example.com");
        form.update_field(Field::Password, "secret");

        let err = form.submit(&FailingAuth).await.unwrap_err();

        assert_eq!(err, SubmitError::Backend(AuthError::Network("offline".to_string())));
        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.state().password, "secret");
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        let mut form = FormController::new().on_success(move |_| *counter.borrow_mut() += 1);

        let first = form.begin_submit().unwrap();
        assert!(form.cancel_submission());
        let second = form.begin_submit().unwrap();

        let token = IdentityToken::new(Identity::Generic, "user-token-1");
        assert_eq!(form.complete(first.id, Ok(token.clone())), Err(SubmitError::Stale));
        assert!(form.is_loading());
        assert_eq!(form.complete(second.id, Ok(token.clone())), Ok(token.clone()));
        assert_eq!(form.complete(second.id, Ok(token)), Err(SubmitError::Stale));
        assert_eq!(*calls.borrow(), 1);
    }

    #[tokio::test]
    async fn test_dropping_submit_future_cancels() {
        let mut form = FormController::new();
        tokio::select! {
            biased;
            _ = form.submit(&NeverAuth) => unreachable!("never resolves"),
            _ = std::future::ready(()) => {}
        }
        assert_eq!(form.phase(), Phase::Editing);
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_cancel_navigation_invokes_callback_once() {
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        let mut form = FormController::new().on_cancel_navigation(move || *counter.borrow_mut() += 1);
        form.begin_submit().unwrap();

        form.cancel_navigation();

        assert_eq!(*calls.borrow(), 1);
        assert!(!form.is_loading());
    }

    #[test]
    fn test_observer_sees_phase_transitions() {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let log = changes.clone();
        let mut form = FormController::new().on_change(move |c| log.borrow_mut().push(c));

        let submission = form.begin_submit().unwrap();
        form.complete(submission.id, Ok(IdentityToken::new(Identity::Generic, "t")))
            .unwrap();

        assert_eq!(
            *changes.borrow(),
            vec![Change::Phase(Phase::Submitting), Change::Phase(Phase::Resolved)]
        );
    }

    #[test]
    fn test_success_callback_runs_after_registration_reset() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let changes = events.clone();
        let successes = events.clone();
        let mut form = FormController::new()
            .with_mode(FormMode::Registration)
            .on_change(move |c| changes.borrow_mut().push(format!("{c:?}")))
            .on_success(move |_| successes.borrow_mut().push("success".to_string()));
        fill(&mut form, &complete_registration());
        events.borrow_mut().clear();

        let submission = form.begin_submit().unwrap();
        form.complete(submission.id, Ok(IdentityToken::new(Identity::Generic, "t")))
            .unwrap();

        let events = events.borrow();
        assert_eq!(events.last().map(String::as_str), Some("success"));
        assert!(events.contains(&format!("{:?}", Change::Reset)));
        assert_eq!(form.mode(), FormMode::Registration);
        assert_eq!(form.phase(), Phase::Editing);
    }
}
