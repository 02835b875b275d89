//! Sign-in / sign-up form driven by a [`FormController`].

use api::SimulatedAuth;
use dioxus::prelude::*;
use portal::{
    find_country, Authenticator, Field, FormController, FormMode, IdentityToken, LegalDocument,
    SubmitError, COUNTRIES,
};

use crate::components::{Button, ButtonVariant, Checkbox, Input, Label};
use crate::icons::FaArrowLeft;
use crate::strength_meter::PasswordStrengthMeter;
use crate::Icon;

/// Credential form component.
///
/// `on_success` receives the submitted mode and the identity token once per
/// successful submission. After a registration the form has already been
/// reset for signing in, so hosts normally act on [`FormMode::Login`] only.
/// `on_cancel` fires when the user backs out, and `on_open_document` asks the
/// container to show a legal document. The form opens in `initial_mode`.
#[component]
pub fn CredentialForm(
    on_success: EventHandler<(FormMode, IdentityToken)>,
    on_cancel: EventHandler<()>,
    on_open_document: EventHandler<LegalDocument>,
    #[props(default)] initial_mode: FormMode,
) -> Element {
    let auth = use_hook(|| SimulatedAuth::from_config(&api::load_config()));
    let mut notice = use_signal(|| Option::<String>::None);
    let mut registered = use_signal(|| false);
    let mut form = use_signal(move || {
        FormController::new()
            .with_mode(initial_mode)
            .on_cancel_navigation(move || on_cancel.call(()))
            .on_change(|change| tracing::trace!(?change, "credential form changed"))
    });

    let (mode, loading, state, strength, invalid_field) = {
        let form = form.read();
        let invalid_field = notice().and(form.validate().err().map(|e| e.field()));
        (
            form.mode(),
            form.is_loading(),
            form.state().clone(),
            form.password_strength(),
            invalid_field,
        )
    };
    let registering = mode == FormMode::Registration;
    let currency = find_country(&state.country).map(|c| c.currency_code);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        notice.set(None);
        registered.set(false);

        let submission = match form.write().begin_submit() {
            Ok(submission) => submission,
            Err(e) => {
                tracing::debug!(error = %e, "submission blocked");
                notice.set(Some(e.to_string()));
                return;
            }
        };

        spawn(async move {
            let result = auth.authenticate(&submission).await;
            // The write guard is released before the host handler runs.
            let outcome = form.write().complete(submission.id, result);
            match outcome {
                Ok(token) => {
                    if submission.mode == FormMode::Registration {
                        registered.set(true);
                    }
                    on_success.call((submission.mode, token));
                }
                Err(SubmitError::Stale) => {}
                Err(e) => notice.set(Some(e.to_string())),
            }
        });
    };

    let toggle_mode = move |_| {
        notice.set(None);
        registered.set(false);
        form.write().toggle_mode();
    };

    let (title, subtitle, submit_label, busy_label) = if registering {
        ("Create your account", "Join CipherLuma in a few minutes", "Create account", "Creating account...")
    } else {
        ("Welcome back", "Sign in to your CipherLuma account", "Sign in", "Signing in...")
    };

    rsx! {
        div {
            class: "auth-card",

            button {
                class: "auth-card__back",
                r#type: "button",
                title: "Back",
                onclick: move |_| form.write().cancel_navigation(),
                Icon { icon: FaArrowLeft, width: 14, height: 14 }
                " Back"
            }

            h1 { class: "auth-card__title", "{title}" }
            p { class: "auth-card__subtitle", "{subtitle}" }

            form {
                class: "auth-form",
                onsubmit: handle_submit,

                if let Some(message) = notice() {
                    div { class: "notice notice--error", role: "alert", "{message}" }
                }
                if registered() {
                    div {
                        class: "notice notice--success",
                        role: "status",
                        "Account created. You can now sign in."
                    }
                }

                if registering {
                    // NameRequired covers both inputs
                    div {
                        class: "field-row",
                        TextField { form, field: Field::FirstName, label: "First name", invalid: invalid_field == Some(Field::FirstName) }
                        TextField { form, field: Field::LastName, label: "Last name", invalid: invalid_field == Some(Field::FirstName) }
                    }
                }

                TextField {
                    form,
                    field: Field::Email,
                    label: "Email",
                    input_type: "email",
                    placeholder: "you@example.com",
                }
                TextField {
                    form,
                    field: Field::Password,
                    label: "Password",
                    input_type: "password",
                    invalid: invalid_field == Some(Field::Password),
                }
                if registering && !state.password.is_empty() {
                    PasswordStrengthMeter { strength }
                }

                if registering {
                    TextField {
                        form,
                        field: Field::ConfirmPassword,
                        label: "Confirm password",
                        input_type: "password",
                        invalid: invalid_field == Some(Field::ConfirmPassword),
                    }

                    div {
                        class: "field",
                        Label { html_for: Field::Country.name().to_string(), required: true, "Country" }
                        select {
                            id: Field::Country.name(),
                            name: Field::Country.name(),
                            class: "input",
                            required: true,
                            disabled: loading,
                            value: "{state.country}",
                            onchange: move |evt: FormEvent| form.write().update_field(Field::Country, evt.value()),
                            option { value: "", "Select your country" }
                            for country in COUNTRIES {
                                option {
                                    key: "{country.code}",
                                    value: "{country.code}",
                                    "{country.display_name} ({country.currency_code})"
                                }
                            }
                        }
                        if let Some(currency) = currency {
                            p { class: "field-hint", "Your account will hold {currency}." }
                        }
                    }

                    TextField {
                        form,
                        field: Field::PhoneNumber,
                        label: "Phone number",
                        input_type: "tel",
                        placeholder: "+1 555 0100",
                        invalid: invalid_field == Some(Field::PhoneNumber),
                    }
                    TextField {
                        form,
                        field: Field::DateOfBirth,
                        label: "Date of birth",
                        input_type: "date",
                        invalid: invalid_field == Some(Field::DateOfBirth),
                    }

                    Checkbox {
                        id: Field::AcceptTerms.name().to_string(),
                        checked: state.accept_terms,
                        disabled: loading,
                        on_toggle: move |checked: bool| form.write().update_field(Field::AcceptTerms, checked),
                        "I accept the "
                        DocumentLink { document: LegalDocument::Terms, on_open: on_open_document }
                        " and the "
                        DocumentLink { document: LegalDocument::UserAgreement, on_open: on_open_document }
                    }
                    Checkbox {
                        id: Field::AcceptPrivacy.name().to_string(),
                        checked: state.accept_privacy,
                        disabled: loading,
                        on_toggle: move |checked: bool| form.write().update_field(Field::AcceptPrivacy, checked),
                        "I have read the "
                        DocumentLink { document: LegalDocument::Privacy, on_open: on_open_document }
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "auth-form__submit",
                    submit: true,
                    disabled: loading,
                    if loading { "{busy_label}" } else { "{submit_label}" }
                }
            }

            p {
                class: "auth-card__switch",
                if registering { "Already have an account? " } else { "Don't have an account? " }
                Button {
                    variant: ButtonVariant::Ghost,
                    disabled: loading,
                    onclick: toggle_mode,
                    if registering { "Sign in" } else { "Sign up" }
                }
            }
        }
    }
}

/// One labelled text input bound to a form field.
#[component]
fn TextField(
    mut form: Signal<FormController>,
    field: Field,
    label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
    #[props(default)] invalid: bool,
) -> Element {
    let (value, required, disabled) = {
        let form = form.read();
        (
            form.state().text(field).unwrap_or_default().to_string(),
            form.mode().is_required(field),
            form.is_loading(),
        )
    };

    rsx! {
        div {
            class: "field",
            Label { html_for: field.name().to_string(), required, "{label}" }
            Input {
                id: field.name().to_string(),
                input_type,
                value,
                placeholder,
                required,
                disabled,
                invalid,
                oninput: move |evt: FormEvent| form.write().update_field(field, evt.value()),
            }
        }
    }
}

#[component]
fn DocumentLink(document: LegalDocument, on_open: EventHandler<LegalDocument>) -> Element {
    let title = document.title();

    rsx! {
        a {
            class: "doc-link",
            href: "#",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                on_open.call(document);
            },
            "{title}"
        }
    }
}
