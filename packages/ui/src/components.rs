//! Small form primitives shared by every view.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn--primary",
            ButtonVariant::Secondary => "btn btn--secondary",
            ButtonVariant::Outline => "btn btn--outline",
            ButtonVariant::Ghost => "btn btn--ghost",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    /// Render as a form submit button.
    #[props(default)]
    submit: bool,
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let button_type = if submit { "submit" } else { "button" };
    let variant_class = variant.class();

    rsx! {
        button {
            class: "{variant_class} {class}",
            r#type: button_type,
            disabled,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Label(html_for: String, #[props(default)] required: bool, children: Element) -> Element {
    rsx! {
        label {
            class: "field-label",
            r#for: "{html_for}",
            {children}
            if required {
                span { class: "field-label__required", " *" }
            }
        }
    }
}

#[component]
pub fn Input(
    id: String,
    #[props(default = "text".to_string())] input_type: String,
    value: String,
    #[props(default)] placeholder: String,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    #[props(default)] invalid: bool,
    #[props(default)] class: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let state_class = if invalid { "input input--invalid" } else { "input" };

    rsx! {
        input {
            id: "{id}",
            name: "{id}",
            class: "{state_class} {class}",
            r#type: "{input_type}",
            value: "{value}",
            placeholder: "{placeholder}",
            required,
            disabled,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

/// A checkbox with its label on the right.
#[component]
pub fn Checkbox(
    id: String,
    checked: bool,
    #[props(default)] disabled: bool,
    on_toggle: EventHandler<bool>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "checkbox",
            input {
                id: "{id}",
                name: "{id}",
                r#type: "checkbox",
                checked,
                disabled,
                onchange: move |evt: FormEvent| on_toggle.call(evt.checked()),
            }
            label { r#for: "{id}", {children} }
        }
    }
}
