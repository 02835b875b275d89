use dioxus::prelude::*;
use portal::strength::MAX_SCORE;
use portal::{PasswordStrength, StrengthLabel};

/// Segmented bar with the Weak / Medium / Strong label.
#[component]
pub fn PasswordStrengthMeter(strength: PasswordStrength) -> Element {
    let label = strength.label();
    let modifier = match label {
        StrengthLabel::Weak => "weak",
        StrengthLabel::Medium => "medium",
        StrengthLabel::Strong => "strong",
    };
    let score = strength.score();

    rsx! {
        div {
            class: "strength strength--{modifier}",
            role: "meter",
            aria_valuemin: "0",
            aria_valuemax: "{MAX_SCORE}",
            aria_valuenow: "{score}",
            div {
                class: "strength__bar",
                for segment in 0..MAX_SCORE {
                    span {
                        key: "{segment}",
                        class: segment_class(segment < score),
                    }
                }
            }
            span { class: "strength__label", "Password strength: {label}" }
            if !strength.meets_registration_minimum() {
                p {
                    class: "strength__hint",
                    "Use at least 8 characters with upper and lower case letters, numbers and symbols."
                }
            }
        }
    }
}

fn segment_class(filled: bool) -> &'static str {
    if filled {
        "strength__segment strength__segment--filled"
    } else {
        "strength__segment"
    }
}
