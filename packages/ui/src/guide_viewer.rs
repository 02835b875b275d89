use std::collections::HashMap;

use dioxus::prelude::*;
use portal::{find_guide, Guide, GuideProgress, GUIDES};

use crate::components::{Button, ButtonVariant};
use crate::icons::FaCircleCheck;
use crate::Icon;

/// List of available guides.
#[component]
pub fn GuideList(on_open: EventHandler<String>) -> Element {
    rsx! {
        section {
            class: "guides",
            h1 { "Guides" }
            ul {
                class: "guides__list",
                for guide in GUIDES {
                    li {
                        key: "{guide.slug}",
                        class: "guides__item",
                        h2 { "{guide.title}" }
                        p { "{guide.summary}" }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| on_open.call(guide.slug.to_string()),
                            "Start guide"
                        }
                    }
                }
            }
        }
    }
}

/// Step-by-step viewer for the guide named by `slug`.
///
/// Progress is kept per guide for as long as the viewer stays mounted, so
/// switching between guides does not lose it.
#[component]
pub fn GuideViewer(slug: String, on_back: EventHandler<()>) -> Element {
    let mut progress = use_signal(HashMap::<&'static str, GuideProgress>::new);

    let Some(guide) = find_guide(&slug) else {
        tracing::warn!(%slug, "unknown guide");
        return rsx! {
            section {
                class: "guides",
                p { "This guide does not exist." }
                Button { variant: ButtonVariant::Outline, onclick: move |_| on_back.call(()), "Back to guides" }
            }
        };
    };

    let mut update = move |apply: fn(&mut GuideProgress)| {
        let mut all = progress.write();
        apply(all.entry(guide.slug).or_insert_with(|| GuideProgress::for_guide(guide)));
    };

    let current_progress = progress_of(&progress.read(), guide);
    let current = current_progress.current();
    let percent = current_progress.percent();
    let done = current_progress.completed_count();
    let Some(step) = guide.steps.get(current).copied() else {
        return rsx! {};
    };
    let step_number = current + 1;
    let total = guide.steps.len();

    rsx! {
        section {
            class: "guide",
            header {
                class: "guide__header",
                h1 { "{guide.title}" }
                div {
                    class: "guide__progress",
                    role: "progressbar",
                    aria_valuenow: "{percent}",
                    div { class: "guide__progress-fill", style: "width: {percent}%" }
                }
                span { class: "guide__progress-label", "{done} of {total} steps done ({percent}%)" }
            }

            ol {
                class: "guide__steps",
                for (index, item) in guide.steps.iter().enumerate() {
                    li {
                        key: "{index}",
                        class: step_class(index == current),
                        onclick: move |_| {
                            let mut all = progress.write();
                            all.entry(guide.slug)
                                .or_insert_with(|| GuideProgress::for_guide(guide))
                                .go_to(index);
                        },
                        if current_progress.is_completed(index) {
                            Icon { icon: FaCircleCheck, width: 12, height: 12 }
                        }
                        " {item.title}"
                    }
                }
            }

            div {
                class: "guide__body",
                h2 { "Step {step_number} of {total}: {step.title}" }
                p { "{step.body}" }
            }

            if current_progress.is_complete() {
                div { class: "notice notice--success", "You've completed this guide." }
            }

            div {
                class: "guide__actions",
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: current_progress.is_first(),
                    onclick: move |_| update(GuideProgress::previous),
                    "Previous"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| update(GuideProgress::complete_current),
                    "Mark done"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| update(GuideProgress::restart),
                    "Restart"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_back.call(()),
                    "All guides"
                }
            }
        }
    }
}

fn progress_of(all: &HashMap<&'static str, GuideProgress>, guide: &Guide) -> GuideProgress {
    all.get(guide.slug)
        .cloned()
        .unwrap_or_else(|| GuideProgress::for_guide(guide))
}

fn step_class(current: bool) -> &'static str {
    if current {
        "guide__step guide__step--current"
    } else {
        "guide__step"
    }
}
