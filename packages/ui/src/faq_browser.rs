use dioxus::prelude::*;
use portal::{filter_faqs, FaqCategory, FAQS};

use crate::components::Input;
use crate::icons::{FaChevronDown, FaChevronRight};
use crate::Icon;

/// Searchable, filterable FAQ list.
#[component]
pub fn FaqBrowser() -> Element {
    let mut query = use_signal(String::new);
    let mut category = use_signal(|| Option::<FaqCategory>::None);
    let mut expanded = use_signal(|| Option::<&'static str>::None);

    let results = filter_faqs(FAQS, &query(), category());
    let selected = category().map(FaqCategory::label).unwrap_or("");

    rsx! {
        section {
            class: "faq",
            h1 { class: "faq__title", "Help Center" }

            div {
                class: "faq__filters",
                Input {
                    id: "faq-search",
                    input_type: "search",
                    value: query(),
                    placeholder: "Search questions",
                    oninput: move |evt: FormEvent| query.set(evt.value()),
                }
                select {
                    id: "faq-category",
                    class: "input",
                    value: "{selected}",
                    onchange: move |evt: FormEvent| category.set(FaqCategory::from_label(&evt.value())),
                    option { value: "", "All topics" }
                    for c in FaqCategory::ALL {
                        option { key: "{c}", value: "{c}", "{c}" }
                    }
                }
            }

            if results.is_empty() {
                p { class: "faq__empty", "No questions match your search." }
            }

            ul {
                class: "faq__list",
                for entry in results {
                    li {
                        key: "{entry.id}",
                        class: "faq__item",
                        button {
                            class: "faq__question",
                            r#type: "button",
                            onclick: move |_| {
                                let id = entry.id;
                                let open = expanded() == Some(id);
                                expanded.set(if open { None } else { Some(id) });
                            },
                            if expanded() == Some(entry.id) {
                                Icon { icon: FaChevronDown, width: 12, height: 12 }
                            } else {
                                Icon { icon: FaChevronRight, width: 12, height: 12 }
                            }
                            " {entry.question}"
                        }
                        if expanded() == Some(entry.id) {
                            p { class: "faq__answer", "{entry.answer}" }
                        }
                        span { class: "faq__tag", "{entry.category}" }
                    }
                }
            }
        }
    }
}
