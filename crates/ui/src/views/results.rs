use dioxus::prelude::*;

use crate::vm::ResultsVm;

#[component]
pub fn ResultsPanel(
    results: ResultsVm,
    on_restart: EventHandler<()>,
    on_try_again: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "quiz-results",
            h3 { class: "quiz-results__title", "Quiz Results" }
            p { class: "quiz-results__score", "{results.headline}" }
            p { class: "quiz-results__elapsed", "{results.elapsed_label}" }
            p { class: "quiz-results__missed", "{results.missed_label}" }
            ol { class: "quiz-review",
                for item in results.items {
                    li {
                        key: "{item.key}",
                        class: if item.is_correct { "quiz-review__item quiz-review__item--correct" } else { "quiz-review__item quiz-review__item--wrong" },
                        p { class: "quiz-review__prompt", "{item.title}" }
                        p { class: "quiz-review__answer", "{item.your_answer}" }
                        if let Some(correct) = item.correct_answer {
                            p { class: "quiz-review__correct", "{correct}" }
                        }
                        p { class: "quiz-review__explanation", "{item.explanation}" }
                    }
                }
            }
            div { class: "quiz-results__actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_try_again.call(()),
                    "Try again"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_restart.call(()),
                    "Restart Quiz"
                }
            }
        }
    }
}
