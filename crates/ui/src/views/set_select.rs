use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use quiz_core::model::QuizMode;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{aggregate_button, map_set_buttons};

#[component]
pub fn SetSelectView(mode: QuizMode) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz_loop = ctx.quiz_loop();
    let catalog = quiz_loop.catalog();
    let set_buttons = map_set_buttons(catalog);
    let aggregate = aggregate_button(catalog);
    let aggregate_choice = aggregate.choice;

    let buttons = set_buttons.into_iter().map(|button| {
        let choice = button.choice;
        rsx! {
            button {
                key: "{button.key}",
                class: "btn btn-set",
                r#type: "button",
                onclick: move |_| {
                    navigator.push(Route::Quiz { mode, choice });
                },
                "{button.label}"
            }
        }
    });

    rsx! {
        div { class: "page set-select",
            h2 { class: "view-title", "{mode.label()}" }
            p { class: "view-subtitle", "Choose a question set" }
            div { class: "set-grid", {buttons} }
            button {
                class: "btn btn-primary btn-aggregate",
                r#type: "button",
                onclick: move |_| {
                    navigator.push(Route::Quiz { mode, choice: aggregate_choice });
                },
                "{aggregate.label}"
            }
            Link { class: "back-link", to: Route::Home {}, "Change mode" }
        }
    }
}
