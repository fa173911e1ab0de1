use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;
use crate::vm::mode_buttons;

#[component]
pub fn ModeSelectView() -> Element {
    let navigator = use_navigator();
    let buttons = mode_buttons().into_iter().map(|button| {
        let mode = button.mode;
        rsx! {
            div { key: "{mode}", class: "mode-choice",
                button {
                    class: "btn {button.class}",
                    r#type: "button",
                    onclick: move |_| {
                        navigator.push(Route::Sets { mode });
                    },
                    "{button.label}"
                }
                p { class: "mode-choice__hint", "{button.description}" }
            }
        }
    });

    rsx! {
        div { class: "page mode-select",
            h2 { class: "view-title", "Select Quiz Mode" }
            div { class: "choice-list", {buttons} }
        }
    }
}
