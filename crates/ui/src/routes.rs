use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};
use quiz_core::model::{QuizChoice, QuizMode};

use crate::views::{ModeSelectView, QuizView, SetSelectView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", ModeSelectView)] Home {},
        #[route("/sets/:mode", SetSelectView)] Sets { mode: QuizMode },
        #[route("/quiz/:mode/:choice", QuizView)] Quiz { mode: QuizMode, choice: QuizChoice },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "app-header",
                h1 { Link { to: Route::Home {}, "Quiz" } }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
