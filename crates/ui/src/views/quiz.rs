use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use quiz_core::model::{QuizChoice, QuizMode};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ResultsPanel, ViewError, ViewState, view_state_from_resource};
use crate::vm::{QuizStep, QuizVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum QuizIntent {
    Choose(usize),
    Next,
    TryAgain,
}

#[component]
pub fn QuizView(mode: QuizMode, choice: QuizChoice) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz_loop = ctx.quiz_loop();
    let answer_delay = ctx.answer_delay();

    let error = use_signal(|| None::<ViewError>);
    let vm = use_signal(|| None::<QuizVm>);

    let quiz_loop_for_resource = quiz_loop.clone();
    let resource = use_resource(move || {
        let quiz_loop = quiz_loop_for_resource.clone();
        let mut error = error;
        let mut vm = vm;

        async move {
            let session = quiz_loop
                .start(mode, choice)
                .await
                .map_err(|err| ViewError::from(&err))?;
            vm.set(Some(QuizVm::new(session)));
            error.set(None);
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&resource);

    let dispatch_intent = {
        let quiz_loop = quiz_loop.clone();
        use_callback(move |intent: QuizIntent| {
            let mut error = error;
            let mut vm = vm;

            let result = match intent {
                QuizIntent::Choose(option) => vm
                    .write()
                    .as_mut()
                    .map(|current| current.choose(&quiz_loop, option)),
                QuizIntent::Next => vm.write().as_mut().map(|current| current.next(&quiz_loop)),
                QuizIntent::TryAgain => {
                    let taken = vm.write().take();
                    taken.map(|current| {
                        current.restart(&quiz_loop).map(|restarted| {
                            vm.set(Some(restarted));
                            QuizStep::Applied
                        })
                    })
                }
            };

            match result {
                Some(Ok(QuizStep::Pending)) => {
                    error.set(None);
                    let quiz_loop = quiz_loop.clone();
                    spawn(async move {
                        tokio::time::sleep(answer_delay).await;
                        let committed = vm
                            .write()
                            .as_mut()
                            .map(|current| current.commit_pending(&quiz_loop));
                        if let Some(Err(err)) = committed {
                            error.set(Some(err));
                        }
                    });
                }
                Some(Ok(_)) => error.set(None),
                Some(Err(err)) => error.set(Some(err)),
                None => error.set(Some(ViewError::Unknown)),
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let on_retry = {
        let mut resource = resource;
        use_callback(move |()| resource.restart())
    };
    let on_try_again = use_callback(move |()| dispatch_intent.call(QuizIntent::TryAgain));
    let on_restart = use_callback(move |()| {
        navigator.push(Route::Home {});
    });

    let vm_guard = vm.read();
    let set_label = vm_guard.as_ref().map_or_else(
        || quiz_loop.catalog().label_for(choice).map(str::to_string),
        |current| Some(current.label().to_string()),
    );
    let title = set_label.map_or_else(
        || mode.label().to_string(),
        |label| format!("{} · {label}", mode.label()),
    );
    let card = vm_guard.as_ref().and_then(QuizVm::question_card);
    let feedback = vm_guard.as_ref().and_then(QuizVm::feedback);
    let results = vm_guard.as_ref().and_then(QuizVm::results);
    let action_error = *error.read();

    rsx! {
        div { class: "page quiz",
            h2 { class: "view-title", "{title}" }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "quiz-loading", "Loading questions..." }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "quiz-error",
                        p { "{err.message()}" }
                        if err.is_retryable() {
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| on_retry.call(()),
                                "Retry"
                            }
                        }
                        Link { class: "back-link", to: Route::Sets { mode }, "Back to sets" }
                    }
                },
                ViewState::Ready(()) => rsx! {
                    if let Some(results) = results {
                        ResultsPanel {
                            results,
                            on_restart: move |()| on_restart.call(()),
                            on_try_again: move |()| on_try_again.call(()),
                        }
                    } else if let Some(card) = card {
                        div { class: "quiz-card",
                            div { class: "quiz-progress",
                                span { class: "quiz-progress__label", "{card.title} {card.progress_label}" }
                                div { class: "quiz-progress__track",
                                    div {
                                        class: "quiz-progress__bar",
                                        style: "width: {card.progress_percent}%",
                                    }
                                }
                            }
                            h3 { class: "quiz-prompt", "{card.prompt}" }
                            div { class: "quiz-options",
                                for option in card.options {
                                    button {
                                        key: "{option.index}",
                                        class: "{option.mark.class()}",
                                        r#type: "button",
                                        disabled: option.disabled,
                                        onclick: move |_| dispatch_intent.call(QuizIntent::Choose(option.index)),
                                        "{option.text}{option.mark.suffix()}"
                                    }
                                }
                            }
                            if let Some(feedback) = feedback {
                                div {
                                    class: if feedback.is_correct { "quiz-feedback quiz-feedback--correct" } else { "quiz-feedback quiz-feedback--wrong" },
                                    p { class: "quiz-feedback__headline", "{feedback.headline}" }
                                    if let Some(answer) = feedback.correct_answer {
                                        p { class: "quiz-feedback__answer", "Correct answer: {answer}" }
                                    }
                                    p { class: "quiz-feedback__explanation", "{feedback.explanation}" }
                                    button {
                                        class: "btn btn-primary",
                                        r#type: "button",
                                        onclick: move |_| dispatch_intent.call(QuizIntent::Next),
                                        "{feedback.next_label}"
                                    }
                                }
                            }
                        }
                    } else {
                        p { class: "quiz-loading", "Loading questions..." }
                    }
                    if let Some(err) = action_error {
                        p { class: "quiz-action-error", "{err.message()}" }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<QuizVm>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, vm: Signal<Option<QuizVm>>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<QuizVm>> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }
}
