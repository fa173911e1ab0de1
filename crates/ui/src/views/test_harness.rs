use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{Question, QuizCatalog, QuizChoice, QuizMode};
use quiz_core::time::fixed_clock;
use services::QuizLoopService;
use sources::{InMemorySource, QuestionSource, SourceError};

use crate::context::{UiApp, build_app_context};
use crate::views::quiz::{QuizIntent, QuizTestHandles};
use crate::views::{ModeSelectView, QuizView, SetSelectView};
use crate::vm::{QuestionCardVm, QuizVm};

#[derive(Clone)]
struct TestApp {
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for TestApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn answer_delay(&self) -> Duration {
        Duration::ZERO
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    ModeSelect,
    SetSelect(QuizMode),
    Quiz(QuizMode, QuizChoice),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    quiz_handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.quiz_handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::ModeSelect => rsx! { ModeSelectView {} },
        ViewKind::SetSelect(mode) => rsx! { SetSelectView { mode } },
        ViewKind::Quiz(mode, choice) => rsx! { QuizView { mode, choice } },
    }
}

/// Never answers, so the quiz view stays in its loading state.
pub struct PendingSource;

#[async_trait]
impl QuestionSource for PendingSource {
    async fn fetch_set(&self, _path: &str) -> Result<Vec<Question>, SourceError> {
        std::future::pending().await
    }
}

pub fn questions(prefix: &str, count: usize) -> Vec<Question> {
    (1..=count)
        .map(|n| {
            Question::new(
                format!("{prefix} question {n}"),
                vec!["right".into(), "wrong".into(), "nope".into()],
                0,
                format!("{prefix} explanation {n}"),
            )
            .expect("valid question")
        })
        .collect()
}

/// Three numbered sets of two questions each; the first two form the aggregate.
pub fn three_sets() -> InMemorySource {
    InMemorySource::new()
        .with_set("/assets/questions1.json", questions("s1", 2))
        .with_set("/assets/questions2.json", questions("s2", 2))
        .with_set("/assets/questions3.json", questions("s3", 2))
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub quiz_handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive pending work until the rendered html contains `needle`.
    pub async fn render_until(&mut self, needle: &str) -> String {
        let mut html = self.render();
        for _ in 0..20 {
            if html.contains(needle) {
                break;
            }
            self.drive_async().await;
            html = self.render();
        }
        html
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.quiz_handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn question_card(&self) -> Option<QuestionCardVm> {
        let vm = self.quiz_handles.vm();
        self.dom
            .in_runtime(|| vm.read().as_ref().and_then(QuizVm::question_card))
    }

    /// Index of the option labelled `text` on the current question.
    pub fn option_index(&self, text: &str) -> usize {
        self.question_card()
            .expect("question on screen")
            .options
            .iter()
            .find(|option| option.text == text)
            .expect("option present")
            .index
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, source: impl QuestionSource + 'static) -> ViewHarness {
    let catalog = QuizCatalog::numbered(3, 2).expect("catalog");
    let quiz_loop = Arc::new(QuizLoopService::new(
        fixed_clock(),
        Arc::new(source),
        Arc::new(catalog),
    ));
    let quiz_handles = QuizTestHandles::default();
    let app = Arc::new(TestApp { quiz_loop });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            quiz_handles: quiz_handles.clone(),
        },
    );

    ViewHarness { dom, quiz_handles }
}
