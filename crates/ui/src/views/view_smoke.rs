use quiz_core::model::{QuestionDraft, QuizChoice, QuizMode};
use sources::{InMemorySource, SourceError};

use super::quiz::QuizIntent;
use super::test_harness::{PendingSource, ViewKind, setup_view_harness, three_sets};

#[tokio::test(flavor = "current_thread")]
async fn mode_select_smoke_renders_both_modes() {
    let mut harness = setup_view_harness(ViewKind::ModeSelect, three_sets());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Select Quiz Mode"), "missing title in {html}");
    assert!(html.contains("Practice Mode"), "missing practice button in {html}");
    assert!(html.contains("Test Mode"), "missing test button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn set_select_smoke_lists_sets_and_aggregate() {
    let mut harness = setup_view_harness(ViewKind::SetSelect(QuizMode::Test), three_sets());
    harness.rebuild();
    let html = harness.render();
    for label in ["Set 1", "Set 2", "Set 3"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
    assert!(
        html.contains("Take Large Quiz (Sets 1-2)"),
        "missing aggregate button in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_shows_loading_while_fetching() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz(QuizMode::Practice, QuizChoice::Set(0)),
        PendingSource,
    );
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Loading questions..."), "missing loading text in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz(QuizMode::Practice, QuizChoice::Set(1)),
        three_sets(),
    );
    harness.rebuild();
    let html = harness.render_until("Question 1 of 2").await;
    assert!(html.contains("Question 1 of 2"), "missing question header in {html}");
    assert!(html.contains("(1/2)"), "missing progress in {html}");
    assert!(html.contains("s2 question"), "missing prompt in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_reports_fetch_failure_with_retry() {
    let source = three_sets().with_failure(
        "/assets/questions2.json",
        SourceError::HttpStatus {
            path: "/assets/questions2.json".into(),
            status: 500,
        },
    );
    let mut harness =
        setup_view_harness(ViewKind::Quiz(QuizMode::Test, QuizChoice::Aggregate), source);
    harness.rebuild();
    let html = harness.render_until("Could not load").await;
    assert!(html.contains("Could not load the questions"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_reports_damaged_set_without_retry() {
    let source = InMemorySource::new().with_drafts(
        "/assets/questions1.json",
        vec![QuestionDraft {
            question: "Which option?".into(),
            options: vec!["only".into(), "two".into()],
            answer: 5,
            explanation: String::new(),
        }],
    );
    let mut harness =
        setup_view_harness(ViewKind::Quiz(QuizMode::Practice, QuizChoice::Set(0)), source);
    harness.rebuild();
    let html = harness.render_until("damaged").await;
    assert!(html.contains("This quiz set is damaged"), "missing damaged message in {html}");
    assert!(!html.contains("Check your connection"), "reported as connection problem in {html}");
    assert!(!html.contains("Retry"), "unexpected retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_titles_set_before_questions_load() {
    let mut harness =
        setup_view_harness(ViewKind::Quiz(QuizMode::Test, QuizChoice::Set(2)), PendingSource);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Test Mode · Set 3"), "missing set title in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_reports_empty_set_without_retry() {
    let source = InMemorySource::new().with_set("/assets/questions1.json", Vec::new());
    let mut harness =
        setup_view_harness(ViewKind::Quiz(QuizMode::Practice, QuizChoice::Set(0)), source);
    harness.rebuild();
    let html = harness.render_until("no questions").await;
    assert!(html.contains("This quiz set has no questions yet."), "missing empty message in {html}");
    assert!(!html.contains("Retry"), "unexpected retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_flow_shows_feedback_then_next_question() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz(QuizMode::Practice, QuizChoice::Set(0)),
        three_sets(),
    );
    harness.rebuild();
    harness.render_until("Question 1 of 2").await;

    let wrong = harness.option_index("wrong");
    harness.dispatch(QuizIntent::Choose(wrong));
    let html = harness.render();
    assert!(html.contains("wrong (Wrong)"), "missing wrong marker in {html}");
    assert!(html.contains("right (Correct)"), "missing correct marker in {html}");
    assert!(html.contains("Correct answer: right"), "missing correct answer in {html}");
    assert!(html.contains("s1 explanation"), "missing explanation in {html}");
    assert!(html.contains("Next"), "missing next button in {html}");

    harness.dispatch(QuizIntent::Next);
    let html = harness.render();
    assert!(html.contains("Question 2 of 2"), "missing second question in {html}");
    assert!(!html.contains("Correct answer:"), "stale feedback in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn test_flow_advances_after_delay_and_shows_results() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz(QuizMode::Test, QuizChoice::Set(2)),
        three_sets(),
    );
    harness.rebuild();
    harness.render_until("Question 1 of 2").await;

    let right = harness.option_index("right");
    harness.dispatch(QuizIntent::Choose(right));
    let html = harness.render_until("Question 2 of 2").await;
    assert!(html.contains("Question 2 of 2"), "did not advance in {html}");
    assert!(!html.contains("(Correct)"), "test mode leaked feedback in {html}");

    let wrong = harness.option_index("wrong");
    harness.dispatch(QuizIntent::Choose(wrong));
    let html = harness.render_until("You scored").await;
    assert!(html.contains("You scored 1 out of 2!"), "missing score in {html}");
    assert!(html.contains("Your answer: wrong"), "missing review line in {html}");
    assert!(html.contains("1 missed"), "missing missed count in {html}");
    assert!(html.contains("Correct answer: right"), "missing correct answer in {html}");
    assert!(html.contains("Restart Quiz"), "missing restart in {html}");
    assert!(html.contains("Try again"), "missing try again in {html}");

    harness.dispatch(QuizIntent::TryAgain);
    let html = harness.render();
    assert!(html.contains("Question 1 of 2"), "try again did not restart in {html}");
    assert!(html.contains("s3 question"), "try again changed the set in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn aggregate_quiz_combines_leading_sets() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz(QuizMode::Test, QuizChoice::Aggregate),
        three_sets(),
    );
    harness.rebuild();
    let html = harness.render_until("Question 1 of 4").await;
    assert!(html.contains("Question 1 of 4"), "aggregate size wrong in {html}");
    assert!(html.contains("Large Quiz (Sets 1-2)"), "missing aggregate label in {html}");
}
