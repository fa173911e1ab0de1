use services::{QuizSummary, ReviewItem};

use crate::vm::time_fmt::format_elapsed;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewItemVm {
    pub key: String,
    pub title: String,
    pub is_correct: bool,
    pub your_answer: String,
    /// Only set for missed questions.
    pub correct_answer: Option<String>,
    pub explanation: String,
}

impl From<&ReviewItem> for ReviewItemVm {
    fn from(item: &ReviewItem) -> Self {
        let chosen = item.chosen.as_deref().unwrap_or("(no answer)");
        Self {
            key: format!("review-{}", item.number),
            title: format!("{}. {}", item.number, item.prompt),
            is_correct: item.is_correct,
            your_answer: format!("Your answer: {chosen}"),
            correct_answer: (!item.is_correct).then(|| format!("Correct answer: {}", item.correct)),
            explanation: item.explanation.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub label: String,
    pub headline: String,
    pub elapsed_label: String,
    pub missed: usize,
    pub missed_label: String,
    pub items: Vec<ReviewItemVm>,
}

#[must_use]
pub fn map_results(summary: &QuizSummary) -> ResultsVm {
    let missed = summary.missed().count();
    ResultsVm {
        label: summary.label.clone(),
        headline: format!("You scored {} out of {}!", summary.score, summary.total),
        elapsed_label: format!("Time: {}", format_elapsed(summary.elapsed())),
        missed,
        missed_label: format!("{missed} missed"),
        items: summary.items.iter().map(ReviewItemVm::from).collect(),
    }
}
