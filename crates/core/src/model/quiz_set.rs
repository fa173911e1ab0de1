use crate::model::Question;

/// Ordered questions assembled from one source, or from several concatenated in request order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSet {
    label: String,
    questions: Vec<Question>,
}

impl QuizSet {
    #[must_use]
    pub fn new(label: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            label: label.into(),
            questions,
        }
    }

    /// Concatenate sets in the order given, ignoring their own labels.
    #[must_use]
    pub fn concat(label: impl Into<String>, sets: impl IntoIterator<Item = QuizSet>) -> Self {
        let questions = sets
            .into_iter()
            .flat_map(|set| set.questions)
            .collect();
        Self::new(label, questions)
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
