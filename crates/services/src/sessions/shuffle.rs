use rand::Rng;
use rand::seq::SliceRandom;

use quiz_core::model::Question;

/// Shuffle question order, then each question's options, independently.
///
/// Every option moves together with its original position, so the remapped correct index
/// follows the exact option that was correct before, even when option texts repeat.
pub fn shuffle_questions<R: Rng + ?Sized>(mut questions: Vec<Question>, rng: &mut R) -> Vec<Question> {
    questions.shuffle(rng);
    questions
        .iter()
        .map(|question| shuffle_options(question, rng))
        .collect()
}

/// Return a copy of `question` with its options in a uniformly random order.
pub fn shuffle_options<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> Question {
    let mut order: Vec<usize> = (0..question.options().len()).collect();
    order.shuffle(rng);
    // `order` is a permutation of the option positions by construction.
    question
        .reordered(&order)
        .unwrap_or_else(|| question.clone())
}
