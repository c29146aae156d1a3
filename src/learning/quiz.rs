//! Quiz evaluation
//!
//! A quiz is a fixed list of multiple-choice questions. Learners fill an
//! [`AnswerSheet`], submit it once every question has a selection, and get a
//! [`QuizResult`] that stays locked in until they reset.
//!
//! Options are keyed by their position in the question. The authored label of
//! the correct option is resolved to an index when the question is built, so a
//! label typo fails loudly at load time instead of silently mis-scoring.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::error::LearningError;

/// A multiple-choice question with exactly one correct option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestion", into = "RawQuestion")]
pub struct QuizQuestion {
    prompt: String,
    options: Vec<String>,
    correct_index: usize,
}

/// Authored form of a question: the correct answer is given by its label
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawQuestion {
    prompt: String,
    options: Vec<String>,
    correct: String,
}

impl QuizQuestion {
    /// Build a question, resolving `correct_option` against `options` by exact match
    pub fn new<S: Into<String>>(
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = S>,
        correct_option: &str,
    ) -> Result<Self, LearningError> {
        let prompt = prompt.into();
        let options: Vec<String> = options.into_iter().map(Into::into).collect();

        if options.len() < 2 {
            return Err(LearningError::InvalidQuestion(format!(
                "'{}' needs at least two options",
                prompt
            )));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = options.iter().find(|o| !seen.insert(o.as_str())) {
            return Err(LearningError::InvalidQuestion(format!(
                "'{}' lists option '{}' more than once",
                prompt, dup
            )));
        }

        let correct_index =
            options.iter().position(|o| o == correct_option).ok_or_else(|| {
                LearningError::InvalidQuestion(format!(
                    "'{}' has correct answer '{}' which is not one of its options",
                    prompt, correct_option
                ))
            })?;

        Ok(Self { prompt, options, correct_index })
    }

    /// Question text
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Option labels in display order
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Index of the correct option
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Label of the correct option
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }

    /// Find an option by its exact label (case-sensitive, no trimming)
    pub fn option_index(&self, label: &str) -> Option<usize> {
        self.options.iter().position(|o| o == label)
    }
}

impl TryFrom<RawQuestion> for QuizQuestion {
    type Error = LearningError;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        QuizQuestion::new(raw.prompt, raw.options, &raw.correct)
    }
}

impl From<QuizQuestion> for RawQuestion {
    fn from(q: QuizQuestion) -> Self {
        let correct = q.options[q.correct_index].clone();
        Self { prompt: q.prompt, options: q.options, correct }
    }
}

/// The learner's in-progress selections, one slot per question
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    answers: Vec<Option<usize>>,
}

impl AnswerSheet {
    /// Create an empty sheet for `len` questions
    pub fn new(len: usize) -> Self {
        Self { answers: vec![None; len] }
    }

    /// Selected option for a question, if any
    pub fn get(&self, question: usize) -> Option<usize> {
        self.answers.get(question).copied().flatten()
    }

    fn set(&mut self, question: usize, option: usize) {
        if let Some(slot) = self.answers.get_mut(question) {
            *slot = Some(option);
        }
    }

    /// Number of questions with a selection
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    /// True when every question has a selection
    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }

    /// True when no question has a selection yet
    pub fn is_empty(&self) -> bool {
        self.answered_count() == 0
    }

    fn clear(&mut self) {
        self.answers.iter_mut().for_each(|a| *a = None);
    }
}

/// Outcome of a submitted quiz
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    /// Number of questions answered correctly
    pub correct_count: usize,
    /// Per-question correctness, in question order
    pub per_question_correct: Vec<bool>,
}

impl QuizResult {
    /// Number of questions scored
    pub fn total(&self) -> usize {
        self.per_question_correct.len()
    }

    /// True when every question was answered correctly
    pub fn is_perfect(&self) -> bool {
        self.correct_count == self.total()
    }

    /// Score as a percentage (0-100), rounded down
    pub fn percent(&self) -> u8 {
        if self.total() == 0 {
            return 0;
        }
        ((self.correct_count * 100) / self.total()) as u8
    }

    /// Feedback line shown after submission
    pub fn message(&self) -> String {
        if self.is_perfect() {
            format!("Perfect score! {}/{} correct", self.correct_count, self.total())
        } else {
            format!("You scored {}/{}", self.correct_count, self.total())
        }
    }
}

/// Where the quiz is in its lifecycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QuizState {
    /// Collecting answers
    #[default]
    Unanswered,
    /// Scored; answers are read-only until reset
    Submitted(QuizResult),
}

/// How an option should be presented after submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionFeedback {
    /// The keyed answer
    Correct,
    /// Selected by the learner, but wrong
    Incorrect,
    /// Neither selected nor correct
    Neutral,
}

/// Evaluates a fixed quiz against learner answers
#[derive(Debug, Clone)]
pub struct QuizEngine {
    questions: Vec<QuizQuestion>,
    answers: AnswerSheet,
    state: QuizState,
}

impl QuizEngine {
    /// Create an engine for a non-empty list of questions
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, LearningError> {
        if questions.is_empty() {
            return Err(LearningError::InvalidQuestion("quiz has no questions".into()));
        }
        let answers = AnswerSheet::new(questions.len());
        Ok(Self { questions, answers, state: QuizState::Unanswered })
    }

    /// Questions in quiz order
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// Number of questions
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed engine
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Current selections
    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    /// Lifecycle state, holding the result once submitted
    pub fn state(&self) -> &QuizState {
        &self.state
    }

    /// True between a successful submit and the next reset
    pub fn is_submitted(&self) -> bool {
        matches!(self.state, QuizState::Submitted(_))
    }

    /// Result of the last submission, if the quiz is submitted
    pub fn result(&self) -> Option<&QuizResult> {
        match &self.state {
            QuizState::Submitted(result) => Some(result),
            QuizState::Unanswered => None,
        }
    }

    /// Number of questions with a selection
    pub fn answered_count(&self) -> usize {
        self.answers.answered_count()
    }

    /// Select an option by index. Last write wins.
    pub fn select_answer(&mut self, question: usize, option: usize) -> Result<(), LearningError> {
        if self.is_submitted() {
            return Err(LearningError::AlreadySubmitted);
        }

        let q = self.questions.get(question).ok_or_else(|| {
            LearningError::InvalidOptionSelection { question, option: format!("option #{}", option) }
        })?;
        if option >= q.options.len() {
            return Err(LearningError::InvalidOptionSelection {
                question,
                option: format!("option #{}", option),
            });
        }

        tracing::debug!("Question {} answered with option {}", question, option);
        self.answers.set(question, option);
        Ok(())
    }

    /// Select an option by its exact label
    pub fn select_option(&mut self, question: usize, label: &str) -> Result<(), LearningError> {
        if self.is_submitted() {
            return Err(LearningError::AlreadySubmitted);
        }

        let option = self
            .questions
            .get(question)
            .and_then(|q| q.option_index(label))
            .ok_or_else(|| LearningError::InvalidOptionSelection {
                question,
                option: label.to_string(),
            })?;

        self.select_answer(question, option)
    }

    /// True when every question has a selection and the quiz is not yet submitted
    pub fn can_submit(&self) -> bool {
        !self.is_submitted() && self.answers.is_complete()
    }

    /// Score the answer sheet and lock it. The result stays available through [`Self::result`].
    pub fn submit(&mut self) -> Result<QuizResult, LearningError> {
        if self.is_submitted() {
            return Err(LearningError::AlreadySubmitted);
        }
        if !self.answers.is_complete() {
            let err = LearningError::IncompleteAnswers {
                answered: self.answers.answered_count(),
                total: self.questions.len(),
            };
            tracing::warn!("Rejected submission: {}", err);
            return Err(err);
        }

        let per_question_correct: Vec<bool> = self
            .questions
            .iter()
            .enumerate()
            .map(|(i, q)| self.answers.get(i) == Some(q.correct_index))
            .collect();
        let correct_count = per_question_correct.iter().filter(|c| **c).count();

        tracing::debug!("Quiz submitted: {}/{} correct", correct_count, self.questions.len());
        let result = QuizResult { correct_count, per_question_correct };
        self.state = QuizState::Submitted(result.clone());
        Ok(result)
    }

    /// Clear all answers and discard any result
    pub fn reset(&mut self) {
        tracing::debug!("Quiz reset");
        self.answers.clear();
        self.state = QuizState::Unanswered;
    }

    /// True when submitted with every question correct; false before submission
    pub fn is_perfect_score(&self) -> bool {
        self.result().is_some_and(QuizResult::is_perfect)
    }

    /// Feedback classification for one option, available only after submission
    pub fn option_feedback(&self, question: usize, option: usize) -> Option<OptionFeedback> {
        self.result()?;
        let q = self.questions.get(question)?;
        if option >= q.options.len() {
            return None;
        }

        let feedback = if option == q.correct_index {
            OptionFeedback::Correct
        } else if self.answers.get(question) == Some(option) {
            OptionFeedback::Incorrect
        } else {
            OptionFeedback::Neutral
        };
        Some(feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn banking_quiz() -> QuizEngine {
        let questions = vec![
            QuizQuestion::new("Q1", ["Savings", "FD", "RD", "Current"], "Savings").unwrap(),
            QuizQuestion::new("Q2", ["Savings", "FD", "Current", "RD"], "Current").unwrap(),
            QuizQuestion::new(
                "Q3",
                ["Once a year", "Every month", "Weekly", "Whenever you want"],
                "Every month",
            )
            .unwrap(),
        ];
        QuizEngine::new(questions).unwrap()
    }

    fn answer_all(engine: &mut QuizEngine, labels: &[&str]) {
        for (i, label) in labels.iter().enumerate() {
            engine.select_option(i, label).unwrap();
        }
    }

    #[test]
    fn all_correct_is_perfect() {
        let mut engine = banking_quiz();
        answer_all(&mut engine, &["Savings", "Current", "Every month"]);

        let result = engine.submit().unwrap();
        assert_eq!(result.correct_count, 3);
        assert!(engine.is_perfect_score());
        assert_eq!(engine.result().unwrap().message(), "Perfect score! 3/3 correct");
    }

    #[test]
    fn partial_score_reports_each_question() {
        let mut engine = banking_quiz();
        answer_all(&mut engine, &["FD", "Current", "Every month"]);

        let result = engine.submit().unwrap();
        assert_eq!(
            result,
            QuizResult { correct_count: 2, per_question_correct: vec![false, true, true] }
        );
        assert!(!engine.is_perfect_score());
        assert_eq!(result.message(), "You scored 2/3");
        assert_eq!(result.percent(), 66);
    }

    #[test]
    fn submit_result_matches_stored_result() {
        let mut engine = banking_quiz();
        answer_all(&mut engine, &["RD", "Current", "Weekly"]);

        let returned = engine.submit().unwrap();
        assert_eq!(engine.result(), Some(&returned));
        assert_eq!(engine.state(), &QuizState::Submitted(returned));
    }

    #[test]
    fn submit_with_missing_answer_is_rejected() {
        let mut engine = banking_quiz();
        engine.select_option(0, "Savings").unwrap();
        engine.select_option(1, "Current").unwrap();

        assert!(!engine.can_submit());
        let err = engine.submit().unwrap_err();
        assert_eq!(err, LearningError::IncompleteAnswers { answered: 2, total: 3 });
        assert_eq!(engine.state(), &QuizState::Unanswered);
        assert!(engine.result().is_none());
    }

    #[test]
    fn reset_clears_answers_and_result() {
        let mut engine = banking_quiz();
        answer_all(&mut engine, &["Savings", "Current", "Every month"]);
        engine.submit().unwrap();

        engine.reset();
        assert_eq!(engine.state(), &QuizState::Unanswered);
        assert!(engine.answers().is_empty());
        assert!(!engine.can_submit());
        assert!(!engine.is_perfect_score());

        engine.select_option(0, "RD").unwrap();
        engine.select_option(1, "FD").unwrap();
        assert!(!engine.can_submit());
        engine.select_option(2, "Weekly").unwrap();
        assert!(engine.can_submit());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let question =
            QuizQuestion::new("Which account?", ["Savings", "savings", "FD"], "Savings").unwrap();
        let mut engine = QuizEngine::new(vec![question]).unwrap();

        engine.select_option(0, "savings").unwrap();
        let result = engine.submit().unwrap();
        assert_eq!(result.correct_count, 0);
        assert_eq!(result.per_question_correct, vec![false]);
    }

    #[test]
    fn unlisted_label_is_an_invalid_selection() {
        let mut engine = banking_quiz();
        let err = engine.select_option(0, "savings").unwrap_err();
        assert_eq!(
            err,
            LearningError::InvalidOptionSelection { question: 0, option: "savings".into() }
        );
        assert_eq!(engine.answers().get(0), None);
    }

    #[test]
    fn out_of_range_selection_is_rejected() {
        let mut engine = banking_quiz();
        assert!(matches!(
            engine.select_answer(3, 0),
            Err(LearningError::InvalidOptionSelection { question: 3, .. })
        ));
        assert!(matches!(
            engine.select_answer(0, 4),
            Err(LearningError::InvalidOptionSelection { question: 0, .. })
        ));
    }

    #[test]
    fn last_selection_wins() {
        let mut engine = banking_quiz();
        engine.select_option(0, "FD").unwrap();
        engine.select_option(0, "Savings").unwrap();
        assert_eq!(engine.answers().get(0), Some(0));
        assert_eq!(engine.answered_count(), 1);
    }

    #[test]
    fn answers_are_locked_after_submit() {
        let mut engine = banking_quiz();
        answer_all(&mut engine, &["FD", "Current", "Every month"]);
        engine.submit().unwrap();

        assert_eq!(engine.select_option(0, "Savings"), Err(LearningError::AlreadySubmitted));
        assert!(matches!(engine.submit(), Err(LearningError::AlreadySubmitted)));
        assert_eq!(engine.result().unwrap().correct_count, 2);
    }

    #[test]
    fn option_feedback_marks_correct_and_wrong_choice() {
        let mut engine = banking_quiz();
        assert_eq!(engine.option_feedback(0, 0), None);

        answer_all(&mut engine, &["FD", "Current", "Every month"]);
        engine.submit().unwrap();

        assert_eq!(engine.option_feedback(0, 0), Some(OptionFeedback::Correct));
        assert_eq!(engine.option_feedback(0, 1), Some(OptionFeedback::Incorrect));
        assert_eq!(engine.option_feedback(0, 2), Some(OptionFeedback::Neutral));
        assert_eq!(engine.option_feedback(1, 2), Some(OptionFeedback::Correct));
        assert_eq!(engine.option_feedback(0, 9), None);
    }

    #[test]
    fn question_requires_two_unique_options_and_listed_answer() {
        assert!(matches!(
            QuizQuestion::new("Q", ["Only"], "Only"),
            Err(LearningError::InvalidQuestion(_))
        ));
        assert!(matches!(
            QuizQuestion::new("Q", ["A", "A"], "A"),
            Err(LearningError::InvalidQuestion(_))
        ));
        assert!(matches!(
            QuizQuestion::new("Q", ["A", "B"], "C"),
            Err(LearningError::InvalidQuestion(_))
        ));
    }

    #[test]
    fn engine_rejects_empty_quiz() {
        assert!(matches!(QuizEngine::new(Vec::new()), Err(LearningError::InvalidQuestion(_))));
    }

    #[test]
    fn question_deserializes_from_authored_json() {
        let json = r#"{"prompt":"Q2","options":["Savings","FD","Current","RD"],"correct":"Current"}"#;
        let question: QuizQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(question.correct_index(), 2);
        assert_eq!(question.correct_option(), "Current");
    }

    #[test]
    fn question_with_unknown_answer_fails_to_deserialize() {
        let json = r#"{"prompt":"Q","options":["Savings","FD"],"correct":"savings"}"#;
        assert!(serde_json::from_str::<QuizQuestion>(json).is_err());
    }
}
