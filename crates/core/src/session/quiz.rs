use std::fmt;
use thiserror::Error;

use crate::model::{ChoiceIndex, Question};

use super::report::{Report, score};
use super::view::{Progress, QuestionView};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,

    #[error("choice {index} is out of range for a question with {len} choices")]
    InvalidChoice { index: usize, len: usize },

    #[error("session already submitted")]
    Submitted,
}

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    InProgress,
    Submitted,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One user's pass through one topic's questions.
///
/// Holds the current position and one optional answer per question. Answers
/// can be changed freely until `submit`; after that they are frozen until
/// `restart`.
#[derive(Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    answers: Vec<Option<ChoiceIndex>>,
    // `Some` exactly when submitted.
    report: Option<Report>,
}

impl QuizSession {
    /// Start a session over `questions`, positioned on the first one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if `questions` is empty.
    pub fn start(questions: Vec<Question>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }
        let answers = vec![None; questions.len()];
        Ok(Self {
            questions,
            current: 0,
            answers,
            report: None,
        })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn answers(&self) -> &[Option<ChoiceIndex>] {
        &self.answers
    }

    #[must_use]
    pub fn answer_at(&self, index: usize) -> Option<ChoiceIndex> {
        self.answers.get(index).copied().flatten()
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        if self.report.is_some() {
            QuizPhase::Submitted
        } else {
            QuizPhase::InProgress
        }
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.report.is_some()
    }

    /// The report computed by the first `submit`, if any.
    #[must_use]
    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            position: self.current + 1,
            total: self.questions.len(),
        }
    }

    #[must_use]
    pub fn unanswered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_none()).count()
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len() - self.unanswered_count()
    }

    #[must_use]
    pub fn current_question(&self) -> QuestionView<'_> {
        QuestionView::new(
            &self.questions[self.current],
            self.progress(),
            self.answers[self.current],
        )
    }

    /// Record `choice` as the answer to the current question, replacing any
    /// earlier answer.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Submitted` after submission and
    /// `SessionError::InvalidChoice` if `choice` is not one of the current
    /// question's choices. State is unchanged on error.
    pub fn select_answer(&mut self, choice: usize) -> Result<QuestionView<'_>, SessionError> {
        self.ensure_in_progress()?;
        let question = &self.questions[self.current];
        if !question.has_choice(choice) {
            return Err(SessionError::InvalidChoice {
                index: choice,
                len: question.choice_count(),
            });
        }
        self.answers[self.current] = Some(ChoiceIndex::new(choice));
        Ok(self.current_question())
    }

    /// Move to the next question; a no-op on the last one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Submitted` after submission.
    pub fn go_next(&mut self) -> Result<QuestionView<'_>, SessionError> {
        self.ensure_in_progress()?;
        if self.current + 1 < self.questions.len() {
            self.current += 1;
        }
        Ok(self.current_question())
    }

    /// Move to the previous question; a no-op on the first one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Submitted` after submission.
    pub fn go_previous(&mut self) -> Result<QuestionView<'_>, SessionError> {
        self.ensure_in_progress()?;
        self.current = self.current.saturating_sub(1);
        Ok(self.current_question())
    }

    /// Score the session and freeze its answers.
    ///
    /// Unanswered questions are accepted and count as incorrect. Calling this
    /// again returns the first report unchanged.
    pub fn submit(&mut self) -> &Report {
        self.report
            .get_or_insert_with(|| score(&self.questions, &self.answers))
    }

    /// Clear every answer and return to the first question, keeping the same
    /// questions.
    pub fn restart(&mut self) -> QuestionView<'_> {
        self.current = 0;
        self.answers.iter_mut().for_each(|a| *a = None);
        self.report = None;
        self.current_question()
    }

    fn ensure_in_progress(&self) -> Result<(), SessionError> {
        if self.report.is_some() {
            Err(SessionError::Submitted)
        } else {
            Ok(())
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("answers", &self.answers)
            .field("phase", &self.phase())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
