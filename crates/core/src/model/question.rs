use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question {id} has empty text")]
    EmptyText { id: QuestionId },

    #[error("question {id} needs at least 2 choices, got {len}")]
    TooFewChoices { id: QuestionId, len: usize },

    #[error("question {id} has an empty choice at index {index}")]
    EmptyChoice { id: QuestionId, index: usize },

    #[error("question {id} marks choice {index} as correct but only has {len} choices")]
    CorrectOutOfRange {
        id: QuestionId,
        index: usize,
        len: usize,
    },
}

//
// ─── CHOICE INDEX ──────────────────────────────────────────────────────────────
//

/// Position of a choice within a question's choice list.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceIndex(usize);

impl ChoiceIndex {
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for ChoiceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChoiceIndex({})", self.0)
    }
}

impl fmt::Display for ChoiceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Authoring shape of a question, as found in a bank file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionDraft {
    pub id: QuestionId,
    pub text: String,
    pub choices: Vec<String>,
    #[serde(alias = "correct_index")]
    pub answer: usize,
}

impl QuestionDraft {
    /// Validate the draft into an immutable `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the text or a choice is blank, if there are fewer
    /// than two choices, or if the correct index does not point at a choice.
    pub fn validate(self) -> Result<Question, QuestionError> {
        Question::new(self.id, self.text, self.choices, self.answer)
    }
}

/// A multiple-choice prompt with exactly one correct choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    choices: Vec<String>,
    correct: ChoiceIndex,
}

impl Question {
    /// Build a question, trimming the prompt text.
    ///
    /// # Errors
    ///
    /// See [`QuestionDraft::validate`].
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        choices: Vec<String>,
        correct: usize,
    ) -> Result<Self, QuestionError> {
        let text = text.into().trim().to_owned();
        if text.is_empty() {
            return Err(QuestionError::EmptyText { id });
        }
        if choices.len() < 2 {
            return Err(QuestionError::TooFewChoices {
                id,
                len: choices.len(),
            });
        }
        if let Some(index) = choices.iter().position(|c| c.trim().is_empty()) {
            return Err(QuestionError::EmptyChoice { id, index });
        }
        if correct >= choices.len() {
            return Err(QuestionError::CorrectOutOfRange {
                id,
                index: correct,
                len: choices.len(),
            });
        }

        Ok(Self {
            id,
            text,
            choices,
            correct: ChoiceIndex::new(correct),
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    #[must_use]
    pub fn choice_count(&self) -> usize {
        self.choices.len()
    }

    /// Text of the choice at `index`, if it exists.
    #[must_use]
    pub fn choice(&self, index: ChoiceIndex) -> Option<&str> {
        self.choices.get(index.value()).map(String::as_str)
    }

    #[must_use]
    pub fn correct(&self) -> ChoiceIndex {
        self.correct
    }

    /// Text of the correct choice.
    #[must_use]
    pub fn correct_text(&self) -> &str {
        // `correct` is checked against `choices` in `new`.
        &self.choices[self.correct.value()]
    }

    /// Whether `index` names one of this question's choices.
    #[must_use]
    pub fn has_choice(&self, index: usize) -> bool {
        index < self.choices.len()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
