use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::question::{Question, QuestionDraft, QuestionError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TopicError {
    #[error("topic name cannot be empty")]
    EmptyName,

    #[error("topic name {name:?} cannot contain '/'")]
    NameContainsSlash { name: String },

    #[error("topic {name:?} has no questions")]
    NoQuestions { name: String },

    #[error("topic {name:?} repeats question id {id}")]
    DuplicateQuestionId { name: String, id: QuestionId },

    #[error("topic {name:?}: {source}")]
    Question {
        name: String,
        #[source]
        source: QuestionError,
    },
}

/// Authoring shape of a topic.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TopicDraft {
    pub name: String,
    pub questions: Vec<QuestionDraft>,
}

impl TopicDraft {
    /// Validate every question and the topic itself.
    ///
    /// # Errors
    ///
    /// Returns `TopicError::Question` for the first invalid question, or any error
    /// reported by [`Topic::new`].
    pub fn validate(self) -> Result<Topic, TopicError> {
        let name = self.name.trim().to_owned();
        let questions = self
            .questions
            .into_iter()
            .map(QuestionDraft::validate)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| TopicError::Question {
                name: name.clone(),
                source,
            })?;
        Topic::new(name, questions)
    }
}

/// A named, ordered collection of questions presented as one quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    name: String,
    questions: Vec<Question>,
}

impl Topic {
    /// # Errors
    ///
    /// Returns `TopicError` if the name is blank or contains `/`, the question
    /// list is empty, or two questions share an id.
    pub fn new(name: impl Into<String>, questions: Vec<Question>) -> Result<Self, TopicError> {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(TopicError::EmptyName);
        }
        // Names are used as a single route segment.
        if name.contains('/') {
            return Err(TopicError::NameContainsSlash { name });
        }
        if questions.is_empty() {
            return Err(TopicError::NoQuestions { name });
        }

        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(TopicError::DuplicateQuestionId {
                    name,
                    id: question.id(),
                });
            }
        }

        Ok(Self { name, questions })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}
