use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::model::question::Question;
use crate::model::topic::{Topic, TopicDraft, TopicError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("unknown topic: {0:?}")]
    UnknownTopic(String),

    #[error("duplicate topic: {0:?}")]
    DuplicateTopic(String),

    #[error(transparent)]
    Topic(#[from] TopicError),
}

/// Authoring shape of a whole question bank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionBankDraft {
    pub topics: Vec<TopicDraft>,
}

impl QuestionBankDraft {
    /// # Errors
    ///
    /// Returns `BankError::Topic` for the first invalid topic and
    /// `BankError::DuplicateTopic` if two topics share a name.
    pub fn validate(self) -> Result<QuestionBank, BankError> {
        let topics = self
            .topics
            .into_iter()
            .map(TopicDraft::validate)
            .collect::<Result<Vec<_>, _>>()?;
        QuestionBank::new(topics)
    }
}

/// Read-only catalog of topics, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    topics: Vec<Topic>,
    by_name: HashMap<String, usize>,
}

impl QuestionBank {
    /// # Errors
    ///
    /// Returns `BankError::DuplicateTopic` if two topics share a name.
    pub fn new(topics: Vec<Topic>) -> Result<Self, BankError> {
        let mut by_name = HashMap::with_capacity(topics.len());
        for (idx, topic) in topics.iter().enumerate() {
            if by_name.insert(topic.name().to_owned(), idx).is_some() {
                return Err(BankError::DuplicateTopic(topic.name().to_owned()));
            }
        }
        Ok(Self { topics, by_name })
    }

    /// Topic names in display order.
    #[must_use]
    pub fn topics(&self) -> Vec<&str> {
        self.topics.iter().map(Topic::name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Topic> {
        self.topics.iter()
    }

    #[must_use]
    pub fn topic(&self, name: &str) -> Option<&Topic> {
        self.by_name.get(name).map(|&idx| &self.topics[idx])
    }

    /// Questions of the named topic, in order.
    ///
    /// # Errors
    ///
    /// Returns `BankError::UnknownTopic` if no topic has that name.
    pub fn questions_for(&self, name: &str) -> Result<&[Question], BankError> {
        self.topic(name)
            .map(Topic::questions)
            .ok_or_else(|| BankError::UnknownTopic(name.to_owned()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}
