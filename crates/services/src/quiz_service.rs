use std::fmt;
use std::sync::Arc;

use quiz_core::model::QuestionBank;
use quiz_core::{QuizSession, Report};

use crate::error::QuizServiceError;

/// Dashboard entry for one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSummary {
    pub name: String,
    pub question_count: usize,
}

/// A running quiz: the chosen topic and its session.
#[derive(Clone)]
pub struct ActiveQuiz {
    topic: String,
    session: QuizSession,
}

impl ActiveQuiz {
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut QuizSession {
        &mut self.session
    }

    /// Submit the session, logging the first computed score.
    pub fn submit(&mut self) -> &Report {
        let first = !self.session.is_submitted();
        let report = self.session.submit();
        if first {
            tracing::info!(
                topic = %self.topic,
                score = report.score,
                total = report.total,
                "quiz submitted"
            );
        }
        report
    }

    /// Restart on the same questions.
    pub fn restart(&mut self) {
        self.session.restart();
        tracing::debug!(topic = %self.topic, "quiz restarted");
    }
}

impl fmt::Debug for ActiveQuiz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveQuiz")
            .field("topic", &self.topic)
            .field("session", &self.session)
            .finish()
    }
}

/// Topic listing and session construction over an immutable bank.
#[derive(Clone)]
pub struct QuizService {
    bank: Arc<QuestionBank>,
}

impl QuizService {
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self { bank }
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Topics in bank order with their question counts.
    #[must_use]
    pub fn topics(&self) -> Vec<TopicSummary> {
        self.bank
            .iter()
            .map(|topic| TopicSummary {
                name: topic.name().to_owned(),
                question_count: topic.question_count(),
            })
            .collect()
    }

    /// Start a fresh session over the named topic's questions.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::UnknownTopic` if the bank has no such topic.
    pub fn start_quiz(&self, topic: &str) -> Result<ActiveQuiz, QuizServiceError> {
        let questions = self.bank.questions_for(topic).inspect_err(|_| {
            tracing::warn!(topic, "requested unknown topic");
        })?;
        let session = QuizSession::start(questions.to_vec())?;
        tracing::info!(topic, questions = questions.len(), "quiz started");

        Ok(ActiveQuiz {
            topic: topic.to_owned(),
            session,
        })
    }
}

impl fmt::Debug for QuizService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizService")
            .field("topics", &self.bank.len())
            .finish()
    }
}
