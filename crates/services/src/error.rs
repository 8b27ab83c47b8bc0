//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::SessionError;
use quiz_core::model::{BankError, IdentityError};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted while loading a question bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankLoadError {
    #[error("cannot read question bank {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed question bank: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid question bank: {0}")]
    Invalid(#[from] BankError),
}

/// Errors emitted by `QuizService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error("unknown topic: {0:?}")]
    UnknownTopic(String),
    #[error(transparent)]
    Bank(BankError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl From<BankError> for QuizServiceError {
    fn from(err: BankError) -> Self {
        match err {
            BankError::UnknownTopic(name) => Self::UnknownTopic(name),
            other => Self::Bank(other),
        }
    }
}

/// Errors emitted by `IdentityService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IdentityServiceError {
    #[error(transparent)]
    Identity(#[from] IdentityError),
    #[error("cannot encode identity: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ThemeService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ThemeServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
