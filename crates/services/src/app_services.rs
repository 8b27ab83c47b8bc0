use std::sync::Arc;

use quiz_core::model::QuestionBank;
use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::identity_service::IdentityService;
use crate::quiz_service::QuizService;
use crate::theme_service::ThemeService;

/// Assembles the app-facing services over one storage backend and one bank.
#[derive(Clone)]
pub struct AppServices {
    quiz: Arc<QuizService>,
    identity: Arc<IdentityService>,
    theme: Arc<ThemeService>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage, bank: QuestionBank, clock: Clock) -> Self {
        let quiz = Arc::new(QuizService::new(Arc::new(bank)));
        let identity = Arc::new(IdentityService::new(
            clock,
            Arc::clone(&storage.preferences),
        ));
        let theme = Arc::new(ThemeService::new(clock, Arc::clone(&storage.preferences)));

        Self {
            quiz,
            identity,
            theme,
        }
    }

    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        bank: QuestionBank,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        tracing::info!(topics = bank.len(), "services ready");
        Ok(Self::new(&storage, bank, clock))
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn identity(&self) -> Arc<IdentityService> {
        Arc::clone(&self.identity)
    }

    #[must_use]
    pub fn theme(&self) -> Arc<ThemeService> {
        Arc::clone(&self.theme)
    }
}
