use std::sync::Arc;

use services::{IdentityService, QuizService, ThemeService};

/// What the composition root (`crates/app`) hands to the UI.
pub trait UiApp: Send + Sync {
    fn quiz(&self) -> Arc<QuizService>;
    fn identity(&self) -> Arc<IdentityService>;
    fn theme(&self) -> Arc<ThemeService>;
}

#[derive(Clone)]
pub struct AppContext {
    quiz: Arc<QuizService>,
    identity: Arc<IdentityService>,
    theme: Arc<ThemeService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz: app.quiz(),
            identity: app.identity(),
            theme: app.theme(),
        }
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

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
