use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::Theme;
use storage::repository::{PreferenceRecord, PreferenceRepository};

use crate::error::ThemeServiceError;

/// Preference key holding the theme name.
pub const THEME_KEY: &str = "quiz_theme";

#[derive(Clone)]
pub struct ThemeService {
    clock: Clock,
    repo: Arc<dyn PreferenceRepository>,
}

impl ThemeService {
    #[must_use]
    pub fn new(clock: Clock, repo: Arc<dyn PreferenceRepository>) -> Self {
        Self { clock, repo }
    }

    /// Load the persisted theme, or `Theme::System` if none (or an unknown one) is stored.
    ///
    /// # Errors
    ///
    /// Returns `ThemeServiceError` if the store cannot be read.
    pub async fn load(&self) -> Result<Theme, ThemeServiceError> {
        let Some(record) = self.repo.get_preference(THEME_KEY).await? else {
            return Ok(Theme::default());
        };

        Ok(record.value.parse().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to system theme");
            Theme::default()
        }))
    }

    /// Persist the chosen theme.
    ///
    /// # Errors
    ///
    /// Returns `ThemeServiceError` if the store cannot be written.
    pub async fn save(&self, theme: Theme) -> Result<Theme, ThemeServiceError> {
        self.repo
            .put_preference(&PreferenceRecord::new(
                THEME_KEY,
                theme.as_str(),
                self.clock.now(),
            ))
            .await?;
        tracing::debug!(theme = theme.as_str(), "theme saved");
        Ok(theme)
    }
}
