use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::UserIdentity;
use storage::repository::{PreferenceRecord, PreferenceRepository};

use crate::error::IdentityServiceError;

/// Preference key holding the JSON-encoded signed-in identity.
pub const IDENTITY_KEY: &str = "quiz_user";

/// Mock sign-in backed by the preference store. No credentials are checked.
#[derive(Clone)]
pub struct IdentityService {
    clock: Clock,
    repo: Arc<dyn PreferenceRepository>,
}

impl IdentityService {
    #[must_use]
    pub fn new(clock: Clock, repo: Arc<dyn PreferenceRepository>) -> Self {
        Self { clock, repo }
    }

    /// The stored identity, if any.
    ///
    /// A stored value that no longer decodes is treated as signed out.
    ///
    /// # Errors
    ///
    /// Returns `IdentityServiceError::Storage` if the store cannot be read.
    pub async fn current(&self) -> Result<Option<UserIdentity>, IdentityServiceError> {
        let Some(record) = self.repo.get_preference(IDENTITY_KEY).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<UserIdentity>(&record.value) {
            Ok(identity) => Ok(Some(identity)),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring unreadable stored identity");
                Ok(None)
            }
        }
    }

    /// Fabricate an identity from `email` and persist it.
    ///
    /// # Errors
    ///
    /// Returns `IdentityServiceError::Identity` for a blank email, or a
    /// storage/encoding error if it cannot be saved.
    pub async fn sign_in(&self, email: &str) -> Result<UserIdentity, IdentityServiceError> {
        let now = self.clock.now();
        let identity = UserIdentity::from_email(email, now)?;
        let value = serde_json::to_string(&identity)?;
        self.repo
            .put_preference(&PreferenceRecord::new(IDENTITY_KEY, value, now))
            .await?;

        tracing::info!(email = identity.email(), "signed in");
        Ok(identity)
    }

    /// Forget the stored identity. Signing out twice is not an error.
    ///
    /// # Errors
    ///
    /// Returns `IdentityServiceError::Storage` if the store cannot be written.
    pub async fn sign_out(&self) -> Result<(), IdentityServiceError> {
        if self.repo.remove_preference(IDENTITY_KEY).await? {
            tracing::info!("signed out");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use quiz_core::model::IdentityError;
    use quiz_core::time::{fixed_clock, fixed_now};
    use storage::repository::{InMemoryRepository, StorageError};

    fn service() -> (IdentityService, InMemoryRepository) {
        let repo = InMemoryRepository::new();
        let svc = IdentityService::new(fixed_clock(), Arc::new(repo.clone()));
        (svc, repo)
    }

    #[tokio::test]
    async fn starts_signed_out() {
        let (svc, _) = service();
        assert!(svc.current().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn sign_in_persists_identity() {
        let (svc, repo) = service();
        let identity = svc.sign_in("  jane.doe@example.com ").await.unwrap();
        assert_eq!(identity.email(), "jane.doe@example.com");
        assert_eq!(identity.name(), "jane doe");
        assert_eq!(identity.initials(), "JD");
        assert_eq!(identity.signed_in_at(), fixed_now());

        let stored = repo.get_preference(IDENTITY_KEY).await.unwrap().unwrap();
        assert!(stored.value.contains("jane.doe@example.com"));
        assert_eq!(svc.current().await.unwrap(), Some(identity));
    }

    #[tokio::test]
    async fn blank_email_is_rejected_without_writing() {
        let (svc, repo) = service();
        let err = svc.sign_in("   ").await.unwrap_err();
        assert!(matches!(
            err,
            IdentityServiceError::Identity(IdentityError::EmptyEmail)
        ));
        assert!(repo.get_preference(IDENTITY_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn sign_out_clears_and_is_idempotent() {
        let (svc, _) = service();
        svc.sign_in("a@b.c").await.unwrap();
        svc.sign_out().await.unwrap();
        assert!(svc.current().await.unwrap().is_none());
        svc.sign_out().await.unwrap();
    }

    #[tokio::test]
    async fn unreadable_identity_reads_as_signed_out() {
        let (svc, repo) = service();
        repo.put_preference(&PreferenceRecord::new(IDENTITY_KEY, "not json", fixed_now()))
            .await
            .unwrap();
        assert!(svc.current().await.unwrap().is_none());
    }

    struct BrokenRepo;

    #[async_trait]
    impl PreferenceRepository for BrokenRepo {
        async fn get_preference(
            &self,
            _key: &str,
        ) -> Result<Option<PreferenceRecord>, StorageError> {
            Err(StorageError::Connection("offline".into()))
        }

        async fn put_preference(&self, _record: &PreferenceRecord) -> Result<(), StorageError> {
            Err(StorageError::Connection("offline".into()))
        }

        async fn remove_preference(&self, _key: &str) -> Result<bool, StorageError> {
            Err(StorageError::Connection("offline".into()))
        }
    }

    #[tokio::test]
    async fn storage_failures_propagate() {
        let svc = IdentityService::new(fixed_clock(), Arc::new(BrokenRepo));
        assert!(matches!(
            svc.current().await.unwrap_err(),
            IdentityServiceError::Storage(_)
        ));
        assert!(matches!(
            svc.sign_in("a@b.c").await.unwrap_err(),
            IdentityServiceError::Storage(_)
        ));
    }
}
