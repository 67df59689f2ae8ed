//! Credential token slot and session-wide storage cleanup.
//!
//! Like [`WizardPersistence`](crate::usecases::wizard::WizardPersistence),
//! nothing here fails: storage errors are logged and the session carries on.

use std::sync::Arc;

use tracing::warn;

use gym_core::onboarding::{AUTH_TOKEN_KEY, ONBOARDING_STATE_KEY};
use gym_core::ports::KeyValueStoragePort;

#[derive(Clone)]
pub struct SessionStorage {
    storage: Arc<dyn KeyValueStoragePort>,
}

impl SessionStorage {
    pub fn new(storage: Arc<dyn KeyValueStoragePort>) -> Self {
        Self { storage }
    }

    pub async fn token(&self) -> Option<String> {
        match self.storage.get_item(AUTH_TOKEN_KEY).await {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(err) => {
                warn!(error = %err, "failed to read session token");
                None
            }
        }
    }

    pub async fn store_token(&self, token: &str) {
        if let Err(err) = self.storage.set_item(AUTH_TOKEN_KEY, token).await {
            warn!(error = %err, "failed to save session token");
        }
    }

    /// Remove the token and the wizard snapshot.
    pub async fn forget_session(&self) {
        for key in [AUTH_TOKEN_KEY, ONBOARDING_STATE_KEY] {
            if let Err(err) = self.storage.remove_item(key).await {
                warn!(key, error = %err, "failed to remove session slot");
            }
        }
    }

    /// Wipe every durable slot.
    pub async fn clear_all(&self) {
        if let Err(err) = self.storage.clear().await {
            warn!(error = %err, "failed to clear storage, removing session slots instead");
            self.forget_session().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gym_infra::InMemoryKeyValueStore;

    #[tokio::test]
    async fn test_empty_token_reads_as_missing() {
        let storage = Arc::new(InMemoryKeyValueStore::new());
        let session = SessionStorage::new(storage.clone());

        session.store_token("").await;
        assert_eq!(session.token().await, None);

        session.store_token("t-1").await;
        assert_eq!(session.token().await, Some("t-1".to_string()));
    }

    #[tokio::test]
    async fn test_forget_session_keeps_unrelated_slots() {
        let storage = Arc::new(InMemoryKeyValueStore::new());
        let session = SessionStorage::new(storage.clone());
        session.store_token("t-1").await;
        storage.set_item(ONBOARDING_STATE_KEY, "{}").await.unwrap();
        storage.set_item("theme", "dark").await.unwrap();

        session.forget_session().await;

        assert_eq!(storage.keys(), vec!["theme"]);
    }

    #[tokio::test]
    async fn test_clear_all_wipes_every_slot() {
        let storage = Arc::new(InMemoryKeyValueStore::new());
        let session = SessionStorage::new(storage.clone());
        session.store_token("t-1").await;
        storage.set_item("theme", "dark").await.unwrap();

        session.clear_all().await;

        assert!(storage.keys().is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_storage_has_no_token() {
        let storage = Arc::new(InMemoryKeyValueStore::new());
        storage.set_item(AUTH_TOKEN_KEY, "t-1").await.unwrap();
        storage.set_unavailable(true);

        assert_eq!(SessionStorage::new(storage).token().await, None);
    }
}
