//! Durable snapshot of the wizard state.
//!
//! Storage problems never reach the caller: a missing or unreadable slot loads
//! as the default state, and a failed write is logged and dropped.

use std::sync::Arc;

use tracing::{debug, warn};

use gym_core::onboarding::{WizardState, ONBOARDING_STATE_KEY};
use gym_core::ports::KeyValueStoragePort;

#[derive(Clone)]
pub struct WizardPersistence {
    storage: Arc<dyn KeyValueStoragePort>,
}

impl WizardPersistence {
    pub fn new(storage: Arc<dyn KeyValueStoragePort>) -> Self {
        Self { storage }
    }

    pub async fn load(&self) -> WizardState {
        let raw = match self.storage.get_item(ONBOARDING_STATE_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no saved wizard state, starting fresh");
                return WizardState::default();
            }
            Err(err) => {
                warn!(error = %err, "failed to read saved wizard state");
                return WizardState::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(err) => {
                warn!(error = %err, "saved wizard state is malformed, using defaults");
                WizardState::default()
            }
        }
    }

    pub async fn save(&self, state: &WizardState) {
        let raw = match serde_json::to_string(state) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "failed to serialize wizard state");
                return;
            }
        };

        if let Err(err) = self.storage.set_item(ONBOARDING_STATE_KEY, &raw).await {
            warn!(error = %err, "failed to save wizard state, continuing in memory");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use gym_core::onboarding::{
        BillingPeriod, CreditCardData, MembershipTier, Step, User,
    };
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockStorage {
        slots: Mutex<HashMap<String, String>>,
        fail_reads: bool,
        fail_writes: bool,
    }

    #[async_trait]
    impl KeyValueStoragePort for MockStorage {
        async fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
            if self.fail_reads {
                return Err(anyhow!("read failed"));
            }
            Ok(self.slots.lock().unwrap().get(key).cloned())
        }

        async fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()> {
            if self.fail_writes {
                return Err(anyhow!("quota exceeded"));
            }
            self.slots
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn remove_item(&self, key: &str) -> anyhow::Result<()> {
            self.slots.lock().unwrap().remove(key);
            Ok(())
        }

        async fn clear(&self) -> anyhow::Result<()> {
            self.slots.lock().unwrap().clear();
            Ok(())
        }
    }

    fn populated_state() -> WizardState {
        WizardState {
            step: Step::HealthInfo,
            user: Some(User {
                id: "member-1".to_string(),
                email: "demo@gym.com".to_string(),
                name: "Demo Member".to_string(),
                membership_type: "standard".to_string(),
                member_since: Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap(),
            }),
            selected_membership_tier: Some(MembershipTier {
                id: "premium".to_string(),
                name: "Premium".to_string(),
                price: 59.99,
                billing_period: BillingPeriod::Month,
                features: vec!["Pool".to_string(), "Sauna".to_string()],
                access_hours: "24/7".to_string(),
                popular: Some(true),
            }),
            credit_card_data: Some(CreditCardData {
                card_number: "1234567890123456".to_string(),
                expiry_date: "12/25".to_string(),
                cvv: "123".to_string(),
                cardholder_name: "Demo Member".to_string(),
            }),
            selected_health_conditions: vec!["asthma".to_string()],
        }
    }

    #[tokio::test]
    async fn load_without_saved_state_returns_defaults() {
        let persistence = WizardPersistence::new(Arc::new(MockStorage::default()));

        assert_eq!(persistence.load().await, WizardState::default());
    }

    #[tokio::test]
    async fn save_then_load_returns_equal_state() {
        let persistence = WizardPersistence::new(Arc::new(MockStorage::default()));
        assert_eq!(persistence.load().await, WizardState::default());

        let state = populated_state();
        persistence.save(&state).await;

        assert_eq!(persistence.load().await, state);
    }

    #[tokio::test]
    async fn malformed_slot_loads_as_defaults() {
        let storage = Arc::new(MockStorage::default());
        storage
            .set_item(ONBOARDING_STATE_KEY, "{not json")
            .await
            .unwrap();
        let persistence = WizardPersistence::new(storage);

        assert_eq!(persistence.load().await, WizardState::default());
    }

    #[tokio::test]
    async fn unreadable_storage_loads_as_defaults() {
        let storage = Arc::new(MockStorage {
            fail_reads: true,
            ..MockStorage::default()
        });
        let persistence = WizardPersistence::new(storage);

        assert_eq!(persistence.load().await, WizardState::default());
    }

    #[tokio::test]
    async fn failed_write_is_swallowed() {
        let storage = Arc::new(MockStorage {
            fail_writes: true,
            ..MockStorage::default()
        });
        let persistence = WizardPersistence::new(storage.clone());

        persistence.save(&populated_state()).await;

        assert!(storage.slots.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn out_of_range_step_in_slot_loads_as_login() {
        let storage = Arc::new(MockStorage::default());
        storage
            .set_item(
                ONBOARDING_STATE_KEY,
                r#"{"step":99,"user":null,"selectedMembershipTier":null,"creditCardData":null,"selectedHealthConditions":[]}"#,
            )
            .await
            .unwrap();
        let persistence = WizardPersistence::new(storage);

        assert_eq!(persistence.load().await.step, Step::Login);
    }
}
