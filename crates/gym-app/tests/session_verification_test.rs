//! Startup verification of a token left by an earlier run.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use gym_app::usecases::session::VerificationOutcome;
use gym_app::usecases::wizard::WizardPersistence;
use gym_app::views::ViewKind;
use gym_app::{AppDeps, OnboardingApp};
use gym_core::catalog::Catalog;
use gym_core::onboarding::{Step, User, WizardState, AUTH_TOKEN_KEY};
use gym_core::ports::KeyValueStoragePort;
use gym_infra::auth::{DEMO_EMAIL, DEMO_PASSWORD};
use gym_infra::{DemoAuthService, InMemoryKeyValueStore, SystemClock};

async fn seeded_storage() -> Arc<InMemoryKeyValueStore> {
    let storage = Arc::new(InMemoryKeyValueStore::new());
    storage
        .set_item(AUTH_TOKEN_KEY, "token-from-last-week")
        .await
        .unwrap();
    WizardPersistence::new(storage.clone())
        .save(&WizardState {
            step: Step::Payment,
            user: Some(User {
                id: "member-1".to_string(),
                email: DEMO_EMAIL.to_string(),
                name: "Demo Member".to_string(),
                membership_type: "standard".to_string(),
                member_since: Utc::now(),
            }),
            ..WizardState::default()
        })
        .await;
    storage
}

/// Copy every slot into a store whose quota is exactly what they use, so any
/// write that grows storage fails.
async fn quota_limited_copy(source: &InMemoryKeyValueStore) -> Arc<InMemoryKeyValueStore> {
    let mut slots = Vec::new();
    for key in source.keys() {
        let value = source.get_item(&key).await.unwrap().unwrap();
        slots.push((key, value));
    }
    let used = slots.iter().map(|(k, v)| k.len() + v.len()).sum();

    let limited = Arc::new(InMemoryKeyValueStore::with_quota(used));
    for (key, value) in &slots {
        limited.set_item(key, value).await.unwrap();
    }
    limited
}

/// Storage whose bulk `clear` fails while single-slot removal still works.
struct NoBulkClearStorage {
    inner: InMemoryKeyValueStore,
}

#[async_trait]
impl KeyValueStoragePort for NoBulkClearStorage {
    async fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        self.inner.get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.inner.set_item(key, value).await
    }

    async fn remove_item(&self, key: &str) -> anyhow::Result<()> {
        self.inner.remove_item(key).await
    }

    async fn clear(&self) -> anyhow::Result<()> {
        anyhow::bail!("bulk clear not supported")
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

async fn mount(storage: Arc<dyn KeyValueStoragePort>, verify_delay: Duration) -> OnboardingApp {
    init_tracing();
    let clock = Arc::new(SystemClock);
    let auth = DemoAuthService::new(Vec::new(), clock.clone())
        .with_delays(Duration::ZERO, verify_delay);
    OnboardingApp::mount(AppDeps {
        storage,
        auth: Arc::new(auth),
        catalog: Arc::new(Catalog::embedded().unwrap()),
        clock,
    })
    .await
}

#[tokio::test]
async fn restored_state_is_shown_before_verification_settles() {
    let storage = seeded_storage().await;

    let app = mount(storage, Duration::ZERO).await;

    assert_eq!(app.current_view().await, ViewKind::Payment);
}

#[tokio::test]
async fn rejected_token_wipes_storage_and_returns_to_login() {
    let storage = seeded_storage().await;
    let app = mount(storage.clone(), Duration::ZERO).await;

    let outcome = app.start_verification().await.unwrap();

    assert_eq!(outcome, VerificationOutcome::SessionReset);
    assert_eq!(app.state().await, WizardState::default());
    assert!(storage.get_item(AUTH_TOKEN_KEY).await.unwrap().is_none());
    assert_eq!(
        WizardPersistence::new(storage).load().await,
        WizardState::default()
    );
    assert!(!app.verifier().is_verifying());
}

#[tokio::test]
async fn without_token_nothing_is_verified() {
    let storage = Arc::new(InMemoryKeyValueStore::new());
    let app = mount(storage, Duration::ZERO).await;

    let outcome = app.start_verification().await.unwrap();

    assert_eq!(outcome, VerificationOutcome::NoToken);
}

#[tokio::test(start_paused = true)]
async fn in_progress_flag_is_raised_while_verifying() {
    let storage = seeded_storage().await;
    let app = mount(storage, Duration::from_secs(3)).await;
    let mut verifying = app.verifier().subscribe_verifying();

    let handle = app.start_verification();
    verifying.wait_for(|v| *v).await.unwrap();
    assert!(app.verifier().is_verifying());

    handle.await.unwrap();
    assert!(!app.verifier().is_verifying());
}

#[tokio::test(start_paused = true)]
async fn late_failure_does_not_undo_fresh_login() {
    let storage = seeded_storage().await;
    let app = mount(storage.clone(), Duration::from_secs(5)).await;
    let mut verifying = app.verifier().subscribe_verifying();

    let handle = app.start_verification();
    verifying.wait_for(|v| *v).await.unwrap();

    let mut login = app.login_view();
    login.set_email(DEMO_EMAIL);
    login.set_password(DEMO_PASSWORD);
    assert!(login.submit().await);

    let outcome = handle.await.unwrap();

    assert_eq!(outcome, VerificationOutcome::StaleIgnored);
    let state = app.state().await;
    assert_eq!(state.step, Step::Membership);
    assert!(state.user.is_some());
    let token = storage.get_item(AUTH_TOKEN_KEY).await.unwrap().unwrap();
    assert_ne!(token, "token-from-last-week");
}

#[tokio::test]
async fn logout_during_verification_is_not_undone() {
    let storage = seeded_storage().await;
    let app = mount(storage.clone(), Duration::ZERO).await;

    app.logout().await;
    let outcome = app.start_verification().await.unwrap();

    assert_eq!(outcome, VerificationOutcome::NoToken);
    assert_eq!(app.state().await, WizardState::default());
}

#[tokio::test(start_paused = true)]
async fn late_failure_does_not_undo_login_whose_token_write_failed() {
    let storage = quota_limited_copy(&*seeded_storage().await).await;
    let app = mount(storage.clone(), Duration::from_secs(5)).await;
    let mut verifying = app.verifier().subscribe_verifying();

    let handle = app.start_verification();
    verifying.wait_for(|v| *v).await.unwrap();

    let mut login = app.login_view();
    login.set_email(DEMO_EMAIL);
    login.set_password(DEMO_PASSWORD);
    assert!(login.submit().await);
    assert_eq!(
        storage.get_item(AUTH_TOKEN_KEY).await.unwrap().as_deref(),
        Some("token-from-last-week")
    );

    let outcome = handle.await.unwrap();

    assert_eq!(outcome, VerificationOutcome::StaleIgnored);
    let state = app.state().await;
    assert_eq!(state.step, Step::Membership);
    assert!(state.user.is_some());
}

#[tokio::test]
async fn reset_falls_back_to_removing_session_slots_when_clear_fails() {
    let inner = InMemoryKeyValueStore::new();
    let seeded = seeded_storage().await;
    for key in seeded.keys() {
        let value = seeded.get_item(&key).await.unwrap().unwrap();
        inner.set_item(&key, &value).await.unwrap();
    }
    inner.set_item("theme", "dark").await.unwrap();
    let storage = Arc::new(NoBulkClearStorage { inner });
    let app = mount(storage.clone(), Duration::ZERO).await;

    let outcome = app.start_verification().await.unwrap();

    assert_eq!(outcome, VerificationOutcome::SessionReset);
    assert!(storage.get_item(AUTH_TOKEN_KEY).await.unwrap().is_none());
    assert_eq!(app.state().await, WizardState::default());
    assert_eq!(
        WizardPersistence::new(storage.clone()).load().await,
        WizardState::default()
    );
    assert_eq!(
        storage.get_item("theme").await.unwrap().as_deref(),
        Some("dark")
    );
}
