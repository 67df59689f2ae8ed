//! # Onboarding App
//!
//! Owns the wizard store and the use cases built on it. The composition root
//! creates one with [`OnboardingApp::mount`] and hands out views from it.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::info;

use gym_core::catalog::Catalog;
use gym_core::onboarding::WizardState;
use gym_core::ports::ClockPort;

use crate::deps::AppDeps;
use crate::usecases::auth::{LoginUser, LogoutUser};
use crate::usecases::session::{SessionStorage, SessionVerifier, VerificationOutcome};
use crate::usecases::wizard::{WizardPersistence, WizardStore};
use crate::views::{
    route, HeaderView, HealthView, LoginView, MembershipView, PaymentView, SummaryView, ViewKind,
};

pub struct OnboardingApp {
    store: Arc<WizardStore>,
    verifier: Arc<SessionVerifier>,
    login: Arc<LoginUser>,
    logout: LogoutUser,
    catalog: Arc<Catalog>,
    clock: Arc<dyn ClockPort>,
}

impl OnboardingApp {
    /// Restore saved state and wire the use cases. Verification is not started.
    pub async fn mount(deps: AppDeps) -> Self {
        let store = WizardStore::restore(WizardPersistence::new(deps.storage.clone()))
            .await
            .arc();
        let session = SessionStorage::new(deps.storage);

        let verifier = Arc::new(SessionVerifier::new(
            deps.auth.clone(),
            session.clone(),
            store.clone(),
        ));
        let login = Arc::new(LoginUser::new(
            deps.auth.clone(),
            session.clone(),
            store.clone(),
        ));
        let logout = LogoutUser::new(deps.auth, session, store.clone());

        info!("onboarding app mounted");
        Self {
            store,
            verifier,
            login,
            logout,
            catalog: deps.catalog,
            clock: deps.clock,
        }
    }

    /// Kick off startup session verification in the background.
    pub fn start_verification(&self) -> JoinHandle<VerificationOutcome> {
        self.verifier.spawn()
    }

    pub fn store(&self) -> &Arc<WizardStore> {
        &self.store
    }

    pub fn verifier(&self) -> &Arc<SessionVerifier> {
        &self.verifier
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub async fn state(&self) -> WizardState {
        self.store.state().await
    }

    pub async fn current_view(&self) -> ViewKind {
        route(self.store.state().await.step)
    }

    pub async fn header(&self) -> Option<HeaderView> {
        HeaderView::from_state(&self.store.state().await)
    }

    pub async fn logout(&self) -> WizardState {
        self.logout.execute().await
    }

    pub fn login_view(&self) -> LoginView {
        LoginView::new(self.login.clone())
    }

    pub fn membership_view(&self) -> MembershipView {
        MembershipView::new(self.store.clone(), self.catalog.clone())
    }

    pub fn payment_view(&self) -> PaymentView {
        PaymentView::new(self.store.clone())
    }

    pub async fn health_view(&self) -> HealthView {
        let state = self.store.state().await;
        HealthView::new(self.store.clone(), self.catalog.clone(), &state)
    }

    pub async fn summary_view(&self) -> SummaryView {
        let state = self.store.state().await;
        SummaryView::build(&state, &self.catalog, self.clock.now())
    }
}
