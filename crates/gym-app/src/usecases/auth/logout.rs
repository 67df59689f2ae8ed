use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use gym_core::onboarding::{Step, WizardAction, WizardState};
use gym_core::ports::AuthPort;

use crate::usecases::session::SessionStorage;
use crate::usecases::wizard::WizardStore;

/// End the session from any step and return the wizard to login.
pub struct LogoutUser {
    auth: Arc<dyn AuthPort>,
    session: SessionStorage,
    store: Arc<WizardStore>,
}

impl LogoutUser {
    pub fn new(auth: Arc<dyn AuthPort>, session: SessionStorage, store: Arc<WizardStore>) -> Self {
        Self {
            auth,
            session,
            store,
        }
    }

    pub async fn execute(&self) -> WizardState {
        let span = info_span!("usecase.logout_user.execute");
        async {
            self.auth.logout().await;

            let mut tx = self.store.begin().await;
            self.session.forget_session().await;
            tx.dispatch(WizardAction::Reset).await;
            let state = tx.dispatch(WizardAction::SetStep(Step::Login)).await;

            info!("user logged out");
            state
        }
        .instrument(span)
        .await
    }
}
