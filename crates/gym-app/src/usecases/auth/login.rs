use std::sync::Arc;

use thiserror::Error;
use tracing::{info, info_span, warn, Instrument};

use gym_core::login::{validate_email, EmailError};
use gym_core::onboarding::{Step, User, WizardAction};
use gym_core::ports::{AuthError, AuthPort};

use crate::usecases::session::SessionStorage;
use crate::usecases::wizard::WizardStore;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error(transparent)]
    Email(#[from] EmailError),
    #[error("Password is required")]
    PasswordRequired,
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Sign in, keep the token, and move the wizard on to tier selection.
///
/// On any error the wizard state is left untouched.
pub struct LoginUser {
    auth: Arc<dyn AuthPort>,
    session: SessionStorage,
    store: Arc<WizardStore>,
}

impl LoginUser {
    pub fn new(auth: Arc<dyn AuthPort>, session: SessionStorage, store: Arc<WizardStore>) -> Self {
        Self {
            auth,
            session,
            store,
        }
    }

    pub async fn execute(&self, email: &str, password: &str) -> Result<User, LoginError> {
        let span = info_span!("usecase.login_user.execute");
        async {
            validate_email(email)?;
            if password.is_empty() {
                return Err(LoginError::PasswordRequired);
            }

            let response = self.auth.login(email.trim(), password).await.map_err(|err| {
                warn!(error = %err, "login failed");
                err
            })?;

            let mut tx = self.store.begin().await;
            self.session.store_token(&response.token).await;
            tx.dispatch(WizardAction::SetUser(Some(response.user.clone())))
                .await;
            tx.dispatch(WizardAction::SetStep(Step::Membership)).await;

            info!(user_id = %response.user.id, "user logged in");
            Ok(response.user)
        }
        .instrument(span)
        .await
    }
}
