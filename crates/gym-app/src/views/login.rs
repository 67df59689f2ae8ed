use std::sync::Arc;

use gym_core::login::{is_login_form_valid, validate_email, EmailError};
use gym_core::ports::AuthError;

use crate::usecases::auth::{LoginError, LoginUser};

pub const CONTINUE_LABEL: &str = "Continue";
pub const LOGGING_IN_LABEL: &str = "Logging in...";
pub const LOGIN_FAILED: &str = "Login failed";

pub struct LoginView {
    login: Arc<LoginUser>,
    email: String,
    password: String,
    email_error: Option<EmailError>,
    error: Option<String>,
    loading: bool,
}

impl LoginView {
    pub fn new(login: Arc<LoginUser>) -> Self {
        Self {
            login,
            email: String::new(),
            password: String::new(),
            email_error: None,
            error: None,
            loading: false,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Editing the email clears its inline error.
    pub fn set_email(&mut self, value: &str) {
        self.email = value.to_string();
        self.email_error = None;
    }

    pub fn set_password(&mut self, value: &str) {
        self.password = value.to_string();
    }

    pub fn blur_email(&mut self) {
        self.email_error = validate_email(&self.email).err();
    }

    pub fn email_error(&self) -> Option<EmailError> {
        self.email_error
    }

    /// Banner message from the last failed submit.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && is_login_form_valid(&self.email, &self.password)
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            LOGGING_IN_LABEL
        } else {
            CONTINUE_LABEL
        }
    }

    /// Returns true when the wizard advanced to tier selection.
    pub async fn submit(&mut self) -> bool {
        self.error = None;
        if let Err(err) = validate_email(&self.email) {
            self.email_error = Some(err);
            return false;
        }

        self.loading = true;
        let result = self.login.execute(&self.email, &self.password).await;
        self.loading = false;

        match result {
            Ok(_) => true,
            Err(LoginError::Email(err)) => {
                self.email_error = Some(err);
                false
            }
            Err(LoginError::Auth(AuthError::Unavailable(_))) => {
                self.error = Some(LOGIN_FAILED.to_string());
                false
            }
            Err(err) => {
                self.error = Some(err.to_string());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::session::SessionStorage;
    use crate::usecases::wizard::{WizardPersistence, WizardStore};
    use gym_core::onboarding::{Step, WizardState};
    use gym_infra::auth::{DEMO_EMAIL, DEMO_PASSWORD};
    use gym_infra::{DemoAuthService, InMemoryKeyValueStore, SystemClock};

    fn view() -> (LoginView, Arc<WizardStore>) {
        let storage = Arc::new(InMemoryKeyValueStore::new());
        let store =
            WizardStore::new(WizardState::default(), WizardPersistence::new(storage.clone())).arc();
        let auth = Arc::new(DemoAuthService::new(Vec::new(), Arc::new(SystemClock)));
        let login = LoginUser::new(auth, SessionStorage::new(storage), store.clone());
        (LoginView::new(Arc::new(login)), store)
    }

    #[test]
    fn test_blur_flags_invalid_email_and_editing_clears_it() {
        let (mut view, _) = view();
        view.set_email("not-an-email");

        view.blur_email();
        assert_eq!(view.email_error(), Some(EmailError::Invalid));

        view.set_email("demo@gym.com");
        assert_eq!(view.email_error(), None);
    }

    #[test]
    fn test_submit_needs_email_and_password() {
        let (mut view, _) = view();
        assert!(!view.can_submit());
        assert_eq!(view.submit_label(), CONTINUE_LABEL);

        view.set_email(DEMO_EMAIL);
        view.set_password(DEMO_PASSWORD);
        assert!(view.can_submit());
    }

    #[tokio::test]
    async fn test_wrong_password_shows_banner() {
        let (mut view, store) = view();
        view.set_email(DEMO_EMAIL);
        view.set_password("wrong");

        assert!(!view.submit().await);

        assert_eq!(view.error(), Some("Invalid email or password"));
        assert!(!view.is_loading());
        assert_eq!(store.state().await.step, Step::Login);
    }

    #[tokio::test]
    async fn test_successful_submit_advances_to_membership() {
        let (mut view, store) = view();
        view.set_email(DEMO_EMAIL);
        view.set_password(DEMO_PASSWORD);

        assert!(view.submit().await);

        assert_eq!(view.error(), None);
        assert_eq!(store.state().await.step, Step::Membership);
    }
}
