//! Demo authentication service
//!
//! Stands in for a real identity provider. Accounts come from configuration,
//! tokens are random UUIDs, and only tokens issued by this process verify, so
//! a token persisted by a previous run is always rejected on startup.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, info, warn};

use gym_core::config::AccountConfig;
use gym_core::onboarding::User;
use gym_core::ports::{AuthError, AuthPort, ClockPort, LoginResponse};

pub const DEMO_EMAIL: &str = "demo@gym.com";
pub const DEMO_PASSWORD: &str = "password123";

#[derive(Default)]
struct Sessions {
    issued: HashSet<String>,
    current: Option<String>,
}

pub struct DemoAuthService {
    accounts: Vec<AccountConfig>,
    sessions: Mutex<Sessions>,
    login_delay: Duration,
    verify_delay: Duration,
    clock: Arc<dyn ClockPort>,
}

impl DemoAuthService {
    /// Create the service. An empty account list falls back to the demo account.
    pub fn new(accounts: Vec<AccountConfig>, clock: Arc<dyn ClockPort>) -> Self {
        let accounts = if accounts.is_empty() {
            vec![AccountConfig {
                email: DEMO_EMAIL.to_string(),
                password: DEMO_PASSWORD.to_string(),
                name: "Demo Member".to_string(),
                membership_type: "standard".to_string(),
            }]
        } else {
            accounts
        };

        Self {
            accounts,
            sessions: Mutex::new(Sessions::default()),
            login_delay: Duration::ZERO,
            verify_delay: Duration::ZERO,
            clock,
        }
    }

    pub fn with_delays(mut self, login_delay: Duration, verify_delay: Duration) -> Self {
        self.login_delay = login_delay;
        self.verify_delay = verify_delay;
        self
    }

    fn sessions(&self) -> std::sync::MutexGuard<'_, Sessions> {
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }

    async fn simulate_latency(delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl AuthPort for DemoAuthService {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AuthError> {
        Self::simulate_latency(self.login_delay).await;

        let email = email.trim();
        let Some((index, account)) = self
            .accounts
            .iter()
            .enumerate()
            .find(|(_, a)| a.email.eq_ignore_ascii_case(email) && a.password == password)
        else {
            warn!(email, "login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        let token = uuid::Uuid::new_v4().to_string();
        {
            let mut sessions = self.sessions();
            sessions.issued.insert(token.clone());
            sessions.current = Some(token.clone());
        }

        info!(email, "login succeeded");
        Ok(LoginResponse {
            token,
            user: User {
                id: format!("member-{}", index + 1),
                email: account.email.clone(),
                name: account.name.clone(),
                membership_type: account.membership_type.clone(),
                member_since: self.clock.now(),
            },
        })
    }

    async fn logout(&self) {
        let mut sessions = self.sessions();
        if let Some(token) = sessions.current.take() {
            sessions.issued.remove(&token);
        }
        debug!("session ended");
    }

    async fn verify_token(&self, token: &str) -> Result<(), AuthError> {
        Self::simulate_latency(self.verify_delay).await;

        if self.sessions().issued.contains(token) {
            Ok(())
        } else {
            Err(AuthError::InvalidToken)
        }
    }

    fn is_authenticated(&self) -> bool {
        self.sessions().current.is_some()
    }
}
