//! # Startup Session Verification
//!
//! Checks a token left by a previous session against the auth collaborator
//! without holding up the first render. A rejected token resets the wizard
//! and wipes storage, unless the session changed while the check was in
//! flight. The reset is applied only while the stored token is still the one
//! that was verified and the auth collaborator holds no live session. Login
//! opens such a session even when its token write fails, and logout removes
//! the token, so a late failure cannot undo either.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, info_span, warn, Instrument};

use gym_core::onboarding::{Step, WizardAction};
use gym_core::ports::{AuthError, AuthPort};

use super::storage::SessionStorage;
use crate::usecases::wizard::WizardStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// Verification already ran for this mount.
    AlreadyRan,
    NoToken,
    AlreadyAuthenticated,
    Valid,
    /// Token rejected; storage cleared and wizard reset to login.
    SessionReset,
    /// Token rejected, but the session changed meanwhile.
    StaleIgnored,
}

pub struct SessionVerifier {
    auth: Arc<dyn AuthPort>,
    session: SessionStorage,
    store: Arc<WizardStore>,
    verifying: watch::Sender<bool>,
    started: AtomicBool,
}

impl SessionVerifier {
    pub fn new(auth: Arc<dyn AuthPort>, session: SessionStorage, store: Arc<WizardStore>) -> Self {
        let (verifying, _) = watch::channel(false);
        Self {
            auth,
            session,
            store,
            verifying,
            started: AtomicBool::new(false),
        }
    }

    /// True while a verification call is outstanding.
    pub fn is_verifying(&self) -> bool {
        *self.verifying.borrow()
    }

    pub fn subscribe_verifying(&self) -> watch::Receiver<bool> {
        self.verifying.subscribe()
    }

    /// Run verification on the runtime and return immediately.
    pub fn spawn(self: &Arc<Self>) -> JoinHandle<VerificationOutcome> {
        let verifier = Arc::clone(self);
        tokio::spawn(async move { verifier.run().await })
    }

    /// Verify the stored token. Only the first call does any work.
    pub async fn run(&self) -> VerificationOutcome {
        if self.started.swap(true, Ordering::SeqCst) {
            debug!("session verification already ran");
            return VerificationOutcome::AlreadyRan;
        }

        let span = info_span!("usecase.session_verifier.run");
        async {
            let Some(token) = self.session.token().await else {
                debug!("no stored session token");
                return VerificationOutcome::NoToken;
            };
            if self.auth.is_authenticated() {
                debug!("auth collaborator already has a session");
                return VerificationOutcome::AlreadyAuthenticated;
            }

            let generation = self.store.generation();
            let result = {
                let _flag = VerifyingFlag::raise(&self.verifying);
                self.auth.verify_token(&token).await
            };

            match result {
                Ok(()) => {
                    info!("stored session token is valid");
                    VerificationOutcome::Valid
                }
                Err(err) => self.reject(&token, generation, err).await,
            }
        }
        .instrument(span)
        .await
    }

    async fn reject(&self, token: &str, generation: u64, err: AuthError) -> VerificationOutcome {
        let mut tx = self.store.begin().await;

        let token_replaced = self.session.token().await.as_deref() != Some(token);
        if token_replaced || self.auth.is_authenticated() {
            info!(
                token_replaced,
                error = %err,
                started_at = generation,
                now = tx.generation(),
                "session changed during verification, ignoring stale failure"
            );
            return VerificationOutcome::StaleIgnored;
        }

        warn!(error = %err, "stored session token rejected, resetting wizard");
        self.session.clear_all().await;
        tx.dispatch(WizardAction::Reset).await;
        tx.dispatch(WizardAction::SetStep(Step::Login)).await;
        VerificationOutcome::SessionReset
    }
}

/// Sets the in-progress flag for as long as it lives.
struct VerifyingFlag<'a> {
    sender: &'a watch::Sender<bool>,
}

impl<'a> VerifyingFlag<'a> {
    fn raise(sender: &'a watch::Sender<bool>) -> Self {
        sender.send_replace(true);
        Self { sender }
    }
}

impl Drop for VerifyingFlag<'_> {
    fn drop(&mut self) {
        self.sender.send_replace(false);
    }
}
