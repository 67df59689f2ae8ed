//! # Wizard Store
//!
//! The single owner of the in-memory [`WizardState`]. Views and use cases hold
//! an `Arc<WizardStore>` and change state only through [`WizardStore::dispatch`]
//! or a [`WizardTransaction`].
//!
//! Every accepted transition is followed by a save through
//! [`WizardPersistence`] and a notification to subscribers. Unknown actions
//! leave state, generation, and storage untouched.

use std::sync::Arc;

use tokio::sync::{watch, MutexGuard};
use tracing::{debug, info, info_span, Instrument};

use gym_core::onboarding::{WizardAction, WizardState, WizardStateMachine};

use super::context::WizardContext;
use super::persistence::WizardPersistence;

pub struct WizardStore {
    context: WizardContext,
    persistence: WizardPersistence,
    notifier: watch::Sender<WizardState>,
}

impl WizardStore {
    pub fn new(initial_state: WizardState, persistence: WizardPersistence) -> Self {
        let (notifier, _) = watch::channel(initial_state.clone());
        Self {
            context: WizardContext::new(initial_state),
            persistence,
            notifier,
        }
    }

    /// Create a store seeded from the saved snapshot (or defaults).
    pub async fn restore(persistence: WizardPersistence) -> Self {
        let initial_state = persistence.load().await;
        info!(step = %initial_state.step, "wizard state restored");
        Self::new(initial_state, persistence)
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub async fn state(&self) -> WizardState {
        self.context.get_state().await
    }

    /// Number of transitions accepted so far.
    pub fn generation(&self) -> u64 {
        self.context.generation()
    }

    /// Receiver that observes every accepted transition.
    pub fn subscribe(&self) -> watch::Receiver<WizardState> {
        self.notifier.subscribe()
    }

    pub async fn dispatch(&self, action: WizardAction) -> WizardState {
        self.begin().await.dispatch(action).await
    }

    /// Apply several actions back to back without letting another dispatch in
    /// between.
    pub async fn dispatch_all(&self, actions: Vec<WizardAction>) -> WizardState {
        let mut tx = self.begin().await;
        for action in actions {
            tx.dispatch(action).await;
        }
        tx.state().await
    }

    /// Hold the dispatch lock until the returned transaction is dropped.
    pub async fn begin(&self) -> WizardTransaction<'_> {
        let guard = self.context.acquire_dispatch_lock().await;
        WizardTransaction {
            store: self,
            _dispatch_guard: guard,
        }
    }
}

/// Exclusive access to the store. Other dispatches wait until it is dropped.
pub struct WizardTransaction<'a> {
    store: &'a WizardStore,
    _dispatch_guard: MutexGuard<'a, ()>,
}

impl WizardTransaction<'_> {
    pub fn generation(&self) -> u64 {
        self.store.context.generation()
    }

    pub async fn state(&self) -> WizardState {
        self.store.context.get_state().await
    }

    pub async fn dispatch(&mut self, action: WizardAction) -> WizardState {
        let span = info_span!("usecase.wizard_store.dispatch", action = action.kind());
        async {
            let current = self.store.context.get_state().await;

            if matches!(action, WizardAction::Unknown) {
                debug!("ignoring unrecognized wizard action");
                return current;
            }

            let from = current.step;
            let next = WizardStateMachine::transition(current, action);
            let generation = self.store.context.set_state(next.clone()).await;
            info!(from = %from, to = %next.step, generation, "wizard state transition");

            self.store.persistence.save(&next).await;
            self.store.notifier.send_replace(next.clone());
            next
        }
        .instrument(span)
        .await
    }
}
