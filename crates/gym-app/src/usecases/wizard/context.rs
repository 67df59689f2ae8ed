use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use gym_core::onboarding::WizardState;
use tokio::sync::{Mutex, MutexGuard};

/// Shared wizard context containing state, dispatch lock, and generation.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `state`.
/// - `dispatch_lock`: held for a whole transition, including the save.
/// - `state`: used for both reading (`get_state`) and writing.
///
/// `generation` increases by one for every accepted transition. Work that
/// started against an older generation can detect that the user has moved on.
#[derive(Clone)]
pub struct WizardContext {
    state: Arc<Mutex<WizardState>>,
    dispatch_lock: Arc<Mutex<()>>,
    generation: Arc<AtomicU64>,
}

impl WizardContext {
    pub fn new(initial_state: WizardState) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial_state)),
            dispatch_lock: Arc::new(Mutex::new(())),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// This is a lightweight read operation that does NOT acquire `dispatch_lock`.
    pub async fn get_state(&self) -> WizardState {
        self.state.lock().await.clone()
    }

    pub async fn acquire_dispatch_lock(&self) -> MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// This should only be called after acquiring `dispatch_lock`.
    pub async fn set_state(&self, state: WizardState) -> u64 {
        let mut guard = self.state.lock().await;
        *guard = state;
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}
