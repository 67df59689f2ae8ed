//! # Dependency Injection
//!
//! The only place that depends on gym-infra and gym-app at once. It
//! assembles adapters into [`AppDeps`] and makes no decisions of its own.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use gym_app::AppDeps;
use gym_core::catalog::{Catalog, CatalogError};
use gym_core::config::AppConfig;
use gym_core::ports::{ClockPort, KeyValueStoragePort};
use gym_infra::{DemoAuthService, FileKeyValueStore, InMemoryKeyValueStore, SystemClock};

pub type WiringResult<T> = Result<T, WiringError>;

#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Catalog initialization failed: {0}")]
    Catalog(#[from] CatalogError),
}

/// Where durable slots live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageMode {
    Directory(PathBuf),
    Memory,
}

pub fn wire_dependencies(config: &AppConfig, storage: StorageMode) -> WiringResult<AppDeps> {
    let storage: Arc<dyn KeyValueStoragePort> = match storage {
        StorageMode::Directory(dir) => {
            info!(dir = %dir.display(), "using file storage");
            Arc::new(FileKeyValueStore::new(dir))
        }
        StorageMode::Memory => {
            info!("using in-memory storage");
            Arc::new(InMemoryKeyValueStore::new())
        }
    };

    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);
    let auth = DemoAuthService::new(config.accounts.clone(), clock.clone()).with_delays(
        Duration::from_millis(config.login_delay_ms),
        Duration::from_millis(config.verify_delay_ms),
    );
    let catalog = Catalog::embedded()?;

    Ok(AppDeps {
        storage,
        auth: Arc::new(auth),
        catalog: Arc::new(catalog),
        clock,
    })
}
