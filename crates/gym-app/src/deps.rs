//! # Application Dependencies
//!
//! This module defines the dependency grouping for app construction.
//!
//! **Note**: This is NOT a Builder pattern.
//! - No build steps
//! - No default values
//! - Just parameter grouping

use std::sync::Arc;

use gym_core::catalog::Catalog;
use gym_core::ports::{AuthPort, ClockPort, KeyValueStoragePort};

/// Application dependency grouping (non-Builder, just parameter grouping)
///
/// All dependencies are required - no defaults, no optional fields.
pub struct AppDeps {
    // Durable storage
    pub storage: Arc<dyn KeyValueStoragePort>,

    // Authentication collaborator
    pub auth: Arc<dyn AuthPort>,

    // Static reference data
    pub catalog: Arc<Catalog>,

    // System dependencies
    pub clock: Arc<dyn ClockPort>,
}
