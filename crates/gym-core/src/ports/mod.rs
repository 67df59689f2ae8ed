//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! external dependencies.

pub mod app_dirs;
pub mod auth;
mod clock;
pub mod errors;
pub mod storage;

pub use app_dirs::AppDirsPort;
pub use auth::{AuthError, AuthPort, LoginResponse};
pub use clock::ClockPort;
pub use errors::AppDirsError;
pub use storage::KeyValueStoragePort;
