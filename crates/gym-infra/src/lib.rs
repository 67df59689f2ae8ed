pub mod auth;
pub mod config;
pub mod fs;
pub mod storage;
pub mod time;

pub use auth::DemoAuthService;
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
pub use time::SystemClock;
