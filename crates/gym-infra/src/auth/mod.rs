//! Authentication adapters.

mod demo_auth;

pub use demo_auth::{DemoAuthService, DEMO_EMAIL, DEMO_PASSWORD};
