//! Authentication collaborator port
//!
//! The wizard never talks to a real identity provider; it only needs the four
//! operations below. `is_authenticated` is a local, synchronous check of the
//! collaborator's in-process session.

use async_trait::async_trait;
use thiserror::Error;

use crate::onboarding::User;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Session token is invalid or expired")]
    InvalidToken,
    #[error("Authentication service unavailable: {0}")]
    Unavailable(String),
}

/// Successful login result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[async_trait]
pub trait AuthPort: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AuthError>;

    /// Fire-and-forget: failures are not reported.
    async fn logout(&self);

    async fn verify_token(&self, token: &str) -> Result<(), AuthError>;

    fn is_authenticated(&self) -> bool;
}
