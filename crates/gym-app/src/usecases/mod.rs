pub mod auth;
pub mod session;
pub mod wizard;

pub use auth::{LoginError, LoginUser, LogoutUser};
pub use session::{SessionVerifier, VerificationOutcome};
pub use wizard::{WizardPersistence, WizardStore, WizardTransaction};
