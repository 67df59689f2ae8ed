mod storage;
mod verify;

pub use storage::SessionStorage;
pub use verify::{SessionVerifier, VerificationOutcome};
