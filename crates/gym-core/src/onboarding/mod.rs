//! Onboarding domain module.
//!
//! This module defines the wizard state, its transitions, and the pure state
//! machine that applies them.

pub mod action;
pub mod state;
pub mod state_machine;
pub mod step;

pub use action::WizardAction;
pub use state::{BillingPeriod, CreditCardData, MembershipTier, User, WizardState};
pub use state_machine::WizardStateMachine;
pub use step::Step;

/// Durable storage key for the serialized wizard state.
pub const ONBOARDING_STATE_KEY: &str = "onboarding_state";

/// Durable storage key for the opaque credential token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";
