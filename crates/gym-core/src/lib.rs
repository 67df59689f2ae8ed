//! # gym-core
//!
//! Core domain models and business logic for the gym onboarding wizard.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod access;
pub mod app_dirs;
pub mod catalog;
pub mod config;
pub mod health;
pub mod login;
pub mod onboarding;
pub mod payment;
pub mod ports;

// Re-export commonly used types at the crate root
pub use catalog::{Catalog, HealthCondition};
pub use config::AppConfig;
pub use onboarding::{
    BillingPeriod, CreditCardData, MembershipTier, Step, User, WizardAction, WizardState,
    WizardStateMachine,
};
