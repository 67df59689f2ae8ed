//! Gym Onboarding
//!
//! Composition root and console front end for the membership signup wizard.

pub mod bootstrap;
pub mod console;
