//! Gym Onboarding Application Orchestration Layer
//!
//! This crate contains the wizard store, the use cases that drive it, and the
//! step view models that read state and issue transitions.

pub mod app;
pub mod app_paths;
pub mod deps;
pub mod usecases;
pub mod views;

pub use app::OnboardingApp;
pub use deps::AppDeps;
