//! Step view models.
//!
//! Each view reads [`WizardState`](gym_core::onboarding::WizardState), keeps
//! its own form state, and advances the wizard only when its local guard
//! holds. Rendering is left to the front end.

pub mod header;
pub mod health;
pub mod login;
pub mod membership;
pub mod payment;
pub mod router;
pub mod summary;

pub use header::{HeaderView, StepIndicator, StepStatus};
pub use health::{ConditionGroupView, ConditionItem, HealthView};
pub use login::LoginView;
pub use membership::{MembershipView, TierCard, UnknownTier};
pub use payment::PaymentView;
pub use router::{route, route_raw, ViewKind};
pub use summary::SummaryView;

pub const NOT_AVAILABLE: &str = "N/A";
