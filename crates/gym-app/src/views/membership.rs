use std::sync::Arc;

use thiserror::Error;

use gym_core::catalog::Catalog;
use gym_core::onboarding::{MembershipTier, Step, WizardAction, WizardState};

use crate::usecases::wizard::WizardStore;

pub const MOST_POPULAR_LABEL: &str = "Most Popular";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown membership tier: {0}")]
pub struct UnknownTier(pub String);

#[derive(Debug, Clone, PartialEq)]
pub struct TierCard {
    pub tier: MembershipTier,
    pub price_label: String,
    pub badge: Option<&'static str>,
    pub selected: bool,
}

pub struct MembershipView {
    store: Arc<WizardStore>,
    catalog: Arc<Catalog>,
}

impl MembershipView {
    pub fn new(store: Arc<WizardStore>, catalog: Arc<Catalog>) -> Self {
        Self { store, catalog }
    }

    pub fn cards(&self, state: &WizardState) -> Vec<TierCard> {
        let selected_id = state.selected_membership_tier.as_ref().map(|t| t.id.as_str());
        self.catalog
            .tiers()
            .iter()
            .map(|tier| TierCard {
                price_label: tier.price_label(),
                badge: tier.is_popular().then_some(MOST_POPULAR_LABEL),
                selected: selected_id == Some(tier.id.as_str()),
                tier: tier.clone(),
            })
            .collect()
    }

    /// Choose a tier and go straight to payment.
    pub async fn select(&self, tier_id: &str) -> Result<WizardState, UnknownTier> {
        let tier = self
            .catalog
            .tier(tier_id)
            .cloned()
            .ok_or_else(|| UnknownTier(tier_id.to_string()))?;

        Ok(self
            .store
            .dispatch_all(vec![
                WizardAction::SetMembershipTier(Some(tier)),
                WizardAction::SetStep(Step::Payment),
            ])
            .await)
    }
}
