use chrono::{DateTime, Utc};

use gym_core::access::AccessCode;
use gym_core::catalog::{Catalog, NONE_CONDITION_ID};
use gym_core::onboarding::WizardState;

use super::NOT_AVAILABLE;

/// Everything the summary screen shows. Terminal: there is no next step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub name: String,
    pub email: String,
    pub member_since: String,
    pub tier_name: String,
    pub price_label: String,
    pub access_hours: String,
    pub conditions: Vec<String>,
    pub access_code: AccessCode,
}

impl SummaryView {
    pub fn build(state: &WizardState, catalog: &Catalog, now: DateTime<Utc>) -> Self {
        let user = state.user.as_ref();
        let tier = state.selected_membership_tier.as_ref();
        let or_na = |value: Option<&str>| {
            value
                .filter(|v| !v.is_empty())
                .unwrap_or(NOT_AVAILABLE)
                .to_string()
        };

        let conditions = state
            .selected_health_conditions
            .iter()
            .filter(|id| id.as_str() != NONE_CONDITION_ID)
            .map(|id| catalog.condition_name(id).to_string())
            .collect();

        Self {
            name: or_na(user.map(|u| u.name.as_str())),
            email: or_na(user.map(|u| u.email.as_str())),
            member_since: now.format("%m/%d/%Y").to_string(),
            tier_name: or_na(tier.map(|t| t.name.as_str())),
            price_label: tier
                .map(|t| t.price_label())
                .unwrap_or_else(|| "$0.00/month".to_string()),
            access_hours: or_na(tier.map(|t| t.access_hours.as_str())),
            conditions,
            access_code: AccessCode::generate(
                user.map(|u| u.id.as_str()),
                tier.map(|t| t.id.as_str()),
                now,
            ),
        }
    }
}
