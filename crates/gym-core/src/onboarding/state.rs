//! Wizard state domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Step;

/// Authenticated member identity returned by the auth collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub membership_type: String,
    pub member_since: DateTime<Utc>,
}

/// Billing period of a membership tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    Month,
    Year,
}

impl BillingPeriod {
    pub fn as_str(self) -> &'static str {
        match self {
            BillingPeriod::Month => "month",
            BillingPeriod::Year => "year",
        }
    }
}

impl std::fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Membership tier, either from the catalog or as the user's selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipTier {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub billing_period: BillingPeriod,
    pub features: Vec<String>,
    pub access_hours: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popular: Option<bool>,
}

impl MembershipTier {
    pub fn is_popular(&self) -> bool {
        self.popular.unwrap_or(false)
    }

    /// Price rendered as `$49.99/month`.
    pub fn price_label(&self) -> String {
        format!("${:.2}/{}", self.price, self.billing_period)
    }
}

/// Payment details captured by the payment step.
///
/// `card_number` holds digits only; formatting spaces never reach this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardData {
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub cardholder_name: String,
}

/// Wizard state: the single source of truth for the onboarding flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    pub step: Step,
    pub user: Option<User>,
    pub selected_membership_tier: Option<MembershipTier>,
    pub credit_card_data: Option<CreditCardData>,
    #[serde(default)]
    pub selected_health_conditions: Vec<String>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            step: Step::Login,
            user: None,
            selected_membership_tier: None,
            credit_card_data: None,
            selected_health_conditions: Vec::new(),
        }
    }
}

impl WizardState {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_starts_at_login_with_nothing_selected() {
        let state = WizardState::default();

        assert_eq!(state.step, Step::Login);
        assert!(state.user.is_none());
        assert!(state.selected_membership_tier.is_none());
        assert!(state.credit_card_data.is_none());
        assert!(state.selected_health_conditions.is_empty());
    }

    #[test]
    fn state_uses_camel_case_field_names() {
        let json = serde_json::to_value(WizardState::default()).unwrap();

        assert_eq!(json["step"], 1);
        assert!(json.get("selectedMembershipTier").is_some());
        assert!(json.get("creditCardData").is_some());
        assert!(json.get("selectedHealthConditions").is_some());
    }

    #[test]
    fn tier_price_label_uses_two_decimals() {
        let tier = MembershipTier {
            id: "basic".to_string(),
            name: "Basic".to_string(),
            price: 29.5,
            billing_period: BillingPeriod::Month,
            features: vec![],
            access_hours: "6am - 10pm".to_string(),
            popular: None,
        };

        assert_eq!(tier.price_label(), "$29.50/month");
        assert!(!tier.is_popular());
    }

    #[test]
    fn billing_period_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&BillingPeriod::Year).unwrap(),
            "\"year\""
        );
    }
}
