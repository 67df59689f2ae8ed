//! Wizard state machine.
//!
//! Defines a pure state transition function for the onboarding wizard. Step
//! ordering is not enforced here: recovery from persisted state must be able
//! to land on any step, so guards live with the step views.

use super::{WizardAction, WizardState};

/// Pure wizard state machine: no side effects.
pub struct WizardStateMachine;

impl WizardStateMachine {
    pub fn transition(state: WizardState, action: WizardAction) -> WizardState {
        match action {
            WizardAction::SetStep(step) => WizardState { step, ..state },
            WizardAction::SetUser(user) => WizardState { user, ..state },
            WizardAction::SetMembershipTier(tier) => WizardState {
                selected_membership_tier: tier,
                ..state
            },
            WizardAction::SetCreditCard(card) => WizardState {
                credit_card_data: card,
                ..state
            },
            WizardAction::SetHealthConditions(conditions) => WizardState {
                selected_health_conditions: conditions,
                ..state
            },
            WizardAction::Reset => WizardState::default(),
            WizardAction::Unknown => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::{BillingPeriod, CreditCardData, MembershipTier, Step, User};
    use chrono::{TimeZone, Utc};

    fn user() -> User {
        User {
            id: "u-1".to_string(),
            email: "jane@example.com".to_string(),
            name: "Jane Doe".to_string(),
            membership_type: "standard".to_string(),
            member_since: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
        }
    }

    fn tier() -> MembershipTier {
        MembershipTier {
            id: "premium".to_string(),
            name: "Premium".to_string(),
            price: 59.99,
            billing_period: BillingPeriod::Month,
            features: vec!["Pool".to_string(), "Sauna".to_string()],
            access_hours: "24/7".to_string(),
            popular: Some(true),
        }
    }

    fn populated() -> WizardState {
        WizardState {
            step: Step::HealthInfo,
            user: Some(user()),
            selected_membership_tier: Some(tier()),
            credit_card_data: Some(CreditCardData {
                card_number: "1234567890123456".to_string(),
                expiry_date: "12/25".to_string(),
                cvv: "123".to_string(),
                cardholder_name: "Jane Doe".to_string(),
            }),
            selected_health_conditions: vec!["asthma".to_string()],
        }
    }

    #[test]
    fn set_step_accepts_any_step_from_any_state() {
        let next = WizardStateMachine::transition(
            WizardState::default(),
            WizardAction::SetStep(Step::Payment),
        );
        assert_eq!(next.step, Step::Payment);

        let back = WizardStateMachine::transition(next, WizardAction::SetStep(Step::Login));
        assert_eq!(back.step, Step::Login);
    }

    #[test]
    fn set_user_replaces_only_user() {
        let next =
            WizardStateMachine::transition(WizardState::default(), WizardAction::SetUser(Some(user())));

        assert_eq!(next.user, Some(user()));
        assert_eq!(next.step, Step::Login);
    }

    #[test]
    fn set_user_none_clears_user() {
        let next = WizardStateMachine::transition(populated(), WizardAction::SetUser(None));

        assert!(next.user.is_none());
        assert!(next.selected_membership_tier.is_some());
    }

    #[test]
    fn set_health_conditions_replaces_wholesale() {
        let next = WizardStateMachine::transition(
            populated(),
            WizardAction::SetHealthConditions(vec!["none".to_string()]),
        );

        assert_eq!(next.selected_health_conditions, vec!["none".to_string()]);
    }

    #[test]
    fn set_membership_tier_and_credit_card_replace_fields() {
        let next = WizardStateMachine::transition(
            WizardState::default(),
            WizardAction::SetMembershipTier(Some(tier())),
        );
        assert_eq!(next.selected_membership_tier, Some(tier()));

        let next = WizardStateMachine::transition(next, WizardAction::SetCreditCard(None));
        assert!(next.credit_card_data.is_none());
    }

    #[test]
    fn reset_restores_defaults() {
        let next = WizardStateMachine::transition(populated(), WizardAction::Reset);
        assert_eq!(next, WizardState::default());
    }

    #[test]
    fn unknown_action_is_a_no_op() {
        let next = WizardStateMachine::transition(populated(), WizardAction::Unknown);
        assert_eq!(next, populated());
    }
}
