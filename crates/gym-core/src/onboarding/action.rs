use serde::{Deserialize, Serialize};

use super::{CreditCardData, MembershipTier, Step, User};

/// Named wizard transitions.
///
/// Wire form is `{"type": "SET_STEP", "payload": 3}`. Any unrecognized `type`
/// decodes to [`WizardAction::Unknown`], which the state machine ignores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WizardAction {
    SetStep(Step),
    SetUser(Option<User>),
    SetMembershipTier(Option<MembershipTier>),
    SetCreditCard(Option<CreditCardData>),
    SetHealthConditions(Vec<String>),
    Reset,
    #[serde(other)]
    Unknown,
}

impl WizardAction {
    /// Short name used in logs; never includes payload data.
    pub fn kind(&self) -> &'static str {
        match self {
            WizardAction::SetStep(_) => "SET_STEP",
            WizardAction::SetUser(_) => "SET_USER",
            WizardAction::SetMembershipTier(_) => "SET_MEMBERSHIP_TIER",
            WizardAction::SetCreditCard(_) => "SET_CREDIT_CARD",
            WizardAction::SetHealthConditions(_) => "SET_HEALTH_CONDITIONS",
            WizardAction::Reset => "RESET",
            WizardAction::Unknown => "UNKNOWN",
        }
    }
}
