use serde::{Deserialize, Serialize};

/// Wizard step.
///
/// Persisted as its integer position (1-based). Decoding an integer outside the
/// known range falls back to [`Step::Login`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Step {
    Login,
    Membership,
    Payment,
    HealthInfo,
    Summary,
}

impl Step {
    /// All steps in wizard order.
    pub const ALL: [Step; 5] = [
        Step::Login,
        Step::Membership,
        Step::Payment,
        Step::HealthInfo,
        Step::Summary,
    ];

    /// Integer position of the step, starting at 1.
    pub fn number(self) -> i64 {
        match self {
            Step::Login => 1,
            Step::Membership => 2,
            Step::Payment => 3,
            Step::HealthInfo => 4,
            Step::Summary => 5,
        }
    }

    /// Strict decoding: `None` for anything outside 1..=5.
    pub fn try_from_number(value: i64) -> Option<Self> {
        match value {
            1 => Some(Step::Login),
            2 => Some(Step::Membership),
            3 => Some(Step::Payment),
            4 => Some(Step::HealthInfo),
            5 => Some(Step::Summary),
            _ => None,
        }
    }

    /// Lenient decoding used by consumers: unknown values route to `Login`.
    pub fn from_number(value: i64) -> Self {
        Self::try_from_number(value).unwrap_or(Step::Login)
    }

    /// Display name shown in the step indicator.
    pub fn display_name(self) -> &'static str {
        match self {
            Step::Login => "Login",
            Step::Membership => "Membership",
            Step::Payment => "Payment",
            Step::HealthInfo => "Health Info",
            Step::Summary => "Summary",
        }
    }
}

impl Default for Step {
    fn default() -> Self {
        Step::Login
    }
}

impl From<i64> for Step {
    fn from(value: i64) -> Self {
        Step::from_number(value)
    }
}

impl From<Step> for i64 {
    fn from(step: Step) -> Self {
        step.number()
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
