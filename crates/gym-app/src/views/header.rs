use gym_core::onboarding::{Step, WizardState};

pub const APP_TITLE: &str = "Gym Membership Onboarding";
pub const LOGOUT_LABEL: &str = "Logout";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepIndicator {
    pub number: i64,
    pub name: &'static str,
    pub status: StepStatus,
}

/// Greeting and step indicator, present only once a user has logged in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub greeting: String,
    pub steps: Vec<StepIndicator>,
}

impl HeaderView {
    pub fn from_state(state: &WizardState) -> Option<Self> {
        let user = state.user.as_ref()?;
        let current = state.step.number();

        let steps = Step::ALL
            .iter()
            .map(|step| {
                let number = step.number();
                let status = if number == current {
                    StepStatus::Active
                } else if number < current {
                    StepStatus::Completed
                } else {
                    StepStatus::Upcoming
                };
                StepIndicator {
                    number,
                    name: step.display_name(),
                    status,
                }
            })
            .collect();

        Some(Self {
            greeting: format!("Welcome, {}", user.name),
            steps,
        })
    }
}
