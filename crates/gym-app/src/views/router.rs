use tracing::debug;

use gym_core::onboarding::Step;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Login,
    Membership,
    Payment,
    HealthInfo,
    Summary,
}

pub fn route(step: Step) -> ViewKind {
    match step {
        Step::Login => ViewKind::Login,
        Step::Membership => ViewKind::Membership,
        Step::Payment => ViewKind::Payment,
        Step::HealthInfo => ViewKind::HealthInfo,
        Step::Summary => ViewKind::Summary,
    }
}

/// Route a raw step number. Anything outside the known steps shows login.
pub fn route_raw(value: i64) -> ViewKind {
    match Step::try_from_number(value) {
        Some(step) => route(step),
        None => {
            debug!(value, "unknown step number, showing login");
            ViewKind::Login
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_step_numbers_fall_back_to_login() {
        assert_eq!(route_raw(99), ViewKind::Login);
        assert_eq!(route_raw(0), ViewKind::Login);
        assert_eq!(route_raw(-3), ViewKind::Login);
    }

    #[test]
    fn known_step_numbers_route_to_their_view() {
        assert_eq!(route_raw(1), ViewKind::Login);
        assert_eq!(route_raw(2), ViewKind::Membership);
        assert_eq!(route_raw(3), ViewKind::Payment);
        assert_eq!(route_raw(4), ViewKind::HealthInfo);
        assert_eq!(route_raw(5), ViewKind::Summary);
    }
}
