use tracing::debug;

use gym_app::views::{HealthView, LoginView, MembershipView, PaymentView, SummaryView, ViewKind};
use gym_app::OnboardingApp;

use super::command::Command;
use super::render;

pub enum Flow {
    Continue(String),
    Quit,
}

/// The view model currently on screen. Replaced whenever the routed step changes.
enum MountedView {
    Login(LoginView),
    Membership(MembershipView),
    Payment(PaymentView),
    HealthInfo(HealthView),
    Summary(SummaryView),
}

impl MountedView {
    fn kind(&self) -> ViewKind {
        match self {
            MountedView::Login(_) => ViewKind::Login,
            MountedView::Membership(_) => ViewKind::Membership,
            MountedView::Payment(_) => ViewKind::Payment,
            MountedView::HealthInfo(_) => ViewKind::HealthInfo,
            MountedView::Summary(_) => ViewKind::Summary,
        }
    }
}

pub struct ConsoleSession {
    app: OnboardingApp,
    mounted: MountedView,
}

impl ConsoleSession {
    /// Starts on the login view; the first render mounts the routed step.
    pub fn new(app: OnboardingApp) -> Self {
        let mounted = MountedView::Login(app.login_view());
        Self { app, mounted }
    }

    pub fn app(&self) -> &OnboardingApp {
        &self.app
    }

    async fn mount(&self, kind: ViewKind) -> MountedView {
        match kind {
            ViewKind::Login => MountedView::Login(self.app.login_view()),
            ViewKind::Membership => MountedView::Membership(self.app.membership_view()),
            ViewKind::Payment => MountedView::Payment(self.app.payment_view()),
            ViewKind::HealthInfo => MountedView::HealthInfo(self.app.health_view().await),
            ViewKind::Summary => MountedView::Summary(self.app.summary_view().await),
        }
    }

    /// Make sure the mounted view matches the current step.
    async fn sync_view(&mut self) -> &mut MountedView {
        let routed = self.app.current_view().await;
        if self.mounted.kind() != routed {
            debug!(view = ?routed, "mounting view");
            self.mounted = self.mount(routed).await;
        }
        &mut self.mounted
    }

    pub async fn screen(&mut self) -> String {
        self.sync_view().await;
        let header = self.app.header().await;
        let verifying = self.app.verifier().is_verifying();
        let body = match &self.mounted {
            MountedView::Login(view) => render::login(view),
            MountedView::Membership(view) => {
                render::membership(&view.cards(&self.app.state().await))
            }
            MountedView::Payment(view) => render::payment(view),
            MountedView::HealthInfo(view) => render::health(&view.groups(), view.can_submit()),
            MountedView::Summary(view) => render::summary(view),
        };
        format!("{}{}", render::header(header.as_ref(), verifying), body)
    }

    pub async fn handle(&mut self, line: &str) -> Flow {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => return Flow::Continue(err.to_string()),
        };

        match command {
            Command::Quit => return Flow::Quit,
            Command::Show => {}
            Command::Help => {
                let kind = self.sync_view().await.kind();
                let logged_in = self.app.state().await.is_logged_in();
                return Flow::Continue(render::help(kind, logged_in));
            }
            Command::Logout => {
                if !self.app.state().await.is_logged_in() {
                    return Flow::Continue("Not logged in.".to_string());
                }
                self.app.logout().await;
            }
            command => {
                if let Some(message) = self.apply(command).await {
                    let screen = self.screen().await;
                    return Flow::Continue(format!("{message}\n{screen}"));
                }
            }
        }

        Flow::Continue(self.screen().await)
    }

    /// Run a step command. Returns a message when the command did not fit the step.
    async fn apply(&mut self, command: Command) -> Option<String> {
        let command_name = command.name();
        match (self.sync_view().await, command) {
            (MountedView::Login(view), Command::Email(email)) => {
                view.set_email(&email);
                view.blur_email();
            }
            (MountedView::Login(view), Command::Password(password)) => view.set_password(&password),
            (MountedView::Login(view), Command::Submit) => {
                view.submit().await;
            }
            (MountedView::Membership(view), Command::Select(tier_id)) => {
                if let Err(err) = view.select(&tier_id).await {
                    return Some(err.to_string());
                }
            }
            (MountedView::Payment(view), Command::Name(name)) => view.set_cardholder_name(&name),
            (MountedView::Payment(view), Command::Card(number)) => view.set_card_number(&number),
            (MountedView::Payment(view), Command::Expiry(expiry)) => view.set_expiry_date(&expiry),
            (MountedView::Payment(view), Command::Cvv(cvv)) => view.set_cvv(&cvv),
            (MountedView::Payment(view), Command::Submit) => {
                if view.submit().await.is_none() {
                    return Some("Please complete every payment field.".to_string());
                }
            }
            (MountedView::HealthInfo(view), Command::Toggle(id)) => {
                let groups = view.groups();
                let Some(item) = groups.iter().flat_map(|g| &g.items).find(|i| i.id == id) else {
                    return Some(format!("Unknown condition `{id}`"));
                };
                if item.disabled {
                    return Some(format!(
                        "{} is disabled while \"None of the above\" is selected",
                        item.name
                    ));
                }
                view.toggle(&id);
            }
            (MountedView::HealthInfo(view), Command::Submit) => {
                if view.submit().await.is_none() {
                    return Some("Select at least one option to continue.".to_string());
                }
            }
            (view, _) => {
                return Some(format!(
                    "`{command_name}` is not available on this step ({:?})",
                    view.kind()
                ));
            }
        }
        None
    }
}
