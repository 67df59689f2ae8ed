use std::sync::Arc;

use tracing::debug;

use gym_core::onboarding::{Step, WizardAction, WizardState};
use gym_core::payment::CardForm;

use crate::usecases::wizard::WizardStore;

pub struct PaymentView {
    store: Arc<WizardStore>,
    form: CardForm,
}

impl PaymentView {
    pub fn new(store: Arc<WizardStore>) -> Self {
        Self {
            store,
            form: CardForm::default(),
        }
    }

    /// Current field values as displayed.
    pub fn form(&self) -> &CardForm {
        &self.form
    }

    pub fn set_cardholder_name(&mut self, value: &str) {
        self.form.set_cardholder_name(value);
    }

    pub fn set_card_number(&mut self, value: &str) {
        self.form.set_card_number(value);
    }

    pub fn set_expiry_date(&mut self, value: &str) {
        self.form.set_expiry_date(value);
    }

    pub fn set_cvv(&mut self, value: &str) {
        self.form.set_cvv(value);
    }

    pub fn can_submit(&self) -> bool {
        self.form.is_complete()
    }

    /// Store the card and move on to health info. `None` if the form is incomplete.
    pub async fn submit(&self) -> Option<WizardState> {
        if !self.form.is_complete() {
            debug!("payment form incomplete, not advancing");
            return None;
        }

        let state = self
            .store
            .dispatch_all(vec![
                WizardAction::SetCreditCard(Some(self.form.to_card_data())),
                WizardAction::SetStep(Step::HealthInfo),
            ])
            .await;
        Some(state)
    }
}
