use std::sync::Arc;

use tracing::debug;

use gym_core::catalog::Catalog;
use gym_core::health::ConditionSelection;
use gym_core::onboarding::{Step, WizardAction, WizardState};

use crate::usecases::wizard::WizardStore;

pub const REQUIRES_CLEARANCE_LABEL: &str = "Requires Medical Clearance";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionItem {
    pub id: String,
    pub name: String,
    pub badge: Option<&'static str>,
    pub checked: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionGroupView {
    pub title: String,
    pub items: Vec<ConditionItem>,
}

pub struct HealthView {
    store: Arc<WizardStore>,
    catalog: Arc<Catalog>,
    selection: ConditionSelection,
}

impl HealthView {
    /// Mount with the selection saved in `state`.
    pub fn new(store: Arc<WizardStore>, catalog: Arc<Catalog>, state: &WizardState) -> Self {
        Self {
            store,
            catalog,
            selection: ConditionSelection::from_saved(&state.selected_health_conditions),
        }
    }

    pub fn selection(&self) -> &ConditionSelection {
        &self.selection
    }

    pub fn toggle(&mut self, condition_id: &str) {
        self.selection.toggle(condition_id);
    }

    pub fn can_submit(&self) -> bool {
        self.selection.can_continue()
    }

    pub fn groups(&self) -> Vec<ConditionGroupView> {
        self.catalog
            .grouped_conditions()
            .into_iter()
            .map(|group| ConditionGroupView {
                title: group.title(),
                items: group
                    .conditions
                    .iter()
                    .map(|condition| {
                        let control = self.selection.control(&condition.id);
                        ConditionItem {
                            id: condition.id.clone(),
                            name: condition.name.clone(),
                            badge: condition
                                .requires_medical_clearance
                                .then_some(REQUIRES_CLEARANCE_LABEL),
                            checked: control.checked,
                            disabled: control.disabled,
                        }
                    })
                    .collect(),
            })
            .collect()
    }

    pub async fn submit(&self) -> Option<WizardState> {
        if !self.selection.can_continue() {
            debug!("no health selection made, not advancing");
            return None;
        }

        let state = self
            .store
            .dispatch_all(vec![
                WizardAction::SetHealthConditions(self.selection.selected().to_vec()),
                WizardAction::SetStep(Step::Summary),
            ])
            .await;
        Some(state)
    }
}
