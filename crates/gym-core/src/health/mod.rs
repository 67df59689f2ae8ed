//! Health condition selection with the exclusive "None of the above" option.
//!
//! `selected` is what gets dispatched and persisted. `prior` is view-local: it
//! remembers the regular conditions that were checked when "none" was chosen,
//! so deselecting "none" can bring them back.
//!
//! Invariant: if `selected` contains [`NONE_CONDITION_ID`], it is exactly
//! `["none"]`.

use crate::catalog::NONE_CONDITION_ID;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionSelection {
    selected: Vec<String>,
    prior: Vec<String>,
}

/// How a single condition control should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionControl {
    pub checked: bool,
    pub disabled: bool,
}

impl ConditionSelection {
    /// Restore from persisted state. The transient prior list starts empty.
    pub fn from_saved(saved: &[String]) -> Self {
        let selected = if saved.iter().any(|id| id == NONE_CONDITION_ID) {
            vec![NONE_CONDITION_ID.to_string()]
        } else {
            saved.to_vec()
        };
        Self {
            selected,
            prior: Vec::new(),
        }
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn prior(&self) -> &[String] {
        &self.prior
    }

    pub fn is_none_selected(&self) -> bool {
        self.selected.iter().any(|id| id == NONE_CONDITION_ID)
    }

    /// At least one selection (including "none") is required to continue.
    pub fn can_continue(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn toggle(&mut self, condition_id: &str) {
        if condition_id == NONE_CONDITION_ID {
            self.toggle_none();
        } else if self.is_none_selected() {
            toggle_in(&mut self.prior, condition_id);
        } else {
            toggle_in(&mut self.selected, condition_id);
        }
    }

    fn toggle_none(&mut self) {
        if self.is_none_selected() {
            self.selected = std::mem::take(&mut self.prior);
        } else {
            self.prior = self
                .selected
                .iter()
                .filter(|id| id.as_str() != NONE_CONDITION_ID)
                .cloned()
                .collect();
            self.selected = vec![NONE_CONDITION_ID.to_string()];
        }
    }

    /// Render state for a condition control.
    ///
    /// While "none" is active, regular conditions are disabled and show the
    /// remembered prior selection.
    pub fn control(&self, condition_id: &str) -> ConditionControl {
        let none_active = self.is_none_selected();
        if none_active && condition_id != NONE_CONDITION_ID {
            ConditionControl {
                checked: self.prior.iter().any(|id| id == condition_id),
                disabled: true,
            }
        } else {
            ConditionControl {
                checked: self.selected.iter().any(|id| id == condition_id),
                disabled: false,
            }
        }
    }

    /// Consume into the list to dispatch.
    pub fn into_selected(self) -> Vec<String> {
        self.selected
    }
}

fn toggle_in(list: &mut Vec<String>, id: &str) {
    if let Some(pos) = list.iter().position(|existing| existing == id) {
        list.remove(pos);
    } else {
        list.push(id.to_string());
    }
}
