//! Static reference data: membership tiers and health conditions.
//!
//! Catalogs are read-only. They are parsed once at startup and shared by the
//! step views; wizard state only references entries by id (conditions) or by
//! value (the selected tier).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::onboarding::MembershipTier;

/// Id of the exclusive "None of the above" condition.
pub const NONE_CONDITION_ID: &str = "none";

/// Category assigned to conditions without one.
pub const DEFAULT_CATEGORY: &str = "other";

const EMBEDDED_TIERS: &str = include_str!("../../assets/membership-tiers.json");
const EMBEDDED_CONDITIONS: &str = include_str!("../../assets/health-conditions.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to parse membership tiers: {0}")]
    Tiers(#[source] serde_json::Error),
    #[error("Failed to parse health conditions: {0}")]
    Conditions(#[source] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCondition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub requires_medical_clearance: bool,
}

impl HealthCondition {
    pub fn is_none_option(&self) -> bool {
        self.id == NONE_CONDITION_ID
    }

    /// Category with the default applied for blank values.
    pub fn category_or_default(&self) -> &str {
        if self.category.trim().is_empty() {
            DEFAULT_CATEGORY
        } else {
            &self.category
        }
    }
}

/// Conditions sharing a category, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionGroup<'a> {
    pub category: String,
    pub conditions: Vec<&'a HealthCondition>,
}

impl ConditionGroup<'_> {
    /// Category with its first letter upper-cased, e.g. `Respiratory`.
    pub fn title(&self) -> String {
        let mut chars = self.category.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    tiers: Vec<MembershipTier>,
    conditions: Vec<HealthCondition>,
}

impl Catalog {
    pub fn new(tiers: Vec<MembershipTier>, conditions: Vec<HealthCondition>) -> Self {
        Self { tiers, conditions }
    }

    /// Parse both catalogs from JSON arrays.
    pub fn from_json(tiers_json: &str, conditions_json: &str) -> Result<Self, CatalogError> {
        let tiers = serde_json::from_str(tiers_json).map_err(CatalogError::Tiers)?;
        let conditions = serde_json::from_str(conditions_json).map_err(CatalogError::Conditions)?;
        Ok(Self::new(tiers, conditions))
    }

    /// Catalog bundled with the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_TIERS, EMBEDDED_CONDITIONS)
    }

    pub fn tiers(&self) -> &[MembershipTier] {
        &self.tiers
    }

    pub fn conditions(&self) -> &[HealthCondition] {
        &self.conditions
    }

    pub fn tier(&self, id: &str) -> Option<&MembershipTier> {
        self.tiers.iter().find(|t| t.id == id)
    }

    pub fn condition(&self, id: &str) -> Option<&HealthCondition> {
        self.conditions.iter().find(|c| c.id == id)
    }

    /// Display name for a condition id; unknown ids are returned unchanged.
    pub fn condition_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.condition(id).map(|c| c.name.as_str()).unwrap_or(id)
    }

    /// Conditions grouped by category, groups ordered by first appearance.
    pub fn grouped_conditions(&self) -> Vec<ConditionGroup<'_>> {
        let mut groups: Vec<ConditionGroup<'_>> = Vec::new();
        for condition in &self.conditions {
            let category = condition.category_or_default();
            match groups.iter_mut().find(|g| g.category == category) {
                Some(group) => group.conditions.push(condition),
                None => groups.push(ConditionGroup {
                    category: category.to_string(),
                    conditions: vec![condition],
                }),
            }
        }
        groups
    }
}
