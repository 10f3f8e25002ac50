// ABOUTME: Derived plan output types: slots, items, and the assembled plan
// ABOUTME: Plans are pure derivations; they are recomputed per query and never stored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Engine Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which section of the derived plan a rule contributes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanSlot {
    /// Training prescriptions
    Training,
    /// Nutrition guidance
    Nutrition,
    /// Injury recovery recommendations
    InjuryRecovery,
}

impl PlanSlot {
    /// Get the canonical name of this slot
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Training => "training",
            Self::Nutrition => "nutrition",
            Self::InjuryRecovery => "injury_recovery",
        }
    }
}

impl fmt::Display for PlanSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of coaching guidance inside a plan section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanItem {
    /// The guidance text, self-contained and coach-readable
    pub description: String,
}

impl PlanItem {
    /// Create a plan item from guidance text
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A complete derived plan for one user.
///
/// Assembled fresh from the fact store and rule catalog on every query;
/// editing a plan means editing the facts or the rules, never the plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedPlan {
    /// Training prescriptions, base items first, injury additions last
    pub training_plan: Vec<PlanItem>,
    /// Nutrition guidance, base items first, injury additions last
    pub nutrition_plan: Vec<PlanItem>,
    /// Per-record injury recommendations, in injury report order
    pub injury_recommendations: Vec<PlanItem>,
}

impl DerivedPlan {
    /// Whether the plan carries no guidance at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.training_plan.is_empty()
            && self.nutrition_plan.is_empty()
            && self.injury_recommendations.is_empty()
    }

    /// Total number of items across all sections
    #[must_use]
    pub fn len(&self) -> usize {
        self.training_plan.len() + self.nutrition_plan.len() + self.injury_recommendations.len()
    }
}
