// ABOUTME: Forward-chaining plan derivation: base pass, then injury-gated adjustments
// ABOUTME: Pure function of facts and catalog; never mutates the store or caches output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Engine Contributors

//! # Plan Deriver
//!
//! Derivation is two bounded passes over the catalog, no unification and no
//! backtracking:
//!
//! 1. **Base pass**: every base rule whose pattern matches contributes its
//!    items to its slot, in catalog order. If no base training rule matched,
//!    derivation fails rather than producing an empty shell of a plan.
//! 2. **Adjustment pass**: every injury-gated rule (outside the recovery
//!    slot) whose pattern matches contributes its items *after* the base
//!    items and vetoes the base rules named in its override list. A vetoed
//!    rule's items are withdrawn even though it matched.
//!
//! Recovery-slot rules are different: they run once per injury record, in
//! report order, so a user with two active injuries gets recommendations
//! for both, oldest report first.
//!
//! The same facts and catalog always derive the same plan.

use crate::catalog::RuleCatalog;
use crate::errors::{CoachError, CoachResult};
use crate::models::{DerivedPlan, PlanItem, PlanSlot};
use crate::store::UserFacts;
use std::collections::HashSet;
use tracing::{debug, trace};

/// Derives plans from a fact snapshot against one catalog.
///
/// The deriver borrows the catalog, so it is constructed per call site and
/// holds no state of its own.
#[derive(Debug, Clone, Copy)]
pub struct PlanDeriver<'a> {
    catalog: &'a RuleCatalog,
}

impl<'a> PlanDeriver<'a> {
    /// Create a deriver over a catalog
    #[must_use]
    pub const fn new(catalog: &'a RuleCatalog) -> Self {
        Self { catalog }
    }

    /// Derive the full plan for a user's fact snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::MissingSport`] when no sport is selected and
    /// [`CoachError::DerivationUnavailable`] when no base training rule
    /// matches the facts.
    pub fn derive(&self, facts: &UserFacts) -> CoachResult<DerivedPlan> {
        let user_id = facts.profile.id;
        if facts.sport.is_none() {
            return Err(CoachError::missing_sport(user_id));
        }

        // Base pass. Training fragments keep their rule id so the
        // adjustment pass can withdraw them by name.
        let mut base_training: Vec<(&str, Vec<PlanItem>)> = Vec::new();
        let mut nutrition_plan: Vec<PlanItem> = Vec::new();
        let mut matched_training_rule = false;

        for rule in self.catalog.base_rules() {
            if !rule.pattern.matches(facts) {
                continue;
            }
            trace!(rule.id = %rule.id, slot = %rule.slot, "base rule matched");
            match rule.slot {
                PlanSlot::Training => {
                    matched_training_rule = true;
                    base_training.push((rule.id.as_str(), to_items(&rule.items)));
                }
                PlanSlot::Nutrition => nutrition_plan.extend(to_items(&rule.items)),
                // Catalog validation keeps base rules out of the recovery slot
                PlanSlot::InjuryRecovery => {}
            }
        }

        if !matched_training_rule {
            return Err(CoachError::derivation_unavailable(user_id));
        }

        // Adjustment pass: injury-gated rules veto and append.
        let mut vetoed: HashSet<&str> = HashSet::new();
        let mut injury_training: Vec<PlanItem> = Vec::new();
        let mut injury_nutrition: Vec<PlanItem> = Vec::new();

        for rule in self.catalog.injury_rules() {
            if rule.slot == PlanSlot::InjuryRecovery || !rule.pattern.matches(facts) {
                continue;
            }
            trace!(
                rule.id = %rule.id,
                slot = %rule.slot,
                vetoes = rule.overrides.len(),
                "injury-gated rule fired"
            );
            vetoed.extend(rule.overrides.iter().map(String::as_str));
            match rule.slot {
                PlanSlot::Training => injury_training.extend(to_items(&rule.items)),
                PlanSlot::Nutrition => injury_nutrition.extend(to_items(&rule.items)),
                PlanSlot::InjuryRecovery => {}
            }
        }

        let mut training_plan: Vec<PlanItem> = base_training
            .into_iter()
            .filter(|(id, _)| !vetoed.contains(id))
            .flat_map(|(_, items)| items)
            .collect();
        training_plan.extend(injury_training);
        nutrition_plan.extend(injury_nutrition);

        let plan = DerivedPlan {
            training_plan,
            nutrition_plan,
            injury_recommendations: self.injury_recommendations(facts),
        };
        debug!(
            user.id = %user_id,
            training = plan.training_plan.len(),
            nutrition = plan.nutrition_plan.len(),
            recovery = plan.injury_recommendations.len(),
            "plan derived"
        );
        Ok(plan)
    }

    /// Recovery recommendations only, one evaluation per injury record.
    ///
    /// Records are visited in report order; within one record, matching
    /// rules contribute in catalog order. A user with no injuries (or no
    /// matching rules) gets an empty list, never an error.
    #[must_use]
    pub fn injury_recommendations(&self, facts: &UserFacts) -> Vec<PlanItem> {
        let mut items = Vec::new();
        for record in &facts.injuries {
            for rule in self.catalog.injury_rules() {
                if rule.slot != PlanSlot::InjuryRecovery {
                    continue;
                }
                let Some(condition) = &rule.pattern.injury else {
                    continue;
                };
                if condition.matches(record) && rule.pattern.context_matches(facts) {
                    items.extend(to_items(&rule.items));
                }
            }
        }
        items
    }
}

fn to_items(items: &[String]) -> Vec<PlanItem> {
    items.iter().map(|item| PlanItem::new(item.clone())).collect()
}
