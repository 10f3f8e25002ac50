// ABOUTME: Declarative rule catalog: rule shape, pattern matching, validation, and loading
// ABOUTME: Rules are data; swapping the catalog never requires touching engine code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Engine Contributors

//! # Rule Catalog
//!
//! A catalog is an ordered list of rules. Each rule pairs a pattern over a
//! user's facts with the plan items it contributes to one plan slot. Rules
//! never chain on other rules' output, so evaluation is a bounded number of
//! passes over the catalog.
//!
//! Rules split into two tiers by the presence of an injury condition:
//!
//! - **Base rules** match sport, level, diet, competition, and achievement
//!   facts. They build the plan's first draft.
//! - **Injury-gated rules** additionally require a matching injury record.
//!   They run after base rules and may *override* named base rules in the
//!   same slot, withdrawing those rules' items from the final plan.
//!
//! The pattern's `level` field matches the level recorded with the sport
//! selection, not the profile's baseline fitness level.
//!
//! Catalogs are fully validated at load time: duplicate ids, overrides from
//! base rules, and override targets that are missing, injury-gated, or in a
//! different slot are all rejected before any derivation runs.

mod builtin;

use crate::errors::{CoachError, CoachResult};
use crate::models::{
    CompetitionLevel, CompetitionType, DietType, FitnessLevel, InjuryRecord, InjurySeverity,
    InjuryType, PlanSlot, RecoveryStatus, Sport, SportFormat,
};
use crate::store::UserFacts;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Constraint on the recovery status of an injury record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCondition {
    /// Any status that is not `healed`
    Unhealed,
    /// Exactly the given status
    Is(RecoveryStatus),
}

impl StatusCondition {
    /// Whether a record's status satisfies this condition
    #[must_use]
    pub fn matches(self, status: RecoveryStatus) -> bool {
        match self {
            Self::Unhealed => !status.is_cleared(),
            Self::Is(want) => status == want,
        }
    }
}

/// Constraint over a single injury record.
///
/// A record satisfies the condition when every present field matches;
/// omitted fields match any record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjuryCondition {
    /// Required injury site, if constrained
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub injury_type: Option<InjuryType>,
    /// Required severity, if constrained
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<InjurySeverity>,
    /// Required recovery status
    pub status: StatusCondition,
}

impl InjuryCondition {
    /// Whether one injury record satisfies this condition
    #[must_use]
    pub fn matches(&self, record: &InjuryRecord) -> bool {
        self.injury_type
            .map_or(true, |want| record.injury_type == want)
            && self.severity.map_or(true, |want| record.severity == want)
            && self.status.matches(record.recovery_status)
    }
}

/// Pattern over a user's facts.
///
/// Every field is optional; an empty pattern matches every user. All present
/// fields must hold at once, and a constraint on an absent fact (a diet
/// pattern against a user with no diet recorded) fails rather than matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulePattern {
    /// Selected sport
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sport: Option<Sport>,
    /// Level recorded with the sport selection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<FitnessLevel>,
    /// Dietary regime
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet_type: Option<DietType>,
    /// Whether the diet carries restriction tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_restrictions: Option<bool>,
    /// Kind of competition being prepared for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competition_type: Option<CompetitionType>,
    /// Level of the competition field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competition_level: Option<CompetitionLevel>,
    /// Format of the competition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competition_format: Option<SportFormat>,
    /// Minimum number of recorded achievements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_achievements: Option<usize>,
    /// Injury condition; its presence makes the rule injury-gated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injury: Option<InjuryCondition>,
}

impl RulePattern {
    /// Whether the pattern places no constraints at all
    #[must_use]
    pub const fn is_unconstrained(&self) -> bool {
        self.sport.is_none()
            && self.level.is_none()
            && self.diet_type.is_none()
            && self.has_restrictions.is_none()
            && self.competition_type.is_none()
            && self.competition_level.is_none()
            && self.competition_format.is_none()
            && self.min_achievements.is_none()
            && self.injury.is_none()
    }

    /// Whether the user's facts satisfy the full pattern.
    ///
    /// The injury condition is satisfied when *any* record matches it.
    #[must_use]
    pub fn matches(&self, facts: &UserFacts) -> bool {
        self.context_matches(facts)
            && self.injury.as_ref().map_or(true, |condition| {
                facts.injuries.iter().any(|record| condition.matches(record))
            })
    }

    /// Whether everything except the injury condition is satisfied.
    ///
    /// Recovery-slot rules are evaluated once per injury record; this checks
    /// the record-independent part of their pattern.
    #[must_use]
    pub fn context_matches(&self, facts: &UserFacts) -> bool {
        if let Some(want) = self.sport {
            if facts.sport.map(|selection| selection.sport) != Some(want) {
                return false;
            }
        }
        if let Some(want) = self.level {
            if facts.sport.map(|selection| selection.level) != Some(want) {
                return false;
            }
        }
        if let Some(want) = self.diet_type {
            if facts.diet.as_ref().map(|diet| diet.diet_type) != Some(want) {
                return false;
            }
        }
        if let Some(want) = self.has_restrictions {
            let has = facts
                .diet
                .as_ref()
                .is_some_and(|diet| !diet.restrictions.is_empty());
            if has != want {
                return false;
            }
        }
        if let Some(want) = self.competition_type {
            if facts.competition.map(|c| c.competition_type) != Some(want) {
                return false;
            }
        }
        if let Some(want) = self.competition_level {
            if facts.competition.map(|c| c.level) != Some(want) {
                return false;
            }
        }
        if let Some(want) = self.competition_format {
            if facts.competition.map(|c| c.format) != Some(want) {
                return false;
            }
        }
        if let Some(min) = self.min_achievements {
            if facts.achievements.len() < min {
                return false;
            }
        }
        true
    }
}

/// One catalog rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Catalog-unique identifier, also the override handle
    pub id: String,
    /// Facts the rule requires
    #[serde(default, skip_serializing_if = "RulePattern::is_unconstrained")]
    pub pattern: RulePattern,
    /// Plan section the rule contributes to
    pub slot: PlanSlot,
    /// Guidance items the rule contributes; may be empty
    pub items: Vec<String>,
    /// Ids of base rules this rule withdraws from the plan when it fires.
    /// Only injury-gated rules may override.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<String>,
}

impl Rule {
    /// Whether the rule requires a matching injury record to fire
    #[must_use]
    pub const fn is_injury_gated(&self) -> bool {
        self.pattern.injury.is_some()
    }
}

/// A validated, ordered rule catalog
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
}

impl RuleCatalog {
    /// The built-in catalog shipped with the engine.
    ///
    /// Its structural invariants are pinned by the catalog test suite, so
    /// construction is infallible here.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            rules: builtin::build(),
        }
    }

    /// Build a catalog from rules, validating structural invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::InvalidCatalog`] when ids collide, a base rule
    /// declares overrides, a recovery-slot rule lacks an injury condition or
    /// declares overrides, or an override names a rule that is missing,
    /// injury-gated, or in a different slot.
    pub fn from_rules(rules: Vec<Rule>) -> CoachResult<Self> {
        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.id.as_str()) {
                return Err(CoachError::invalid_catalog(format!(
                    "duplicate rule id '{}'",
                    rule.id
                )));
            }
        }

        let by_id: HashMap<&str, &Rule> =
            rules.iter().map(|rule| (rule.id.as_str(), rule)).collect();

        for rule in &rules {
            if !rule.is_injury_gated() {
                if !rule.overrides.is_empty() {
                    return Err(CoachError::invalid_catalog(format!(
                        "rule '{}' declares overrides but no injury condition",
                        rule.id
                    )));
                }
                if rule.slot == PlanSlot::InjuryRecovery {
                    return Err(CoachError::invalid_catalog(format!(
                        "rule '{}' targets the injury_recovery slot but has no injury condition",
                        rule.id
                    )));
                }
            }
            if rule.slot == PlanSlot::InjuryRecovery && !rule.overrides.is_empty() {
                return Err(CoachError::invalid_catalog(format!(
                    "rule '{}' is a recovery rule and cannot override",
                    rule.id
                )));
            }
            for target_id in &rule.overrides {
                let Some(target) = by_id.get(target_id.as_str()) else {
                    return Err(CoachError::invalid_catalog(format!(
                        "rule '{}' overrides unknown rule '{target_id}'",
                        rule.id
                    )));
                };
                if target.is_injury_gated() {
                    return Err(CoachError::invalid_catalog(format!(
                        "rule '{}' overrides injury-gated rule '{target_id}'",
                        rule.id
                    )));
                }
                if target.slot != rule.slot {
                    return Err(CoachError::invalid_catalog(format!(
                        "rule '{}' overrides '{target_id}' in a different slot",
                        rule.id
                    )));
                }
            }
        }

        Ok(Self { rules })
    }

    /// Parse and validate a catalog from its JSON form (an array of rules).
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::InvalidCatalog`] on malformed JSON or failed
    /// validation.
    pub fn from_json_str(json: &str) -> CoachResult<Self> {
        let rules: Vec<Rule> = serde_json::from_str(json)
            .map_err(|err| CoachError::invalid_catalog(format!("parse error: {err}")))?;
        Self::from_rules(rules)
    }

    /// Load and validate a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::InvalidCatalog`] when the file cannot be read,
    /// parsed, or validated.
    pub fn from_path(path: &Path) -> CoachResult<Self> {
        let json = fs::read_to_string(path).map_err(|err| {
            CoachError::invalid_catalog(format!("cannot read {}: {err}", path.display()))
        })?;
        Self::from_json_str(&json)
    }

    /// All rules, in catalog order
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the catalog holds no rules
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Base rules (no injury condition), in catalog order
    pub fn base_rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(|rule| !rule.is_injury_gated())
    }

    /// Injury-gated rules, in catalog order
    pub fn injury_rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(|rule| rule.is_injury_gated())
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
