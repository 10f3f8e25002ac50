// ABOUTME: Diet facts: regime type plus free-form restriction tags
// ABOUTME: Restrictions are deduplicated at intake but otherwise uninterpreted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Engine Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// The user's dietary regime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    /// Vegetarian
    Vegetarian,
    /// Vegan
    Vegan,
    /// Ketogenic
    Keto,
    /// Paleo
    Paleo,
    /// Balanced macronutrients
    Balanced,
    /// Protein-forward
    HighProtein,
    /// No particular regime
    NoRestrictions,
}

impl DietType {
    /// Every diet type, in vocabulary order
    pub const ALL: [Self; 7] = [
        Self::Vegetarian,
        Self::Vegan,
        Self::Keto,
        Self::Paleo,
        Self::Balanced,
        Self::HighProtein,
        Self::NoRestrictions,
    ];

    /// Get the canonical vocabulary string for this diet type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::Keto => "keto",
            Self::Paleo => "paleo",
            Self::Balanced => "balanced",
            Self::HighProtein => "high_protein",
            Self::NoRestrictions => "no_restrictions",
        }
    }

    /// Parse a vocabulary string, returning `None` for values outside the vocabulary
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "vegetarian" => Some(Self::Vegetarian),
            "vegan" => Some(Self::Vegan),
            "keto" => Some(Self::Keto),
            "paleo" => Some(Self::Paleo),
            "balanced" => Some(Self::Balanced),
            "high_protein" => Some(Self::HighProtein),
            "no_restrictions" => Some(Self::NoRestrictions),
            _ => None,
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's current diet fact.
///
/// Overwrite semantics: setting a new diet replaces the previous one in
/// full, restrictions included. Restrictions are free-form tags ("gluten",
/// "lactose") kept in first-seen order with duplicates removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietProfile {
    /// Dietary regime
    pub diet_type: DietType,
    /// Deduplicated restriction tags, first-seen order
    pub restrictions: Vec<String>,
}

/// Intake payload for recording a diet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetDietRequest {
    /// Regime, checked against the `diet_type` vocabulary
    pub diet_type: String,
    /// Free-form restriction tags; duplicates are dropped at intake
    #[serde(default)]
    pub restrictions: Vec<String>,
}
