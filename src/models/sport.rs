// ABOUTME: Sport enumeration and the user's sport selection fact
// ABOUTME: Defines the closed set of coached sports with parsing and display implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Engine Contributors

use crate::models::profile::FitnessLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Enumeration of coached sports.
///
/// The set is closed: values outside it are rejected at intake rather than
/// carried as free text, so every rule pattern can match on a known variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    /// Cricket
    Cricket,
    /// Football (soccer)
    Football,
    /// Pool and open-water swimming
    Swimming,
    /// Track, road, and cross-country running
    Running,
    /// Tennis
    Tennis,
    /// Basketball
    Basketball,
    /// Olympic lifting and powerlifting
    Weightlifting,
    /// Artistic, rhythmic, and trampoline gymnastics
    Gymnastics,
}

impl Sport {
    /// Every coached sport, in vocabulary order
    pub const ALL: [Self; 8] = [
        Self::Cricket,
        Self::Football,
        Self::Swimming,
        Self::Running,
        Self::Tennis,
        Self::Basketball,
        Self::Weightlifting,
        Self::Gymnastics,
    ];

    /// Get the canonical vocabulary string for this sport
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cricket => "cricket",
            Self::Football => "football",
            Self::Swimming => "swimming",
            Self::Running => "running",
            Self::Tennis => "tennis",
            Self::Basketball => "basketball",
            Self::Weightlifting => "weightlifting",
            Self::Gymnastics => "gymnastics",
        }
    }

    /// Parse a vocabulary string, returning `None` for values outside the vocabulary
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "cricket" => Some(Self::Cricket),
            "football" => Some(Self::Football),
            "swimming" => Some(Self::Swimming),
            "running" => Some(Self::Running),
            "tennis" => Some(Self::Tennis),
            "basketball" => Some(Self::Basketball),
            "weightlifting" => Some(Self::Weightlifting),
            "gymnastics" => Some(Self::Gymnastics),
            _ => None,
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's current sport selection fact.
///
/// Overwrite semantics: setting a new selection replaces the previous one
/// in full. The level recorded here is the level *for this sport*, which
/// may differ from the profile's baseline fitness level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SportSelection {
    /// The coached sport
    pub sport: Sport,
    /// Experience level within this sport
    pub level: FitnessLevel,
}

/// Intake payload for selecting a sport
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetSportRequest {
    /// Sport name, checked against the `sport` vocabulary
    pub sport: String,
    /// Experience level, checked against the `fitness_level` vocabulary
    pub level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sport_round_trips_through_vocabulary_strings() {
        for sport in Sport::ALL {
            assert_eq!(Sport::parse(sport.as_str()), Some(sport));
        }
        assert_eq!(Sport::parse("chess"), None);
        assert_eq!(Sport::parse("Running"), None);
    }

    #[test]
    fn selection_serializes_with_snake_case_values() {
        let selection = SportSelection {
            sport: Sport::Weightlifting,
            level: FitnessLevel::Advanced,
        };
        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(json["sport"], "weightlifting");
        assert_eq!(json["level"], "advanced");
    }
}
