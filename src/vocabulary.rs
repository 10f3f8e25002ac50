// ABOUTME: Closed vocabulary registry mapping category names to their legal values
// ABOUTME: Single source of truth for intake validation and vocabulary queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Engine Contributors

//! # Vocabulary Registry
//!
//! Every enumerated fact field is validated against a named category here.
//! Categories are closed and ordered: [`VocabularyRegistry::list_values`]
//! returns the same values in the same order on every call, so facades can
//! drive selection UIs straight from the registry.
//!
//! Formats are the one sport-scoped category: `t20` is a cricket format and
//! nothing else, so format validity is answered per sport via
//! [`VocabularyRegistry::sport_formats`].

use crate::errors::{CoachError, CoachResult};
use crate::models::{
    CompetitionLevel, CompetitionType, DietType, FitnessLevel, InjurySeverity, InjuryType,
    RecoveryStatus, Sport, SportFormat,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named vocabulary categories understood by the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Coached sports
    Sport,
    /// Competition formats across all sports
    SportFormat,
    /// Kinds of event a user prepares for
    CompetitionType,
    /// Levels at which a user competes
    CompetitionLevel,
    /// Training experience levels
    FitnessLevel,
    /// Dietary regimes
    DietType,
    /// Injury sites and structures
    InjuryType,
    /// Injury severities
    InjurySeverity,
    /// Injury recovery statuses
    RecoveryStatus,
}

impl Category {
    /// Every category the registry defines
    pub const ALL: [Self; 9] = [
        Self::Sport,
        Self::SportFormat,
        Self::CompetitionType,
        Self::CompetitionLevel,
        Self::FitnessLevel,
        Self::DietType,
        Self::InjuryType,
        Self::InjurySeverity,
        Self::RecoveryStatus,
    ];

    /// Get the canonical name of this category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sport => "sport",
            Self::SportFormat => "sport_format",
            Self::CompetitionType => "competition_type",
            Self::CompetitionLevel => "competition_level",
            Self::FitnessLevel => "fitness_level",
            Self::DietType => "diet_type",
            Self::InjuryType => "injury_type",
            Self::InjurySeverity => "injury_severity",
            Self::RecoveryStatus => "recovery_status",
        }
    }

    /// Parse a category name, returning `None` for names the registry does not define
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "sport" => Some(Self::Sport),
            "sport_format" => Some(Self::SportFormat),
            "competition_type" => Some(Self::CompetitionType),
            "competition_level" => Some(Self::CompetitionLevel),
            "fitness_level" => Some(Self::FitnessLevel),
            "diet_type" => Some(Self::DietType),
            "injury_type" => Some(Self::InjuryType),
            "injury_severity" => Some(Self::InjurySeverity),
            "recovery_status" => Some(Self::RecoveryStatus),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only view over the closed vocabularies.
///
/// The registry holds no state; it exists as a value so the engine can hand
/// out one coherent validation surface instead of scattering enum calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct VocabularyRegistry;

impl VocabularyRegistry {
    /// Create a registry
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// List the names of every category, in registry order
    #[must_use]
    pub fn categories(&self) -> Vec<&'static str> {
        Category::ALL.iter().map(|c| c.as_str()).collect()
    }

    /// List the legal values of a category, in vocabulary order.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::UnknownCategory`] if `category` is not a
    /// registry category.
    pub fn list_values(&self, category: &str) -> CoachResult<Vec<&'static str>> {
        let parsed =
            Category::parse(category).ok_or_else(|| CoachError::unknown_category(category))?;
        Ok(Self::values_of(parsed))
    }

    /// Check whether `value` is legal for `category`.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::UnknownCategory`] if `category` is not a
    /// registry category. An unknown *value* is not an error here; it
    /// answers `false`.
    pub fn is_valid(&self, category: &str, value: &str) -> CoachResult<bool> {
        let parsed =
            Category::parse(category).ok_or_else(|| CoachError::unknown_category(category))?;
        Ok(match parsed {
            Category::Sport => Sport::parse(value).is_some(),
            Category::SportFormat => SportFormat::parse(value).is_some(),
            Category::CompetitionType => CompetitionType::parse(value).is_some(),
            Category::CompetitionLevel => CompetitionLevel::parse(value).is_some(),
            Category::FitnessLevel => FitnessLevel::parse(value).is_some(),
            Category::DietType => DietType::parse(value).is_some(),
            Category::InjuryType => InjuryType::parse(value).is_some(),
            Category::InjurySeverity => InjurySeverity::parse(value).is_some(),
            Category::RecoveryStatus => RecoveryStatus::parse(value).is_some(),
        })
    }

    /// List the formats defined for a sport, in vocabulary order.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::InvalidValue`] if `sport` is not a coached
    /// sport.
    pub fn sport_formats(&self, sport: &str) -> CoachResult<Vec<&'static str>> {
        let parsed =
            Sport::parse(sport).ok_or_else(|| CoachError::invalid_value("sport", sport))?;
        Ok(Self::formats_of(parsed).iter().map(|f| f.as_str()).collect())
    }

    /// The formats that belong to `sport`
    #[must_use]
    pub const fn formats_of(sport: Sport) -> &'static [SportFormat] {
        match sport {
            Sport::Cricket => &[SportFormat::T20, SportFormat::OneDay, SportFormat::Test],
            Sport::Football => &[
                SportFormat::League,
                SportFormat::Knockout,
                SportFormat::Friendly,
            ],
            Sport::Swimming => &[
                SportFormat::SprintEvents,
                SportFormat::MiddleDistance,
                SportFormat::OpenWater,
            ],
            Sport::Running => &[
                SportFormat::Track,
                SportFormat::Road,
                SportFormat::CrossCountry,
                SportFormat::Marathon,
            ],
            Sport::Tennis => &[
                SportFormat::Singles,
                SportFormat::Doubles,
                SportFormat::MixedDoubles,
            ],
            Sport::Basketball => &[SportFormat::FiveOnFive, SportFormat::ThreeOnThree],
            Sport::Weightlifting => &[SportFormat::Olympic, SportFormat::Powerlifting],
            Sport::Gymnastics => &[
                SportFormat::Artistic,
                SportFormat::Rhythmic,
                SportFormat::Trampoline,
            ],
        }
    }

    fn values_of(category: Category) -> Vec<&'static str> {
        match category {
            Category::Sport => Sport::ALL.iter().map(|v| v.as_str()).collect(),
            Category::SportFormat => Sport::ALL
                .iter()
                .flat_map(|sport| Self::formats_of(*sport))
                .map(|v| v.as_str())
                .collect(),
            Category::CompetitionType => CompetitionType::ALL.iter().map(|v| v.as_str()).collect(),
            Category::CompetitionLevel => {
                CompetitionLevel::ALL.iter().map(|v| v.as_str()).collect()
            }
            Category::FitnessLevel => FitnessLevel::ALL.iter().map(|v| v.as_str()).collect(),
            Category::DietType => DietType::ALL.iter().map(|v| v.as_str()).collect(),
            Category::InjuryType => InjuryType::ALL.iter().map(|v| v.as_str()).collect(),
            Category::InjurySeverity => InjurySeverity::ALL.iter().map(|v| v.as_str()).collect(),
            Category::RecoveryStatus => RecoveryStatus::ALL.iter().map(|v| v.as_str()).collect(),
        }
    }
}
