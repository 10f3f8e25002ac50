// ABOUTME: User profile model with fitness level enumeration
// ABOUTME: Profiles anchor every other fact recorded for a user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Engine Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Self-reported training experience, shared by profiles and sport selections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    /// New to structured training
    Beginner,
    /// Trains regularly with some structure
    Intermediate,
    /// Several years of structured training
    Advanced,
    /// Competes at a high level
    Elite,
    /// Trains and competes full-time
    Professional,
}

impl FitnessLevel {
    /// Every level, in ascending order of experience
    pub const ALL: [Self; 5] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::Elite,
        Self::Professional,
    ];

    /// Get the canonical vocabulary string for this level
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Elite => "elite",
            Self::Professional => "professional",
        }
    }

    /// Parse a vocabulary string, returning `None` for values outside the vocabulary
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            "elite" => Some(Self::Elite),
            "professional" => Some(Self::Professional),
            _ => None,
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered user's profile facts.
///
/// The profile is created once per user and is the anchor for all other
/// fact kinds. Numeric fields are stored exactly as validated at intake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Engine-assigned identifier, unique per user
    pub id: Uuid,
    /// Display name, free text
    pub name: String,
    /// Age in whole years
    pub age: u16,
    /// Self-described gender, free text
    pub gender: String,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Baseline training experience
    pub fitness_level: FitnessLevel,
    /// When the profile was registered
    pub created_at: DateTime<Utc>,
}

/// Intake payload for registering a new user.
///
/// Vocabulary-checked fields arrive as strings and are validated by the
/// engine before a profile is committed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUserRequest {
    /// Display name
    pub name: String,
    /// Age in whole years
    pub age: u16,
    /// Self-described gender
    pub gender: String,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Baseline training experience, checked against the `fitness_level` vocabulary
    pub fitness_level: String,
}
