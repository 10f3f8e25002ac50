// ABOUTME: Achievement facts recorded as an append-only history
// ABOUTME: Fields beyond the title are optional and uninterpreted by rules except for counting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Engine Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One recorded achievement.
///
/// Achievements accumulate in record order. Rule patterns only ever count
/// them, so everything past the title is free-form context for coaches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// What was achieved ("City Marathon 2024")
    pub title: String,
    /// When it happened, if recorded
    pub date: Option<NaiveDate>,
    /// Free-form grouping ("podium", "personal_best")
    pub category: Option<String>,
    /// Free-form detail
    pub description: Option<String>,
}

/// Intake payload for recording an achievement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddAchievementRequest {
    /// What was achieved
    pub title: String,
    /// When it happened (ISO 8601 date)
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Free-form grouping
    #[serde(default)]
    pub category: Option<String>,
    /// Free-form detail
    #[serde(default)]
    pub description: Option<String>,
}
