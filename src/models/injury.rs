// ABOUTME: Injury facts: typed site, severity, and recovery status per record
// ABOUTME: Records are append-only; history is never rewritten by later reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Engine Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body site or structure of a reported injury
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InjuryType {
    /// Knee joint
    Knee,
    /// Ankle joint
    Ankle,
    /// Shoulder joint
    Shoulder,
    /// Elbow joint
    Elbow,
    /// Wrist joint
    Wrist,
    /// Lower or upper back
    Back,
    /// Hamstring muscle group
    Hamstring,
    /// Shin (tibial stress)
    Shin,
}

impl InjuryType {
    /// Every injury type, in vocabulary order
    pub const ALL: [Self; 8] = [
        Self::Knee,
        Self::Ankle,
        Self::Shoulder,
        Self::Elbow,
        Self::Wrist,
        Self::Back,
        Self::Hamstring,
        Self::Shin,
    ];

    /// Get the canonical vocabulary string for this injury type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Knee => "knee",
            Self::Ankle => "ankle",
            Self::Shoulder => "shoulder",
            Self::Elbow => "elbow",
            Self::Wrist => "wrist",
            Self::Back => "back",
            Self::Hamstring => "hamstring",
            Self::Shin => "shin",
        }
    }

    /// Parse a vocabulary string, returning `None` for values outside the vocabulary
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "knee" => Some(Self::Knee),
            "ankle" => Some(Self::Ankle),
            "shoulder" => Some(Self::Shoulder),
            "elbow" => Some(Self::Elbow),
            "wrist" => Some(Self::Wrist),
            "back" => Some(Self::Back),
            "hamstring" => Some(Self::Hamstring),
            "shin" => Some(Self::Shin),
            _ => None,
        }
    }
}

impl fmt::Display for InjuryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How serious a reported injury is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InjurySeverity {
    /// Train-through discomfort
    Mild,
    /// Requires load modification
    Moderate,
    /// Requires stopping the affected pattern
    Severe,
}

impl InjurySeverity {
    /// Every severity, from least to most serious
    pub const ALL: [Self; 3] = [Self::Mild, Self::Moderate, Self::Severe];

    /// Get the canonical vocabulary string for this severity
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }

    /// Parse a vocabulary string, returning `None` for values outside the vocabulary
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "mild" => Some(Self::Mild),
            "moderate" => Some(Self::Moderate),
            "severe" => Some(Self::Severe),
            _ => None,
        }
    }
}

impl fmt::Display for InjurySeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a reported injury stands in its recovery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryStatus {
    /// Fresh injury, not yet rehabilitating
    Acute,
    /// Actively rehabilitating
    Recovering,
    /// Cleared for full load
    Healed,
    /// Long-term condition managed rather than cured
    Chronic,
}

impl RecoveryStatus {
    /// Every recovery status, in vocabulary order
    pub const ALL: [Self; 4] = [Self::Acute, Self::Recovering, Self::Healed, Self::Chronic];

    /// Get the canonical vocabulary string for this status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Acute => "acute",
            Self::Recovering => "recovering",
            Self::Healed => "healed",
            Self::Chronic => "chronic",
        }
    }

    /// Parse a vocabulary string, returning `None` for values outside the vocabulary
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "acute" => Some(Self::Acute),
            "recovering" => Some(Self::Recovering),
            "healed" => Some(Self::Healed),
            "chronic" => Some(Self::Chronic),
            _ => None,
        }
    }

    /// Whether this status means the injury is cleared for full load
    #[must_use]
    pub const fn is_cleared(self) -> bool {
        matches!(self, Self::Healed)
    }
}

impl fmt::Display for RecoveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported injury.
///
/// Records accumulate in report order and are never overwritten; a change in
/// status is reported as a new record. Optional fields stay `None` when the
/// reporter omitted them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjuryRecord {
    /// Injured site or structure
    pub injury_type: InjuryType,
    /// When the injury occurred, if reported
    pub date: Option<NaiveDate>,
    /// How serious the injury is
    pub severity: InjurySeverity,
    /// Expected recovery time in weeks, if reported
    pub recovery_time_weeks: Option<u32>,
    /// Where recovery stands as of this report
    pub recovery_status: RecoveryStatus,
    /// Free-form notes from the reporter
    pub notes: Option<String>,
}

/// Intake payload for reporting an injury
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddInjuryRequest {
    /// Injured site, checked against the `injury_type` vocabulary
    pub injury_type: String,
    /// When the injury occurred (ISO 8601 date)
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Severity, checked against the `injury_severity` vocabulary
    pub severity: String,
    /// Expected recovery time in weeks
    #[serde(default)]
    pub recovery_time_weeks: Option<u32>,
    /// Recovery status, checked against the `recovery_status` vocabulary
    pub recovery_status: String,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn injury_vocabularies_round_trip() {
        for value in InjuryType::ALL {
            assert_eq!(InjuryType::parse(value.as_str()), Some(value));
        }
        for value in InjurySeverity::ALL {
            assert_eq!(InjurySeverity::parse(value.as_str()), Some(value));
        }
        for value in RecoveryStatus::ALL {
            assert_eq!(RecoveryStatus::parse(value.as_str()), Some(value));
        }
    }

    #[test]
    fn only_healed_counts_as_cleared() {
        assert!(RecoveryStatus::Healed.is_cleared());
        assert!(!RecoveryStatus::Acute.is_cleared());
        assert!(!RecoveryStatus::Recovering.is_cleared());
        assert!(!RecoveryStatus::Chronic.is_cleared());
    }

    #[test]
    fn add_injury_request_accepts_minimal_shape() {
        let request: AddInjuryRequest = serde_json::from_str(
            r#"{"injury_type":"knee","severity":"moderate","recovery_status":"recovering"}"#,
        )
        .unwrap();
        assert!(request.date.is_none());
        assert!(request.recovery_time_weeks.is_none());
        assert!(request.notes.is_none());
    }

    #[test]
    fn add_injury_request_parses_full_shape() {
        let request: AddInjuryRequest = serde_json::from_str(
            r#"{
                "injury_type": "hamstring",
                "date": "2025-03-14",
                "severity": "severe",
                "recovery_time_weeks": 6,
                "recovery_status": "acute",
                "notes": "grade II strain, left side"
            }"#,
        )
        .unwrap();
        assert_eq!(request.date.unwrap().to_string(), "2025-03-14");
        assert_eq!(request.recovery_time_weeks, Some(6));
    }
}
