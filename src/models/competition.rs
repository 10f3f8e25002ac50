// ABOUTME: Competition facts: event type, per-sport format, and competition level
// ABOUTME: Formats are sport-scoped; the vocabulary registry owns the sport-to-format mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Engine Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of event the user is preparing for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionType {
    /// Olympic games
    Olympics,
    /// Commonwealth games
    Commonwealth,
    /// World championship
    WorldChampionship,
    /// National championship
    National,
    /// Local or regional event
    Local,
}

impl CompetitionType {
    /// Every competition type, in vocabulary order
    pub const ALL: [Self; 5] = [
        Self::Olympics,
        Self::Commonwealth,
        Self::WorldChampionship,
        Self::National,
        Self::Local,
    ];

    /// Get the canonical vocabulary string for this competition type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Olympics => "olympics",
            Self::Commonwealth => "commonwealth",
            Self::WorldChampionship => "world_championship",
            Self::National => "national",
            Self::Local => "local",
        }
    }

    /// Parse a vocabulary string, returning `None` for values outside the vocabulary
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "olympics" => Some(Self::Olympics),
            "commonwealth" => Some(Self::Commonwealth),
            "world_championship" => Some(Self::WorldChampionship),
            "national" => Some(Self::National),
            "local" => Some(Self::Local),
            _ => None,
        }
    }
}

impl fmt::Display for CompetitionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The level at which the user competes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionLevel {
    /// International fields
    International,
    /// National fields
    National,
    /// State or provincial fields
    State,
    /// Club-level fields
    Club,
}

impl CompetitionLevel {
    /// Every competition level, in vocabulary order
    pub const ALL: [Self; 4] = [
        Self::International,
        Self::National,
        Self::State,
        Self::Club,
    ];

    /// Get the canonical vocabulary string for this competition level
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::International => "international",
            Self::National => "national",
            Self::State => "state",
            Self::Club => "club",
        }
    }

    /// Parse a vocabulary string, returning `None` for values outside the vocabulary
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "international" => Some(Self::International),
            "national" => Some(Self::National),
            "state" => Some(Self::State),
            "club" => Some(Self::Club),
            _ => None,
        }
    }
}

impl fmt::Display for CompetitionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sport-scoped competition formats.
///
/// A format is only meaningful for the sport that defines it (`t20` for
/// cricket, `marathon` for running). Which formats belong to which sport is
/// answered by the vocabulary registry; this enum is the union across all
/// coached sports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SportFormat {
    // Cricket
    /// Twenty20 cricket
    T20,
    /// One-day cricket
    OneDay,
    /// Test cricket
    Test,

    // Football
    /// League season play
    League,
    /// Knockout cup play
    Knockout,
    /// Friendly fixtures
    Friendly,

    // Swimming
    /// Sprint events (50-100m)
    SprintEvents,
    /// Middle-distance pool events
    MiddleDistance,
    /// Open-water swimming
    OpenWater,

    // Running
    /// Track events
    Track,
    /// Road racing
    Road,
    /// Cross-country racing
    CrossCountry,
    /// Marathon and longer
    Marathon,

    // Tennis
    /// Singles play
    Singles,
    /// Doubles play
    Doubles,
    /// Mixed doubles play
    MixedDoubles,

    // Basketball
    /// Full-court five-a-side
    FiveOnFive,
    /// Half-court three-a-side
    ThreeOnThree,

    // Weightlifting
    /// Olympic lifting (snatch, clean and jerk)
    Olympic,
    /// Powerlifting (squat, bench, deadlift)
    Powerlifting,

    // Gymnastics
    /// Artistic gymnastics
    Artistic,
    /// Rhythmic gymnastics
    Rhythmic,
    /// Trampoline gymnastics
    Trampoline,
}

impl SportFormat {
    /// Get the canonical vocabulary string for this format
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::T20 => "t20",
            Self::OneDay => "one_day",
            Self::Test => "test",
            Self::League => "league",
            Self::Knockout => "knockout",
            Self::Friendly => "friendly",
            Self::SprintEvents => "sprint_events",
            Self::MiddleDistance => "middle_distance",
            Self::OpenWater => "open_water",
            Self::Track => "track",
            Self::Road => "road",
            Self::CrossCountry => "cross_country",
            Self::Marathon => "marathon",
            Self::Singles => "singles",
            Self::Doubles => "doubles",
            Self::MixedDoubles => "mixed_doubles",
            Self::FiveOnFive => "five_on_five",
            Self::ThreeOnThree => "three_on_three",
            Self::Olympic => "olympic",
            Self::Powerlifting => "powerlifting",
            Self::Artistic => "artistic",
            Self::Rhythmic => "rhythmic",
            Self::Trampoline => "trampoline",
        }
    }

    /// Parse a vocabulary string, returning `None` for values outside the vocabulary
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "t20" => Some(Self::T20),
            "one_day" => Some(Self::OneDay),
            "test" => Some(Self::Test),
            "league" => Some(Self::League),
            "knockout" => Some(Self::Knockout),
            "friendly" => Some(Self::Friendly),
            "sprint_events" => Some(Self::SprintEvents),
            "middle_distance" => Some(Self::MiddleDistance),
            "open_water" => Some(Self::OpenWater),
            "track" => Some(Self::Track),
            "road" => Some(Self::Road),
            "cross_country" => Some(Self::CrossCountry),
            "marathon" => Some(Self::Marathon),
            "singles" => Some(Self::Singles),
            "doubles" => Some(Self::Doubles),
            "mixed_doubles" => Some(Self::MixedDoubles),
            "five_on_five" => Some(Self::FiveOnFive),
            "three_on_three" => Some(Self::ThreeOnThree),
            "olympic" => Some(Self::Olympic),
            "powerlifting" => Some(Self::Powerlifting),
            "artistic" => Some(Self::Artistic),
            "rhythmic" => Some(Self::Rhythmic),
            "trampoline" => Some(Self::Trampoline),
            _ => None,
        }
    }
}

impl fmt::Display for SportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's current competition fact.
///
/// Overwrite semantics: setting a new competition replaces the previous one
/// in full. The format must belong to the user's selected sport, which the
/// engine checks at intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionProfile {
    /// Kind of event being prepared for
    pub competition_type: CompetitionType,
    /// Sport-scoped format of the event
    pub format: SportFormat,
    /// Level of the field
    pub level: CompetitionLevel,
}

/// Intake payload for recording a competition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetCompetitionRequest {
    /// Event kind, checked against the `competition_type` vocabulary
    pub competition_type: String,
    /// Event format, checked against the selected sport's formats
    pub format: String,
    /// Field level, checked against the `competition_level` vocabulary
    pub level: String,
}
