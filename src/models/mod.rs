// ABOUTME: Core fact and plan data models for the coach engine
// ABOUTME: Re-exports profiles, sport, competition, diet, injury, achievement, and plan types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Engine Contributors

//! # Data Models
//!
//! The typed vocabulary of the engine. Every fact a user can record and
//! every plan the engine can derive is shaped here.
//!
//! ## Design Principles
//!
//! - **Closed vocabularies**: enumerated fields reject unknown values at
//!   intake instead of carrying free text into the rule layer
//! - **Strings at the boundary**: `*Request` payloads carry vocabulary
//!   fields as strings; the engine validates and converts them
//! - **Serializable**: all models support JSON for facade embedding
//!
//! ## Fact Kinds
//!
//! - [`UserProfile`]: one per user, created at registration
//! - [`SportSelection`], [`CompetitionProfile`], [`DietProfile`]: overwrite
//!   on each set
//! - [`InjuryRecord`], [`Achievement`]: append-only histories

// Domain modules
mod achievement;
mod competition;
mod diet;
mod injury;
mod plan;
mod profile;
mod sport;

// Re-export all public types for convenience
// Profile domain
pub use profile::{FitnessLevel, NewUserRequest, UserProfile};

// Sport domain
pub use sport::{SetSportRequest, Sport, SportSelection};

// Competition domain
pub use competition::{
    CompetitionLevel, CompetitionProfile, CompetitionType, SetCompetitionRequest, SportFormat,
};

// Diet domain
pub use diet::{DietProfile, DietType, SetDietRequest};

// Injury domain
pub use injury::{AddInjuryRequest, InjuryRecord, InjurySeverity, InjuryType, RecoveryStatus};

// Achievement domain
pub use achievement::{AddAchievementRequest, Achievement};

// Plan domain
pub use plan::{DerivedPlan, PlanItem, PlanSlot};
