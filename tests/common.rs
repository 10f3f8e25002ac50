// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides engine construction, logging, and intake request builders
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coach Engine Contributors
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `coach_engine`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use anyhow::Result;
use coach_engine::engine::CoachEngine;
use coach_engine::models::{
    AddAchievementRequest, AddInjuryRequest, NewUserRequest, SetCompetitionRequest,
    SetDietRequest, SetSportRequest,
};
use std::sync::Once;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Engine with the built-in catalog and quiet logging installed
pub fn engine() -> CoachEngine {
    init_test_logging();
    CoachEngine::new()
}

/// Intake request for a stock 25-year-old athlete
pub fn new_user_request(name: &str, fitness_level: &str) -> NewUserRequest {
    NewUserRequest {
        name: name.to_owned(),
        age: 25,
        gender: "female".to_owned(),
        height_cm: 168.0,
        weight_kg: 60.0,
        fitness_level: fitness_level.to_owned(),
    }
}

/// Register a stock athlete and return the generated id
pub fn register_athlete(engine: &CoachEngine, name: &str, fitness_level: &str) -> Result<Uuid> {
    Ok(engine.create_user(new_user_request(name, fitness_level))?)
}

/// Register an intermediate runner, the scenario most tests start from
pub fn running_athlete(engine: &CoachEngine) -> Result<Uuid> {
    let user_id = register_athlete(engine, "alice", "intermediate")?;
    engine.set_sport(user_id, sport_request("running", "intermediate"))?;
    Ok(user_id)
}

pub fn sport_request(sport: &str, level: &str) -> SetSportRequest {
    SetSportRequest {
        sport: sport.to_owned(),
        level: level.to_owned(),
    }
}

pub fn competition_request(
    competition_type: &str,
    format: &str,
    level: &str,
) -> SetCompetitionRequest {
    SetCompetitionRequest {
        competition_type: competition_type.to_owned(),
        format: format.to_owned(),
        level: level.to_owned(),
    }
}

pub fn diet_request(diet_type: &str, restrictions: &[&str]) -> SetDietRequest {
    SetDietRequest {
        diet_type: diet_type.to_owned(),
        restrictions: restrictions.iter().map(|r| (*r).to_owned()).collect(),
    }
}

pub fn injury_request(
    injury_type: &str,
    severity: &str,
    recovery_status: &str,
) -> AddInjuryRequest {
    AddInjuryRequest {
        injury_type: injury_type.to_owned(),
        date: None,
        severity: severity.to_owned(),
        recovery_time_weeks: None,
        recovery_status: recovery_status.to_owned(),
        notes: None,
    }
}

pub fn achievement_request(title: &str) -> AddAchievementRequest {
    AddAchievementRequest {
        title: title.to_owned(),
        date: None,
        category: None,
        description: None,
    }
}
