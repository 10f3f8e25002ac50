// ABOUTME: Demo walkthrough binary for the coach-engine crate
// ABOUTME: Registers a sample athlete, records facts, and prints derived plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Engine Contributors

//! Demo walkthrough for the coaching engine.
//!
//! This binary drives one athlete through the full fact lifecycle and prints
//! the derived plan before and after an injury report, so the veto behavior
//! of injury-gated rules is visible end to end.
//!
//! Usage:
//! ```bash
//! # Run the walkthrough with the built-in rule catalog
//! cargo run --bin coach-demo
//!
//! # Evaluate a replacement catalog
//! cargo run --bin coach-demo -- --rules rules.json
//!
//! # Print plans as JSON instead of text
//! cargo run --bin coach-demo -- --json
//!
//! # Verbose output
//! cargo run --bin coach-demo -- -v
//! ```

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use tracing::info;

use coach_engine::config::EngineConfig;
use coach_engine::engine::CoachEngine;
use coach_engine::logging::LoggingConfig;
use coach_engine::models::{
    AddAchievementRequest, AddInjuryRequest, DerivedPlan, NewUserRequest, PlanItem,
    SetCompetitionRequest, SetDietRequest, SetSportRequest,
};

#[derive(Parser)]
#[command(
    name = "coach-demo",
    about = "Coach Engine Demo Walkthrough",
    long_about = "Register a sample athlete, record facts, and print the derived plans"
)]
struct DemoArgs {
    /// Path to a replacement rule catalog (JSON)
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Print plans as pretty JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn print_section(title: &str, items: &[PlanItem]) {
    println!("{title}:");
    if items.is_empty() {
        println!("  (none)");
    }
    for item in items {
        println!("  - {}", item.description);
    }
}

fn print_plan(heading: &str, plan: &DerivedPlan, as_json: bool) -> Result<()> {
    println!("\n=== {heading} ===");
    if as_json {
        println!("{}", serde_json::to_string_pretty(plan)?);
    } else {
        print_section("Training plan", &plan.training_plan);
        print_section("Nutrition plan", &plan.nutrition_plan);
        print_section("Injury recommendations", &plan.injury_recommendations);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = DemoArgs::parse();

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let mut config = EngineConfig::from_env()?;
    if let Some(path) = args.rules {
        config.rules_path = Some(path);
    }
    let engine = CoachEngine::from_config(&config)?;
    info!(rules = config.rules_path.is_some(), "engine ready");

    let sports = engine.list_values("sport")?;
    info!(sports = ?sports, "coached sports");

    let user_id = engine.create_user(NewUserRequest {
        name: "Alice".to_owned(),
        age: 25,
        gender: "female".to_owned(),
        height_cm: 168.0,
        weight_kg: 60.0,
        fitness_level: "intermediate".to_owned(),
    })?;

    engine.set_sport(
        user_id,
        SetSportRequest {
            sport: "running".to_owned(),
            level: "intermediate".to_owned(),
        },
    )?;
    engine.set_competition(
        user_id,
        SetCompetitionRequest {
            competition_type: "national".to_owned(),
            format: "marathon".to_owned(),
            level: "national".to_owned(),
        },
    )?;
    engine.set_diet(
        user_id,
        SetDietRequest {
            diet_type: "balanced".to_owned(),
            restrictions: vec!["lactose".to_owned()],
        },
    )?;
    engine.add_achievement(
        user_id,
        AddAchievementRequest {
            title: "City Marathon 2024".to_owned(),
            date: NaiveDate::from_ymd_opt(2024, 10, 13),
            category: Some("podium".to_owned()),
            description: None,
        },
    )?;

    let before = engine.derive_plan(user_id)?;
    print_plan("Plan before injury", &before, args.json)?;

    engine.add_injury(
        user_id,
        AddInjuryRequest {
            injury_type: "knee".to_owned(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1),
            severity: "moderate".to_owned(),
            recovery_time_weeks: Some(6),
            recovery_status: "recovering".to_owned(),
            notes: Some("twinge on downhill repeats".to_owned()),
        },
    )?;

    let after = engine.derive_plan(user_id)?;
    print_plan("Plan after knee injury", &after, args.json)?;

    println!();
    print_section(
        "Standalone injury recommendations",
        &engine.injury_recommendations(user_id),
    );

    Ok(())
}
