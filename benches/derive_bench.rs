// ABOUTME: Criterion benchmarks for plan derivation throughput
// ABOUTME: Measures derive_plan and injury recommendation latency against full fact sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Engine Contributors

//! Criterion benchmarks for plan derivation.
//!
//! Measures full-plan derivation and injury recommendation evaluation for a
//! user with every fact kind populated, plus catalog JSON round-trip cost.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use uuid::Uuid;

use coach_engine::catalog::RuleCatalog;
use coach_engine::engine::CoachEngine;
use coach_engine::models::{
    AddAchievementRequest, AddInjuryRequest, NewUserRequest, SetCompetitionRequest,
    SetDietRequest, SetSportRequest,
};

/// Engine with one athlete carrying every fact kind the deriver reads
fn populated_engine() -> (CoachEngine, Uuid) {
    let engine = CoachEngine::new();
    let user_id = engine
        .create_user(NewUserRequest {
            name: "bench".to_owned(),
            age: 27,
            gender: "female".to_owned(),
            height_cm: 170.0,
            weight_kg: 63.0,
            fitness_level: "advanced".to_owned(),
        })
        .unwrap();

    engine
        .set_sport(
            user_id,
            SetSportRequest {
                sport: "running".to_owned(),
                level: "advanced".to_owned(),
            },
        )
        .unwrap();
    engine
        .set_competition(
            user_id,
            SetCompetitionRequest {
                competition_type: "national".to_owned(),
                format: "marathon".to_owned(),
                level: "national".to_owned(),
            },
        )
        .unwrap();
    engine
        .set_diet(
            user_id,
            SetDietRequest {
                diet_type: "high_protein".to_owned(),
                restrictions: vec!["lactose".to_owned(), "gluten".to_owned()],
            },
        )
        .unwrap();

    for (injury_type, status) in [("knee", "recovering"), ("hamstring", "chronic")] {
        engine
            .add_injury(
                user_id,
                AddInjuryRequest {
                    injury_type: injury_type.to_owned(),
                    date: None,
                    severity: "moderate".to_owned(),
                    recovery_time_weeks: Some(4),
                    recovery_status: status.to_owned(),
                    notes: None,
                },
            )
            .unwrap();
    }
    for title in ["city 10k", "club half", "state trials"] {
        engine
            .add_achievement(
                user_id,
                AddAchievementRequest {
                    title: title.to_owned(),
                    date: None,
                    category: None,
                    description: None,
                },
            )
            .unwrap();
    }

    (engine, user_id)
}

fn bench_plan_derivation(c: &mut Criterion) {
    let (engine, user_id) = populated_engine();

    c.bench_function("derive_plan_full_facts", |b| {
        b.iter(|| engine.derive_plan(black_box(user_id)).unwrap());
    });
}

fn bench_injury_recommendations(c: &mut Criterion) {
    let (engine, user_id) = populated_engine();

    c.bench_function("injury_recommendations", |b| {
        b.iter(|| engine.injury_recommendations(black_box(user_id)));
    });
}

fn bench_catalog_round_trip(c: &mut Criterion) {
    let json = serde_json::to_string(&RuleCatalog::builtin()).unwrap();

    c.bench_function("catalog_json_round_trip", |b| {
        b.iter(|| RuleCatalog::from_json_str(black_box(&json)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_plan_derivation,
    bench_injury_recommendations,
    bench_catalog_round_trip
);
criterion_main!(benches);
