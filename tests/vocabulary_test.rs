// ABOUTME: Integration tests for the closed vocabulary registry
// ABOUTME: Validates category listings, membership checks, and sport-scoped formats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Engine Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use coach_engine::errors::CoachError;
use coach_engine::vocabulary::VocabularyRegistry;

use common::init_test_logging;

#[test]
fn categories_cover_every_validated_fact_kind() {
    init_test_logging();
    let registry = VocabularyRegistry::new();

    assert_eq!(
        registry.categories(),
        vec![
            "sport",
            "sport_format",
            "competition_type",
            "competition_level",
            "fitness_level",
            "diet_type",
            "injury_type",
            "injury_severity",
            "recovery_status",
        ]
    );
}

#[test]
fn listings_are_ordered_and_stable() {
    init_test_logging();
    let registry = VocabularyRegistry::new();

    let sports = registry.list_values("sport").unwrap();
    assert_eq!(
        sports,
        vec![
            "cricket",
            "football",
            "swimming",
            "running",
            "tennis",
            "basketball",
            "weightlifting",
            "gymnastics",
        ]
    );
    // Declaration order is the contract; repeated calls never reshuffle
    assert_eq!(registry.list_values("sport").unwrap(), sports);

    assert_eq!(
        registry.list_values("recovery_status").unwrap(),
        vec!["acute", "recovering", "healed", "chronic"]
    );
    assert_eq!(
        registry.list_values("injury_severity").unwrap(),
        vec!["mild", "moderate", "severe"]
    );
}

#[test]
fn unknown_categories_are_an_error() {
    init_test_logging();
    let registry = VocabularyRegistry::new();

    assert_eq!(
        registry.list_values("equipment").unwrap_err(),
        CoachError::unknown_category("equipment")
    );
    assert_eq!(
        registry.is_valid("equipment", "barbell").unwrap_err(),
        CoachError::unknown_category("equipment")
    );
}

#[test]
fn membership_checks_answer_within_known_categories() {
    init_test_logging();
    let registry = VocabularyRegistry::new();

    assert!(registry.is_valid("sport", "cricket").unwrap());
    assert!(!registry.is_valid("sport", "chess").unwrap());
    assert!(registry.is_valid("diet_type", "high_protein").unwrap());
    assert!(!registry.is_valid("diet_type", "seefood").unwrap());
}

#[test]
fn every_listed_value_is_valid_in_its_category() {
    init_test_logging();
    let registry = VocabularyRegistry::new();

    for category in registry.categories() {
        for value in registry.list_values(category).unwrap() {
            assert!(
                registry.is_valid(category, value).unwrap(),
                "{category}/{value} failed its own membership check"
            );
        }
    }
}

#[test]
fn sport_formats_are_scoped_to_their_sport() {
    init_test_logging();
    let registry = VocabularyRegistry::new();

    assert_eq!(
        registry.sport_formats("cricket").unwrap(),
        vec!["t20", "one_day", "test"]
    );
    assert_eq!(
        registry.sport_formats("running").unwrap(),
        vec!["track", "road", "cross_country", "marathon"]
    );
    assert_eq!(
        registry.sport_formats("rowing").unwrap_err(),
        CoachError::invalid_value("sport", "rowing")
    );

    // The global category is the union across sports
    let global = registry.list_values("sport_format").unwrap();
    for sport in registry.list_values("sport").unwrap() {
        for format in registry.sport_formats(sport).unwrap() {
            assert!(global.contains(&format), "{format} missing from the union");
        }
    }
}
