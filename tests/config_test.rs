// ABOUTME: Integration tests for environment-driven engine configuration
// ABOUTME: Validates default limits, overrides, and replacement catalog loading
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coach Engine Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::env;
use std::io::Write as _;

use anyhow::Result;
use serial_test::serial;

use coach_engine::config::{
    EngineConfig, DEFAULT_MAX_RESTRICTIONS, ENV_MAX_RESTRICTIONS, ENV_RULES_PATH,
};
use coach_engine::engine::CoachEngine;
use coach_engine::errors::CoachError;

use common::{init_test_logging, register_athlete, sport_request};

fn clear_config_env() {
    env::remove_var(ENV_RULES_PATH);
    env::remove_var(ENV_MAX_RESTRICTIONS);
}

#[test]
#[serial]
fn defaults_apply_when_the_environment_is_unset() -> Result<()> {
    init_test_logging();
    clear_config_env();

    let config = EngineConfig::from_env()?;
    assert!(config.rules_path.is_none());
    assert_eq!(config.max_restrictions, DEFAULT_MAX_RESTRICTIONS);
    assert!(!config.load_catalog()?.is_empty());
    Ok(())
}

#[test]
#[serial]
fn restriction_limit_overrides_are_parsed() -> Result<()> {
    init_test_logging();
    clear_config_env();
    env::set_var(ENV_MAX_RESTRICTIONS, "5");

    let config = EngineConfig::from_env()?;
    assert_eq!(config.max_restrictions, 5);

    clear_config_env();
    Ok(())
}

#[test]
#[serial]
fn unusable_restriction_limits_are_config_errors() {
    init_test_logging();
    clear_config_env();

    for bad in ["0", "many", "-3"] {
        env::set_var(ENV_MAX_RESTRICTIONS, bad);
        let err = EngineConfig::from_env().unwrap_err();
        assert!(
            matches!(
                err,
                CoachError::Config { ref message } if message.contains(ENV_MAX_RESTRICTIONS)
            ),
            "'{bad}' should be rejected"
        );
    }

    clear_config_env();
}

#[test]
#[serial]
fn engines_load_replacement_catalogs_from_the_environment() -> Result<()> {
    init_test_logging();
    clear_config_env();

    let json = r#"[
        {"id": "train.any", "slot": "training", "items": ["train simply"]},
        {"id": "eat.any", "slot": "nutrition", "items": ["eat simply"]}
    ]"#;
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(json.as_bytes())?;
    env::set_var(ENV_RULES_PATH, file.path());

    let config = EngineConfig::from_env()?;
    let engine = CoachEngine::from_config(&config)?;
    assert_eq!(engine.catalog().len(), 2);

    let user_id = register_athlete(&engine, "gail", "beginner")?;
    engine.set_sport(user_id, sport_request("cricket", "beginner"))?;
    let plan = engine.derive_plan(user_id)?;
    assert_eq!(plan.training_plan[0].description, "train simply");
    assert_eq!(plan.nutrition_plan[0].description, "eat simply");

    clear_config_env();
    Ok(())
}

#[test]
#[serial]
fn missing_rules_files_surface_as_invalid_catalogs() {
    init_test_logging();
    clear_config_env();
    env::set_var(ENV_RULES_PATH, "/nonexistent/rules.json");

    let config = EngineConfig::from_env().expect("path is not inspected at config time");
    let err = CoachEngine::from_config(&config).unwrap_err();
    assert!(matches!(err, CoachError::InvalidCatalog { .. }));

    clear_config_env();
}
