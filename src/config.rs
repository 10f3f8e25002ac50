// ABOUTME: Engine configuration resolved from environment variables
// ABOUTME: Controls rule catalog source and fact validation limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Engine Contributors

//! Engine configuration.
//!
//! The engine runs with built-in defaults and needs no configuration at all.
//! Deployments that want an external rule catalog or different validation
//! limits set the `COACH_*` environment variables and build the engine from
//! [`EngineConfig::from_env`].

use std::env;
use std::path::PathBuf;

use crate::catalog::RuleCatalog;
use crate::errors::{CoachError, CoachResult};

/// Environment variable pointing at an external rule catalog (JSON)
pub const ENV_RULES_PATH: &str = "COACH_RULES_PATH";

/// Environment variable overriding the dietary restriction limit
pub const ENV_MAX_RESTRICTIONS: &str = "COACH_MAX_RESTRICTIONS";

/// Default cap on dietary restrictions accepted per user
pub const DEFAULT_MAX_RESTRICTIONS: usize = 32;

/// Runtime configuration for the coaching engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Path to an external rule catalog, `None` for the built-in catalog
    pub rules_path: Option<PathBuf>,
    /// Maximum number of dietary restrictions accepted per user
    pub max_restrictions: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rules_path: None,
            max_restrictions: DEFAULT_MAX_RESTRICTIONS,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::Config`] if `COACH_MAX_RESTRICTIONS` is set to
    /// anything other than a positive integer
    pub fn from_env() -> CoachResult<Self> {
        let rules_path = env::var(ENV_RULES_PATH).ok().map(PathBuf::from);

        let max_restrictions = match env::var(ENV_MAX_RESTRICTIONS) {
            Ok(raw) => {
                let parsed = raw.parse::<usize>().map_err(|_| {
                    CoachError::config(format!(
                        "{ENV_MAX_RESTRICTIONS} must be a positive integer, got '{raw}'"
                    ))
                })?;
                if parsed == 0 {
                    return Err(CoachError::config(format!(
                        "{ENV_MAX_RESTRICTIONS} must be a positive integer, got '0'"
                    )));
                }
                parsed
            }
            Err(_) => DEFAULT_MAX_RESTRICTIONS,
        };

        Ok(Self {
            rules_path,
            max_restrictions,
        })
    }

    /// Load the rule catalog this configuration selects
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::InvalidCatalog`] if the configured file cannot
    /// be read or fails catalog validation
    pub fn load_catalog(&self) -> CoachResult<RuleCatalog> {
        match &self.rules_path {
            Some(path) => RuleCatalog::from_path(path),
            None => Ok(RuleCatalog::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_builtin_catalog() {
        let config = EngineConfig::default();
        assert!(config.rules_path.is_none());
        assert_eq!(config.max_restrictions, DEFAULT_MAX_RESTRICTIONS);

        let catalog = config.load_catalog().expect("builtin catalog loads");
        assert!(!catalog.is_empty());
    }
}
