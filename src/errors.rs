// ABOUTME: Unified error taxonomy for fact validation, derivation, and catalog loading
// ABOUTME: Provides structured errors, stable error codes, and HTTP status hints for facades
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Engine Contributors

//! # Error Handling
//!
//! Every fallible engine operation returns [`CoachError`]. Variants carry the
//! data a caller needs to render a precise message: the offending value, the
//! vocabulary category it failed against, or the user it concerns.
//!
//! Facades embedding the engine map errors to transport-level responses via
//! [`ErrorCode::http_status`] and [`ErrorResponse`]; the engine itself never
//! formats HTTP.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    #[serde(rename = "INVALID_VALUE")]
    InvalidValue = 3000,
    #[serde(rename = "UNKNOWN_CATEGORY")]
    UnknownCategory = 3001,

    // Resource Management (4000-4999)
    #[serde(rename = "USER_NOT_FOUND")]
    UserNotFound = 4000,

    // Derivation (5000-5999)
    #[serde(rename = "MISSING_SPORT")]
    MissingSport = 5000,
    #[serde(rename = "DERIVATION_UNAVAILABLE")]
    DerivationUnavailable = 5001,

    // Configuration (6000-6999)
    #[serde(rename = "INVALID_CATALOG")]
    InvalidCatalog = 6000,
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6001,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            // 400 Bad Request
            Self::InvalidValue
            | Self::UnknownCategory
            | Self::MissingSport
            | Self::DerivationUnavailable => 400,

            // 404 Not Found
            Self::UserNotFound => 404,

            // 500 Internal Server Error
            Self::InvalidCatalog | Self::ConfigError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidValue => "The provided value is not in the closed vocabulary",
            Self::UnknownCategory => "The requested vocabulary category does not exist",
            Self::UserNotFound => "The requested user was not found",
            Self::MissingSport => "The user has not selected a sport yet",
            Self::DerivationUnavailable => "No plan can be derived from the recorded facts",
            Self::InvalidCatalog => "The rule catalog failed validation",
            Self::ConfigError => "Engine configuration is invalid",
        }
    }
}

/// Unified error type for all engine operations.
///
/// Variants are structured rather than stringly-typed so callers can branch
/// on the exact failure and surface the offending category and value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoachError {
    /// No user is registered under the given identifier
    #[error("user {user_id} not found")]
    UserNotFound {
        /// Identifier that matched no registered user
        user_id: Uuid,
    },

    /// The user exists but never selected a sport, so no plan can be derived
    #[error("user {user_id} has no sport selection")]
    MissingSport {
        /// User whose sport selection is missing
        user_id: Uuid,
    },

    /// A vocabulary-checked field carried a value outside the closed vocabulary
    #[error("invalid value '{value}' for {category}")]
    InvalidValue {
        /// Vocabulary category (or field name) the value was checked against
        category: &'static str,
        /// The rejected value, exactly as submitted
        value: String,
    },

    /// A vocabulary query named a category the registry does not define
    #[error("unknown vocabulary category '{category}'")]
    UnknownCategory {
        /// The unrecognized category name
        category: String,
    },

    /// No base training rule matched the user's facts
    #[error("no training rule matches the recorded facts for user {user_id}")]
    DerivationUnavailable {
        /// User whose facts matched no base training rule
        user_id: Uuid,
    },

    /// A rule catalog failed structural validation or could not be read
    #[error("invalid rule catalog: {reason}")]
    InvalidCatalog {
        /// What the validator or loader rejected
        reason: String,
    },

    /// Engine configuration could not be assembled from the environment
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },
}

impl CoachError {
    /// Create a "user not found" error
    #[must_use]
    pub const fn user_not_found(user_id: Uuid) -> Self {
        Self::UserNotFound { user_id }
    }

    /// Create a "missing sport" error
    #[must_use]
    pub const fn missing_sport(user_id: Uuid) -> Self {
        Self::MissingSport { user_id }
    }

    /// Create an "invalid value" error for the given category
    #[must_use]
    pub fn invalid_value(category: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            category,
            value: value.into(),
        }
    }

    /// Create an "unknown category" error
    #[must_use]
    pub fn unknown_category(category: impl Into<String>) -> Self {
        Self::UnknownCategory {
            category: category.into(),
        }
    }

    /// Create a "derivation unavailable" error
    #[must_use]
    pub const fn derivation_unavailable(user_id: Uuid) -> Self {
        Self::DerivationUnavailable { user_id }
    }

    /// Create an "invalid catalog" error
    #[must_use]
    pub fn invalid_catalog(reason: impl Into<String>) -> Self {
        Self::InvalidCatalog {
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get the stable error code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::UserNotFound { .. } => ErrorCode::UserNotFound,
            Self::MissingSport { .. } => ErrorCode::MissingSport,
            Self::InvalidValue { .. } => ErrorCode::InvalidValue,
            Self::UnknownCategory { .. } => ErrorCode::UnknownCategory,
            Self::DerivationUnavailable { .. } => ErrorCode::DerivationUnavailable,
            Self::InvalidCatalog { .. } => ErrorCode::InvalidCatalog,
            Self::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code().http_status()
    }
}

/// Result type alias for convenience
pub type CoachResult<T> = Result<T, CoachError>;

/// Wire-level error payload for facades that expose the engine over HTTP
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// The error envelope
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Stable machine-readable code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
}

impl From<CoachError> for ErrorResponse {
    fn from(error: CoachError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code(),
                message: error.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_carries_category_and_value() {
        let err = CoachError::invalid_value("sport", "chess");
        assert_eq!(
            err,
            CoachError::InvalidValue {
                category: "sport",
                value: "chess".to_owned(),
            }
        );
        assert_eq!(err.to_string(), "invalid value 'chess' for sport");
        assert_eq!(err.code(), ErrorCode::InvalidValue);
    }

    #[test]
    fn http_status_hints() {
        let id = Uuid::new_v4();
        assert_eq!(CoachError::user_not_found(id).http_status(), 404);
        assert_eq!(CoachError::missing_sport(id).http_status(), 400);
        assert_eq!(CoachError::derivation_unavailable(id).http_status(), 400);
        assert_eq!(CoachError::invalid_value("diet_type", "x").http_status(), 400);
        assert_eq!(CoachError::unknown_category("moods").http_status(), 400);
        assert_eq!(CoachError::invalid_catalog("dup id").http_status(), 500);
        assert_eq!(CoachError::config("bad limit").http_status(), 500);
    }

    #[test]
    fn error_codes_serialize_as_screaming_snake() {
        let json = serde_json::to_string(&ErrorCode::DerivationUnavailable).unwrap();
        assert_eq!(json, "\"DERIVATION_UNAVAILABLE\"");
    }

    #[test]
    fn error_response_wraps_code_and_message() {
        let response = ErrorResponse::from(CoachError::unknown_category("moods"));
        assert_eq!(response.error.code, ErrorCode::UnknownCategory);
        assert!(response.error.message.contains("moods"));
    }
}
