// ABOUTME: Main library entry point for the coach-engine crate
// ABOUTME: Exposes the fact store, rule catalog, plan deriver, and CoachEngine facade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Engine Contributors

#![deny(unsafe_code)]

//! # Coach Engine
//!
//! A deterministic fact store and forward-chaining rule engine for sports
//! coaching plans. The engine accumulates validated facts about each user
//! (profile, sport, competition context, diet, injuries, achievements) and
//! derives a three-part plan (training, nutrition, injury recommendations)
//! from a declarative rule catalog whenever asked.
//!
//! ## Features
//!
//! - **Closed vocabularies**: Every categorical fact is checked against a
//!   fixed vocabulary registry before it is stored
//! - **Validate-then-commit**: A rejected write never touches the fact store
//! - **Declarative rules**: Plan content lives in a serde-serializable
//!   catalog, swappable via JSON without touching the evaluator
//! - **Injury precedence**: Injury-gated rules veto the base rules they
//!   name, so plans respect reported injuries
//! - **Deterministic derivation**: Plans are a pure function of the facts on
//!   file, recomputed on every query
//!
//! ## Architecture
//!
//! The crate is layered, leaves first:
//! - **Models**: Typed facts, vocabulary value enums, intake payloads
//! - **Vocabulary**: The closed category registry backing validation
//! - **Store**: Concurrent per-user fact storage over `DashMap`
//! - **Catalog**: Rule content, built-in or loaded from JSON
//! - **Deriver**: The forward-chaining evaluator
//! - **Engine**: The `CoachEngine` facade embedding facades call
//!
//! ## Example Usage
//!
//! ```rust
//! use coach_engine::engine::CoachEngine;
//! use coach_engine::errors::CoachResult;
//! use coach_engine::models::{NewUserRequest, SetSportRequest};
//!
//! fn main() -> CoachResult<()> {
//!     let engine = CoachEngine::new();
//!
//!     let user_id = engine.create_user(NewUserRequest {
//!         name: "Alice".to_owned(),
//!         age: 25,
//!         gender: "female".to_owned(),
//!         height_cm: 168.0,
//!         weight_kg: 60.0,
//!         fitness_level: "intermediate".to_owned(),
//!     })?;
//!     engine.set_sport(
//!         user_id,
//!         SetSportRequest {
//!             sport: "running".to_owned(),
//!             level: "intermediate".to_owned(),
//!         },
//!     )?;
//!
//!     let plan = engine.derive_plan(user_id)?;
//!     assert!(!plan.training_plan.is_empty());
//!     Ok(())
//! }
//! ```

/// Declarative rule catalog with built-in content and JSON replacement loading
pub mod catalog;

/// Engine configuration resolved from environment variables
pub mod config;

/// Forward-chaining plan derivation over one user's facts
pub mod deriver;

/// The `CoachEngine` query interface consumed by embedding facades
pub mod engine;

/// Unified error handling with standard error codes and `HTTP` status hints
pub mod errors;

/// Structured logging configuration
pub mod logging;

/// Typed user facts, closed vocabulary values, and intake payloads
pub mod models;

/// Concurrent per-user fact storage
pub mod store;

/// Closed vocabulary registry and category lookups
pub mod vocabulary;
