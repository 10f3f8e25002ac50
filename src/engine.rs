// ABOUTME: CoachEngine facade tying the fact store, vocabulary, catalog, and deriver together
// ABOUTME: Validates raw intake strings against closed vocabularies before committing facts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Engine Contributors

//! The query interface exposed to embedding facades.
//!
//! [`CoachEngine`] is the crate's front door. Mutations follow
//! validate-then-commit: every vocabulary-checked field is parsed into its
//! typed form first, and a rejected field returns
//! [`CoachError::InvalidValue`] without touching the store. Reads never
//! error for unknown users except plan derivation, which needs a registered
//! profile to work from.
//!
//! The engine is `Send + Sync`; share one instance behind an `Arc` across
//! request handlers.

use std::collections::HashSet;

use tracing::info;
use uuid::Uuid;

use crate::catalog::RuleCatalog;
use crate::config::{EngineConfig, DEFAULT_MAX_RESTRICTIONS};
use crate::deriver::PlanDeriver;
use crate::errors::{CoachError, CoachResult};
use crate::models::{
    Achievement, AddAchievementRequest, AddInjuryRequest, CompetitionLevel, CompetitionProfile,
    CompetitionType, DerivedPlan, DietProfile, DietType, FitnessLevel, InjuryRecord,
    InjurySeverity, InjuryType, NewUserRequest, PlanItem, RecoveryStatus, SetCompetitionRequest,
    SetDietRequest, SetSportRequest, Sport, SportFormat, SportSelection, UserProfile,
};
use crate::store::{FactStore, UserFacts};
use crate::vocabulary::{Category, VocabularyRegistry};

/// Parse a raw intake string against one closed vocabulary.
///
/// On failure the raw value travels into the error untouched, so the caller
/// sees exactly what was rejected.
fn parse_vocab<T>(category: Category, raw: String, parse: fn(&str) -> Option<T>) -> CoachResult<T> {
    match parse(&raw) {
        Some(value) => Ok(value),
        None => Err(CoachError::invalid_value(category.as_str(), raw)),
    }
}

/// Facade over the fact store, vocabulary registry, rule catalog, and deriver.
///
/// One engine instance serves all users. Construction is cheap; the default
/// configuration carries the built-in rule catalog.
#[derive(Debug)]
pub struct CoachEngine {
    store: FactStore,
    vocabulary: VocabularyRegistry,
    catalog: RuleCatalog,
    max_restrictions: usize,
}

impl Default for CoachEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CoachEngine {
    /// Create an engine with the built-in rule catalog and default limits
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(RuleCatalog::builtin())
    }

    /// Create an engine evaluating a replacement rule catalog
    #[must_use]
    pub fn with_catalog(catalog: RuleCatalog) -> Self {
        Self {
            store: FactStore::new(),
            vocabulary: VocabularyRegistry::new(),
            catalog,
            max_restrictions: DEFAULT_MAX_RESTRICTIONS,
        }
    }

    /// Create an engine from resolved configuration
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::InvalidCatalog`] if the configured catalog file
    /// cannot be read or fails validation
    pub fn from_config(config: &EngineConfig) -> CoachResult<Self> {
        let catalog = config.load_catalog()?;
        Ok(Self {
            store: FactStore::new(),
            vocabulary: VocabularyRegistry::new(),
            catalog,
            max_restrictions: config.max_restrictions,
        })
    }

    /// Register a new user and return the generated identifier.
    ///
    /// The fitness level is vocabulary-checked; age, height, and weight must
    /// be plausible positive numbers. Name and gender are stored as given.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::InvalidValue`] if any checked field is rejected
    pub fn create_user(&self, request: NewUserRequest) -> CoachResult<Uuid> {
        let fitness_level = parse_vocab(
            Category::FitnessLevel,
            request.fitness_level,
            FitnessLevel::parse,
        )?;
        if request.age == 0 {
            return Err(CoachError::invalid_value("age", request.age.to_string()));
        }
        if !request.height_cm.is_finite() || request.height_cm <= 0.0 {
            return Err(CoachError::invalid_value(
                "height_cm",
                request.height_cm.to_string(),
            ));
        }
        if !request.weight_kg.is_finite() || request.weight_kg <= 0.0 {
            return Err(CoachError::invalid_value(
                "weight_kg",
                request.weight_kg.to_string(),
            ));
        }

        let profile = UserProfile {
            id: Uuid::new_v4(),
            name: request.name,
            age: request.age,
            gender: request.gender,
            height_cm: request.height_cm,
            weight_kg: request.weight_kg,
            fitness_level,
            created_at: chrono::Utc::now(),
        };
        let user_id = profile.id;
        self.store.insert_profile(profile);

        info!(user_id = %user_id, fitness_level = %fitness_level, "user registered");
        Ok(user_id)
    }

    /// Select the user's active sport, replacing any prior selection.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::UserNotFound`] for an unregistered user and
    /// [`CoachError::InvalidValue`] for an unknown sport or level
    pub fn set_sport(&self, user_id: Uuid, request: SetSportRequest) -> CoachResult<()> {
        self.require_user(user_id)?;
        let sport = parse_vocab(Category::Sport, request.sport, Sport::parse)?;
        let level = parse_vocab(Category::FitnessLevel, request.level, FitnessLevel::parse)?;

        self.store.set_sport(user_id, SportSelection { sport, level })?;
        info!(user_id = %user_id, sport = %sport, level = %level, "sport selected");
        Ok(())
    }

    /// Record the competition the user is preparing for, replacing any prior
    /// competition context.
    ///
    /// The format is checked against the formats of the sport on file at
    /// validation time, not against the global format vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::UserNotFound`] for an unregistered user,
    /// [`CoachError::MissingSport`] if no sport is on file, and
    /// [`CoachError::InvalidValue`] for a rejected type, format, or level
    pub fn set_competition(
        &self,
        user_id: Uuid,
        request: SetCompetitionRequest,
    ) -> CoachResult<()> {
        let facts = self
            .store
            .snapshot(user_id)
            .ok_or_else(|| CoachError::user_not_found(user_id))?;
        let selection = facts
            .sport
            .ok_or_else(|| CoachError::missing_sport(user_id))?;

        let competition_type = parse_vocab(
            Category::CompetitionType,
            request.competition_type,
            CompetitionType::parse,
        )?;
        let level = parse_vocab(
            Category::CompetitionLevel,
            request.level,
            CompetitionLevel::parse,
        )?;
        let format = parse_vocab(Category::SportFormat, request.format, SportFormat::parse)?;
        if !VocabularyRegistry::formats_of(selection.sport).contains(&format) {
            return Err(CoachError::invalid_value(
                Category::SportFormat.as_str(),
                format.as_str().to_owned(),
            ));
        }

        self.store.set_competition(
            user_id,
            CompetitionProfile {
                competition_type,
                format,
                level,
            },
        )?;
        info!(
            user_id = %user_id,
            competition_type = %competition_type,
            format = %format,
            level = %level,
            "competition recorded"
        );
        Ok(())
    }

    /// Record the user's diet, replacing any prior diet profile.
    ///
    /// Restriction tags are free-form; duplicates are dropped keeping the
    /// first occurrence, and the deduplicated list is capped by
    /// `max_restrictions`.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::UserNotFound`] for an unregistered user and
    /// [`CoachError::InvalidValue`] for an unknown diet type or an oversized
    /// restriction list
    pub fn set_diet(&self, user_id: Uuid, request: SetDietRequest) -> CoachResult<()> {
        self.require_user(user_id)?;
        let diet_type = parse_vocab(Category::DietType, request.diet_type, DietType::parse)?;

        let mut seen = HashSet::new();
        let mut restrictions = Vec::new();
        for restriction in request.restrictions {
            if seen.insert(restriction.clone()) {
                restrictions.push(restriction);
            }
        }
        if restrictions.len() > self.max_restrictions {
            return Err(CoachError::invalid_value(
                "restrictions",
                format!(
                    "{} entries exceeds the limit of {}",
                    restrictions.len(),
                    self.max_restrictions
                ),
            ));
        }

        let restriction_count = restrictions.len();
        self.store.set_diet(
            user_id,
            DietProfile {
                diet_type,
                restrictions,
            },
        )?;
        info!(
            user_id = %user_id,
            diet_type = %diet_type,
            restrictions = restriction_count,
            "diet recorded"
        );
        Ok(())
    }

    /// Append an injury report to the user's injury log and return the new
    /// log length.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::UserNotFound`] for an unregistered user and
    /// [`CoachError::InvalidValue`] for a rejected type, severity, or
    /// recovery status
    pub fn add_injury(&self, user_id: Uuid, request: AddInjuryRequest) -> CoachResult<usize> {
        self.require_user(user_id)?;
        let injury_type = parse_vocab(
            Category::InjuryType,
            request.injury_type,
            InjuryType::parse,
        )?;
        let severity = parse_vocab(
            Category::InjurySeverity,
            request.severity,
            InjurySeverity::parse,
        )?;
        let recovery_status = parse_vocab(
            Category::RecoveryStatus,
            request.recovery_status,
            RecoveryStatus::parse,
        )?;

        let record = InjuryRecord {
            injury_type,
            date: request.date,
            severity,
            recovery_time_weeks: request.recovery_time_weeks,
            recovery_status,
            notes: request.notes,
        };
        let total = self.store.append_injury(user_id, record)?;
        info!(
            user_id = %user_id,
            injury_type = %injury_type,
            severity = %severity,
            recovery_status = %recovery_status,
            total,
            "injury recorded"
        );
        Ok(total)
    }

    /// Append an achievement to the user's history and return the new
    /// history length.
    ///
    /// All fields are free-form; nothing is vocabulary-checked.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::UserNotFound`] for an unregistered user
    pub fn add_achievement(
        &self,
        user_id: Uuid,
        request: AddAchievementRequest,
    ) -> CoachResult<usize> {
        self.require_user(user_id)?;
        let achievement = Achievement {
            title: request.title,
            date: request.date,
            category: request.category,
            description: request.description,
        };
        let total = self.store.append_achievement(user_id, achievement)?;
        info!(user_id = %user_id, total, "achievement recorded");
        Ok(total)
    }

    /// Look up a user's profile, `None` if unregistered
    #[must_use]
    pub fn profile(&self, user_id: Uuid) -> Option<UserProfile> {
        self.store.profile(user_id)
    }

    /// Clone a consistent snapshot of everything on file for a user
    #[must_use]
    pub fn snapshot(&self, user_id: Uuid) -> Option<UserFacts> {
        self.store.snapshot(user_id)
    }

    /// The user's injury log in submission order, empty if unregistered
    #[must_use]
    pub fn injuries(&self, user_id: Uuid) -> Vec<InjuryRecord> {
        self.store.injuries(user_id)
    }

    /// The user's achievement history in submission order, empty if
    /// unregistered
    #[must_use]
    pub fn achievements(&self, user_id: Uuid) -> Vec<Achievement> {
        self.store.achievements(user_id)
    }

    /// Derive the three-part plan from the user's current facts.
    ///
    /// Derivation is a pure function of the facts on file; nothing is cached
    /// between calls.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::UserNotFound`] for an unregistered user,
    /// [`CoachError::MissingSport`] if no sport is on file, and
    /// [`CoachError::DerivationUnavailable`] if no training rule matches
    pub fn derive_plan(&self, user_id: Uuid) -> CoachResult<DerivedPlan> {
        let facts = self
            .store
            .snapshot(user_id)
            .ok_or_else(|| CoachError::user_not_found(user_id))?;
        PlanDeriver::new(&self.catalog).derive(&facts)
    }

    /// Evaluate only the injury recommendation rules for a user.
    ///
    /// Unknown users and users without matching injuries both read as empty;
    /// this path never errors.
    #[must_use]
    pub fn injury_recommendations(&self, user_id: Uuid) -> Vec<PlanItem> {
        self.store.snapshot(user_id).map_or_else(Vec::new, |facts| {
            PlanDeriver::new(&self.catalog).injury_recommendations(&facts)
        })
    }

    /// Names of every vocabulary category, in registry order
    #[must_use]
    pub fn categories(&self) -> Vec<&'static str> {
        self.vocabulary.categories()
    }

    /// Values of one vocabulary category, in declaration order
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::UnknownCategory`] for an unrecognized category
    pub fn list_values(&self, category: &str) -> CoachResult<Vec<&'static str>> {
        self.vocabulary.list_values(category)
    }

    /// Whether `value` belongs to the named vocabulary category
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::UnknownCategory`] for an unrecognized category
    pub fn is_valid(&self, category: &str, value: &str) -> CoachResult<bool> {
        self.vocabulary.is_valid(category, value)
    }

    /// Format names valid for one sport, in declaration order
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::InvalidValue`] for an unknown sport
    pub fn sport_formats(&self, sport: &str) -> CoachResult<Vec<&'static str>> {
        self.vocabulary.sport_formats(sport)
    }

    /// The rule catalog this engine evaluates
    #[must_use]
    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Number of registered users
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.store.user_count()
    }

    fn require_user(&self, user_id: Uuid) -> CoachResult<()> {
        if self.store.contains(user_id) {
            Ok(())
        } else {
            Err(CoachError::user_not_found(user_id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(engine: &CoachEngine) -> Uuid {
        engine
            .create_user(NewUserRequest {
                name: "alice".to_owned(),
                age: 25,
                gender: "female".to_owned(),
                height_cm: 168.0,
                weight_kg: 60.0,
                fitness_level: "intermediate".to_owned(),
            })
            .unwrap()
    }

    #[test]
    fn create_user_rejects_unknown_fitness_level() {
        let engine = CoachEngine::new();
        let err = engine
            .create_user(NewUserRequest {
                name: "bob".to_owned(),
                age: 30,
                gender: "male".to_owned(),
                height_cm: 180.0,
                weight_kg: 80.0,
                fitness_level: "weekend_warrior".to_owned(),
            })
            .unwrap_err();
        assert_eq!(
            err,
            CoachError::invalid_value("fitness_level", "weekend_warrior")
        );
        assert_eq!(engine.user_count(), 0);
    }

    #[test]
    fn create_user_rejects_implausible_numerics() {
        let engine = CoachEngine::new();
        let request = NewUserRequest {
            name: "bob".to_owned(),
            age: 30,
            gender: "male".to_owned(),
            height_cm: -180.0,
            weight_kg: 80.0,
            fitness_level: "beginner".to_owned(),
        };
        assert_eq!(
            engine.create_user(request).unwrap_err(),
            CoachError::invalid_value("height_cm", "-180")
        );
    }

    #[test]
    fn unknown_user_is_reported_before_vocabulary_problems() {
        let engine = CoachEngine::new();
        let missing = Uuid::new_v4();
        let err = engine
            .set_sport(
                missing,
                SetSportRequest {
                    sport: "chess".to_owned(),
                    level: "grandmaster".to_owned(),
                },
            )
            .unwrap_err();
        assert_eq!(err, CoachError::user_not_found(missing));
    }

    #[test]
    fn competition_format_must_belong_to_the_selected_sport() {
        let engine = CoachEngine::new();
        let user_id = sample_user(&engine);
        engine
            .set_sport(
                user_id,
                SetSportRequest {
                    sport: "running".to_owned(),
                    level: "intermediate".to_owned(),
                },
            )
            .unwrap();

        // t20 is a cricket format, not a running format
        let err = engine
            .set_competition(
                user_id,
                SetCompetitionRequest {
                    competition_type: "national".to_owned(),
                    format: "t20".to_owned(),
                    level: "national".to_owned(),
                },
            )
            .unwrap_err();
        assert_eq!(err, CoachError::invalid_value("sport_format", "t20"));

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
    }

    #[test]
    fn competition_requires_a_sport_on_file() {
        let engine = CoachEngine::new();
        let user_id = sample_user(&engine);
        let err = engine
            .set_competition(
                user_id,
                SetCompetitionRequest {
                    competition_type: "local".to_owned(),
                    format: "road".to_owned(),
                    level: "club".to_owned(),
                },
            )
            .unwrap_err();
        assert_eq!(err, CoachError::missing_sport(user_id));
    }

    #[test]
    fn diet_restrictions_are_deduplicated_in_first_seen_order() {
        let engine = CoachEngine::new();
        let user_id = sample_user(&engine);
        engine
            .set_diet(
                user_id,
                SetDietRequest {
                    diet_type: "vegetarian".to_owned(),
                    restrictions: vec![
                        "gluten".to_owned(),
                        "lactose".to_owned(),
                        "gluten".to_owned(),
                    ],
                },
            )
            .unwrap();

        let facts = engine.snapshot(user_id).unwrap();
        let diet = facts.diet.unwrap();
        assert_eq!(diet.restrictions, vec!["gluten", "lactose"]);
    }

    #[test]
    fn oversized_restriction_lists_are_rejected() {
        let engine = CoachEngine::new();
        let user_id = sample_user(&engine);
        let restrictions = (0..=DEFAULT_MAX_RESTRICTIONS)
            .map(|n| format!("restriction-{n}"))
            .collect();
        let err = engine
            .set_diet(
                user_id,
                SetDietRequest {
                    diet_type: "balanced".to_owned(),
                    restrictions,
                },
            )
            .unwrap_err();
        assert!(
            matches!(err, CoachError::InvalidValue { category, .. } if category == "restrictions")
        );
        assert!(engine.snapshot(user_id).unwrap().diet.is_none());
    }

    #[test]
    fn injury_recommendations_for_unknown_users_read_empty() {
        let engine = CoachEngine::new();
        assert!(engine.injury_recommendations(Uuid::new_v4()).is_empty());
    }
}
