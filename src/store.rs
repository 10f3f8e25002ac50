// ABOUTME: In-memory fact store keyed by user id with per-user write serialization
// ABOUTME: Overwrite semantics for sport/competition/diet, append-only for injuries/achievements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Engine Contributors

//! # Fact Store
//!
//! All facts live in a sharded concurrent map keyed by user id. Writes take
//! the shard's write guard for the duration of the update, so two writers
//! racing on the same user apply one-at-a-time and a fact is either fully
//! replaced or untouched. Reads clone the user's entry under the read guard,
//! giving callers a consistent snapshot that never tears mid-update.

use crate::errors::{CoachError, CoachResult};
use crate::models::{
    Achievement, CompetitionProfile, DietProfile, InjuryRecord, SportSelection, UserProfile,
};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Everything the store knows about one user.
///
/// `sport`, `competition`, and `diet` hold at most one value and are
/// replaced wholesale on each set. `injuries` and `achievements` grow in
/// report order and are never rewritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserFacts {
    /// Registration profile, immutable after intake
    pub profile: UserProfile,
    /// Current sport selection, if any
    pub sport: Option<SportSelection>,
    /// Current competition, if any
    pub competition: Option<CompetitionProfile>,
    /// Current diet, if any
    pub diet: Option<DietProfile>,
    /// Injury history, oldest first
    pub injuries: Vec<InjuryRecord>,
    /// Achievement history, oldest first
    pub achievements: Vec<Achievement>,
}

impl UserFacts {
    /// Start a fact set from a freshly registered profile
    #[must_use]
    pub const fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            sport: None,
            competition: None,
            diet: None,
            injuries: Vec::new(),
            achievements: Vec::new(),
        }
    }
}

/// Concurrent in-memory fact store
#[derive(Debug, Default)]
pub struct FactStore {
    users: DashMap<Uuid, UserFacts>,
}

impl FactStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }

    /// Register a user.
    ///
    /// The profile's id becomes the store key. Ids are engine-assigned v4
    /// UUIDs, so an insert never displaces an existing user in practice.
    pub fn insert_profile(&self, profile: UserProfile) {
        self.users.insert(profile.id, UserFacts::new(profile));
    }

    /// Whether a user is registered
    #[must_use]
    pub fn contains(&self, user_id: Uuid) -> bool {
        self.users.contains_key(&user_id)
    }

    /// Number of registered users
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Replace the user's sport selection.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::UserNotFound`] if the user is not registered.
    pub fn set_sport(&self, user_id: Uuid, selection: SportSelection) -> CoachResult<()> {
        self.with_user_mut(user_id, |facts| facts.sport = Some(selection))
    }

    /// Replace the user's competition.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::UserNotFound`] if the user is not registered.
    pub fn set_competition(
        &self,
        user_id: Uuid,
        competition: CompetitionProfile,
    ) -> CoachResult<()> {
        self.with_user_mut(user_id, |facts| facts.competition = Some(competition))
    }

    /// Replace the user's diet.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::UserNotFound`] if the user is not registered.
    pub fn set_diet(&self, user_id: Uuid, diet: DietProfile) -> CoachResult<()> {
        self.with_user_mut(user_id, |facts| facts.diet = Some(diet))
    }

    /// Append an injury record, returning the new history length.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::UserNotFound`] if the user is not registered.
    pub fn append_injury(&self, user_id: Uuid, record: InjuryRecord) -> CoachResult<usize> {
        self.with_user_mut(user_id, |facts| {
            facts.injuries.push(record);
            facts.injuries.len()
        })
    }

    /// Append an achievement, returning the new history length.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::UserNotFound`] if the user is not registered.
    pub fn append_achievement(
        &self,
        user_id: Uuid,
        achievement: Achievement,
    ) -> CoachResult<usize> {
        self.with_user_mut(user_id, |facts| {
            facts.achievements.push(achievement);
            facts.achievements.len()
        })
    }

    /// The user's profile, if registered
    #[must_use]
    pub fn profile(&self, user_id: Uuid) -> Option<UserProfile> {
        self.users.get(&user_id).map(|facts| facts.profile.clone())
    }

    /// A consistent snapshot of everything known about the user.
    ///
    /// The clone happens under the entry's read guard, so the snapshot never
    /// interleaves two concurrent updates.
    #[must_use]
    pub fn snapshot(&self, user_id: Uuid) -> Option<UserFacts> {
        self.users.get(&user_id).map(|facts| facts.clone())
    }

    /// The user's injury history, oldest first; empty when unregistered
    #[must_use]
    pub fn injuries(&self, user_id: Uuid) -> Vec<InjuryRecord> {
        self.users
            .get(&user_id)
            .map(|facts| facts.injuries.clone())
            .unwrap_or_default()
    }

    /// The user's achievement history, oldest first; empty when unregistered
    #[must_use]
    pub fn achievements(&self, user_id: Uuid) -> Vec<Achievement> {
        self.users
            .get(&user_id)
            .map(|facts| facts.achievements.clone())
            .unwrap_or_default()
    }

    fn with_user_mut<T>(
        &self,
        user_id: Uuid,
        apply: impl FnOnce(&mut UserFacts) -> T,
    ) -> CoachResult<T> {
        let mut entry = self
            .users
            .get_mut(&user_id)
            .ok_or(CoachError::UserNotFound { user_id })?;
        Ok(apply(&mut entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FitnessLevel, Sport};
    use chrono::Utc;

    fn profile(name: &str) -> UserProfile {
        UserProfile {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            age: 30,
            gender: "female".to_owned(),
            height_cm: 170.0,
            weight_kg: 64.0,
            fitness_level: FitnessLevel::Intermediate,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn writes_to_unregistered_users_are_rejected() {
        let store = FactStore::new();
        let missing = Uuid::new_v4();
        let selection = SportSelection {
            sport: Sport::Running,
            level: FitnessLevel::Beginner,
        };
        assert_eq!(
            store.set_sport(missing, selection),
            Err(CoachError::user_not_found(missing))
        );
    }

    #[test]
    fn sport_selection_overwrites_in_full() {
        let store = FactStore::new();
        let profile = profile("sam");
        let id = profile.id;
        store.insert_profile(profile);

        store
            .set_sport(
                id,
                SportSelection {
                    sport: Sport::Tennis,
                    level: FitnessLevel::Advanced,
                },
            )
            .unwrap();
        store
            .set_sport(
                id,
                SportSelection {
                    sport: Sport::Swimming,
                    level: FitnessLevel::Beginner,
                },
            )
            .unwrap();

        let facts = store.snapshot(id).unwrap();
        assert_eq!(
            facts.sport,
            Some(SportSelection {
                sport: Sport::Swimming,
                level: FitnessLevel::Beginner,
            })
        );
    }

    #[test]
    fn unregistered_histories_read_as_empty() {
        let store = FactStore::new();
        assert!(store.injuries(Uuid::new_v4()).is_empty());
        assert!(store.achievements(Uuid::new_v4()).is_empty());
        assert!(store.snapshot(Uuid::new_v4()).is_none());
    }
}
