// ABOUTME: Exercise catalog entries used when a replacement exercise must be suggested
// ABOUTME: Defines difficulty levels, target muscle sets, and the id-ordered catalog map
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Experience level an exercise is designed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseLevel {
    /// Suitable for beginners with no prior experience
    Beginner,
    /// Requires some practice and conditioning
    Intermediate,
    /// For experienced practitioners
    Advanced,
}

impl ExerciseLevel {
    /// Position on the level ladder (beginner = 0)
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Beginner => 0,
            Self::Intermediate => 1,
            Self::Advanced => 2,
        }
    }

    /// Convert to string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Parse from string representation
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }
}

impl fmt::Display for ExerciseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An exercise available for substitution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogExercise {
    /// Unique identifier (filled from the catalog key when deserialized as part of a catalog)
    #[serde(default)]
    pub id: String,
    /// Exercise name
    pub name: String,
    /// Muscles the exercise primarily targets
    pub target_muscles: BTreeSet<String>,
    /// Experience level
    pub level: ExerciseLevel,
    /// Relative difficulty score (lower is gentler)
    pub difficulty: f64,
}

impl CatalogExercise {
    /// Create a catalog entry
    #[must_use]
    pub fn new<I, S>(
        id: impl Into<String>,
        name: impl Into<String>,
        target_muscles: I,
        level: ExerciseLevel,
        difficulty: f64,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            target_muscles: target_muscles.into_iter().map(Into::into).collect(),
            level,
            difficulty,
        }
    }

    /// Target muscles normalized for case-insensitive comparison
    #[must_use]
    pub fn normalized_muscles(&self) -> BTreeSet<String> {
        self.target_muscles
            .iter()
            .map(|muscle| muscle.trim().to_lowercase())
            .filter(|muscle| !muscle.is_empty())
            .collect()
    }
}

/// Exercise catalog keyed by exercise id.
///
/// Backed by an ordered map so iteration (and therefore tie-breaking) is
/// deterministic. Serialized as a JSON object keyed by exercise id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, CatalogExercise>",
    into = "BTreeMap<String, CatalogExercise>"
)]
pub struct ExerciseCatalog {
    exercises: BTreeMap<String, CatalogExercise>,
}

impl ExerciseCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an exercise, keyed by its id
    pub fn insert(&mut self, exercise: CatalogExercise) -> Option<CatalogExercise> {
        self.exercises.insert(exercise.id.clone(), exercise)
    }

    /// Look up an exercise by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CatalogExercise> {
        self.exercises.get(id)
    }

    /// Iterate exercises in id order
    pub fn iter(&self) -> impl Iterator<Item = &CatalogExercise> {
        self.exercises.values()
    }

    /// Number of exercises in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

impl From<BTreeMap<String, CatalogExercise>> for ExerciseCatalog {
    fn from(entries: BTreeMap<String, CatalogExercise>) -> Self {
        let exercises = entries
            .into_iter()
            .map(|(id, mut exercise)| {
                exercise.id.clone_from(&id);
                (id, exercise)
            })
            .collect();
        Self { exercises }
    }
}

impl From<ExerciseCatalog> for BTreeMap<String, CatalogExercise> {
    fn from(catalog: ExerciseCatalog) -> Self {
        catalog.exercises
    }
}

impl FromIterator<CatalogExercise> for ExerciseCatalog {
    fn from_iter<T: IntoIterator<Item = CatalogExercise>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for exercise in iter {
            catalog.insert(exercise);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_come_from_keys() {
        let json = r#"{
            "glute_bridge": {
                "name": "Glute Bridge",
                "target_muscles": ["Glutes", "hamstrings"],
                "level": "beginner",
                "difficulty": 2.0
            }
        }"#;
        let catalog: ExerciseCatalog = serde_json::from_str(json).unwrap_or_default();
        let bridge = catalog.get("glute_bridge");
        assert_eq!(bridge.map(|e| e.id.as_str()), Some("glute_bridge"));
        assert_eq!(
            bridge.map(CatalogExercise::normalized_muscles),
            Some(BTreeSet::from(["glutes".to_owned(), "hamstrings".to_owned()]))
        );
    }

    #[test]
    fn test_level_rank_ordering() {
        assert!(ExerciseLevel::Beginner.rank() < ExerciseLevel::Intermediate.rank());
        assert_eq!(ExerciseLevel::parse("ADVANCED"), Some(ExerciseLevel::Advanced));
        assert_eq!(ExerciseLevel::parse("expert"), None);
    }
}
