// ABOUTME: Exercise modification and adaptation recommendation value objects
// ABOUTME: Also defines the plan decision commands emitted after a user accepts, replaces, or dismisses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::catalog::ExerciseLevel;
use crate::constants::reasoning;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameter a modification adjusts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModificationType {
    /// Effort or load intensity
    Intensity,
    /// Session or set duration
    Duration,
    /// Repetition count
    Reps,
    /// External load
    Weight,
    /// Switch to a variation or different exercise
    Alternative,
    /// Rest between sets or sessions
    Rest,
}

impl ModificationType {
    /// Convert to string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Intensity => "intensity",
            Self::Duration => "duration",
            Self::Reps => "reps",
            Self::Weight => "weight",
            Self::Alternative => "alternative",
            Self::Rest => "rest",
        }
    }

    /// Whether this modification increases or decreases training load
    #[must_use]
    pub const fn adjusts_load(&self) -> bool {
        matches!(
            self,
            Self::Intensity | Self::Duration | Self::Reps | Self::Weight
        )
    }
}

impl fmt::Display for ModificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency of a modification.
///
/// Ordering sorts the most urgent first: `High < Medium < Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModificationPriority {
    /// Address before the next session
    High,
    /// Address soon
    Medium,
    /// Optional improvement
    Low,
}

impl ModificationPriority {
    /// Convert to string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Whether `self` is strictly more urgent than `other`
    #[must_use]
    pub fn outranks(self, other: Self) -> bool {
        self < other
    }
}

impl fmt::Display for ModificationPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One suggested change to an exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseModification {
    /// Parameter being adjusted
    #[serde(rename = "type")]
    pub modification_type: ModificationType,
    /// Urgency
    pub priority: ModificationPriority,
    /// Short directive shown to the user
    pub description: String,
    /// Evidence from the feedback window that triggered the change
    pub reason: String,
}

impl ExerciseModification {
    /// Create a modification
    #[must_use]
    pub fn new(
        modification_type: ModificationType,
        priority: ModificationPriority,
        description: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            modification_type,
            priority,
            description: description.into(),
            reason: reason.into(),
        }
    }
}

/// Substitute exercise attached to a replacement recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeExercise {
    /// Catalog id of the substitute
    pub id: String,
    /// Display name of the substitute
    pub name: String,
    /// Level of the substitute
    pub level: ExerciseLevel,
    /// Target muscles shared with the original exercise
    pub shared_muscles: Vec<String>,
}

/// Engine output for one exercise.
///
/// Derived fresh from a feedback window on every evaluation; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaptationRecommendation {
    /// Exercise identifier
    pub exercise_id: String,
    /// Exercise display name
    pub exercise_name: String,
    /// Suggested changes, most urgent first
    pub modifications: Vec<ExerciseModification>,
    /// Whether the exercise should be replaced rather than tuned
    pub should_replace: bool,
    /// Suggested substitute, only present when `should_replace` is set
    pub alternative_exercise: Option<AlternativeExercise>,
    /// Human-readable summary
    pub reasoning: String,
}

impl AdaptationRecommendation {
    /// Recommendation returned when no usable feedback exists
    #[must_use]
    pub fn insufficient_data(exercise_id: impl Into<String>, exercise_name: impl Into<String>) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            exercise_name: exercise_name.into(),
            modifications: Vec::new(),
            should_replace: false,
            alternative_exercise: None,
            reasoning: reasoning::INSUFFICIENT_DATA.to_owned(),
        }
    }

    /// Whether the user has anything to act on
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        self.should_replace || !self.modifications.is_empty()
    }

    /// Whether any modification is high priority
    #[must_use]
    pub fn has_high_priority(&self) -> bool {
        self.modifications
            .iter()
            .any(|m| m.priority == ModificationPriority::High)
    }

    /// Modifications of a given type
    pub fn modifications_of(
        &self,
        modification_type: ModificationType,
    ) -> impl Iterator<Item = &ExerciseModification> {
        self.modifications
            .iter()
            .filter(move |m| m.modification_type == modification_type)
    }
}

/// Terminal decision sent to the plan-management collaborator.
///
/// These are one-way notifications: the core neither waits for confirmation
/// nor retries them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum PlanCommand {
    /// Apply the listed modifications to the exercise
    AcceptModifications {
        /// Exercise identifier
        exercise_id: String,
        /// Modifications the user accepted
        modifications: Vec<ExerciseModification>,
    },
    /// Replace the exercise, optionally with a specific substitute
    ReplaceExercise {
        /// Exercise identifier
        exercise_id: String,
        /// Suggested substitute, if one was found
        suggested: Option<AlternativeExercise>,
    },
    /// Leave the exercise unchanged
    Dismiss {
        /// Exercise identifier
        exercise_id: String,
    },
}

impl PlanCommand {
    /// Command name as serialized in the `command` tag
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AcceptModifications { .. } => "accept_modifications",
            Self::ReplaceExercise { .. } => "replace_exercise",
            Self::Dismiss { .. } => "dismiss",
        }
    }

    /// Exercise the command targets
    #[must_use]
    pub fn exercise_id(&self) -> &str {
        match self {
            Self::AcceptModifications { exercise_id, .. }
            | Self::ReplaceExercise { exercise_id, .. }
            | Self::Dismiss { exercise_id } => exercise_id,
        }
    }
}
