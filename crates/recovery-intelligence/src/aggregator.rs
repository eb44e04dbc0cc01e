// ABOUTME: Recommendation aggregator batching per-exercise recommendations for presentation
// ABOUTME: Merges duplicates, dedupes modifications by type, orders output, and builds plan commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recommendation Aggregator
//!
//! Display order: exercises with a high-priority modification first, then
//! replacements, then by modification count (descending), then by exercise id.

use recovery_core::constants::reasoning;
use recovery_core::models::{
    AdaptationRecommendation, AlternativeExercise, ExerciseModification, PlanCommand,
};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Aggregates recommendations and builds terminal plan commands
pub struct RecommendationAggregator;

impl RecommendationAggregator {
    /// Merge, dedupe, and order recommendations for presentation
    #[must_use]
    pub fn aggregate<I>(recommendations: I) -> RecommendationSet
    where
        I: IntoIterator<Item = AdaptationRecommendation>,
    {
        let mut merged: Vec<AdaptationRecommendation> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for recommendation in recommendations {
            if let Some(&index) = positions.get(&recommendation.exercise_id) {
                Self::merge_into(&mut merged[index], recommendation);
            } else {
                positions.insert(recommendation.exercise_id.clone(), merged.len());
                merged.push(recommendation);
            }
        }

        for recommendation in &mut merged {
            let modifications = std::mem::take(&mut recommendation.modifications);
            recommendation.modifications = Self::dedupe_modifications(modifications);
            if !recommendation.should_replace {
                recommendation.alternative_exercise = None;
            }
        }

        merged.sort_by_key(|recommendation| {
            (
                !recommendation.has_high_priority(),
                !recommendation.should_replace,
                Reverse(recommendation.modifications.len()),
                recommendation.exercise_id.clone(),
            )
        });

        RecommendationSet {
            recommendations: merged,
        }
    }

    /// Keep one modification per type.
    ///
    /// The higher-priority entry wins (the earlier one on a tie) and the reasons
    /// of both are joined with a semicolon. Output is ordered by priority,
    /// preserving first-seen order within a priority.
    #[must_use]
    pub fn dedupe_modifications(
        modifications: Vec<ExerciseModification>,
    ) -> Vec<ExerciseModification> {
        let mut kept: Vec<ExerciseModification> = Vec::with_capacity(modifications.len());

        for modification in modifications {
            let Some(existing) = kept
                .iter_mut()
                .find(|kept| kept.modification_type == modification.modification_type)
            else {
                kept.push(modification);
                continue;
            };

            if modification.priority.outranks(existing.priority) {
                let reason = join_reasons(&modification.reason, &existing.reason);
                *existing = ExerciseModification { reason, ..modification };
            } else {
                existing.reason = join_reasons(&existing.reason, &modification.reason);
            }
        }

        kept.sort_by_key(|modification| modification.priority);
        kept
    }

    /// Command applying accepted modifications
    #[must_use]
    pub fn accept_modifications(
        exercise_id: impl Into<String>,
        modifications: Vec<ExerciseModification>,
    ) -> PlanCommand {
        PlanCommand::AcceptModifications {
            exercise_id: exercise_id.into(),
            modifications,
        }
    }

    /// Command replacing an exercise, with the suggested substitute if one was found
    #[must_use]
    pub fn replace_exercise(
        exercise_id: impl Into<String>,
        suggested: Option<AlternativeExercise>,
    ) -> PlanCommand {
        PlanCommand::ReplaceExercise {
            exercise_id: exercise_id.into(),
            suggested,
        }
    }

    /// Command leaving an exercise unchanged
    #[must_use]
    pub fn dismiss(exercise_id: impl Into<String>) -> PlanCommand {
        PlanCommand::Dismiss {
            exercise_id: exercise_id.into(),
        }
    }

    fn merge_into(target: &mut AdaptationRecommendation, other: AdaptationRecommendation) {
        if !target.is_actionable() && other.is_actionable() {
            target.reasoning = other.reasoning;
        } else if other.is_actionable() && other.reasoning != target.reasoning {
            target.reasoning = format!("{} {}", target.reasoning, other.reasoning);
        }
        if target.alternative_exercise.is_none() {
            target.alternative_exercise = other.alternative_exercise;
        }
        target.should_replace |= other.should_replace;
        target.modifications.extend(other.modifications);
    }
}

fn join_reasons(first: &str, second: &str) -> String {
    if first == second || first.split(reasoning::REASON_SEPARATOR).any(|part| part == second) {
        first.to_owned()
    } else {
        format!("{first}{}{second}", reasoning::REASON_SEPARATOR)
    }
}

/// Ordered recommendations ready for presentation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSet {
    recommendations: Vec<AdaptationRecommendation>,
}

impl RecommendationSet {
    /// Recommendations in display order
    #[must_use]
    pub fn recommendations(&self) -> &[AdaptationRecommendation] {
        &self.recommendations
    }

    /// Consume the set, returning recommendations in display order
    #[must_use]
    pub fn into_recommendations(self) -> Vec<AdaptationRecommendation> {
        self.recommendations
    }

    /// Recommendations the user can act on, in display order
    pub fn actionable(&self) -> impl Iterator<Item = &AdaptationRecommendation> {
        self.recommendations
            .iter()
            .filter(|recommendation| recommendation.is_actionable())
    }

    /// Recommendation for one exercise
    #[must_use]
    pub fn get(&self, exercise_id: &str) -> Option<&AdaptationRecommendation> {
        self.recommendations
            .iter()
            .find(|recommendation| recommendation.exercise_id == exercise_id)
    }

    /// Nothing to act on; the presentation layer shows the "working well" state
    #[must_use]
    pub fn is_all_clear(&self) -> bool {
        self.actionable().next().is_none()
    }

    /// Whether the whole set may be dismissed in one action.
    ///
    /// High-priority modifications must be dismissed individually.
    #[must_use]
    pub fn can_dismiss_all(&self) -> bool {
        !self
            .recommendations
            .iter()
            .any(AdaptationRecommendation::has_high_priority)
    }

    /// Dismiss commands for every actionable recommendation, if bulk dismissal is allowed
    #[must_use]
    pub fn dismiss_all(&self) -> Option<Vec<PlanCommand>> {
        self.can_dismiss_all().then(|| {
            self.actionable()
                .map(|recommendation| {
                    RecommendationAggregator::dismiss(recommendation.exercise_id.clone())
                })
                .collect()
        })
    }

    /// Number of recommendations
    #[must_use]
    pub fn len(&self) -> usize {
        self.recommendations.len()
    }

    /// Whether the set holds no recommendations
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }
}
