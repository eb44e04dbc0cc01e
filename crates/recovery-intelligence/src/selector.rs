// ABOUTME: Alternative exercise selector for replacement recommendations
// ABOUTME: Matches catalog exercises by shared target muscles without escalating level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recovery_core::models::{AlternativeExercise, CatalogExercise, ExerciseCatalog};
use std::cmp::Ordering;

/// How many levels below the original a substitute may be
const MAX_LEVEL_STEP_DOWN: u8 = 1;

/// Selects substitute exercises from a catalog
pub struct AlternativeSelector;

impl AlternativeSelector {
    /// Pick the best substitute for `original`.
    ///
    /// Candidates must share at least one target muscle and sit at the same
    /// level as the original or one step below it. The highest muscle overlap
    /// wins; ties go to the lowest difficulty, then to the lowest id.
    /// Returns `None` for an empty catalog or when nothing matches.
    #[must_use]
    pub fn select_alternative<'a>(
        original: &CatalogExercise,
        catalog: &'a ExerciseCatalog,
    ) -> Option<&'a CatalogExercise> {
        let original_muscles = original.normalized_muscles();
        if original_muscles.is_empty() {
            return None;
        }

        catalog
            .iter()
            .filter(|candidate| candidate.id != original.id)
            .filter(|candidate| Self::level_is_safe(original, candidate))
            .filter_map(|candidate| {
                let overlap = candidate
                    .normalized_muscles()
                    .intersection(&original_muscles)
                    .count();
                (overlap > 0).then_some((candidate, overlap))
            })
            .min_by(|(a, overlap_a), (b, overlap_b)| {
                overlap_b
                    .cmp(overlap_a)
                    .then_with(|| a.difficulty.total_cmp(&b.difficulty))
                    .then_with(|| a.id.cmp(&b.id))
            })
            .map(|(candidate, _)| candidate)
    }

    /// Whether `candidate` neither exceeds the original's level nor drops more than one step
    #[must_use]
    pub fn level_is_safe(original: &CatalogExercise, candidate: &CatalogExercise) -> bool {
        let original_rank = original.level.rank();
        let candidate_rank = candidate.level.rank();
        match candidate_rank.cmp(&original_rank) {
            Ordering::Greater => false,
            Ordering::Equal => true,
            Ordering::Less => original_rank - candidate_rank <= MAX_LEVEL_STEP_DOWN,
        }
    }

    /// Build the reference attached to a recommendation
    #[must_use]
    pub fn describe(original: &CatalogExercise, candidate: &CatalogExercise) -> AlternativeExercise {
        let original_muscles = original.normalized_muscles();
        AlternativeExercise {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            level: candidate.level,
            shared_muscles: candidate
                .normalized_muscles()
                .intersection(&original_muscles)
                .cloned()
                .collect(),
        }
    }
}
