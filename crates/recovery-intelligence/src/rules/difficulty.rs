// ABOUTME: Difficulty rules - raise load when an exercise is too easy, lower it when too hard
// ABOUTME: A mostly-partial window of very hard sessions escalates to a replacement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AdaptationRule, RuleCategory, RuleFinding, RuleVerdict};
use crate::config::AdaptationEngineConfig;
use crate::window::FeedbackWindow;
use recovery_core::constants::rule_names;
use recovery_core::models::{
    CompletionStatus, ExerciseModification, ModificationPriority, ModificationType,
};

/// Difficulty too low rule
#[derive(Debug, Clone, Copy, Default)]
pub struct DifficultyTooLowRule;

impl AdaptationRule for DifficultyTooLowRule {
    fn name(&self) -> &'static str {
        rule_names::DIFFICULTY_TOO_LOW
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Load
    }

    fn evaluate(&self, window: &FeedbackWindow<'_>, config: &AdaptationEngineConfig) -> RuleVerdict {
        let Some(average) = window.mean_difficulty() else {
            return RuleVerdict::skipped("no difficulty ratings in window");
        };
        let threshold = config.thresholds.difficulty_low_average;
        let all_completed = window.count_status(CompletionStatus::Completed) == window.len();

        if average > threshold || !all_completed {
            return RuleVerdict::NotFired;
        }

        RuleVerdict::Fired(RuleFinding {
            modifications: vec![ExerciseModification::new(
                ModificationType::Reps,
                ModificationPriority::Medium,
                config.messages.increase_load.clone(),
                format!(
                    "Consistently rated too easy: average difficulty of {average:.1}/10 with all {} session(s) completed",
                    window.len()
                ),
            )],
            replace: false,
            summary: format!(
                "The exercise is consistently rated too easy (average difficulty {average:.1}/10)."
            ),
        })
    }
}

/// Difficulty too high rule
#[derive(Debug, Clone, Copy, Default)]
pub struct DifficultyTooHighRule;

impl AdaptationRule for DifficultyTooHighRule {
    fn name(&self) -> &'static str {
        rule_names::DIFFICULTY_TOO_HIGH
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Load
    }

    fn evaluate(&self, window: &FeedbackWindow<'_>, config: &AdaptationEngineConfig) -> RuleVerdict {
        let Some(average) = window.mean_difficulty() else {
            return RuleVerdict::skipped("no difficulty ratings in window");
        };
        let threshold = config.thresholds.difficulty_high_average;

        if average < threshold {
            return RuleVerdict::NotFired;
        }

        let partial = window.count_status(CompletionStatus::Partial);
        let replace = window.majority_status(CompletionStatus::Partial);

        let summary = if replace {
            format!(
                "The exercise is too hard (average difficulty {average:.1}/10) and was left unfinished in {partial} of {} session(s), so a different exercise is needed.",
                window.len()
            )
        } else {
            format!("The exercise is consistently rated too hard (average difficulty {average:.1}/10).")
        };

        RuleVerdict::Fired(RuleFinding {
            modifications: vec![ExerciseModification::new(
                ModificationType::Intensity,
                ModificationPriority::High,
                config.messages.reduce_load.clone(),
                format!(
                    "Average difficulty of {average:.1}/10 is at or above {threshold:.1}"
                ),
            )],
            replace,
            summary,
        })
    }
}
