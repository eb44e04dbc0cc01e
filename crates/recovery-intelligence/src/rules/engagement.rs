// ABOUTME: Engagement rules - low enjoyment and declining perceived effectiveness
// ABOUTME: Both rely on optional ratings and skip, never default, when the ratings are absent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AdaptationRule, RuleCategory, RuleFinding, RuleVerdict};
use crate::config::AdaptationEngineConfig;
use crate::window::{is_non_increasing, mean, FeedbackWindow};
use recovery_core::constants::rule_names;
use recovery_core::models::{ExerciseModification, ModificationPriority, ModificationType};

/// Low enjoyment rule
#[derive(Debug, Clone, Copy, Default)]
pub struct LowEnjoymentRule;

impl AdaptationRule for LowEnjoymentRule {
    fn name(&self) -> &'static str {
        rule_names::LOW_ENJOYMENT
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Engagement
    }

    fn defers_to_physical_rules(&self) -> bool {
        true
    }

    fn evaluate(&self, window: &FeedbackWindow<'_>, config: &AdaptationEngineConfig) -> RuleVerdict {
        let t = &config.thresholds;
        let ratings = window.ratings(|entry| entry.record.enjoyment_rating);
        let Some(average) = mean(&ratings) else {
            return RuleVerdict::skipped("no enjoyment ratings in window");
        };
        if ratings.len() < t.min_enjoyment_samples {
            return RuleVerdict::skipped(format!(
                "only {} enjoyment rating(s); {} required",
                ratings.len(),
                t.min_enjoyment_samples
            ));
        }
        if average > t.low_enjoyment_average {
            return RuleVerdict::NotFired;
        }

        let replace = ratings
            .iter()
            .all(|rating| rating.value() <= t.persistent_low_enjoyment);

        let summary = if replace {
            format!(
                "Enjoyment has stayed at {}/10 or below across {} session(s), so a different exercise is more likely to stick.",
                t.persistent_low_enjoyment,
                ratings.len()
            )
        } else {
            format!("Engagement is low (average enjoyment {average:.1}/10).")
        };

        RuleVerdict::Fired(RuleFinding {
            modifications: vec![ExerciseModification::new(
                ModificationType::Alternative,
                ModificationPriority::Low,
                config.messages.try_enjoyable_variation.clone(),
                format!(
                    "Low engagement: average enjoyment of {average:.1}/10 over {} session(s)",
                    ratings.len()
                ),
            )],
            replace,
            summary,
        })
    }
}

/// Declining effectiveness rule
#[derive(Debug, Clone, Copy, Default)]
pub struct DecliningEffectivenessRule;

impl AdaptationRule for DecliningEffectivenessRule {
    fn name(&self) -> &'static str {
        rule_names::DECLINING_EFFECTIVENESS
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Engagement
    }

    fn evaluate(&self, window: &FeedbackWindow<'_>, config: &AdaptationEngineConfig) -> RuleVerdict {
        let t = &config.thresholds;
        let ratings = window.ratings(|entry| entry.record.perceived_effectiveness);
        let Some(last) = ratings.last().copied() else {
            return RuleVerdict::skipped("no effectiveness ratings in window");
        };
        if ratings.len() < t.min_effectiveness_samples {
            return RuleVerdict::skipped(format!(
                "only {} effectiveness rating(s); {} required for a trend",
                ratings.len(),
                t.min_effectiveness_samples
            ));
        }
        if !is_non_increasing(&ratings) || last.value() > t.effectiveness_floor {
            return RuleVerdict::NotFired;
        }

        let first = ratings[0];
        RuleVerdict::Fired(RuleFinding {
            modifications: vec![ExerciseModification::new(
                ModificationType::Alternative,
                ModificationPriority::Medium,
                config.messages.switch_variation.clone(),
                format!(
                    "Perceived effectiveness has not improved over {} session(s) (from {first} to {last})",
                    ratings.len()
                ),
            )],
            replace: false,
            summary: format!("The exercise feels less effective over time (now {last})."),
        })
    }
}
