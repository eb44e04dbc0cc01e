// ABOUTME: Pain escalation rule - reduces intensity, adds rest, or forces replacement
// ABOUTME: Fires on a high pain average, a spike above the average, or repeated severe pain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AdaptationRule, RuleCategory, RuleFinding, RuleVerdict};
use crate::config::AdaptationEngineConfig;
use crate::window::FeedbackWindow;
use recovery_core::constants::rule_names;
use recovery_core::models::{ExerciseModification, ModificationPriority, ModificationType};

/// Pain escalation rule
#[derive(Debug, Clone, Copy, Default)]
pub struct PainEscalationRule;

impl AdaptationRule for PainEscalationRule {
    fn name(&self) -> &'static str {
        rule_names::PAIN_ESCALATION
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Pain
    }

    fn evaluate(&self, window: &FeedbackWindow<'_>, config: &AdaptationEngineConfig) -> RuleVerdict {
        let (Some(average), Some(latest)) = (window.mean_pain(), window.latest()) else {
            return RuleVerdict::skipped("no pain ratings in window");
        };
        let t = &config.thresholds;
        let messages = &config.messages;
        let latest_pain = latest.pain;

        let high_average = average >= t.pain_high_average;
        let spike = latest_pain.as_f64() - average;
        let spiked = spike >= t.pain_spike_delta;
        let recent = window.most_recent(t.severe_pain_lookback);
        let severe_sessions = recent
            .iter()
            .filter(|entry| entry.pain.value() >= t.severe_pain_level)
            .count();
        let replace = severe_sessions >= t.severe_pain_count;

        let mut modifications = Vec::new();
        if high_average {
            modifications.push(ExerciseModification::new(
                ModificationType::Intensity,
                ModificationPriority::High,
                messages.reduce_intensity.clone(),
                format!(
                    "Average pain of {average:.1}/10 across the last {} session(s) is at or above {:.1}",
                    window.len(),
                    t.pain_high_average
                ),
            ));
        }
        if spiked {
            modifications.push(ExerciseModification::new(
                ModificationType::Rest,
                ModificationPriority::High,
                messages.add_rest.clone(),
                format!(
                    "Latest pain of {latest_pain} is {spike:.1} points above the window average of {average:.1}"
                ),
            ));
        }
        if replace && modifications.is_empty() {
            modifications.push(ExerciseModification::new(
                ModificationType::Rest,
                ModificationPriority::High,
                messages.stop_and_rest.clone(),
                format!(
                    "Pain reached {}/10 or more in {severe_sessions} of the last {} session(s)",
                    t.severe_pain_level,
                    recent.len()
                ),
            ));
        }

        if modifications.is_empty() {
            return RuleVerdict::NotFired;
        }

        let summary = if replace {
            format!(
                "Pain reached {}/10 or more in {severe_sessions} of the last {} session(s), so replacing this exercise is safer than further tuning.",
                t.severe_pain_level,
                recent.len()
            )
        } else {
            format!("Pain is elevated (average {average:.1}/10, latest {latest_pain}).")
        };

        RuleVerdict::Fired(RuleFinding {
            modifications,
            replace,
            summary,
        })
    }
}
