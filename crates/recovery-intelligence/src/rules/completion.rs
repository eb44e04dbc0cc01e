// ABOUTME: Modified-completion rule - surfaces the ad hoc change a user keeps making
// ABOUTME: Suggests formalizing the most common recorded modification text
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
use std::collections::HashMap;

/// Modified-completion rule
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifiedCompletionRule;

impl ModifiedCompletionRule {
    /// Most frequent modification text; ties go to the most recently recorded one
    #[must_use]
    pub fn most_common_modification<'a>(window: &FeedbackWindow<'a>) -> Option<&'a str> {
        // text -> (occurrences, index of latest occurrence)
        let mut counts: HashMap<&'a str, (usize, usize)> = HashMap::new();
        for (index, entry) in window.entries().iter().enumerate() {
            if entry.record.completion_status != CompletionStatus::Modified {
                continue;
            }
            if let Some(text) = entry.record.modification_text() {
                let slot = counts.entry(text).or_insert((0, index));
                slot.0 += 1;
                slot.1 = index;
            }
        }
        counts
            .into_iter()
            .max_by_key(|&(_, (count, latest))| (count, latest))
            .map(|(text, _)| text)
    }
}

impl AdaptationRule for ModifiedCompletionRule {
    fn name(&self) -> &'static str {
        rule_names::MODIFIED_COMPLETION
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Completion
    }

    fn evaluate(&self, window: &FeedbackWindow<'_>, config: &AdaptationEngineConfig) -> RuleVerdict {
        if !window.majority_status(CompletionStatus::Modified) {
            return RuleVerdict::NotFired;
        }
        let modified = window.count_status(CompletionStatus::Modified);
        let common = Self::most_common_modification(window);

        let (description, reason) = match common {
            Some(text) => (
                format!("{}: {text}", config.messages.formalize_modification),
                format!(
                    "Completed with modifications in {modified} of {} session(s); most common change: \"{text}\"",
                    window.len()
                ),
            ),
            None => (
                config.messages.formalize_modification.clone(),
                format!(
                    "Completed with modifications in {modified} of {} session(s)",
                    window.len()
                ),
            ),
        };

        RuleVerdict::Fired(RuleFinding {
            modifications: vec![ExerciseModification::new(
                ModificationType::Alternative,
                ModificationPriority::Medium,
                description,
                reason,
            )],
            replace: false,
            summary: "The exercise is usually performed with a modification.".to_owned(),
        })
    }
}
