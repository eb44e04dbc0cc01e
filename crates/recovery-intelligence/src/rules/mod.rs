// ABOUTME: Threshold-and-trend adaptation rules evaluated over a feedback window
// ABOUTME: Defines the AdaptationRule trait, rule verdicts, and the default evaluation order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Adaptation Rules
//!
//! Each rule inspects a [`FeedbackWindow`] independently and reports a
//! [`RuleVerdict`]. The engine composes verdicts in [`DEFAULT_RULES`] order:
//! pain, difficulty, enjoyment, effectiveness, modified completion.

/// Modified-completion rule
pub mod completion;
/// Difficulty too low / too high rules
pub mod difficulty;
/// Low enjoyment and declining effectiveness rules
pub mod engagement;
/// Pain escalation rule
pub mod pain;

pub use completion::ModifiedCompletionRule;
pub use difficulty::{DifficultyTooHighRule, DifficultyTooLowRule};
pub use engagement::{DecliningEffectivenessRule, LowEnjoymentRule};
pub use pain::PainEscalationRule;

use crate::config::AdaptationEngineConfig;
use crate::window::FeedbackWindow;
use recovery_core::models::ExerciseModification;

/// What a rule looks at, which decides how it interacts with other rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Pain and injury signals
    Pain,
    /// Load adjustments (more or less reps, weight, intensity)
    Load,
    /// Enjoyment and perceived benefit
    Engagement,
    /// How sessions were actually completed
    Completion,
}

impl RuleCategory {
    /// Pain and load rules are the physical rules whose replace signal supersedes tuning
    #[must_use]
    pub const fn is_physical(self) -> bool {
        matches!(self, Self::Pain | Self::Load)
    }
}

/// Output of a rule that fired
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFinding {
    /// Modifications the rule contributes, in emission order
    pub modifications: Vec<ExerciseModification>,
    /// Whether the rule recommends replacing the exercise
    pub replace: bool,
    /// Sentence contributed to the recommendation reasoning
    pub summary: String,
}

/// Outcome of evaluating one rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleVerdict {
    /// Conditions were evaluated and not met
    NotFired,
    /// The data needed by the rule is absent
    Skipped {
        /// Why the rule could not be evaluated
        reason: String,
    },
    /// The rule fired
    Fired(RuleFinding),
}

impl RuleVerdict {
    /// Shorthand for a skipped verdict
    #[must_use]
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }
}

/// One independently evaluable adaptation rule
pub trait AdaptationRule: Send + Sync {
    /// Stable identifier used in diagnostics
    fn name(&self) -> &'static str;

    /// Category of signal the rule inspects
    fn category(&self) -> RuleCategory;

    /// Whether the rule stands down once any physical rule has fired
    fn defers_to_physical_rules(&self) -> bool {
        false
    }

    /// Evaluate the rule over a non-empty window
    fn evaluate(&self, window: &FeedbackWindow<'_>, config: &AdaptationEngineConfig) -> RuleVerdict;
}

/// Rules in evaluation order
pub static DEFAULT_RULES: &[&dyn AdaptationRule] = &[
    &PainEscalationRule,
    &DifficultyTooLowRule,
    &DifficultyTooHighRule,
    &LowEnjoymentRule,
    &DecliningEffectivenessRule,
    &ModifiedCompletionRule,
];
