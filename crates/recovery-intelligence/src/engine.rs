// ABOUTME: Adaptation rule engine deriving per-exercise recommendations from feedback windows
// ABOUTME: Composes independent rules, applies replace-signal suppression, and builds reasoning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Adaptation Rule Engine
//!
//! `evaluate` is a pure function of a feedback window and the engine's
//! immutable configuration. It never fails: unusable input degrades to the
//! "insufficient data" recommendation and is reported through diagnostics.
//!
//! Composition policy:
//! - every rule is evaluated in [`DEFAULT_RULES`] order and all findings are kept
//! - once a pain or load rule raises a replace signal, later load rules are suppressed
//! - rules that defer to physical rules stand down if a pain or load rule fired
//! - modifications are ordered high, medium, low, preserving rule order within a priority

use crate::config::{AdaptationEngineConfig, ConfigError};
use crate::diagnostics::{DiagnosticEvent, DiagnosticKind, DiagnosticSink, TracingDiagnostics};
use crate::rules::{RuleCategory, RuleVerdict, DEFAULT_RULES};
use crate::selector::AlternativeSelector;
use crate::window::FeedbackWindow;
use recovery_core::constants::reasoning;
use recovery_core::errors::FeedbackIssue;
use recovery_core::models::{AdaptationRecommendation, ExerciseCatalog, FeedbackRecord};

/// Adaptation engine holding immutable configuration and a diagnostic sink
#[derive(Debug, Clone)]
pub struct AdaptationEngine<D: DiagnosticSink = TracingDiagnostics> {
    config: AdaptationEngineConfig,
    diagnostics: D,
}

impl Default for AdaptationEngine {
    fn default() -> Self {
        Self::new(AdaptationEngineConfig::default())
    }
}

impl AdaptationEngine {
    /// Create an engine that reports diagnostics through `tracing`.
    ///
    /// The configuration is used as given. Configurations from
    /// [`AdaptationEngineConfig::load`] are already validated; any other
    /// configuration should go through [`AdaptationEngine::try_new`].
    #[must_use]
    pub const fn new(config: AdaptationEngineConfig) -> Self {
        Self {
            config,
            diagnostics: TracingDiagnostics,
        }
    }

    /// Validate `config` and create an engine that reports through `tracing`
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found by [`AdaptationEngineConfig::validate`]
    pub fn try_new(config: AdaptationEngineConfig) -> Result<Self, ConfigError> {
        Self::try_with_diagnostics(config, TracingDiagnostics)
    }
}

impl<D: DiagnosticSink> AdaptationEngine<D> {
    /// Create an engine with a custom diagnostic sink.
    ///
    /// The configuration is used as given; see [`AdaptationEngine::try_with_diagnostics`].
    #[must_use]
    pub const fn with_diagnostics(config: AdaptationEngineConfig, diagnostics: D) -> Self {
        Self {
            config,
            diagnostics,
        }
    }

    /// Validate `config` and create an engine with a custom diagnostic sink
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found by [`AdaptationEngineConfig::validate`]
    pub fn try_with_diagnostics(
        config: AdaptationEngineConfig,
        diagnostics: D,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_diagnostics(config, diagnostics))
    }

    /// Engine configuration
    #[must_use]
    pub const fn config(&self) -> &AdaptationEngineConfig {
        &self.config
    }

    /// Diagnostic sink
    #[must_use]
    pub const fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Derive a recommendation for one exercise from its feedback window
    #[must_use]
    pub fn evaluate(&self, exercise_id: &str, records: &[FeedbackRecord]) -> AdaptationRecommendation {
        let window = FeedbackWindow::build(
            exercise_id,
            records,
            self.config.window.max_records,
            &self.diagnostics,
        );
        let exercise_name = window.latest().map_or_else(
            || fallback_name(exercise_id, records),
            |entry| entry.record.exercise_name.clone(),
        );

        if window.is_empty() {
            self.emit(DiagnosticEvent::new(
                DiagnosticKind::WindowEmpty,
                exercise_id,
                format!("no usable records out of {} supplied", records.len()),
            ));
            return AdaptationRecommendation::insufficient_data(exercise_id, exercise_name);
        }

        let mut modifications = Vec::new();
        let mut summaries = Vec::new();
        let mut should_replace = false;
        let mut physical_replace = false;
        let mut physical_fired = false;

        for rule in DEFAULT_RULES {
            let category = rule.category();

            if physical_replace && category == RuleCategory::Load {
                self.emit(DiagnosticEvent::for_rule(
                    DiagnosticKind::RuleSuppressed,
                    exercise_id,
                    rule.name(),
                    "replacement already recommended; load tuning suppressed",
                ));
                continue;
            }
            if physical_fired && rule.defers_to_physical_rules() {
                self.emit(DiagnosticEvent::for_rule(
                    DiagnosticKind::RuleSuppressed,
                    exercise_id,
                    rule.name(),
                    "a pain or difficulty rule already fired",
                ));
                continue;
            }

            match rule.evaluate(&window, &self.config) {
                RuleVerdict::NotFired => {}
                RuleVerdict::Skipped { reason } => {
                    self.emit(DiagnosticEvent::for_rule(
                        DiagnosticKind::RuleSkipped,
                        exercise_id,
                        rule.name(),
                        reason,
                    ));
                }
                RuleVerdict::Fired(finding) => {
                    self.emit(DiagnosticEvent::for_rule(
                        DiagnosticKind::RuleFired,
                        exercise_id,
                        rule.name(),
                        finding.summary.clone(),
                    ));
                    if category.is_physical() {
                        physical_fired = true;
                        physical_replace |= finding.replace;
                    }
                    should_replace |= finding.replace;
                    modifications.extend(finding.modifications);
                    summaries.push(finding.summary);
                }
            }
        }

        // Stable: rule order is preserved within a priority
        modifications.sort_by_key(|modification| modification.priority);

        let reasoning = if summaries.is_empty() {
            reasoning::NO_CHANGES_NEEDED.to_owned()
        } else if should_replace {
            format!("Replacement recommended. {}", summaries.join(" "))
        } else {
            summaries.join(" ")
        };

        AdaptationRecommendation {
            exercise_id: exercise_id.to_owned(),
            exercise_name,
            modifications,
            should_replace,
            alternative_exercise: None,
            reasoning,
        }
    }

    /// Evaluate and, when a replacement is recommended, look up a substitute.
    ///
    /// The original exercise is looked up in `catalog` by id. A missing entry or
    /// no suitable match leaves `alternative_exercise` empty.
    #[must_use]
    pub fn evaluate_with_catalog(
        &self,
        exercise_id: &str,
        records: &[FeedbackRecord],
        catalog: &ExerciseCatalog,
    ) -> AdaptationRecommendation {
        let mut recommendation = self.evaluate(exercise_id, records);
        self.resolve_alternative(&mut recommendation, catalog);
        recommendation
    }

    /// Fill `alternative_exercise` on a replacement recommendation
    pub fn resolve_alternative(
        &self,
        recommendation: &mut AdaptationRecommendation,
        catalog: &ExerciseCatalog,
    ) {
        if !recommendation.should_replace {
            recommendation.alternative_exercise = None;
            return;
        }

        let exercise_id = recommendation.exercise_id.as_str();
        if catalog.is_empty() {
            self.emit(
                DiagnosticEvent::new(
                    DiagnosticKind::ReplacementUnresolved,
                    exercise_id,
                    FeedbackIssue::EmptyCatalog.to_string(),
                )
                .with_issue(FeedbackIssue::EmptyCatalog),
            );
            return;
        }

        let Some(original) = catalog.get(exercise_id) else {
            self.emit(DiagnosticEvent::new(
                DiagnosticKind::ReplacementUnresolved,
                exercise_id,
                "exercise is not in the catalog",
            ));
            return;
        };

        recommendation.alternative_exercise =
            AlternativeSelector::select_alternative(original, catalog)
                .map(|candidate| AlternativeSelector::describe(original, candidate));

        if recommendation.alternative_exercise.is_none() {
            self.emit(DiagnosticEvent::new(
                DiagnosticKind::ReplacementUnresolved,
                exercise_id,
                "no catalog exercise shares a target muscle at a safe level",
            ));
        }
    }

    fn emit(&self, event: DiagnosticEvent) {
        self.diagnostics.record(event);
    }
}

fn fallback_name(exercise_id: &str, records: &[FeedbackRecord]) -> String {
    records
        .iter()
        .filter(|record| record.exercise_id == exercise_id)
        .max_by_key(|record| record.created_at)
        .map_or_else(|| exercise_id.to_owned(), |record| record.exercise_name.clone())
}
