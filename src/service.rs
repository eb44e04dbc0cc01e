// ABOUTME: Plan evaluation service combining the adaptation engine, a feedback source, and a catalog
// ABOUTME: Evaluates plan exercises in parallel and aggregates the results for presentation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::logging::AppLogger;
use crate::store::FeedbackSource;
use rayon::prelude::*;
use recovery_core::models::{AdaptationRecommendation, ExerciseCatalog};
use recovery_intelligence::diagnostics::{DiagnosticSink, TracingDiagnostics};
use recovery_intelligence::{AdaptationEngine, RecommendationAggregator, RecommendationSet};
use std::time::Instant;

/// Evaluates exercises of an active plan against their feedback history
pub struct PlanEvaluator<S: FeedbackSource, D: DiagnosticSink = TracingDiagnostics> {
    engine: AdaptationEngine<D>,
    source: S,
    catalog: Option<ExerciseCatalog>,
}

impl<S: FeedbackSource, D: DiagnosticSink> PlanEvaluator<S, D> {
    /// Create an evaluator without a catalog; replacements carry no suggestion
    #[must_use]
    pub const fn new(engine: AdaptationEngine<D>, source: S) -> Self {
        Self {
            engine,
            source,
            catalog: None,
        }
    }

    /// Attach the catalog used to suggest substitutes
    #[must_use]
    pub fn with_catalog(mut self, catalog: ExerciseCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Underlying engine
    #[must_use]
    pub const fn engine(&self) -> &AdaptationEngine<D> {
        &self.engine
    }

    /// Underlying feedback source
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Evaluate one exercise against a snapshot of its history taken at call time
    #[must_use]
    pub fn evaluate_exercise(&self, exercise_id: &str) -> AdaptationRecommendation {
        let history = self.source.history(exercise_id);
        let recommendation = match &self.catalog {
            Some(catalog) => self
                .engine
                .evaluate_with_catalog(exercise_id, &history, catalog),
            None => self.engine.evaluate(exercise_id, &history),
        };

        AppLogger::log_evaluation(
            exercise_id,
            recommendation.modifications.len(),
            recommendation.should_replace,
            history.len(),
        );
        recommendation
    }

    /// Evaluate the given exercises in parallel and aggregate for display
    #[must_use]
    pub fn evaluate_plan<T>(&self, exercise_ids: &[T]) -> RecommendationSet
    where
        T: AsRef<str> + Sync,
    {
        let started = Instant::now();
        let recommendations: Vec<AdaptationRecommendation> = exercise_ids
            .par_iter()
            .map(|exercise_id| self.evaluate_exercise(exercise_id.as_ref()))
            .collect();

        let set = RecommendationAggregator::aggregate(recommendations);
        AppLogger::log_plan_evaluation(
            exercise_ids.len(),
            set.actionable().count(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        set
    }

    /// Evaluate every exercise known to the feedback source
    #[must_use]
    pub fn evaluate_all(&self) -> RecommendationSet {
        let exercise_ids = self.source.exercise_ids();
        self.evaluate_plan(&exercise_ids)
    }
}
