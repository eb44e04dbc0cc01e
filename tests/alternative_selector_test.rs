// ABOUTME: Integration tests for alternative exercise selection from a catalog
// ABOUTME: Verifies muscle overlap ranking, level safety, tie-breaks, and engine integration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::{lower_body_catalog, window};
use recovery_core::models::{CatalogExercise, ExerciseCatalog, ExerciseLevel};
use recovery_intelligence::{
    AdaptationEngine, AdaptationEngineConfig, AlternativeSelector, DiagnosticKind,
    MemoryDiagnostics,
};
use std::sync::Arc;

fn select(catalog: &ExerciseCatalog, id: &str) -> Option<String> {
    let original = catalog.get(id).unwrap();
    AlternativeSelector::select_alternative(original, catalog).map(|found| found.id.clone())
}

#[test]
fn test_highest_muscle_overlap_wins() {
    let catalog = lower_body_catalog();
    assert_eq!(select(&catalog, "squat").as_deref(), Some("split_squat"));
}

#[test]
fn test_overlap_tie_goes_to_lowest_difficulty() {
    let catalog = lower_body_catalog();
    // squat, split_squat and wall_sit all share two muscles; wall_sit is gentlest
    assert_eq!(select(&catalog, "goblet_squat").as_deref(), Some("wall_sit"));
}

#[test]
fn test_advanced_exercise_may_step_down_one_level_only() {
    let catalog = lower_body_catalog();
    assert_eq!(select(&catalog, "pistol_squat").as_deref(), Some("squat"));
}

#[test]
fn test_beginner_exercise_is_never_escalated() {
    let catalog = lower_body_catalog();
    // goblet_squat overlaps more but is intermediate
    assert_eq!(select(&catalog, "wall_sit").as_deref(), Some("glute_bridge"));
}

#[test]
fn test_selection_never_exceeds_original_level() {
    let catalog = lower_body_catalog();
    for original in catalog.iter() {
        if let Some(candidate) = AlternativeSelector::select_alternative(original, &catalog) {
            assert!(
                candidate.level.rank() <= original.level.rank(),
                "{} escalated to {}",
                original.id,
                candidate.id
            );
            assert_ne!(candidate.id, original.id);
        }
    }
}

#[test]
fn test_no_shared_muscle_returns_none() {
    let catalog = lower_body_catalog();
    assert_eq!(select(&catalog, "bicep_curl"), None);
}

#[test]
fn test_empty_catalog_returns_none() {
    let original = CatalogExercise::new(
        "squat",
        "Squat",
        ["quadriceps"],
        ExerciseLevel::Intermediate,
        6.0,
    );
    let catalog = ExerciseCatalog::new();
    assert!(AlternativeSelector::select_alternative(&original, &catalog).is_none());
}

#[test]
fn test_muscle_matching_ignores_case_and_whitespace() {
    let catalog: ExerciseCatalog = [
        CatalogExercise::new(
            "leg_press",
            "Leg Press",
            [" Quadriceps"],
            ExerciseLevel::Beginner,
            4.0,
        ),
        CatalogExercise::new(
            "lunge",
            "Lunge",
            ["QUADRICEPS", "glutes"],
            ExerciseLevel::Beginner,
            4.0,
        ),
    ]
    .into_iter()
    .collect();

    assert_eq!(select(&catalog, "leg_press").as_deref(), Some("lunge"));
}

#[test]
fn test_describe_lists_shared_muscles() {
    let catalog = lower_body_catalog();
    let original = catalog.get("squat").unwrap();
    let candidate = catalog.get("wall_sit").unwrap();

    let alternative = AlternativeSelector::describe(original, candidate);
    assert_eq!(alternative.id, "wall_sit");
    assert_eq!(alternative.level, ExerciseLevel::Beginner);
    assert_eq!(alternative.shared_muscles, vec!["glutes", "quadriceps"]);
}

#[test]
fn test_engine_attaches_alternative_on_replacement() {
    let catalog = lower_body_catalog();
    let records = window("squat", &[(8, 5), (9, 6), (8, 5)]);
    let recommendation = AdaptationEngine::default().evaluate_with_catalog("squat", &records, &catalog);

    assert!(recommendation.should_replace);
    let alternative = recommendation.alternative_exercise.unwrap();
    assert_eq!(alternative.id, "split_squat");
    assert_eq!(
        alternative.shared_muscles,
        vec!["glutes", "hamstrings", "quadriceps"]
    );
}

#[test]
fn test_engine_leaves_alternative_empty_without_replacement() {
    let catalog = lower_body_catalog();
    let records = window("squat", &[(2, 2), (2, 2), (2, 2)]);
    let recommendation = AdaptationEngine::default().evaluate_with_catalog("squat", &records, &catalog);

    assert!(!recommendation.should_replace);
    assert!(recommendation.alternative_exercise.is_none());
}

#[test]
fn test_unresolved_replacement_is_not_an_error() {
    let catalog = lower_body_catalog();
    let sink = Arc::new(MemoryDiagnostics::new());
    let engine =
        AdaptationEngine::with_diagnostics(AdaptationEngineConfig::default(), Arc::clone(&sink));

    // bicep_curl has no muscle partner; deadlift is not in the catalog at all
    for exercise in ["bicep_curl", "deadlift"] {
        let records = window(exercise, &[(9, 5), (9, 5), (9, 5)]);
        let recommendation = engine.evaluate_with_catalog(exercise, &records, &catalog);
        assert!(recommendation.should_replace);
        assert!(recommendation.alternative_exercise.is_none());
    }

    assert_eq!(sink.of_kind(DiagnosticKind::ReplacementUnresolved).len(), 2);
}

#[test]
fn test_empty_catalog_reports_issue() {
    let sink = Arc::new(MemoryDiagnostics::new());
    let engine =
        AdaptationEngine::with_diagnostics(AdaptationEngineConfig::default(), Arc::clone(&sink));
    let records = window("squat", &[(9, 5), (9, 5), (9, 5)]);

    let recommendation = engine.evaluate_with_catalog("squat", &records, &ExerciseCatalog::new());

    assert!(recommendation.alternative_exercise.is_none());
    let unresolved = sink.of_kind(DiagnosticKind::ReplacementUnresolved);
    assert_eq!(unresolved.len(), 1);
    assert_eq!(
        unresolved[0].issue,
        Some(recovery_core::errors::FeedbackIssue::EmptyCatalog)
    );
}
