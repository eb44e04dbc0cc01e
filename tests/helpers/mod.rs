// ABOUTME: Shared test helpers for building feedback windows and exercise catalogs
// ABOUTME: Produces deterministic, chronologically spaced records for adaptation tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use recovery_core::models::{
    CatalogExercise, CompletionStatus, ExerciseCatalog, ExerciseLevel, FeedbackRecord,
    FeedbackRecordBuilder,
};

/// Fixed reference instant so that every run builds identical records
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap()
}

/// Timestamp of the `session`-th session, one day apart
pub fn session_time(session: usize) -> DateTime<Utc> {
    base_time() + Duration::days(i64::try_from(session).unwrap())
}

/// Builder preloaded with identifiers for one session of `exercise_id`
pub fn builder(exercise_id: &str, session: usize) -> FeedbackRecordBuilder {
    FeedbackRecordBuilder::new(
        format!("session-{session}"),
        exercise_id,
        display_name(exercise_id),
        session_time(session),
    )
}

/// Completed record with the two required ratings
pub fn record(exercise_id: &str, session: usize, pain: u8, difficulty: u8) -> FeedbackRecord {
    builder(exercise_id, session)
        .pain_level(pain)
        .difficulty_rating(difficulty)
        .build()
}

/// Chronological window of completed records from `(pain, difficulty)` pairs
pub fn window(exercise_id: &str, ratings: &[(u8, u8)]) -> Vec<FeedbackRecord> {
    ratings
        .iter()
        .enumerate()
        .map(|(session, &(pain, difficulty))| record(exercise_id, session, pain, difficulty))
        .collect()
}

/// Chronological window with explicit completion statuses
pub fn window_with_status(
    exercise_id: &str,
    ratings: &[(u8, u8, CompletionStatus)],
) -> Vec<FeedbackRecord> {
    ratings
        .iter()
        .enumerate()
        .map(|(session, &(pain, difficulty, status))| {
            builder(exercise_id, session)
                .pain_level(pain)
                .difficulty_rating(difficulty)
                .completion_status(status)
                .build()
        })
        .collect()
}

/// Chronological window of low-pain, mid-difficulty records with enjoyment ratings
pub fn enjoyment_window(exercise_id: &str, enjoyment: &[u8]) -> Vec<FeedbackRecord> {
    enjoyment
        .iter()
        .enumerate()
        .map(|(session, &value)| {
            builder(exercise_id, session)
                .pain_level(2)
                .difficulty_rating(5)
                .enjoyment_rating(value)
                .build()
        })
        .collect()
}

/// Chronological window of low-pain, mid-difficulty records with effectiveness ratings
pub fn effectiveness_window(exercise_id: &str, effectiveness: &[u8]) -> Vec<FeedbackRecord> {
    effectiveness
        .iter()
        .enumerate()
        .map(|(session, &value)| {
            builder(exercise_id, session)
                .pain_level(2)
                .difficulty_rating(5)
                .perceived_effectiveness(value)
                .build()
        })
        .collect()
}

/// Human-readable name derived from an id (`goblet_squat` -> `Goblet Squat`)
pub fn display_name(exercise_id: &str) -> String {
    exercise_id
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lower-body catalog spanning all three levels
pub fn lower_body_catalog() -> ExerciseCatalog {
    [
        CatalogExercise::new(
            "squat",
            "Squat",
            ["quadriceps", "glutes", "hamstrings"],
            ExerciseLevel::Intermediate,
            6.0,
        ),
        CatalogExercise::new(
            "split_squat",
            "Split Squat",
            ["Quadriceps", "Glutes", "Hamstrings"],
            ExerciseLevel::Intermediate,
            7.0,
        ),
        CatalogExercise::new(
            "goblet_squat",
            "Goblet Squat",
            ["quadriceps", "glutes"],
            ExerciseLevel::Intermediate,
            5.0,
        ),
        CatalogExercise::new(
            "wall_sit",
            "Wall Sit",
            ["quadriceps", "glutes"],
            ExerciseLevel::Beginner,
            3.0,
        ),
        CatalogExercise::new(
            "glute_bridge",
            "Glute Bridge",
            ["glutes", "hamstrings"],
            ExerciseLevel::Beginner,
            2.0,
        ),
        CatalogExercise::new(
            "pistol_squat",
            "Pistol Squat",
            ["quadriceps", "glutes", "hamstrings"],
            ExerciseLevel::Advanced,
            9.0,
        ),
        CatalogExercise::new(
            "bicep_curl",
            "Bicep Curl",
            ["biceps"],
            ExerciseLevel::Beginner,
            2.0,
        ),
    ]
    .into_iter()
    .collect()
}
