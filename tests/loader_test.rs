// ABOUTME: Tests for loading feedback, catalog, and configuration files from disk
// ABOUTME: Uses temporary directories to exercise success and failure paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::{lower_body_catalog, window};
use recovery_adaptation::{loader, ErrorCode};
use recovery_core::models::ExerciseLevel;
use recovery_intelligence::AdaptationEngineConfig;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_feedback_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("feedback.json");
    let records = window("squat", &[(3, 5), (4, 6)]);
    fs::write(&path, serde_json::to_string(&records).unwrap()).unwrap();

    let loaded = loader::load_feedback(&path).unwrap();
    assert_eq!(loaded, records);
}

#[test]
fn test_feedback_without_required_ratings_still_loads() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("feedback.json");
    fs::write(
        &path,
        r#"[{
            "record_id": "6f1d3c3e-4c1a-4f55-9a0e-2b8f6c1d9e01",
            "session_id": "s-1",
            "exercise_id": "squat",
            "exercise_name": "Squat",
            "difficulty_rating": 4,
            "completion_status": "completed",
            "created_at": "2025-03-01T08:00:00Z",
            "updated_at": "2025-03-01T08:00:00Z"
        }]"#,
    )
    .unwrap();

    let loaded = loader::load_feedback(&path).unwrap();
    assert_eq!(loaded.len(), 1);
    assert!(loaded[0].pain_level.is_none());
    assert_eq!(loaded[0].missing_required_fields(), vec!["pain_level"]);
}

#[test]
fn test_out_of_scale_rating_is_invalid_input() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("feedback.json");
    fs::write(
        &path,
        r#"[{
            "record_id": "6f1d3c3e-4c1a-4f55-9a0e-2b8f6c1d9e02",
            "session_id": "s-1",
            "exercise_id": "squat",
            "exercise_name": "Squat",
            "pain_level": 12,
            "difficulty_rating": 4,
            "completion_status": "completed",
            "created_at": "2025-03-01T08:00:00Z",
            "updated_at": "2025-03-01T08:00:00Z"
        }]"#,
    )
    .unwrap();

    let error = loader::load_feedback(&path).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_missing_file_is_storage_error() {
    let temp_dir = TempDir::new().unwrap();
    let error = loader::load_feedback(&temp_dir.path().join("absent.json")).unwrap_err();

    assert_eq!(error.code, ErrorCode::StorageError);
    assert!(error.message.contains("absent.json"));
}

#[test]
fn test_load_catalog_fills_ids_from_keys() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"{
            "wall_sit": {
                "name": "Wall Sit",
                "target_muscles": ["quadriceps", "glutes"],
                "level": "beginner",
                "difficulty": 3.0
            }
        }"#,
    )
    .unwrap();

    let catalog = loader::load_catalog(&path).unwrap();
    let wall_sit = catalog.get("wall_sit").unwrap();
    assert_eq!(wall_sit.id, "wall_sit");
    assert_eq!(wall_sit.level, ExerciseLevel::Beginner);
}

#[test]
fn test_catalog_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("catalog.json");
    let catalog = lower_body_catalog();
    fs::write(&path, serde_json::to_string_pretty(&catalog).unwrap()).unwrap();

    assert_eq!(loader::load_catalog(&path).unwrap(), catalog);
}

#[test]
fn test_load_config_validates() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    let mut config = AdaptationEngineConfig::default();
    config.window.max_records = 3;
    fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();
    assert_eq!(loader::load_config(&path).unwrap().window.max_records, 3);

    config.window.max_records = 0;
    fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();
    let error = loader::load_config(&path).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}
