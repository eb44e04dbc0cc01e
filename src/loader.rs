// ABOUTME: JSON file loading for feedback records, the exercise catalog, and engine configuration
// ABOUTME: Maps I/O and parse failures to AppError with the offending path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recovery_core::errors::{AppError, AppResult, ErrorCode};
use recovery_core::models::{ExerciseCatalog, FeedbackRecord};
use recovery_intelligence::AdaptationEngineConfig;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::info;

/// Load feedback records from a JSON array.
///
/// Records missing `pain_level` or `difficulty_rating` load successfully and are
/// excluded later by the engine. Ratings outside 1-10 are rejected here.
///
/// # Errors
///
/// Returns `StorageError` if the file cannot be read and `InvalidInput` if it
/// is not a valid feedback array
pub fn load_feedback(path: &Path) -> AppResult<Vec<FeedbackRecord>> {
    let records: Vec<FeedbackRecord> = read_json(path, "feedback")?;
    info!(path = %path.display(), records = records.len(), "Loaded feedback records");
    Ok(records)
}

/// Load an exercise catalog from a JSON object keyed by exercise id
///
/// # Errors
///
/// Returns `StorageError` if the file cannot be read and `InvalidInput` if it
/// is not a valid catalog object
pub fn load_catalog(path: &Path) -> AppResult<ExerciseCatalog> {
    let catalog: ExerciseCatalog = read_json(path, "catalog")?;
    info!(path = %path.display(), exercises = catalog.len(), "Loaded exercise catalog");
    Ok(catalog)
}

/// Load engine configuration from a JSON file and validate it.
///
/// Environment overrides are not applied; the file is taken as the full configuration.
///
/// # Errors
///
/// Returns `StorageError` if the file cannot be read, `InvalidInput` if it does
/// not parse and `ConfigInvalid` if the values are inconsistent
pub fn load_config(path: &Path) -> AppResult<AdaptationEngineConfig> {
    let config: AdaptationEngineConfig = read_json(path, "config")?;
    config.validate()?;
    info!(path = %path.display(), "Loaded adaptation engine configuration");
    Ok(config)
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> AppResult<T> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!("failed to read {what} file {}", path.display())).with_source(e)
    })?;

    serde_json::from_str(&contents).map_err(|e| {
        AppError::new(
            ErrorCode::InvalidInput,
            format!("invalid {what} file {}: {e}", path.display()),
        )
        .with_source(e)
    })
}
