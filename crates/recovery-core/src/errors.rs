// ABOUTME: Unified error handling with error codes, the application error type, and feedback issues
// ABOUTME: Provides AppError/AppResult for fallible operations and FeedbackIssue for degraded inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Fallible operations (file loading, configuration, command dispatch) return
//! `AppResult`. The rule engine itself never fails: malformed input is
//! described by a `FeedbackIssue` and reported through diagnostics instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required field is missing
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// A value is outside its acceptable range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    /// A referenced resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    /// A resource with the same identifier already exists
    #[serde(rename = "RESOURCE_ALREADY_EXISTS")]
    ResourceAlreadyExists = 4001,

    // External collaborators (5000-5999)
    /// The receiving side of a command channel has gone away
    #[serde(rename = "CHANNEL_CLOSED")]
    ChannelClosed = 5001,

    // Configuration (6000-6999)
    /// Configuration is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Reading or writing storage failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// Serialization or deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceAlreadyExists => "A resource with this identifier already exists",
            Self::ChannelClosed => "The command receiver is no longer listening",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the workspace
#[derive(Debug, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Resource already exists
    #[must_use]
    pub fn already_exists(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceAlreadyExists,
            format!("{} already exists", resource.into()),
        )
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Command channel closed
    #[must_use]
    pub fn channel_closed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ChannelClosed, message)
    }

    /// Storage error
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::new(ErrorCode::StorageError, error.to_string()).with_source(error)
    }
}

#[cfg(feature = "anyhow-errors")]
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self {
            code: ErrorCode::InternalError,
            message: format!("{error:#}"),
            source: Some(error.into()),
        }
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Problems found in engine input that degrade, rather than fail, an evaluation
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum FeedbackIssue {
    /// A record lacks `pain_level` or `difficulty_rating` and was excluded
    #[error("record {record_id} is missing required field(s): {}", .fields.join(", "))]
    MissingRequiredField {
        /// Identifier of the excluded record
        record_id: String,
        /// Names of the missing fields
        fields: Vec<String>,
    },
    /// The alternative selector was given an empty catalog
    #[error("exercise catalog is empty")]
    EmptyCatalog,
    /// Records arrived out of chronological order and were re-sorted
    #[error("{out_of_order} record(s) were out of chronological order")]
    InconsistentWindow {
        /// Number of adjacent pairs found out of order
        out_of_order: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display_includes_description() {
        let error = AppError::not_found("exercise squat");
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert_eq!(
            error.to_string(),
            "The requested resource was not found: exercise squat not found"
        );
    }

    #[test]
    fn test_serde_errors_map_to_serialization_code() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let error = parse.map_err(AppError::from).err();
        assert_eq!(error.map(|e| e.code), Some(ErrorCode::SerializationError));
    }

    #[test]
    fn test_feedback_issue_messages() {
        let issue = FeedbackIssue::MissingRequiredField {
            record_id: "r1".into(),
            fields: vec!["pain_level".into(), "difficulty_rating".into()],
        };
        assert_eq!(
            issue.to_string(),
            "record r1 is missing required field(s): pain_level, difficulty_rating"
        );
    }
}
