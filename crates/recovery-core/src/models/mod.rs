// ABOUTME: Core data models for feedback records, recommendations, and the exercise catalog
// ABOUTME: Re-exports model types so consumers can import from `recovery_core::models`
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Value objects exchanged between the feedback store, the adaptation engine,
//! and the presentation layer.

/// Exercise catalog entries and difficulty levels
pub mod catalog;
/// Post-exercise feedback records and rating scale
pub mod feedback;
/// Modifications, recommendations, and plan decision commands
pub mod recommendation;

pub use catalog::{CatalogExercise, ExerciseCatalog, ExerciseLevel};
pub use feedback::{CompletionStatus, FeedbackRecord, FeedbackRecordBuilder, Rating, TimeOfDay};
pub use recommendation::{
    AdaptationRecommendation, AlternativeExercise, ExerciseModification, ModificationPriority,
    ModificationType, PlanCommand,
};
