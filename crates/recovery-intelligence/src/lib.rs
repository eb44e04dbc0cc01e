// ABOUTME: Exercise adaptation intelligence - rule engine, aggregation, and alternative selection
// ABOUTME: Pure decision logic over feedback windows with structured diagnostics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recovery Intelligence
//!
//! Derives per-exercise adaptation recommendations from user feedback.
//!
//! ## Modules
//!
//! - **engine**: `AdaptationEngine`, a pure function of a feedback window and immutable thresholds
//! - **rules**: Independent pain, difficulty, engagement, and completion rules
//! - **window**: Validated, chronologically ordered feedback windows
//! - **aggregator**: Plan-level merging, dedup, display ordering, and decision commands
//! - **selector**: Substitute exercise lookup by target muscle and level
//! - **diagnostics**: Structured events for threshold tuning
//! - **config**: Engine thresholds, window size, and message templates

/// Plan-level recommendation aggregation and decision commands
pub mod aggregator;

/// Engine configuration with environment overrides and validation
pub mod config;

/// Diagnostic events and sinks
pub mod diagnostics;

/// Adaptation rule engine
pub mod engine;

/// Individual adaptation rules
pub mod rules;

/// Alternative exercise selection
pub mod selector;

/// Feedback window construction
pub mod window;

pub use aggregator::{RecommendationAggregator, RecommendationSet};
pub use config::{AdaptationEngineConfig, ConfigError};
pub use diagnostics::{
    DiagnosticEvent, DiagnosticKind, DiagnosticSink, MemoryDiagnostics, TracingDiagnostics,
};
pub use engine::AdaptationEngine;
pub use selector::AlternativeSelector;
pub use window::FeedbackWindow;
