// ABOUTME: Main library entry point for the recovery adaptation service
// ABOUTME: Wires feedback storage, plan evaluation, decision dispatch, and logging around the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recovery Adaptation
//!
//! Derives exercise modifications and replacements from post-session feedback.
//!
//! ## Architecture
//!
//! - **recovery-core**: Feedback, recommendation, and catalog types plus errors
//! - **recovery-intelligence**: The adaptation rule engine, aggregator, and selector
//! - **store**: Append-only in-memory feedback store with atomic window snapshots
//! - **service**: Parallel plan evaluation over a feedback source
//! - **dispatch**: One-way decision commands over a channel
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recovery_adaptation::{InMemoryFeedbackStore, PlanEvaluator};
//! use recovery_intelligence::{AdaptationEngine, AdaptationEngineConfig};
//!
//! let config = AdaptationEngineConfig::load().unwrap_or_default();
//! let store = InMemoryFeedbackStore::new();
//! let evaluator = PlanEvaluator::new(AdaptationEngine::new(config), store);
//!
//! let set = evaluator.evaluate_all();
//! if set.is_all_clear() {
//!     println!("Your exercises are working well");
//! }
//! ```

/// Decision command dispatch
pub mod dispatch;

/// Feedback and catalog file loading
pub mod loader;

/// Logging configuration and structured logging helpers
pub mod logging;

/// Plan evaluation service
pub mod service;

/// In-memory feedback store
pub mod store;

pub use dispatch::CommandDispatcher;
pub use recovery_core::errors::{AppError, AppResult, ErrorCode};
pub use service::PlanEvaluator;
pub use store::{FeedbackSource, InMemoryFeedbackStore};
