// ABOUTME: Core types and constants for the recovery adaptation workspace
// ABOUTME: Foundation crate with feedback models, error handling, and shared constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recovery Core
//!
//! Foundation crate providing shared types for the exercise adaptation engine.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **models**: Feedback records, modification/recommendation value objects, exercise catalog
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and the feedback issue taxonomy
//! - **constants**: Rating scale bounds and rule identifiers

/// Unified error handling system with standard error codes
pub mod errors;

/// Rating scale bounds, rule names, and other shared constants
pub mod constants;

/// Core data models (feedback records, recommendations, catalog)
pub mod models;
