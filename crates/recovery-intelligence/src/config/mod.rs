// ABOUTME: Configuration module for recovery-intelligence crate
// ABOUTME: Re-exports adaptation engine configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Adaptation engine thresholds, window size, and message templates
pub mod adaptation;
/// Configuration validation errors
pub mod error;

pub use adaptation::{AdaptationEngineConfig, AdaptationMessages, AdaptationThresholds, WindowConfig};
pub use error::ConfigError;
