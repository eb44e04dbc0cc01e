// ABOUTME: Shared constants for rating scales, rule identifiers, and reasoning text
// ABOUTME: Pure data constants organized by domain for the adaptation workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being spread across
//! the modules that consume them.

/// Bounds of the 1-10 rating scale used by every feedback score
pub mod rating_scale {
    /// Lowest valid rating
    pub const MIN: u8 = 1;
    /// Highest valid rating
    pub const MAX: u8 = 10;
}

/// Stable identifiers for each adaptation rule, used in diagnostics
pub mod rule_names {
    /// Pain escalation rule
    pub const PAIN_ESCALATION: &str = "pain_escalation";
    /// Difficulty too low rule
    pub const DIFFICULTY_TOO_LOW: &str = "difficulty_too_low";
    /// Difficulty too high rule
    pub const DIFFICULTY_TOO_HIGH: &str = "difficulty_too_high";
    /// Low enjoyment rule
    pub const LOW_ENJOYMENT: &str = "low_enjoyment";
    /// Declining effectiveness rule
    pub const DECLINING_EFFECTIVENESS: &str = "declining_effectiveness";
    /// Modified completion rule
    pub const MODIFIED_COMPLETION: &str = "modified_completion";
}

/// Fixed reasoning strings shared between the engine and its consumers
pub mod reasoning {
    /// Reasoning attached to a recommendation computed from an empty window
    pub const INSUFFICIENT_DATA: &str = "insufficient data";
    /// Reasoning attached when no rule fired
    pub const NO_CHANGES_NEEDED: &str = "exercise is working well; no changes needed";
    /// Separator used when merging modification reasons
    pub const REASON_SEPARATOR: &str = "; ";
}

/// Service identifiers
pub mod service_names {
    /// Name reported by the logging layer
    pub const RECOVERY_ADAPTATION: &str = "recovery-adaptation";
}
