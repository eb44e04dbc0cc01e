// ABOUTME: Structured diagnostic events emitted while evaluating feedback windows
// ABOUTME: Provides the DiagnosticSink seam with tracing-backed and in-memory implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Diagnostic events are used for tuning rule thresholds. They never change
//! the outcome of an evaluation.

use recovery_core::errors::FeedbackIssue;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, warn};

/// What happened during an evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// No usable records remained for the exercise
    WindowEmpty,
    /// A record was excluded from the window
    RecordExcluded,
    /// A record for a different exercise was passed in and ignored
    ForeignRecord,
    /// Records were re-sorted by creation time
    WindowReordered,
    /// Older records were dropped to respect the window size
    WindowTruncated,
    /// A rule could not be evaluated with the available data
    RuleSkipped,
    /// A rule was not evaluated because an earlier rule superseded it
    RuleSuppressed,
    /// A rule produced modifications
    RuleFired,
    /// A replacement was recommended without a concrete substitute
    ReplacementUnresolved,
}

impl DiagnosticKind {
    /// Convert to string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WindowEmpty => "window_empty",
            Self::RecordExcluded => "record_excluded",
            Self::ForeignRecord => "foreign_record",
            Self::WindowReordered => "window_reordered",
            Self::WindowTruncated => "window_truncated",
            Self::RuleSkipped => "rule_skipped",
            Self::RuleSuppressed => "rule_suppressed",
            Self::RuleFired => "rule_fired",
            Self::ReplacementUnresolved => "replacement_unresolved",
        }
    }

    /// Whether the event indicates degraded input rather than normal flow
    #[must_use]
    pub const fn is_input_problem(&self) -> bool {
        matches!(
            self,
            Self::RecordExcluded | Self::ForeignRecord | Self::WindowReordered
        )
    }
}

/// One structured diagnostic record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticEvent {
    /// Event kind
    pub event: DiagnosticKind,
    /// Exercise being evaluated
    pub exercise_id: String,
    /// Rule the event relates to, if any
    pub rule: Option<String>,
    /// Input problem the event relates to, if any
    pub issue: Option<FeedbackIssue>,
    /// Free-form detail
    pub details: String,
}

impl DiagnosticEvent {
    /// Create an event not tied to a specific rule
    #[must_use]
    pub fn new(event: DiagnosticKind, exercise_id: &str, details: impl Into<String>) -> Self {
        Self {
            event,
            exercise_id: exercise_id.to_owned(),
            rule: None,
            issue: None,
            details: details.into(),
        }
    }

    /// Create an event for a specific rule
    #[must_use]
    pub fn for_rule(
        event: DiagnosticKind,
        exercise_id: &str,
        rule: &str,
        details: impl Into<String>,
    ) -> Self {
        Self {
            rule: Some(rule.to_owned()),
            ..Self::new(event, exercise_id, details)
        }
    }

    /// Attach the input problem behind this event
    #[must_use]
    pub fn with_issue(mut self, issue: FeedbackIssue) -> Self {
        self.issue = Some(issue);
        self
    }
}

/// Receiver of diagnostic events
pub trait DiagnosticSink: Send + Sync {
    /// Record one event
    fn record(&self, event: DiagnosticEvent);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for Arc<T> {
    fn record(&self, event: DiagnosticEvent) {
        (**self).record(event);
    }
}

/// Emits diagnostics as structured `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn record(&self, event: DiagnosticEvent) {
        let rule = event.rule.as_deref().unwrap_or("");
        let issue = event.issue.as_ref().map(ToString::to_string);
        if event.event.is_input_problem() {
            warn!(
                diagnostic.event = event.event.as_str(),
                exercise.id = %event.exercise_id,
                rule.name = rule,
                issue = issue.as_deref().unwrap_or(""),
                details = %event.details,
                "Adaptation input degraded"
            );
        } else {
            debug!(
                diagnostic.event = event.event.as_str(),
                exercise.id = %event.exercise_id,
                rule.name = rule,
                details = %event.details,
                "Adaptation diagnostic"
            );
        }
    }
}

/// Collects diagnostics in memory for tuning tools and tests
#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl MemoryDiagnostics {
    /// Create an empty collector
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events recorded so far
    #[must_use]
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove and return all events recorded so far
    #[must_use]
    pub fn take(&self) -> Vec<DiagnosticEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Events of one kind
    #[must_use]
    pub fn of_kind(&self, kind: DiagnosticKind) -> Vec<DiagnosticEvent> {
        self.events()
            .into_iter()
            .filter(|event| event.event == kind)
            .collect()
    }
}

impl DiagnosticSink for MemoryDiagnostics {
    fn record(&self, event: DiagnosticEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}
