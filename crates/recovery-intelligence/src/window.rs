// ABOUTME: Feedback window normalization and rating statistics for one exercise
// ABOUTME: Excludes unusable records, restores chronological order, and caps the window size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::diagnostics::{DiagnosticEvent, DiagnosticKind, DiagnosticSink};
use recovery_core::errors::FeedbackIssue;
use recovery_core::models::{CompletionStatus, FeedbackRecord, Rating};

/// A record whose required ratings are known to be present
#[derive(Debug, Clone, Copy)]
pub struct WindowEntry<'a> {
    /// Pain level
    pub pain: Rating,
    /// Difficulty rating
    pub difficulty: Rating,
    /// Underlying record
    pub record: &'a FeedbackRecord,
}

/// Chronologically ordered, validated feedback for one exercise
#[derive(Debug, Clone)]
pub struct FeedbackWindow<'a> {
    exercise_id: &'a str,
    entries: Vec<WindowEntry<'a>>,
}

impl<'a> FeedbackWindow<'a> {
    /// Build a window from raw records.
    ///
    /// Records for other exercises and records missing a required rating are
    /// excluded, the remainder is stable-sorted by `created_at`, and only the
    /// `max_records` most recent entries are kept. Every adjustment is reported
    /// to `diagnostics`.
    pub fn build(
        exercise_id: &'a str,
        records: &'a [FeedbackRecord],
        max_records: usize,
        diagnostics: &dyn DiagnosticSink,
    ) -> Self {
        let mut entries = Vec::with_capacity(records.len());

        for record in records {
            if record.exercise_id != exercise_id {
                diagnostics.record(DiagnosticEvent::new(
                    DiagnosticKind::ForeignRecord,
                    exercise_id,
                    format!(
                        "record {} belongs to exercise {}",
                        record.record_id, record.exercise_id
                    ),
                ));
                continue;
            }

            match (record.pain_level, record.difficulty_rating) {
                (Some(pain), Some(difficulty)) => entries.push(WindowEntry {
                    pain,
                    difficulty,
                    record,
                }),
                _ => {
                    let issue = FeedbackIssue::MissingRequiredField {
                        record_id: record.record_id.to_string(),
                        fields: record
                            .missing_required_fields()
                            .into_iter()
                            .map(str::to_owned)
                            .collect(),
                    };
                    diagnostics.record(
                        DiagnosticEvent::new(
                            DiagnosticKind::RecordExcluded,
                            exercise_id,
                            issue.to_string(),
                        )
                        .with_issue(issue),
                    );
                }
            }
        }

        let out_of_order = entries
            .windows(2)
            .filter(|pair| pair[1].record.created_at < pair[0].record.created_at)
            .count();
        if out_of_order > 0 {
            entries.sort_by_key(|entry| entry.record.created_at);
            let issue = FeedbackIssue::InconsistentWindow { out_of_order };
            diagnostics.record(
                DiagnosticEvent::new(DiagnosticKind::WindowReordered, exercise_id, issue.to_string())
                    .with_issue(issue),
            );
        }

        if entries.len() > max_records {
            let dropped = entries.len() - max_records;
            entries.drain(..dropped);
            diagnostics.record(DiagnosticEvent::new(
                DiagnosticKind::WindowTruncated,
                exercise_id,
                format!("dropped {dropped} older record(s); window holds {max_records}"),
            ));
        }

        Self {
            exercise_id,
            entries,
        }
    }

    /// Exercise the window belongs to
    #[must_use]
    pub const fn exercise_id(&self) -> &'a str {
        self.exercise_id
    }

    /// Entries, oldest first
    #[must_use]
    pub fn entries(&self) -> &[WindowEntry<'a>] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the window holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry
    #[must_use]
    pub fn latest(&self) -> Option<&WindowEntry<'a>> {
        self.entries.last()
    }

    /// The `n` most recent entries, oldest first
    #[must_use]
    pub fn most_recent(&self, n: usize) -> &[WindowEntry<'a>] {
        &self.entries[self.entries.len().saturating_sub(n)..]
    }

    /// Present values of one rating in chronological order
    pub fn ratings<F>(&self, select: F) -> Vec<Rating>
    where
        F: Fn(&WindowEntry<'a>) -> Option<Rating>,
    {
        self.entries.iter().filter_map(select).collect()
    }

    /// Mean pain level
    #[must_use]
    pub fn mean_pain(&self) -> Option<f64> {
        mean(&self.ratings(|entry| Some(entry.pain)))
    }

    /// Mean difficulty rating
    #[must_use]
    pub fn mean_difficulty(&self) -> Option<f64> {
        mean(&self.ratings(|entry| Some(entry.difficulty)))
    }

    /// Number of entries with the given completion status
    #[must_use]
    pub fn count_status(&self, status: CompletionStatus) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.record.completion_status == status)
            .count()
    }

    /// Whether more than half of the entries have the given completion status
    #[must_use]
    pub fn majority_status(&self, status: CompletionStatus) -> bool {
        !self.is_empty() && self.count_status(status) * 2 > self.len()
    }
}

/// Arithmetic mean of the given ratings; `None` for an empty slice
#[must_use]
pub fn mean(values: &[Rating]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let total: f64 = values.iter().copied().map(Rating::as_f64).sum();
    Some(total / values.len() as f64)
}

/// Whether each value is less than or equal to the one before it
#[must_use]
pub fn is_non_increasing(values: &[Rating]) -> bool {
    values.windows(2).all(|pair| pair[1] <= pair[0])
}
