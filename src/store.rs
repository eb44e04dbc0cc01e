// ABOUTME: In-memory append-only feedback record store keyed by exercise
// ABOUTME: Provides consistent per-exercise window snapshots under concurrent appends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use recovery_core::errors::{AppError, AppResult};
use recovery_core::models::FeedbackRecord;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Read access to feedback history for evaluation
pub trait FeedbackSource: Send + Sync {
    /// Snapshot of the most recent `limit` records for an exercise, oldest first
    fn window(&self, exercise_id: &str, limit: usize) -> Vec<FeedbackRecord>;

    /// Every exercise with at least one record, sorted by id
    fn exercise_ids(&self) -> Vec<String>;

    /// Snapshot of the full history for an exercise, oldest first
    fn history(&self, exercise_id: &str) -> Vec<FeedbackRecord> {
        self.window(exercise_id, usize::MAX)
    }
}

impl<T: FeedbackSource + ?Sized> FeedbackSource for Arc<T> {
    fn window(&self, exercise_id: &str, limit: usize) -> Vec<FeedbackRecord> {
        (**self).window(exercise_id, limit)
    }

    fn exercise_ids(&self) -> Vec<String> {
        (**self).exercise_ids()
    }

    fn history(&self, exercise_id: &str) -> Vec<FeedbackRecord> {
        (**self).history(exercise_id)
    }
}

/// Append-only feedback store backed by sharded concurrent maps.
///
/// Each exercise's records live behind one shard lock, so a window snapshot
/// never observes a half-applied append.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFeedbackStore {
    /// Exercise id -> records in append order
    records: Arc<DashMap<String, Vec<FeedbackRecord>>>,
    /// Record id -> owning exercise id
    record_ids: Arc<DashMap<Uuid, String>>,
}

impl InMemoryFeedbackStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record.
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if a record with the same `record_id` was
    /// already appended. Records are never replaced; a correction is a new record.
    pub fn append(&self, record: FeedbackRecord) -> AppResult<()> {
        match self.record_ids.entry(record.record_id) {
            Entry::Occupied(existing) => {
                return Err(AppError::already_exists(format!(
                    "feedback record {} for exercise {}",
                    record.record_id,
                    existing.get()
                )));
            }
            Entry::Vacant(slot) => {
                slot.insert(record.exercise_id.clone());
            }
        }

        debug!(
            record.id = %record.record_id,
            exercise.id = %record.exercise_id,
            session.id = %record.session_id,
            "Feedback record appended"
        );
        self.records
            .entry(record.exercise_id.clone())
            .or_default()
            .push(record);
        Ok(())
    }

    /// Append many records, stopping at the first duplicate
    ///
    /// # Errors
    ///
    /// Returns the error of the first rejected record; earlier records stay appended
    pub fn extend<I>(&self, records: I) -> AppResult<usize>
    where
        I: IntoIterator<Item = FeedbackRecord>,
    {
        let mut appended = 0;
        for record in records {
            self.append(record)?;
            appended += 1;
        }
        Ok(appended)
    }

    /// Number of records for one exercise
    #[must_use]
    pub fn count_for(&self, exercise_id: &str) -> usize {
        self.records.get(exercise_id).map_or(0, |records| records.len())
    }

    /// Total number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.record_ids.len()
    }

    /// Whether the store holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.record_ids.is_empty()
    }
}

impl FeedbackSource for InMemoryFeedbackStore {
    fn window(&self, exercise_id: &str, limit: usize) -> Vec<FeedbackRecord> {
        let Some(records) = self.records.get(exercise_id) else {
            return Vec::new();
        };
        let mut snapshot = records.clone();
        drop(records);

        // Stable: records sharing a timestamp keep append order
        snapshot.sort_by_key(|record| record.created_at);
        let skip = snapshot.len().saturating_sub(limit);
        snapshot.split_off(skip)
    }

    fn exercise_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .records
            .iter()
            .filter(|entry| !entry.value().is_empty())
            .map(|entry| entry.key().clone())
            .collect();
        ids.sort();
        ids
    }
}
