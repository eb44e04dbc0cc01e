// ABOUTME: Post-exercise feedback records with validated 1-10 ratings
// ABOUTME: Append-only records supplied by the feedback store and consumed by the rule engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::rating_scale;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A score on the 1-10 rating scale.
///
/// Values outside the scale cannot be constructed, so a `Rating` held by a
/// record is always meaningful. Absence is expressed as `Option<Rating>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Create a rating, returning `None` when the value is outside 1-10
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= rating_scale::MIN && value <= rating_scale::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Raw integer value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Value as a float for averaging
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| {
            format!(
                "rating {value} is outside the {}-{} scale",
                rating_scale::MIN,
                rating_scale::MAX
            )
        })
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, rating_scale::MAX)
    }
}

/// How far the user got through the exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStatus {
    /// Every set was completed as prescribed
    Completed,
    /// The user stopped before finishing
    Partial,
    /// The user finished an ad hoc variation of the exercise
    Modified,
}

impl CompletionStatus {
    /// Convert to string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Partial => "partial",
            Self::Modified => "modified",
        }
    }
}

/// Part of the day the session took place in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    /// Before noon
    Morning,
    /// Noon until early evening
    Afternoon,
    /// Evening and night
    Evening,
}

/// One completed exercise attempt.
///
/// Records are append-only: a correction is a new record, never a mutation.
/// `pain_level` and `difficulty_rating` are required by the rule engine but are
/// modelled as options at this boundary so that incomplete records coming from
/// the store can be excluded instead of rejected wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Unique record identifier
    pub record_id: Uuid,
    /// Session this attempt belongs to
    pub session_id: String,
    /// Exercise identifier
    pub exercise_id: String,
    /// Exercise display name at the time of the session
    pub exercise_name: String,
    /// Pain felt during the exercise (required)
    pub pain_level: Option<Rating>,
    /// How hard the exercise felt (required)
    pub difficulty_rating: Option<Rating>,
    /// Energy level after the exercise
    #[serde(default)]
    pub energy_level: Option<Rating>,
    /// How much the user enjoyed the exercise
    #[serde(default)]
    pub enjoyment_rating: Option<Rating>,
    /// How effective the exercise felt
    #[serde(default)]
    pub perceived_effectiveness: Option<Rating>,
    /// Completion outcome
    pub completion_status: CompletionStatus,
    /// Free-text description of an ad hoc change (only when modified)
    #[serde(default)]
    pub modifications: Option<String>,
    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Part of the day the session took place in
    #[serde(default)]
    pub time_of_day: Option<TimeOfDay>,
    /// Session duration in minutes
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl FeedbackRecord {
    /// Whether both required ratings are present
    #[must_use]
    pub const fn has_required_ratings(&self) -> bool {
        self.pain_level.is_some() && self.difficulty_rating.is_some()
    }

    /// Names of the required fields this record is missing
    #[must_use]
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.pain_level.is_none() {
            missing.push("pain_level");
        }
        if self.difficulty_rating.is_none() {
            missing.push("difficulty_rating");
        }
        missing
    }

    /// Modification text when it carries something other than whitespace
    #[must_use]
    pub fn modification_text(&self) -> Option<&str> {
        self.modifications
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

/// Builder for `FeedbackRecord`
///
/// Rating setters take raw integers; values outside 1-10 leave the field empty.
#[derive(Debug, Clone)]
pub struct FeedbackRecordBuilder {
    record: FeedbackRecord,
}

impl FeedbackRecordBuilder {
    /// Creates a new builder with required identifiers and timestamp
    #[must_use]
    pub fn new(
        session_id: impl Into<String>,
        exercise_id: impl Into<String>,
        exercise_name: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            record: FeedbackRecord {
                record_id: Uuid::new_v4(),
                session_id: session_id.into(),
                exercise_id: exercise_id.into(),
                exercise_name: exercise_name.into(),
                pain_level: None,
                difficulty_rating: None,
                energy_level: None,
                enjoyment_rating: None,
                perceived_effectiveness: None,
                completion_status: CompletionStatus::Completed,
                modifications: None,
                notes: None,
                time_of_day: None,
                duration_minutes: None,
                created_at,
                updated_at: created_at,
            },
        }
    }

    /// Sets the record identifier
    #[must_use]
    pub const fn record_id(mut self, record_id: Uuid) -> Self {
        self.record.record_id = record_id;
        self
    }

    /// Sets the pain level
    #[must_use]
    pub const fn pain_level(mut self, value: u8) -> Self {
        self.record.pain_level = Rating::new(value);
        self
    }

    /// Sets the difficulty rating
    #[must_use]
    pub const fn difficulty_rating(mut self, value: u8) -> Self {
        self.record.difficulty_rating = Rating::new(value);
        self
    }

    /// Sets the energy level
    #[must_use]
    pub const fn energy_level(mut self, value: u8) -> Self {
        self.record.energy_level = Rating::new(value);
        self
    }

    /// Sets the enjoyment rating
    #[must_use]
    pub const fn enjoyment_rating(mut self, value: u8) -> Self {
        self.record.enjoyment_rating = Rating::new(value);
        self
    }

    /// Sets the perceived effectiveness
    #[must_use]
    pub const fn perceived_effectiveness(mut self, value: u8) -> Self {
        self.record.perceived_effectiveness = Rating::new(value);
        self
    }

    /// Sets the completion status
    #[must_use]
    pub const fn completion_status(mut self, status: CompletionStatus) -> Self {
        self.record.completion_status = status;
        self
    }

    /// Marks the record as modified with the given ad hoc change
    #[must_use]
    pub fn modified(mut self, modification: impl Into<String>) -> Self {
        self.record.completion_status = CompletionStatus::Modified;
        self.record.modifications = Some(modification.into());
        self
    }

    /// Sets free-text notes
    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.record.notes = Some(notes.into());
        self
    }

    /// Sets the time of day
    #[must_use]
    pub const fn time_of_day(mut self, time_of_day: TimeOfDay) -> Self {
        self.record.time_of_day = Some(time_of_day);
        self
    }

    /// Sets the session duration in minutes
    #[must_use]
    pub const fn duration_minutes(mut self, minutes: u32) -> Self {
        self.record.duration_minutes = Some(minutes);
        self
    }

    /// Builds the record
    #[must_use]
    pub fn build(self) -> FeedbackRecord {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_rejects_out_of_scale_values() {
        assert!(Rating::new(0).is_none());
        assert!(Rating::new(11).is_none());
        assert_eq!(Rating::new(7).map(Rating::value), Some(7));
    }

    #[test]
    fn test_rating_deserialization_enforces_scale() {
        let ok: Result<Rating, _> = serde_json::from_str("10");
        let err: Result<Rating, _> = serde_json::from_str("42");
        assert!(ok.is_ok());
        assert!(err.is_err());
    }

    #[test]
    fn test_blank_modification_text_is_ignored() {
        let record = FeedbackRecordBuilder::new("s1", "ex1", "Bridge", Utc::now())
            .modified("   ")
            .build();
        assert_eq!(record.modification_text(), None);
        assert_eq!(record.completion_status, CompletionStatus::Modified);
    }

    #[test]
    fn test_missing_required_fields_are_reported() {
        let record = FeedbackRecordBuilder::new("s1", "ex1", "Bridge", Utc::now())
            .pain_level(3)
            .build();
        assert!(!record.has_required_ratings());
        assert_eq!(record.missing_required_fields(), vec!["difficulty_rating"]);
    }
}
