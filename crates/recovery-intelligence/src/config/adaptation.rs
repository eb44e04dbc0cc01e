// ABOUTME: Adaptation engine configuration for feedback-driven exercise modifications
// ABOUTME: Configures window size, rule thresholds, and message templates with env overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Adaptation Engine Configuration
//!
//! Provides configuration for the adaptation rule engine including the size
//! of the feedback window, thresholds for triggering each rule, and the
//! directive text attached to emitted modifications.
//!
//! Configuration is an explicit value: callers load it once and hand it to
//! the engine they construct. There is no process-wide instance.

use super::error::ConfigError;
use recovery_core::constants::rating_scale;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Adaptation Engine Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdaptationEngineConfig {
    /// Feedback window sizing
    pub window: WindowConfig,
    /// Threshold values for triggering rules
    pub thresholds: AdaptationThresholds,
    /// Directive text for emitted modifications
    pub messages: AdaptationMessages,
}

/// Feedback window sizing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Maximum number of most recent valid records evaluated per exercise
    pub max_records: usize,
}

/// Thresholds for triggering adaptation rules (all ratings on the 1-10 scale)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptationThresholds {
    /// Average pain at or above which intensity must drop
    pub pain_high_average: f64,
    /// Points by which the latest pain must exceed the average to count as a spike
    pub pain_spike_delta: f64,
    /// Pain level considered severe
    pub severe_pain_level: u8,
    /// Number of most recent records inspected for severe pain
    pub severe_pain_lookback: usize,
    /// Severe-pain sessions within the lookback that force a replacement
    pub severe_pain_count: usize,
    /// Average difficulty at or below which load should increase
    pub difficulty_low_average: f64,
    /// Average difficulty at or above which load should decrease
    pub difficulty_high_average: f64,
    /// Average enjoyment at or below which an alternative is suggested
    pub low_enjoyment_average: f64,
    /// Enjoyment ceiling that, when never exceeded, triggers replacement
    pub persistent_low_enjoyment: u8,
    /// Minimum enjoyment ratings needed before the enjoyment rule applies
    pub min_enjoyment_samples: usize,
    /// Final effectiveness at or below which a flat or falling trend fires
    pub effectiveness_floor: u8,
    /// Minimum effectiveness ratings needed to establish a trend
    pub min_effectiveness_samples: usize,
}

/// Directive text attached to emitted modifications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaptationMessages {
    /// Pain average too high
    pub reduce_intensity: String,
    /// Latest pain spiked above the average
    pub add_rest: String,
    /// Repeated severe pain
    pub stop_and_rest: String,
    /// Exercise consistently too easy
    pub increase_load: String,
    /// Exercise consistently too hard
    pub reduce_load: String,
    /// Exercise consistently not enjoyed
    pub try_enjoyable_variation: String,
    /// Exercise no longer feels effective
    pub switch_variation: String,
    /// Exercise repeatedly performed with an ad hoc change
    pub formalize_modification: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { max_records: 5 }
    }
}

impl Default for AdaptationThresholds {
    fn default() -> Self {
        Self {
            pain_high_average: 7.0,
            pain_spike_delta: 2.0,
            severe_pain_level: 8,
            severe_pain_lookback: 3,
            severe_pain_count: 2,
            difficulty_low_average: 3.0,
            difficulty_high_average: 8.0,
            low_enjoyment_average: 3.0,
            persistent_low_enjoyment: 2,
            min_enjoyment_samples: 3,
            effectiveness_floor: 4,
            min_effectiveness_samples: 2,
        }
    }
}

impl Default for AdaptationMessages {
    fn default() -> Self {
        Self {
            reduce_intensity: "Reduce intensity and add rest between sets".into(),
            add_rest: "Add a rest day before repeating this exercise".into(),
            stop_and_rest: "Stop this exercise and rest the affected area".into(),
            increase_load: "Increase reps or add weight to keep progressing".into(),
            reduce_load: "Reduce the load or shorten each set".into(),
            try_enjoyable_variation: "Try a variation you enjoy more".into(),
            switch_variation: "Switch to a variation that works the same area differently"
                .into(),
            formalize_modification: "Make your usual modification part of the plan".into(),
        }
    }
}

impl AdaptationEngineConfig {
    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent value found
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.thresholds;

        if self.window.max_records == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "window.max_records must be at least 1",
            ));
        }

        for (value, name) in [
            (t.pain_high_average, "pain_high_average must be within the 1-10 scale"),
            (
                t.difficulty_low_average,
                "difficulty_low_average must be within the 1-10 scale",
            ),
            (
                t.difficulty_high_average,
                "difficulty_high_average must be within the 1-10 scale",
            ),
            (
                t.low_enjoyment_average,
                "low_enjoyment_average must be within the 1-10 scale",
            ),
        ] {
            if !on_scale(value) {
                return Err(ConfigError::ValueOutOfRange(name));
            }
        }

        for (value, name) in [
            (t.severe_pain_level, "severe_pain_level must be within the 1-10 scale"),
            (
                t.persistent_low_enjoyment,
                "persistent_low_enjoyment must be within the 1-10 scale",
            ),
            (
                t.effectiveness_floor,
                "effectiveness_floor must be within the 1-10 scale",
            ),
        ] {
            if !(rating_scale::MIN..=rating_scale::MAX).contains(&value) {
                return Err(ConfigError::ValueOutOfRange(name));
            }
        }

        if t.pain_spike_delta <= 0.0 || !t.pain_spike_delta.is_finite() {
            return Err(ConfigError::ValueOutOfRange(
                "pain_spike_delta must be a positive number",
            ));
        }

        if t.difficulty_low_average >= t.difficulty_high_average {
            return Err(ConfigError::InvalidRange(
                "difficulty_low_average must be < difficulty_high_average",
            ));
        }

        if f64::from(t.persistent_low_enjoyment) > t.low_enjoyment_average {
            return Err(ConfigError::InvalidRange(
                "persistent_low_enjoyment must be <= low_enjoyment_average",
            ));
        }

        if t.severe_pain_count == 0 || t.severe_pain_count > t.severe_pain_lookback {
            return Err(ConfigError::InvalidRange(
                "severe_pain_count must be between 1 and severe_pain_lookback",
            ));
        }

        if t.min_enjoyment_samples == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_enjoyment_samples must be at least 1",
            ));
        }

        if t.min_effectiveness_samples < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "min_effectiveness_samples must be at least 2 to establish a trend",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("ADAPTATION_WINDOW_MAX_RECORDS", &mut self.window.max_records)?;

        let t = &mut self.thresholds;
        Self::apply_env_var("ADAPTATION_PAIN_HIGH_AVERAGE", &mut t.pain_high_average)?;
        Self::apply_env_var("ADAPTATION_PAIN_SPIKE_DELTA", &mut t.pain_spike_delta)?;
        Self::apply_env_var("ADAPTATION_SEVERE_PAIN_LEVEL", &mut t.severe_pain_level)?;
        Self::apply_env_var(
            "ADAPTATION_DIFFICULTY_LOW_AVERAGE",
            &mut t.difficulty_low_average,
        )?;
        Self::apply_env_var(
            "ADAPTATION_DIFFICULTY_HIGH_AVERAGE",
            &mut t.difficulty_high_average,
        )?;
        Self::apply_env_var(
            "ADAPTATION_LOW_ENJOYMENT_AVERAGE",
            &mut t.low_enjoyment_average,
        )?;
        Self::apply_env_var("ADAPTATION_EFFECTIVENESS_FLOOR", &mut t.effectiveness_floor)?;

        Ok(self)
    }
}

fn on_scale(value: f64) -> bool {
    (f64::from(rating_scale::MIN)..=f64::from(rating_scale::MAX)).contains(&value)
}
