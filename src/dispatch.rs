// ABOUTME: Fire-and-forget dispatch of user decisions to the plan-management collaborator
// ABOUTME: Sends PlanCommand values over a tokio unbounded channel without retries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::logging::AppLogger;
use recovery_core::errors::{AppError, AppResult};
use recovery_core::models::{AdaptationRecommendation, PlanCommand};
use recovery_intelligence::RecommendationAggregator;
use tokio::sync::mpsc::{self, error::SendError, UnboundedReceiver, UnboundedSender};
use tracing::warn;

/// Sending half of the plan command channel
#[derive(Debug, Clone)]
pub struct CommandDispatcher {
    sender: UnboundedSender<PlanCommand>,
}

impl CommandDispatcher {
    /// Create a dispatcher and the receiver the plan-management side drains
    #[must_use]
    pub fn channel() -> (Self, UnboundedReceiver<PlanCommand>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Wrap an existing sender
    #[must_use]
    pub const fn from_sender(sender: UnboundedSender<PlanCommand>) -> Self {
        Self { sender }
    }

    /// Send one command. Delivery is not confirmed and failures are not retried.
    ///
    /// # Errors
    ///
    /// Returns `ChannelClosed` if the receiving side has been dropped
    pub fn dispatch(&self, command: PlanCommand) -> AppResult<()> {
        let kind = command.kind();
        let exercise_id = command.exercise_id().to_owned();
        match self.sender.send(command) {
            Ok(()) => {
                AppLogger::log_command(kind, &exercise_id, true);
                Ok(())
            }
            Err(SendError(_)) => {
                AppLogger::log_command(kind, &exercise_id, false);
                warn!(
                    command.kind = kind,
                    exercise.id = %exercise_id,
                    "Plan command dropped: receiver closed"
                );
                Err(AppError::channel_closed(format!(
                    "{kind} for exercise {exercise_id} was not delivered"
                )))
            }
        }
    }

    /// Accept every modification of a recommendation
    ///
    /// # Errors
    ///
    /// Returns `ChannelClosed` if the receiving side has been dropped
    pub fn accept(&self, recommendation: &AdaptationRecommendation) -> AppResult<()> {
        self.dispatch(RecommendationAggregator::accept_modifications(
            recommendation.exercise_id.clone(),
            recommendation.modifications.clone(),
        ))
    }

    /// Replace the exercise, forwarding the suggested substitute if any
    ///
    /// # Errors
    ///
    /// Returns `ChannelClosed` if the receiving side has been dropped
    pub fn replace(&self, recommendation: &AdaptationRecommendation) -> AppResult<()> {
        self.dispatch(RecommendationAggregator::replace_exercise(
            recommendation.exercise_id.clone(),
            recommendation.alternative_exercise.clone(),
        ))
    }

    /// Leave the exercise unchanged
    ///
    /// # Errors
    ///
    /// Returns `ChannelClosed` if the receiving side has been dropped
    pub fn dismiss(&self, exercise_id: impl Into<String>) -> AppResult<()> {
        self.dispatch(RecommendationAggregator::dismiss(exercise_id))
    }

    /// Whether the receiving side has been dropped
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
