// ABOUTME: Integration tests for fire-and-forget plan command dispatch
// ABOUTME: Verifies channel delivery order, command payloads, and closed-channel errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::{lower_body_catalog, window};
use recovery_adaptation::{CommandDispatcher, ErrorCode};
use recovery_core::models::{ModificationType, PlanCommand};
use recovery_intelligence::AdaptationEngine;

#[tokio::test]
async fn test_commands_arrive_in_dispatch_order() {
    let (dispatcher, mut receiver) = CommandDispatcher::channel();
    let engine = AdaptationEngine::default();
    let catalog = lower_body_catalog();

    let easy = engine.evaluate("glute_bridge", &window("glute_bridge", &[(2, 2), (2, 2), (2, 2)]));
    let painful = engine.evaluate_with_catalog(
        "squat",
        &window("squat", &[(8, 5), (9, 6), (8, 5)]),
        &catalog,
    );

    dispatcher.accept(&easy).unwrap();
    dispatcher.replace(&painful).unwrap();
    dispatcher.dismiss("wall_sit").unwrap();

    match receiver.recv().await.unwrap() {
        PlanCommand::AcceptModifications {
            exercise_id,
            modifications,
        } => {
            assert_eq!(exercise_id, "glute_bridge");
            assert_eq!(modifications.len(), 1);
            assert_eq!(modifications[0].modification_type, ModificationType::Reps);
        }
        other => panic!("unexpected command {other:?}"),
    }

    match receiver.recv().await.unwrap() {
        PlanCommand::ReplaceExercise {
            exercise_id,
            suggested,
        } => {
            assert_eq!(exercise_id, "squat");
            assert_eq!(suggested.unwrap().id, "split_squat");
        }
        other => panic!("unexpected command {other:?}"),
    }

    assert_eq!(
        receiver.recv().await.unwrap(),
        PlanCommand::Dismiss {
            exercise_id: "wall_sit".to_owned()
        }
    );
}

#[tokio::test]
async fn test_receiver_sees_end_of_stream_when_dispatchers_drop() {
    let (dispatcher, mut receiver) = CommandDispatcher::channel();
    let clone = dispatcher.clone();

    clone.dismiss("squat").unwrap();
    drop(clone);
    drop(dispatcher);

    assert!(receiver.recv().await.is_some());
    assert!(receiver.recv().await.is_none());
}

#[tokio::test]
async fn test_closed_channel_is_reported_without_retry() {
    let (dispatcher, receiver) = CommandDispatcher::channel();
    drop(receiver);

    assert!(dispatcher.is_closed());
    let error = dispatcher.dismiss("squat").unwrap_err();
    assert_eq!(error.code, ErrorCode::ChannelClosed);
    assert!(error.message.contains("squat"));
}

#[tokio::test]
async fn test_dispatch_from_spawned_task() {
    let (dispatcher, mut receiver) = CommandDispatcher::channel();

    let handle = tokio::spawn(async move {
        for exercise in ["squat", "lunge"] {
            dispatcher.dismiss(exercise).unwrap();
        }
    });
    handle.await.unwrap();

    let mut received = Vec::new();
    while let Some(command) = receiver.recv().await {
        received.push(command.exercise_id().to_owned());
    }
    assert_eq!(received, vec!["squat", "lunge"]);
}

#[tokio::test]
async fn test_dispatcher_wraps_existing_sender() {
    let (sender, mut receiver) = tokio::sync::mpsc::unbounded_channel();
    let dispatcher = CommandDispatcher::from_sender(sender);

    dispatcher.dismiss("lunge").unwrap();
    drop(dispatcher);

    assert_eq!(
        receiver.recv().await.unwrap(),
        PlanCommand::Dismiss {
            exercise_id: "lunge".to_owned()
        }
    );
    assert!(receiver.recv().await.is_none());
}
