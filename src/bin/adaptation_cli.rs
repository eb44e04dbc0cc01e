// ABOUTME: Adaptation CLI - evaluates exercise feedback files and prints recommendations
// ABOUTME: Loads feedback and catalog JSON, runs the adaptation engine, and emits plan commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Evaluate every exercise in a feedback file
//! adaptation-cli evaluate --feedback feedback.json
//!
//! # Suggest substitutes from a catalog for two exercises, as JSON
//! adaptation-cli evaluate --feedback feedback.json --catalog catalog.json \
//!     --exercise squat --exercise lunge --format json
//!
//! # Print the commands that accepting every recommendation would send
//! adaptation-cli evaluate --feedback feedback.json --emit-commands
//!
//! # Show the effective engine configuration
//! adaptation-cli config
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use recovery_adaptation::logging::LoggingConfig;
use recovery_adaptation::{
    loader, AppError, AppResult, CommandDispatcher, InMemoryFeedbackStore, PlanEvaluator,
};
use recovery_core::models::AdaptationRecommendation;
use recovery_intelligence::diagnostics::DiagnosticSink;
use recovery_intelligence::{
    AdaptationEngine, AdaptationEngineConfig, MemoryDiagnostics, RecommendationSet,
};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "adaptation-cli",
    about = "Exercise adaptation recommendations from session feedback",
    long_about = "Evaluates post-exercise feedback (pain, difficulty, enjoyment, effectiveness) and recommends modifications or replacements for each exercise."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Engine configuration file (JSON); defaults plus environment overrides when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate feedback and print recommendations
    Evaluate {
        /// Feedback records file (JSON array)
        #[arg(long)]
        feedback: PathBuf,

        /// Exercise catalog file (JSON object keyed by exercise id)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Exercise to evaluate (repeatable; all exercises when omitted)
        #[arg(long = "exercise")]
        exercises: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,

        /// Print collected diagnostic events after the recommendations
        #[arg(long)]
        diagnostics: bool,

        /// Print the plan commands produced by accepting every recommendation
        #[arg(long)]
        emit_commands: bool,
    },

    /// Print the effective engine configuration as JSON
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

struct EvaluateArgs {
    feedback: PathBuf,
    catalog: Option<PathBuf>,
    exercises: Vec<String>,
    format: OutputFormat,
    emit_commands: bool,
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose { logging.verbose() } else { logging };
    logging.init()?;

    let config = match &cli.config {
        Some(path) => loader::load_config(path)?,
        None => AdaptationEngineConfig::load()?,
    };

    match cli.command {
        Command::Evaluate {
            feedback,
            catalog,
            exercises,
            format,
            diagnostics,
            emit_commands,
        } => {
            let args = EvaluateArgs {
                feedback,
                catalog,
                exercises,
                format,
                emit_commands,
            };
            if diagnostics {
                let sink = Arc::new(MemoryDiagnostics::new());
                let engine = AdaptationEngine::try_with_diagnostics(config, Arc::clone(&sink))?;
                evaluate(engine, &args).await?;
                for event in sink.take() {
                    println!("{}", serde_json::to_string(&event)?);
                }
            } else {
                evaluate(AdaptationEngine::try_new(config)?, &args).await?;
            }
        }
        Command::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

async fn evaluate<D: DiagnosticSink>(
    engine: AdaptationEngine<D>,
    args: &EvaluateArgs,
) -> AppResult<()> {
    let store = InMemoryFeedbackStore::new();
    let appended = store.extend(loader::load_feedback(&args.feedback)?)?;
    info!(records = appended, "Feedback loaded into store");

    let mut evaluator = PlanEvaluator::new(engine, store);
    if let Some(path) = &args.catalog {
        evaluator = evaluator.with_catalog(loader::load_catalog(path)?);
    }

    let set = if args.exercises.is_empty() {
        evaluator.evaluate_all()
    } else {
        evaluator.evaluate_plan(&args.exercises)
    };

    match args.format {
        OutputFormat::Json => print_json(&set)?,
        OutputFormat::Pretty => print_pretty(&set),
    }

    if args.emit_commands {
        emit_commands(&set).await?;
    }
    Ok(())
}

fn print_json(set: &RecommendationSet) -> AppResult<()> {
    let output = json!({
        "all_clear": set.is_all_clear(),
        "can_dismiss_all": set.can_dismiss_all(),
        "recommendations": set.recommendations(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_pretty(set: &RecommendationSet) {
    if set.is_all_clear() {
        println!("Your exercises are working well. No changes needed.");
        return;
    }

    for recommendation in set.actionable() {
        print_recommendation(recommendation);
    }
    if !set.can_dismiss_all() {
        println!("High-priority changes must be reviewed individually.");
    }
}

fn print_recommendation(recommendation: &AdaptationRecommendation) {
    println!(
        "{} ({})",
        recommendation.exercise_name, recommendation.exercise_id
    );
    for modification in &recommendation.modifications {
        println!(
            "  [{}] {}: {}",
            modification.priority, modification.modification_type, modification.description
        );
        println!("      {}", modification.reason);
    }
    if recommendation.should_replace {
        match &recommendation.alternative_exercise {
            Some(alternative) => println!(
                "  Replace with {} ({}), shares: {}",
                alternative.name,
                alternative.id,
                alternative.shared_muscles.join(", ")
            ),
            None => println!("  Replacement recommended; no specific suggestion available"),
        }
    }
    println!("  {}", recommendation.reasoning);
    println!();
}

async fn emit_commands(set: &RecommendationSet) -> AppResult<()> {
    let (dispatcher, mut receiver) = CommandDispatcher::channel();

    let printer = tokio::spawn(async move {
        let mut lines = Vec::new();
        while let Some(command) = receiver.recv().await {
            lines.push(serde_json::to_string(&command));
        }
        lines
    });

    for recommendation in set.actionable() {
        if recommendation.should_replace {
            dispatcher.replace(recommendation)?;
        } else {
            dispatcher.accept(recommendation)?;
        }
    }
    drop(dispatcher);

    let lines = printer
        .await
        .map_err(|e| AppError::internal(format!("command printer task failed: {e}")))?;
    for line in lines {
        println!("{}", line?);
    }
    Ok(())
}
