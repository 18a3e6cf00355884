// ABOUTME: Prediction module organization: report schema, prompt, parser, and service
// ABOUTME: Turns DerivedMetrics into a narrated forecast with a fail-soft fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Prediction
//!
//! The engine's numbers go to a language model together with the profile;
//! the model answers with a [`PredictionReport`]. Network and parse failures
//! never escape: the service returns [`PredictionReport::degraded`] instead.

/// Response parsing
pub mod parser;
/// Prompt construction
pub mod prompt;
/// Report schema
pub mod report;
/// Fail-soft service
pub mod service;

pub use parser::parse_prediction_response;
pub use prompt::build_prediction_prompt;
pub use report::{
    LifeExpectancy, NarrativeScenario, PredictionReport, RiskCard, RiskCategory, Trajectory,
    TrajectoryPoint, CONNECTION_ERROR_TITLE,
};
pub use service::{PredictionOutcome, PredictionService, NARRATIVE_DISABLED_REASON};
