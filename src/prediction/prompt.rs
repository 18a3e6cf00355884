// ABOUTME: Builds the narrator prompt from the profile, computed metrics, and scenario deltas
// ABOUTME: The model receives every number precomputed and is told to narrate, not recalculate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write as _;

use serde_json::{json, Value};
use vitalcast_core::models::UserProfile;
use vitalcast_intelligence::scenarios::ScenarioOutcome;
use vitalcast_intelligence::DerivedMetrics;

use super::report::RiskCategory;
use crate::errors::AppResult;
use crate::llm::{health_forecast_system_prompt, ChatMessage};

/// System and user messages for one prediction
///
/// # Errors
///
/// Returns `SerializationError` if a payload cannot be rendered as JSON.
pub fn build_prediction_prompt(
    profile: &UserProfile,
    metrics: &DerivedMetrics,
    scenarios: &[ScenarioOutcome],
) -> AppResult<Vec<ChatMessage>> {
    let scenario_summary: Vec<Value> = scenarios
        .iter()
        .map(|outcome| {
            json!({
                "key": outcome.key,
                "label": outcome.label,
                "le8Delta": outcome.le8_delta,
                "diabetesScoreDelta": outcome.diabetes_score_delta,
                "cardiovascularDelta": outcome.cardiovascular_delta,
                "healthScore": outcome.metrics.health_score(),
            })
        })
        .collect();

    let required_keys = RiskCategory::REQUIRED
        .iter()
        .map(|category| category.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let mut user = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(
        user,
        "All scores below were computed by a deterministic engine. Do not recompute, \
         adjust, or contradict any number. Narrate what they mean for this person."
    );
    let _ = writeln!(user, "\n## Profile\n{}", serde_json::to_string_pretty(profile)?);
    let _ = writeln!(user, "\n## Derived metrics\n{}", serde_json::to_string_pretty(metrics)?);
    let _ = writeln!(
        user,
        "\n## additionalMetrics (echo verbatim)\n{}",
        serde_json::to_string(&metrics.additional_metrics())?
    );
    let _ = writeln!(
        user,
        "\n## debugCalculations (echo verbatim)\n{}",
        serde_json::to_string(&metrics.debug_calculations())?
    );
    if !scenario_summary.is_empty() {
        let _ = writeln!(
            user,
            "\n## What-if scenarios\n{}",
            serde_json::to_string_pretty(&scenario_summary)?
        );
    }
    let _ = writeln!(
        user,
        "\n## Instructions\n\
         - Write one risk card for each of: {required_keys}. Cardiovascular and other cards are optional.\n\
         - Use healthScoreCurrent = {current}.\n\
         - Copy additionalMetrics and debugCalculations into your answer unchanged.\n\
         - Answer with exactly one JSON object and nothing else.",
        current = metrics.health_score(),
    );

    Ok(vec![
        ChatMessage::system(health_forecast_system_prompt()),
        ChatMessage::user(user),
    ])
}
