// ABOUTME: Subcommand implementations for the vitalcast CLI
// ABOUTME: Each loads and validates a profile, then prints JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use tracing::info;
use vitalcast::config::LlmSettings;
use vitalcast::errors::AppResult;
use vitalcast::input::load_profile;
use vitalcast::intelligence::scenarios::{default_scenarios, evaluate_scenarios};
use vitalcast::intelligence::MetricsEngine;
use vitalcast::llm::MessageRole;
use vitalcast::prediction::{build_prediction_prompt, PredictionService};

/// `vitalcast metrics`
pub async fn metrics(source: &str, compact: bool) -> AppResult<()> {
    let profile = load_profile(source).await?;
    let metrics = MetricsEngine::compute(&profile);
    print_json(&metrics, compact)
}

/// `vitalcast scenarios`
pub async fn scenarios(source: &str, compact: bool) -> AppResult<()> {
    let profile = load_profile(source).await?;
    let outcomes = evaluate_scenarios(&profile, &default_scenarios());
    print_json(&outcomes, compact)
}

/// `vitalcast predict`
pub async fn predict(source: &str, compact: bool) -> AppResult<()> {
    let profile = load_profile(source).await?;
    let service = PredictionService::from_settings(LlmSettings::from_env()?)?;

    let outcome = service.predict(&profile).await;
    info!(
        request_id = %outcome.request_id,
        degraded = outcome.degraded,
        "Prediction finished"
    );

    print_json(&outcome, compact)
}

/// `vitalcast prompt`
pub async fn prompt(source: &str) -> AppResult<()> {
    let profile = load_profile(source).await?;
    let metrics = MetricsEngine::compute(&profile);
    let outcomes = evaluate_scenarios(&profile, &default_scenarios());

    for message in build_prediction_prompt(&profile, &metrics, &outcomes)? {
        let heading = match message.role {
            MessageRole::System => "SYSTEM",
            MessageRole::User => "USER",
            MessageRole::Assistant => "ASSISTANT",
        };
        println!("===== {heading} =====\n{}\n", message.content);
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> AppResult<()> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{rendered}");
    Ok(())
}
