// ABOUTME: Integration tests for the fail-soft prediction service
// ABOUTME: Uses a scripted provider to cover success, retries, timeouts, and degraded fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::env;
use std::sync::Arc;
use std::time::Duration;

use common::{baseline_profile, init_test_logging, valid_report_json, MockProvider, MockReply};
use serde_json::json;
use serial_test::serial;
use vitalcast::config::LlmSettings;
use vitalcast::errors::{AppError, ErrorCode};
use vitalcast::intelligence::MetricsEngine;
use vitalcast::llm::{LlmProvider, GEMINI_API_KEY_ENV};
use vitalcast::prediction::{
    PredictionService, CONNECTION_ERROR_TITLE, NARRATIVE_DISABLED_REASON,
};

fn settings(max_retries: u32, timeout: Duration) -> LlmSettings {
    LlmSettings {
        max_retries,
        timeout,
        ..LlmSettings::default()
    }
}

fn service_with(mock: &Arc<MockProvider>, settings: LlmSettings) -> PredictionService {
    let provider: Arc<dyn LlmProvider> = mock.clone();
    PredictionService::new(Some(provider), settings)
}

#[tokio::test]
async fn test_successful_narrative_is_reconciled_with_engine() {
    init_test_logging();
    let mock = Arc::new(MockProvider::new(vec![MockReply::Text(valid_report_json())]));
    let service = service_with(&mock, settings(1, Duration::from_secs(5)));
    let profile = baseline_profile();

    let outcome = service.predict(&profile).await;

    assert!(!outcome.degraded);
    assert!(outcome.degraded_reason.is_none());
    assert_eq!(mock.calls(), 1);
    assert_eq!(outcome.metrics, MetricsEngine::compute(&profile));

    // The narrator said 12; the engine says 92
    assert_eq!(outcome.report.health_score_current, 92);
    assert_eq!(outcome.report.health_score_future, 95);
    assert_eq!(
        outcome.report.additional_metrics,
        Some(outcome.metrics.additional_metrics())
    );
    assert_eq!(
        outcome.report.debug_calculations,
        Some(outcome.metrics.debug_calculations())
    );
}

#[tokio::test]
async fn test_future_score_never_below_current() {
    let mut reply: serde_json::Value = serde_json::from_str(&valid_report_json()).unwrap();
    reply["healthScoreFuture"] = json!(40);
    let mock = Arc::new(MockProvider::new(vec![MockReply::Text(reply.to_string())]));
    let service = service_with(&mock, settings(0, Duration::from_secs(5)));

    let outcome = service.predict(&baseline_profile()).await;

    assert_eq!(outcome.report.health_score_future, 92);
}

#[tokio::test]
async fn test_narrator_echo_is_kept_when_present() {
    let mut reply: serde_json::Value = serde_json::from_str(&valid_report_json()).unwrap();
    reply["additionalMetrics"] = json!({"echo": true});
    let mock = Arc::new(MockProvider::new(vec![MockReply::Text(reply.to_string())]));
    let service = service_with(&mock, settings(0, Duration::from_secs(5)));

    let outcome = service.predict(&baseline_profile()).await;

    assert_eq!(outcome.report.additional_metrics, Some(json!({"echo": true})));
    assert!(outcome.report.debug_calculations.is_some());
}

#[tokio::test]
async fn test_request_uses_settings_and_json_mode() {
    let mock = Arc::new(MockProvider::new(vec![MockReply::Text(valid_report_json())]));
    let settings = LlmSettings {
        model: Some("custom-model".to_owned()),
        temperature: 0.1,
        max_tokens: 2048,
        ..settings(0, Duration::from_secs(5))
    };
    let service = service_with(&mock, settings);

    let _ = service.predict(&baseline_profile()).await;
    let request = mock.last_request().unwrap();

    assert_eq!(request.model.as_deref(), Some("custom-model"));
    assert_eq!(request.max_tokens, Some(2048));
    assert!((request.temperature.unwrap() - 0.1).abs() < f32::EPSILON);
    assert!(request.json_mode);
    assert_eq!(request.messages.len(), 2);
}

#[tokio::test]
async fn test_disabled_narrative_degrades_without_calls() {
    let service = PredictionService::new(None, LlmSettings::disabled());
    assert!(!service.is_enabled());

    let outcome = service.predict(&baseline_profile()).await;

    assert!(outcome.degraded);
    assert_eq!(
        outcome.degraded_reason.as_deref(),
        Some(NARRATIVE_DISABLED_REASON)
    );
    assert_eq!(outcome.metrics.health_score(), 92);
    assert_eq!(outcome.report.risk_cards[0].title, CONNECTION_ERROR_TITLE);
}

#[tokio::test]
#[serial]
async fn test_missing_api_key_degrades_instead_of_failing() {
    env::remove_var(GEMINI_API_KEY_ENV);

    let service = PredictionService::from_settings(LlmSettings::default()).unwrap();
    assert!(!service.is_enabled());

    let outcome = service.predict(&baseline_profile()).await;

    assert!(outcome.degraded);
    assert!(outcome
        .degraded_reason
        .as_deref()
        .is_some_and(|reason| reason.contains(GEMINI_API_KEY_ENV)));
    assert_eq!(outcome.metrics.health_score(), 92);
    assert_eq!(outcome.metrics.lifes_essential8.total, 92);
    assert_eq!(outcome.report.risk_cards[0].title, CONNECTION_ERROR_TITLE);
}

#[tokio::test]
async fn test_provider_failure_degrades() {
    let mock = Arc::new(MockProvider::new(vec![MockReply::Fail(
        AppError::external_service("Mock", "boom"),
    )]));
    let service = service_with(&mock, settings(3, Duration::from_secs(5)));

    let outcome = service.predict(&baseline_profile()).await;

    assert!(outcome.degraded);
    // Non-transient errors are not retried
    assert_eq!(mock.calls(), 1);
    assert_eq!(outcome.report.risk_cards[0].title, CONNECTION_ERROR_TITLE);
    assert!(outcome.report.risk_cards[0].summary.contains("boom"));
}

#[tokio::test]
async fn test_auth_failure_is_not_retried() {
    let mock = Arc::new(MockProvider::new(vec![
        MockReply::Fail(AppError::new(ErrorCode::ExternalAuthFailed, "bad key")),
        MockReply::Text(valid_report_json()),
    ]));
    let service = service_with(&mock, settings(2, Duration::from_secs(5)));

    let outcome = service.predict(&baseline_profile()).await;

    assert!(outcome.degraded);
    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn test_transient_failure_is_retried() {
    let mock = Arc::new(MockProvider::new(vec![
        MockReply::Fail(AppError::new(
            ErrorCode::ExternalServiceUnavailable,
            "503 overloaded",
        )),
        MockReply::Text(valid_report_json()),
    ]));
    let service = service_with(&mock, settings(1, Duration::from_secs(5)));

    let outcome = service.predict(&baseline_profile()).await;

    assert!(!outcome.degraded);
    assert_eq!(mock.calls(), 2);
}

#[tokio::test]
async fn test_malformed_reply_is_retried_then_degrades() {
    let mock = Arc::new(MockProvider::new(vec![
        MockReply::Text("not json at all".to_owned()),
        MockReply::Text("{\"riskCards\": 7}".to_owned()),
    ]));
    let service = service_with(&mock, settings(1, Duration::from_secs(5)));

    let outcome = service.predict(&baseline_profile()).await;

    assert!(outcome.degraded);
    assert_eq!(mock.calls(), 2);
    assert!(outcome
        .degraded_reason
        .unwrap()
        .contains("does not match the report schema"));
}

#[tokio::test]
async fn test_slow_provider_times_out() {
    let mock = Arc::new(MockProvider::new(vec![MockReply::Delayed(
        Duration::from_secs(10),
        valid_report_json(),
    )]));
    let service = service_with(&mock, settings(0, Duration::from_millis(50)));

    let outcome = service.predict(&baseline_profile()).await;

    assert!(outcome.degraded);
    assert!(outcome
        .degraded_reason
        .unwrap()
        .contains("did not respond"));
    // Metrics survive a narrator failure
    assert_eq!(outcome.metrics.health_score(), 92);
}

#[tokio::test]
async fn test_outcome_serializes_for_the_ui() {
    let service = PredictionService::new(None, LlmSettings::disabled());

    let outcome = service.predict(&baseline_profile()).await;
    let value = serde_json::to_value(&outcome).unwrap();

    assert!(value["requestId"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(value.get("generatedAt").is_some());
    assert_eq!(value["degraded"], true);
    assert!(value["metrics"]["lifesEssential8"]["total"].is_number());
    assert!(value["report"]["riskCards"].is_array());
}

#[tokio::test]
async fn test_request_ids_are_unique() {
    let service = PredictionService::new(None, LlmSettings::disabled());
    let profile = baseline_profile();

    let first = service.predict(&profile).await;
    let second = service.predict(&profile).await;

    assert_ne!(first.request_id, second.request_id);
}
