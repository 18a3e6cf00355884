// ABOUTME: Fail-soft prediction service combining the metrics engine with the narrator
// ABOUTME: Applies timeout and bounded retries, and substitutes a degraded report on any failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Prediction service
//!
//! [`PredictionService::predict`] never fails. The deterministic metrics are
//! always returned; only the narrative can degrade.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::time::{sleep, timeout};
use tracing::{debug, instrument, warn, Span};
use uuid::Uuid;
use vitalcast_core::models::UserProfile;
use vitalcast_intelligence::scenarios::{default_scenarios, evaluate_scenarios, Scenario};
use vitalcast_intelligence::{DerivedMetrics, MetricsEngine};

use super::parser::parse_prediction_response;
use super::prompt::build_prediction_prompt;
use super::report::PredictionReport;
use crate::config::LlmSettings;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::llm::{ChatProvider, ChatRequest, LlmProvider};
use crate::logging::AppLogger;

/// Base delay between attempts; grows linearly with the attempt number
const RETRY_BACKOFF: Duration = Duration::from_millis(250);

/// Reason recorded when no provider is configured
pub const NARRATIVE_DISABLED_REASON: &str = "AI narrative is disabled by configuration";

/// Everything one prediction produced
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionOutcome {
    /// Correlates log lines with this prediction
    pub request_id: String,
    /// When the prediction finished
    pub generated_at: DateTime<Utc>,
    /// Deterministic metrics, always present
    pub metrics: DerivedMetrics,
    /// Narrative, possibly the degraded placeholder
    pub report: PredictionReport,
    /// Whether `report` is the degraded placeholder
    pub degraded: bool,
    /// Why the narrative degraded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degraded_reason: Option<String>,
}

/// Metrics plus narrative with a fail-soft policy
pub struct PredictionService {
    provider: Option<Arc<dyn LlmProvider>>,
    settings: LlmSettings,
    scenarios: Vec<Scenario>,
    /// Degraded reason used when `provider` is `None`
    unavailable_reason: String,
}

impl PredictionService {
    /// Create a service around an optional provider
    #[must_use]
    pub fn new(provider: Option<Arc<dyn LlmProvider>>, settings: LlmSettings) -> Self {
        Self {
            provider,
            settings,
            scenarios: default_scenarios(),
            unavailable_reason: NARRATIVE_DISABLED_REASON.to_owned(),
        }
    }

    /// Build the configured provider and wrap it
    ///
    /// A selected provider without an API key does not fail construction: the
    /// service runs without a narrator and every prediction degrades.
    ///
    /// # Errors
    ///
    /// Returns any provider construction error other than `ConfigMissing`.
    pub fn from_settings(settings: LlmSettings) -> AppResult<Self> {
        let provider = match ChatProvider::from_settings(&settings) {
            Ok(provider) => provider.map(|provider| Arc::new(provider) as Arc<dyn LlmProvider>),
            Err(e) if e.code == ErrorCode::ConfigMissing => {
                warn!(
                    provider = %settings.provider,
                    error = %e.message,
                    "AI narrative unavailable, predictions will degrade"
                );
                return Ok(Self::new(None, settings)
                    .with_unavailable_reason(format!("AI narrative unavailable: {}", e.message)));
            }
            Err(e) => return Err(e),
        };

        if let Some(provider) = &provider {
            AppLogger::log_config_loaded(
                provider.name(),
                Some(provider.default_model()),
                settings.timeout,
                settings.max_retries,
            );
        }

        Ok(Self::new(provider, settings))
    }

    /// Replace the scenarios summarized in the prompt
    #[must_use]
    pub fn with_scenarios(mut self, scenarios: Vec<Scenario>) -> Self {
        self.scenarios = scenarios;
        self
    }

    /// Replace the degraded reason reported when no provider is available
    #[must_use]
    pub fn with_unavailable_reason(mut self, reason: impl Into<String>) -> Self {
        self.unavailable_reason = reason.into();
        self
    }

    /// Whether a provider will be called
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// Compute metrics and narrate them, degrading instead of failing
    #[instrument(skip(self, profile), fields(request_id))]
    pub async fn predict(&self, profile: &UserProfile) -> PredictionOutcome {
        let request_id = Uuid::new_v4().to_string();
        Span::current().record("request_id", request_id.as_str());

        let metrics = MetricsEngine::compute(profile);
        AppLogger::log_metrics_computed(
            metrics.health_score(),
            metrics.diabetes.score,
            metrics.cardiovascular.relative_risk,
        );

        let narrated = match &self.provider {
            None => Err(self.unavailable_reason.clone()),
            Some(provider) => self
                .narrate(provider.as_ref(), profile, &metrics)
                .await
                .map_err(|e| e.to_string()),
        };

        let (report, degraded_reason) = match narrated {
            Ok(report) => (Self::reconcile(report, &metrics), None),
            Err(reason) => {
                AppLogger::log_degraded_fallback(&reason, &request_id);
                (PredictionReport::degraded(reason.clone()), Some(reason))
            }
        };

        PredictionOutcome {
            request_id,
            generated_at: Utc::now(),
            metrics,
            degraded: degraded_reason.is_some(),
            degraded_reason,
            report,
        }
    }

    /// Prompt, call with timeout and retries, then parse
    async fn narrate(
        &self,
        provider: &dyn LlmProvider,
        profile: &UserProfile,
        metrics: &DerivedMetrics,
    ) -> AppResult<PredictionReport> {
        let outcomes = evaluate_scenarios(profile, &self.scenarios);
        let messages = build_prediction_prompt(profile, metrics, &outcomes)?;

        let mut request = ChatRequest::new(messages)
            .with_temperature(self.settings.temperature)
            .with_max_tokens(self.settings.max_tokens);
        if let Some(model) = &self.settings.model {
            request = request.with_model(model.clone());
        }
        if provider.capabilities().supports_json_mode() {
            request = request.with_json_mode();
        }

        let attempts = self.settings.total_attempts();
        let mut last_error = AppError::internal("no attempt was made");

        for attempt in 1..=attempts {
            match self.attempt(provider, &request, attempt).await {
                Ok(report) => return Ok(report),
                Err(e) if attempt < attempts && Self::is_retryable(&e) => {
                    warn!(attempt, error = %e, "Narrative attempt failed, retrying");
                    sleep(RETRY_BACKOFF * attempt).await;
                    last_error = e;
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error)
    }

    async fn attempt(
        &self,
        provider: &dyn LlmProvider,
        request: &ChatRequest,
        attempt: u32,
    ) -> AppResult<PredictionReport> {
        let started = Instant::now();
        let model = request
            .model
            .as_deref()
            .unwrap_or_else(|| provider.default_model())
            .to_owned();

        let result = match timeout(self.settings.timeout, provider.complete(request)).await {
            Ok(result) => result,
            Err(_) => Err(AppError::external_timeout(
                provider.display_name(),
                self.settings.timeout.as_secs(),
            )),
        };
        AppLogger::log_llm_call(
            provider.name(),
            &model,
            attempt,
            result.is_ok(),
            started.elapsed(),
        );

        let response = result?;
        if let Some(usage) = response.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Narrative token usage"
            );
        }
        parse_prediction_response(&response.content)
    }

    /// Transient transport failures and malformed replies are worth another try
    fn is_retryable(error: &AppError) -> bool {
        error.code.is_transient() || error.code == ErrorCode::SerializationError
    }

    /// Keep the engine's numbers authoritative over the narrator's
    fn reconcile(mut report: PredictionReport, metrics: &DerivedMetrics) -> PredictionReport {
        let engine_score = metrics.health_score();
        if report.health_score_current != engine_score {
            debug!(
                narrated = report.health_score_current,
                engine = engine_score,
                "Replacing narrated current score with the engine value"
            );
            report.health_score_current = engine_score;
        }
        report.health_score_future = report.health_score_future.max(engine_score);

        if report.additional_metrics.is_none() {
            report.additional_metrics = Some(metrics.additional_metrics());
        }
        if report.debug_calculations.is_none() {
            report.debug_calculations = Some(metrics.debug_calculations());
        }
        report
    }
}
