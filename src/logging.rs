// ABOUTME: Logging configuration and structured logging setup for vitalcast
// ABOUTME: Configures level, format, and noise filters, and emits domain events with structured fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging
//!
//! Logs always go to stderr. Stdout belongs to the JSON the CLI prints.

use std::env;
use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::json;
use tracing::{info, warn, Level};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::{Environment, LogLevel};
use crate::constants::service_names;

/// Default service name in log records
pub const SERVICE_NAME: &str = service_names::VITALCAST;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive (a level or a full `RUST_LOG` expression)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Include span open/close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Deployment environment
    pub environment: Environment,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// `JSON` lines for log shippers
    Json,
    /// Human readable, multi-field
    #[default]
    Pretty,
    /// One short line per event
    Compact,
}

impl LogFormat {
    /// Parse from string with fallback to `Pretty`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default().to_string(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: SERVICE_NAME.to_owned(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: Environment::Development,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let environment = env::var("ENVIRONMENT")
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();

        // Production gets the detailed layout
        let is_production = environment.is_production();

        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| LogLevel::default().to_string()),
            format: env::var("LOG_FORMAT")
                .map(|value| LogFormat::from_str_or_default(&value))
                .unwrap_or_default(),
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| SERVICE_NAME.to_owned()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    /// Override the level, as the CLI does for `--verbose`
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level.to_string();
        self
    }

    /// Build the filter: the configured level plus fixed noise reduction
    fn env_filter(&self) -> EnvFilter {
        let mut filter = EnvFilter::new(&self.level);
        for directive in ["hyper=warn", "hyper_util=warn", "reqwest=warn", "rustls=warn"] {
            filter = filter.add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| Level::WARN.into()),
            );
        }

        // A plain level keeps our crates at that level; full expressions pass through untouched
        if let Some(level) = plain_level(&self.level) {
            for target in ["vitalcast", "vitalcast_intelligence", "vitalcast_core"] {
                filter = filter.add_directive(
                    format!("{target}={level}")
                        .parse()
                        .unwrap_or_else(|_| level.to_tracing_level().into()),
                );
            }
        }
        filter
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events)
                    .json();

                registry
                    .with(json_layer)
                    .try_init()
                    .context("failed to install JSON log subscriber")?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events);

                registry
                    .with(pretty_layer)
                    .try_init()
                    .context("failed to install log subscriber")?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_target(false)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE);

                registry
                    .with(compact_layer)
                    .try_init()
                    .context("failed to install compact log subscriber")?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "vitalcast starting up"
        );
    }
}

/// `Some(level)` when the directive is a bare level name
fn plain_level(directive: &str) -> Option<LogLevel> {
    let trimmed = directive.trim();
    ["error", "warn", "info", "debug", "trace"]
        .iter()
        .any(|name| trimmed.eq_ignore_ascii_case(name))
        .then(|| LogLevel::from_str_or_default(trimmed))
}

/// Domain event logging helpers
pub struct AppLogger;

impl AppLogger {
    /// Log one engine pass
    pub fn log_metrics_computed(health_score: u8, diabetes_score: u32, relative_risk: f64) {
        info!(
            metrics.health_score = health_score,
            metrics.diabetes_score = diabetes_score,
            metrics.cardiovascular_relative_risk = relative_risk,
            "Metrics computed"
        );
    }

    /// Log the outcome of one provider call
    pub fn log_llm_call(
        provider: &str,
        model: &str,
        attempt: u32,
        success: bool,
        duration: Duration,
    ) {
        info!(
            llm.provider = %provider,
            llm.model = %model,
            llm.attempt = attempt,
            llm.success = success,
            llm.duration_ms = duration.as_millis() as u64,
            "LLM call"
        );
    }

    /// Log a switch to the degraded report
    pub fn log_degraded_fallback(reason: &str, request_id: &str) {
        warn!(
            prediction.request_id = %request_id,
            prediction.reason = %reason,
            "Prediction degraded to fallback report"
        );
    }

    /// Log the effective narrative configuration, never the credentials
    pub fn log_config_loaded(provider: &str, model: Option<&str>, timeout: Duration, retries: u32) {
        let summary = json!({
            "provider": provider,
            "model": model.unwrap_or("default"),
            "timeoutSecs": timeout.as_secs(),
            "maxRetries": retries,
        });
        info!("LLM configuration loaded: {summary}");
    }
}
