// ABOUTME: Environment-driven settings for the narrative LLM call
// ABOUTME: Parses provider, model, sampling, timeout, and retry knobs with strict validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration for the prediction service

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::types::LlmProviderType;
use crate::errors::{AppError, AppResult};

/// Model override for the selected provider
pub const MODEL_ENV: &str = "VITALCAST_LLM_MODEL";
/// Sampling temperature
pub const TEMPERATURE_ENV: &str = "VITALCAST_LLM_TEMPERATURE";
/// Max output tokens
pub const MAX_TOKENS_ENV: &str = "VITALCAST_LLM_MAX_TOKENS";
/// Per-request timeout in seconds
pub const TIMEOUT_ENV: &str = "VITALCAST_LLM_TIMEOUT_SECS";
/// Retries after the first attempt
pub const MAX_RETRIES_ENV: &str = "VITALCAST_LLM_MAX_RETRIES";

const DEFAULT_TEMPERATURE: f32 = 0.4;
const DEFAULT_MAX_TOKENS: u32 = 4096;
const DEFAULT_TIMEOUT_SECS: u64 = 45;
const DEFAULT_MAX_RETRIES: u32 = 1;
const MAX_TEMPERATURE: f32 = 2.0;

/// Settings governing the narrative call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmSettings {
    /// Which provider to call
    pub provider: LlmProviderType,
    /// Model override; `None` uses the provider default
    pub model: Option<String>,
    /// Sampling temperature in [0, 2]
    pub temperature: f32,
    /// Max output tokens
    pub max_tokens: u32,
    /// Per-attempt timeout
    pub timeout: Duration,
    /// Retries after the first attempt
    pub max_retries: u32,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: LlmProviderType::default(),
            model: None,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl LlmSettings {
    /// Settings with the narrative switched off
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            provider: LlmProviderType::None,
            ..Self::default()
        }
    }

    /// Load from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a variable is set but cannot be parsed
    /// or falls outside its accepted range.
    pub fn from_env() -> AppResult<Self> {
        let provider = match non_empty_var(LlmProviderType::ENV_VAR) {
            Some(raw) => raw.parse()?,
            None => LlmProviderType::default(),
        };

        let temperature = parse_env(TEMPERATURE_ENV, DEFAULT_TEMPERATURE)?;
        if !(0.0..=MAX_TEMPERATURE).contains(&temperature) {
            return Err(AppError::config_invalid(
                TEMPERATURE_ENV,
                format!("temperature must be within 0-{MAX_TEMPERATURE}, got {temperature}"),
            ));
        }

        let max_tokens: u32 = parse_env(MAX_TOKENS_ENV, DEFAULT_MAX_TOKENS)?;
        if max_tokens == 0 {
            return Err(AppError::config_invalid(
                MAX_TOKENS_ENV,
                "max tokens must be positive",
            ));
        }

        let timeout_secs: u64 = parse_env(TIMEOUT_ENV, DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(AppError::config_invalid(
                TIMEOUT_ENV,
                "timeout must be at least one second",
            ));
        }

        Ok(Self {
            provider,
            model: non_empty_var(MODEL_ENV),
            temperature,
            max_tokens,
            timeout: Duration::from_secs(timeout_secs),
            max_retries: parse_env(MAX_RETRIES_ENV, DEFAULT_MAX_RETRIES)?,
        })
    }

    /// Whether a network provider is selected
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.provider.is_enabled()
    }

    /// Total attempts including the first
    #[must_use]
    pub const fn total_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

/// Read a variable, treating blank values as unset
fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Parse a variable or fall back to `default` when it is unset
fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    non_empty_var(key).map_or(Ok(default), |raw| {
        raw.parse().map_err(|e| {
            AppError::config_invalid(key, format!("cannot parse '{raw}': {e}"))
        })
    })
}
