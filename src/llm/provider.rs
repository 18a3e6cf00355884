// ABOUTME: Unified LLM provider selector driven by LlmSettings
// ABOUTME: Wraps Gemini or Groq behind one enum so callers can hold a single provider value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # LLM Provider Selector
//!
//! Set `VITALCAST_LLM_PROVIDER`:
//! - `gemini` (default): requires `GEMINI_API_KEY`
//! - `groq`: requires `GROQ_API_KEY`
//! - `none`: no provider; predictions degrade immediately

use std::fmt;

use async_trait::async_trait;
use tracing::{debug, info};

use super::{
    ChatRequest, ChatResponse, GeminiProvider, GroqProvider, LlmCapabilities, LlmProvider,
};
use crate::config::{LlmProviderType, LlmSettings};
use crate::errors::AppError;

/// Chat provider chosen at runtime
pub enum ChatProvider {
    /// Google Gemini
    Gemini(GeminiProvider),
    /// Groq-hosted open models
    Groq(GroqProvider),
}

impl ChatProvider {
    /// Build the configured provider, or `None` when the narrative is disabled
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` if the selected provider's API key is not set.
    pub fn from_settings(settings: &LlmSettings) -> Result<Option<Self>, AppError> {
        info!(
            "Initializing LLM provider: {} (set {} to change)",
            settings.provider,
            LlmProviderType::ENV_VAR
        );

        let provider = match settings.provider {
            LlmProviderType::None => return Ok(None),
            LlmProviderType::Gemini => Self::gemini()?,
            LlmProviderType::Groq => Self::groq()?,
        };

        let provider = match &settings.model {
            Some(model) => provider.with_default_model(model.clone()),
            None => provider,
        };

        debug!(
            "Provider {} initialized with model: {}",
            provider.display_name(),
            provider.default_model()
        );
        Ok(Some(provider))
    }

    /// Create a Gemini provider explicitly
    ///
    /// # Errors
    ///
    /// Returns an error if `GEMINI_API_KEY` is not set.
    pub fn gemini() -> Result<Self, AppError> {
        Ok(Self::Gemini(GeminiProvider::from_env()?))
    }

    /// Create a Groq provider explicitly
    ///
    /// # Errors
    ///
    /// Returns an error if `GROQ_API_KEY` is not set.
    pub fn groq() -> Result<Self, AppError> {
        Ok(Self::Groq(GroqProvider::from_env()?))
    }

    /// Override the default model of the wrapped provider
    #[must_use]
    pub fn with_default_model(self, model: String) -> Self {
        match self {
            Self::Gemini(p) => Self::Gemini(p.with_default_model(model)),
            Self::Groq(p) => Self::Groq(p.with_default_model(model)),
        }
    }

    /// Get the provider type
    #[must_use]
    pub const fn provider_type(&self) -> LlmProviderType {
        match self {
            Self::Gemini(_) => LlmProviderType::Gemini,
            Self::Groq(_) => LlmProviderType::Groq,
        }
    }
}

impl fmt::Debug for ChatProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gemini(p) => f.debug_tuple("ChatProvider::Gemini").field(p).finish(),
            Self::Groq(p) => f.debug_tuple("ChatProvider::Groq").field(p).finish(),
        }
    }
}

#[async_trait]
impl LlmProvider for ChatProvider {
    fn name(&self) -> &'static str {
        match self {
            Self::Gemini(p) => p.name(),
            Self::Groq(p) => p.name(),
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Self::Gemini(p) => p.display_name(),
            Self::Groq(p) => p.display_name(),
        }
    }

    fn capabilities(&self) -> LlmCapabilities {
        match self {
            Self::Gemini(p) => p.capabilities(),
            Self::Groq(p) => p.capabilities(),
        }
    }

    fn default_model(&self) -> &str {
        match self {
            Self::Gemini(p) => p.default_model(),
            Self::Groq(p) => p.default_model(),
        }
    }

    fn available_models(&self) -> &'static [&'static str] {
        match self {
            Self::Gemini(p) => p.available_models(),
            Self::Groq(p) => p.available_models(),
        }
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        match self {
            Self::Gemini(p) => p.complete(request).await,
            Self::Groq(p) => p.complete(request).await,
        }
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        match self {
            Self::Gemini(p) => p.health_check().await,
            Self::Groq(p) => p.health_check().await,
        }
    }
}
