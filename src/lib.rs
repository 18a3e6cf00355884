// ABOUTME: Main library entry point for the vitalcast health projection toolkit
// ABOUTME: Wires configuration, logging, LLM providers, and the fail-soft prediction service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Vitalcast
//!
//! Deterministic lifestyle risk metrics with an AI narrative layer.
//!
//! ## Architecture
//!
//! - **`vitalcast-core`**: errors, threshold tables, and the `UserProfile` model
//! - **`vitalcast-intelligence`**: the pure metrics engine and what-if scenarios
//! - **this crate**: environment configuration, logging, LLM providers, and the
//!   prediction service that never fails on network or parse errors
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use vitalcast::config::LlmSettings;
//! use vitalcast::errors::AppResult;
//! use vitalcast::input::load_profile;
//! use vitalcast::prediction::PredictionService;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let profile = load_profile("profile.json").await?;
//!     let service = PredictionService::from_settings(LlmSettings::from_env()?)?;
//!     let outcome = service.predict(&profile).await;
//!     println!("score {} degraded {}", outcome.metrics.health_score(), outcome.degraded);
//!     Ok(())
//! }
//! ```

/// Unified error handling, re-exported from `vitalcast-core`
pub use vitalcast_core::errors;

/// Threshold tables, re-exported from `vitalcast-core`
pub use vitalcast_core::constants;

/// Input models, re-exported from `vitalcast-core`
pub use vitalcast_core::models;

/// The metrics engine, re-exported from `vitalcast-intelligence`
pub use vitalcast_intelligence as intelligence;

/// Environment-based configuration
pub mod config;

/// Profile loading and boundary validation
pub mod input;

/// LLM provider abstraction and implementations
pub mod llm;

/// Structured logging setup and domain event helpers
pub mod logging;

/// Narrative report schema, prompt, parser, and service
pub mod prediction;
