// ABOUTME: System prompts for LLM interactions loaded at compile time
// ABOUTME: Provides the health forecast narrator prompt used by the prediction service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # System Prompts
//!
//! Prompts live in markdown files next to this module and are embedded at
//! compile time.

/// Health forecast narrator system prompt
///
/// Fixes the narrator's role, the rule against recomputing scores, the risk
/// card keys, and the JSON response schema.
pub const HEALTH_FORECAST_SYSTEM_PROMPT: &str = include_str!("health_forecast_system.md");

/// Get the system prompt for the health forecast narrator
#[must_use]
pub const fn health_forecast_system_prompt() -> &'static str {
    HEALTH_FORECAST_SYSTEM_PROMPT
}
