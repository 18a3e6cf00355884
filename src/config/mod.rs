// ABOUTME: Configuration module organization for vitalcast
// ABOUTME: Groups environment parsing and the shared configuration enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration
//!
//! Everything is read from environment variables; there are no config files.

/// LLM settings read from the environment
pub mod environment;
/// Shared configuration enums
pub mod types;

pub use environment::LlmSettings;
pub use types::{Environment, LlmProviderType, LogLevel};
