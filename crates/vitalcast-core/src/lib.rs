// ABOUTME: Core types and constants for the vitalcast health projection platform
// ABOUTME: Foundation crate with error handling, threshold tables, and profile models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Vitalcast Core
//!
//! Foundation crate providing shared types and constants for the vitalcast
//! lifestyle risk engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Named threshold tables, one module per sub-scorer
//! - **models**: The `UserProfile` input record, condition codes, and clinical readings

/// Unified error handling system with standard error codes
pub mod errors;

/// Scoring thresholds and unit conversion factors organized by sub-scorer
pub mod constants;

/// User profile, condition codes, and optional clinical measurements
pub mod models;
