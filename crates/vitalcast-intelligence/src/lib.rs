// ABOUTME: Deterministic lifestyle risk metrics engine for vitalcast
// ABOUTME: Body composition, diabetes, cardiovascular, behavioral, and Life's Essential 8 scorers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Vitalcast Intelligence
//!
//! Pure, stateless scoring functions that map one [`UserProfile`] to one
//! [`DerivedMetrics`] bundle. Nothing here performs I/O or keeps state, so any
//! number of evaluations can run concurrently without coordination.
//!
//! The scores are simplified screening proxies for education, not validated
//! clinical risk models.
//!
//! [`UserProfile`]: vitalcast_core::models::UserProfile

/// BMI and waist-to-hip ratio
pub mod body_composition;

/// Activity, sedentary, alcohol, smoking, and diet sub-classifiers
pub mod behavior;

/// Multiplicative cardiovascular risk proxy
pub mod cardiovascular;

/// FINDRISC-style diabetes score and probability banding
pub mod diabetes;

/// AHA Life's Essential 8 composite
pub mod essential8;

/// Shared level and provenance vocabularies
pub mod levels;

/// Engine entry point and the `DerivedMetrics` bundle
pub mod metrics;

/// What-if lifestyle scenarios re-scored through the engine
pub mod scenarios;

/// Legacy single-number bio-vitality score
pub mod vitality;

mod precision;

pub use metrics::{DerivedMetrics, MetricsEngine};
