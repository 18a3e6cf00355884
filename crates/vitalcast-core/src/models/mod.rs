// ABOUTME: Input data models for the metrics engine
// ABOUTME: User profile, recognized health conditions, and optional clinical readings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models
//!
//! The [`UserProfile`] is the single input record the engine consumes. It is
//! immutable per calculation: the engine borrows it and never mutates it.

mod conditions;
mod profile;
mod vitals;

pub use conditions::{ConditionSet, HealthCondition};
pub use profile::{ActivityLevel, DietQuality, FastFoodFrequency, Gender, UserProfile};
pub use vitals::{
    BloodPressureReading, ClinicalReading, GlucoseReading, GlucoseUnit, LipidPanel, LipidUnit,
    VitalStatus,
};
