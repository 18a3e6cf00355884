// ABOUTME: Body composition primitives: body mass index and waist-to-hip ratio
// ABOUTME: Rounded to one and two decimals respectively; no guarding of zero denominators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body composition
//!
//! Degenerate input (zero height or hip) is the caller's responsibility and
//! yields `inf`/`NaN` rather than an error.

use vitalcast_core::constants::body_composition::{BMI_DECIMALS, WHR_DECIMALS};
use vitalcast_core::constants::units::CM_PER_METER;

use crate::precision::round_to;

/// Body mass index: `weight_kg / height_m^2`, one decimal
#[must_use]
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / CM_PER_METER;
    round_to(weight_kg / (height_m * height_m), BMI_DECIMALS)
}

/// Waist-to-hip ratio, two decimals
#[must_use]
pub fn compute_whr(waist_cm: f64, hip_cm: f64) -> f64 {
    round_to(waist_cm / hip_cm, WHR_DECIMALS)
}
