// ABOUTME: Decimal rounding and score clamping helpers shared by the scorers
// ABOUTME: Half-away-from-zero rounding to a fixed number of decimal places
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use vitalcast_core::constants::essential8::MAX_COMPONENT_SCORE;

/// Round to `decimals` places; non-finite values pass through unchanged
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Clamp to [0, 100] and round to a whole score
///
/// `NaN` maps to 0 (saturating float-to-int cast).
pub(crate) fn to_score(value: f64) -> u8 {
    value.clamp(0.0, MAX_COMPONENT_SCORE).round() as u8
}
