// ABOUTME: Unit conversion factors for clinical laboratory values
// ABOUTME: Converts mmol/L cholesterol and glucose readings to mg/dL before banding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Cholesterol (total, LDL): mmol/L to mg/dL
pub const CHOLESTEROL_MMOL_TO_MGDL: f64 = 38.67;

/// Glucose: mmol/L to mg/dL
pub const GLUCOSE_MMOL_TO_MGDL: f64 = 18.0;

/// Centimeters per meter
pub const CM_PER_METER: f64 = 100.0;
