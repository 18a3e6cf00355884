// ABOUTME: FINDRISC-style additive diabetes risk score with a fixed probability table
// ABOUTME: Six independently thresholded factors; probability banding applied by the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Diabetes risk (FINDRISC-style)
//!
//! A simplified subset of the Finnish Diabetes Risk Score: age, BMI, waist,
//! activity, diet, and hypertension. The score is a plain sum of bounded terms
//! with a nominal ceiling of 26; nothing clamps it.
//!
//! # Reference
//!
//! Lindström, J. & Tuomilehto, J. (2003). The diabetes risk score.
//! *Diabetes Care*, 26(3), 725-731. <https://doi.org/10.2337/diacare.26.3.725>

use serde::{Deserialize, Serialize};
use vitalcast_core::constants::findrisc::{
    AGE_BAND_1_MAX, AGE_BAND_1_MIN, AGE_BAND_1_POINTS, AGE_BAND_2_MAX, AGE_BAND_2_POINTS,
    AGE_BAND_3_POINTS, BMI_OBESE, BMI_OBESE_POINTS, BMI_OVERWEIGHT, BMI_OVERWEIGHT_POINTS,
    HYPERTENSION_POINTS, LOW_ACTIVITY_POINTS, POOR_DIET_POINTS, PROBABILITY_ABOVE_BANDS,
    PROBABILITY_BANDS, WAIST_FEMALE_TIER_1, WAIST_FEMALE_TIER_2, WAIST_MALE_TIER_1,
    WAIST_MALE_TIER_2, WAIST_TIER_1_POINTS, WAIST_TIER_2_POINTS,
};
use vitalcast_core::models::{ActivityLevel, DietQuality, Gender, HealthCondition, UserProfile};

/// Per-factor points behind a FINDRISC score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiabetesScoreBreakdown {
    /// Age points (0, 2, 3, 4)
    pub age_points: u32,
    /// BMI points (0, 1, 3)
    pub bmi_points: u32,
    /// Waist circumference points (0, 3, 4)
    pub waist_points: u32,
    /// Physical activity points (0, 2)
    pub activity_points: u32,
    /// Diet points (0, 1)
    pub diet_points: u32,
    /// Hypertension points (0, 2)
    pub hypertension_points: u32,
}

impl DiabetesScoreBreakdown {
    /// Sum of all factor points
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.age_points
            + self.bmi_points
            + self.waist_points
            + self.activity_points
            + self.diet_points
            + self.hypertension_points
    }
}

/// FINDRISC risk category, aligned with the probability table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiabetesRiskBand {
    /// 0-6 points, about 1 in 100
    Low,
    /// 7-11 points, about 1 in 25
    SlightlyElevated,
    /// 12-14 points, about 1 in 6
    Moderate,
    /// 15-20 points, about 1 in 3
    High,
    /// Over 20 points, about 1 in 2
    VeryHigh,
}

/// Diabetes risk result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiabetesRisk {
    /// Additive score
    pub score: u32,
    /// Estimated ten-year probability (percent)
    pub probability_percent: u8,
    /// Category
    pub band: DiabetesRiskBand,
    /// Points per factor
    pub breakdown: DiabetesScoreBreakdown,
}

/// Age points: under 45, 45-54, 55-64, over 64
#[must_use]
pub const fn age_points(age: u32) -> u32 {
    if age < AGE_BAND_1_MIN {
        0
    } else if age <= AGE_BAND_1_MAX {
        AGE_BAND_1_POINTS
    } else if age <= AGE_BAND_2_MAX {
        AGE_BAND_2_POINTS
    } else {
        AGE_BAND_3_POINTS
    }
}

/// BMI points: under 25, 25-30 inclusive, over 30
#[must_use]
pub fn bmi_points(bmi: f64) -> u32 {
    if bmi < BMI_OVERWEIGHT {
        0
    } else if bmi <= BMI_OBESE {
        BMI_OVERWEIGHT_POINTS
    } else {
        BMI_OBESE_POINTS
    }
}

/// Sex-specific two-tier waist points
///
/// `Gender::Other` uses the female thresholds.
#[must_use]
pub fn waist_points(waist_cm: f64, gender: Gender) -> u32 {
    let (tier_1, tier_2) = match gender {
        Gender::Male => (WAIST_MALE_TIER_1, WAIST_MALE_TIER_2),
        Gender::Female | Gender::Other => (WAIST_FEMALE_TIER_1, WAIST_FEMALE_TIER_2),
    };

    if waist_cm > tier_2 {
        WAIST_TIER_2_POINTS
    } else if waist_cm >= tier_1 {
        WAIST_TIER_1_POINTS
    } else {
        0
    }
}

/// Score each factor of the profile
///
/// `bmi` is passed in so the caller's rounded value is the one thresholded.
#[must_use]
pub fn calculate_findrisc(profile: &UserProfile, bmi: f64) -> DiabetesScoreBreakdown {
    let activity_points = match profile.activity_level {
        ActivityLevel::Sedentary | ActivityLevel::Light => LOW_ACTIVITY_POINTS,
        ActivityLevel::Moderate | ActivityLevel::Active => 0,
    };

    let diet_points = if profile.diet_quality == DietQuality::Poor {
        POOR_DIET_POINTS
    } else {
        0
    };

    let hypertension_points = if profile
        .existing_conditions
        .contains(&HealthCondition::Hypertension)
    {
        HYPERTENSION_POINTS
    } else {
        0
    };

    DiabetesScoreBreakdown {
        age_points: age_points(profile.age),
        bmi_points: bmi_points(bmi),
        waist_points: waist_points(profile.waist_cm, profile.gender),
        activity_points,
        diet_points,
        hypertension_points,
    }
}

/// Ten-year probability for a score, from the fixed lookup table
///
/// Bands are checked lowest first and the first match wins.
#[must_use]
pub fn diabetes_probability_percent(score: u32) -> u8 {
    PROBABILITY_BANDS
        .iter()
        .find(|(max_score, _)| score <= *max_score)
        .map_or(PROBABILITY_ABOVE_BANDS, |(_, probability)| *probability)
}

/// Category for a score
#[must_use]
pub fn diabetes_risk_band(score: u32) -> DiabetesRiskBand {
    match diabetes_probability_percent(score) {
        1 => DiabetesRiskBand::Low,
        4 => DiabetesRiskBand::SlightlyElevated,
        17 => DiabetesRiskBand::Moderate,
        33 => DiabetesRiskBand::High,
        _ => DiabetesRiskBand::VeryHigh,
    }
}

/// Score, band, and probability in one result
#[must_use]
pub fn assess_diabetes_risk(profile: &UserProfile, bmi: f64) -> DiabetesRisk {
    let breakdown = calculate_findrisc(profile, bmi);
    let score = breakdown.total();

    DiabetesRisk {
        score,
        probability_percent: diabetes_probability_percent(score),
        band: diabetes_risk_band(score),
        breakdown,
    }
}
