// ABOUTME: Legacy single-number bio-vitality score, kept for older response shapes
// ABOUTME: Deductions from 100 for age, weight, smoking, inactivity, conditions, and short sleep
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use vitalcast_core::constants::vitality::{
    ACTIVE_BONUS, AGE_BASELINE, AGE_DEDUCTION_PER_YEAR, BASE_SCORE, BMI_OBESE, BMI_OVERWEIGHT,
    CONDITION_DEDUCTION, MAX_SCORE, MIN_SCORE, OBESE_DEDUCTION, OVERWEIGHT_DEDUCTION,
    SEDENTARY_DEDUCTION, SHORT_SLEEP_DEDUCTION, SHORT_SLEEP_HOURS, SMOKER_DEDUCTION,
};
use vitalcast_core::models::{ActivityLevel, UserProfile};

use crate::precision::to_score;

/// Legacy bio-vitality result
///
/// Superseded by Life's Essential 8 as the headline score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyVitality {
    /// Score in [10, 100]
    pub score: u8,
}

/// Compute the legacy score from the profile and its rounded BMI
#[must_use]
pub fn legacy_vitality_score(profile: &UserProfile, bmi: f64) -> LegacyVitality {
    let mut score = BASE_SCORE;

    // Under-20s gain from the age term
    score -= (f64::from(profile.age) - AGE_BASELINE) * AGE_DEDUCTION_PER_YEAR;

    if bmi > BMI_OBESE {
        score -= OBESE_DEDUCTION;
    } else if bmi > BMI_OVERWEIGHT {
        score -= OVERWEIGHT_DEDUCTION;
    }

    if profile.smoker {
        score -= SMOKER_DEDUCTION;
    }

    match profile.activity_level {
        ActivityLevel::Sedentary => score -= SEDENTARY_DEDUCTION,
        ActivityLevel::Active => score += ACTIVE_BONUS,
        ActivityLevel::Light | ActivityLevel::Moderate => {}
    }

    // Every listed label counts, recognized or not
    let condition_count = profile.existing_conditions.len() as f64;
    score -= CONDITION_DEDUCTION * condition_count;

    if profile.sleep_hours < SHORT_SLEEP_HOURS {
        score -= SHORT_SLEEP_DEDUCTION;
    }

    LegacyVitality {
        score: to_score(score.clamp(MIN_SCORE, MAX_SCORE)),
    }
}
