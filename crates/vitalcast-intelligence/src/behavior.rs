// ABOUTME: Independent behavioral classifiers: steps, activity guideline, sitting, alcohol, smoking, diet
// ABOUTME: Each maps a slice of the profile to a categorical level plus its supporting numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Behavioral sub-classifiers
//!
//! Six small scorers with no dependencies on each other. Thresholds come from
//! `vitalcast_core::constants`; every comparison here reads a named constant.

use serde::{Deserialize, Serialize};
use vitalcast_core::constants::{alcohol, diet, sedentary, smoking, steps};
use vitalcast_core::models::{DietQuality, FastFoodFrequency, Gender, UserProfile};

use crate::levels::RiskLevel;
use crate::precision::{round_to, to_score};

// ============================================================================
// Steps
// ============================================================================

/// Daily step count category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepsCategory {
    /// Under 5,000
    Sedentary,
    /// 5,000-7,499
    LowActive,
    /// 7,500-9,999
    SomewhatActive,
    /// 10,000-12,499
    Active,
    /// 12,500 and up
    HighlyActive,
}

/// Steps classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepsAssessment {
    /// Average daily steps
    pub daily_steps: u32,
    /// Category
    pub category: StepsCategory,
}

/// Bucket daily steps
#[must_use]
pub const fn classify_steps(daily_steps: u32) -> StepsAssessment {
    let category = if daily_steps < steps::SEDENTARY_BELOW {
        StepsCategory::Sedentary
    } else if daily_steps < steps::LOW_ACTIVE_BELOW {
        StepsCategory::LowActive
    } else if daily_steps < steps::SOMEWHAT_ACTIVE_BELOW {
        StepsCategory::SomewhatActive
    } else if daily_steps < steps::ACTIVE_BELOW {
        StepsCategory::Active
    } else {
        StepsCategory::HighlyActive
    };

    StepsAssessment {
        daily_steps,
        category,
    }
}

// ============================================================================
// Activity guideline
// ============================================================================

/// Weekly activity guideline compliance, estimated from steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityGuideline {
    /// Estimated weekly MVPA minutes
    pub mvpa_minutes_proxy: u32,
    /// 150 minutes or 8,000 steps
    pub meets_guideline: bool,
    /// 300 minutes or 11,000 steps
    pub additional_benefits: bool,
}

/// Weekly MVPA minutes estimated as `round(steps / 100 * 7)`
#[must_use]
pub fn mvpa_minutes_proxy(daily_steps: u32) -> u32 {
    // Non-negative and bounded by u32::MAX * 0.07
    (f64::from(daily_steps) / steps::MVPA_STEPS_DIVISOR * steps::MVPA_MINUTES_PER_BLOCK).round()
        as u32
}

/// Evaluate guideline compliance
#[must_use]
pub fn assess_activity_guideline(daily_steps: u32) -> ActivityGuideline {
    let minutes = mvpa_minutes_proxy(daily_steps);

    ActivityGuideline {
        mvpa_minutes_proxy: minutes,
        meets_guideline: daily_steps >= steps::GUIDELINE_STEPS
            || minutes >= steps::GUIDELINE_MVPA_MINUTES,
        additional_benefits: minutes >= steps::ADDITIONAL_BENEFIT_MVPA_MINUTES
            || daily_steps >= steps::ADDITIONAL_BENEFIT_STEPS,
    }
}

// ============================================================================
// Sitting time
// ============================================================================

/// Sitting time classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SedentaryRisk {
    /// Hours sitting per day
    pub sitting_hours: f64,
    /// Risk bucket
    pub risk_level: RiskLevel,
}

/// Bucket sitting hours
#[must_use]
pub fn assess_sedentary_risk(sitting_hours: f64) -> SedentaryRisk {
    let risk_level = if sitting_hours < sedentary::LOW_BELOW {
        RiskLevel::Low
    } else if sitting_hours < sedentary::MODERATE_BELOW {
        RiskLevel::Moderate
    } else if sitting_hours < sedentary::HIGH_BELOW {
        RiskLevel::High
    } else {
        RiskLevel::VeryHigh
    };

    SedentaryRisk {
        sitting_hours,
        risk_level,
    }
}

// ============================================================================
// Alcohol
// ============================================================================

/// Alcohol risk vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlcoholRiskLevel {
    /// No drinking reported
    None,
    /// Some drinking, below the heavy threshold
    Elevated,
    /// Heavy weekly drinking or binge drinking
    High,
}

/// Alcohol classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlcoholRisk {
    /// Standard drinks per week
    pub drinks_per_week: f64,
    /// Sex-specific heavy drinking threshold
    pub heavy_threshold: f64,
    /// Sex-specific binge threshold
    pub binge_threshold: f64,
    /// Single-occasion maximum reached the binge threshold
    pub binge_flag: bool,
    /// Final level, escalated by `binge_flag`
    pub risk_level: AlcoholRiskLevel,
}

/// Classify weekly and single-occasion drinking
///
/// A binge always escalates to `High`, whatever the weekly total.
#[must_use]
pub fn assess_alcohol_risk(
    gender: Gender,
    drinks_per_week: f64,
    max_drinks_per_occasion: Option<f64>,
) -> AlcoholRisk {
    let (heavy_threshold, binge_threshold) = match gender {
        Gender::Male => (alcohol::HEAVY_WEEKLY_MALE, alcohol::BINGE_OCCASION_MALE),
        Gender::Female | Gender::Other => {
            (alcohol::HEAVY_WEEKLY_FEMALE, alcohol::BINGE_OCCASION_FEMALE)
        }
    };

    let base_level = if drinks_per_week >= heavy_threshold {
        AlcoholRiskLevel::High
    } else if drinks_per_week > 0.0 {
        AlcoholRiskLevel::Elevated
    } else {
        AlcoholRiskLevel::None
    };

    let binge_flag = max_drinks_per_occasion.is_some_and(|max| max >= binge_threshold);

    AlcoholRisk {
        drinks_per_week,
        heavy_threshold,
        binge_threshold,
        binge_flag,
        risk_level: if binge_flag {
            AlcoholRiskLevel::High
        } else {
            base_level
        },
    }
}

// ============================================================================
// Smoking
// ============================================================================

/// Tobacco exposure classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmokingRisk {
    /// Current pack-years (0 for non-smokers)
    pub pack_years: f64,
    /// `low` for non-smokers, otherwise `moderate` or `high`
    pub risk_level: RiskLevel,
    /// Meets the lung cancer screening criteria
    pub lung_screening_eligible: bool,
}

/// `cigarettes_per_day / 20 * years_smoked`, missing values read as zero
#[must_use]
pub fn pack_years(cigarettes_per_day: Option<f64>, years_smoked: Option<f64>) -> f64 {
    cigarettes_per_day.unwrap_or(0.0) / smoking::CIGARETTES_PER_PACK * years_smoked.unwrap_or(0.0)
}

const fn in_screening_age(age: u32) -> bool {
    age >= smoking::SCREENING_MIN_AGE && age <= smoking::SCREENING_MAX_AGE
}

/// Classify tobacco exposure and screening eligibility
#[must_use]
pub fn assess_smoking_risk(profile: &UserProfile) -> SmokingRisk {
    if profile.smoker {
        let pack_years = round_to(
            pack_years(profile.cigarettes_per_day, profile.years_smoked),
            smoking::PACK_YEARS_DECIMALS,
        );
        let heavy = pack_years >= smoking::HIGH_RISK_PACK_YEARS;

        return SmokingRisk {
            pack_years,
            risk_level: if heavy {
                RiskLevel::High
            } else {
                RiskLevel::Moderate
            },
            lung_screening_eligible: in_screening_age(profile.age)
                && pack_years >= smoking::SCREENING_MIN_PACK_YEARS,
        };
    }

    // Former smokers stay eligible for a while after quitting
    let recently_quit = profile
        .years_since_quit
        .is_some_and(|years| years <= smoking::SCREENING_MAX_YEARS_SINCE_QUIT);
    let historical = pack_years(profile.cigarettes_per_day, profile.years_smoked);

    SmokingRisk {
        pack_years: 0.0,
        risk_level: RiskLevel::Low,
        lung_screening_eligible: in_screening_age(profile.age)
            && recently_quit
            && historical >= smoking::SCREENING_MIN_PACK_YEARS,
    }
}

// ============================================================================
// Diet
// ============================================================================

/// Diet quality score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietScore {
    /// Score in [0, 100]
    pub score: u8,
    /// Risk band
    pub level: RiskLevel,
    /// Diet quality ordinal (1, 3, 5)
    pub quality_value: u8,
    /// Fast food ordinal (1, 2, 3, 5)
    pub fast_food_value: u8,
    /// Penalty subtracted for fast food
    pub penalty: f64,
}

const fn quality_value(quality: DietQuality) -> u8 {
    match quality {
        DietQuality::Poor => diet::QUALITY_POOR,
        DietQuality::Average => diet::QUALITY_AVERAGE,
        DietQuality::Good => diet::QUALITY_GOOD,
    }
}

const fn fast_food_value(frequency: FastFoodFrequency) -> u8 {
    match frequency {
        FastFoodFrequency::Never => diet::FAST_FOOD_NEVER,
        FastFoodFrequency::Rarely => diet::FAST_FOOD_RARELY,
        FastFoodFrequency::Weekly => diet::FAST_FOOD_WEEKLY,
        FastFoodFrequency::Frequent => diet::FAST_FOOD_FREQUENT,
    }
}

/// Score diet quality against fast food frequency
#[must_use]
pub fn calculate_diet_score(quality: DietQuality, frequency: FastFoodFrequency) -> DietScore {
    let quality_value = quality_value(quality);
    let fast_food_value = fast_food_value(frequency);

    let base = f64::from(quality_value) * diet::POINTS_PER_QUALITY;
    let penalty = diet::FAST_FOOD_PENALTY
        .get(usize::from(fast_food_value))
        .copied()
        .unwrap_or(0.0);
    let raw = (base - penalty).clamp(0.0, 100.0);

    let level = if raw >= diet::LOW_RISK_MIN {
        RiskLevel::Low
    } else if raw >= diet::MODERATE_RISK_MIN {
        RiskLevel::Moderate
    } else if raw >= diet::HIGH_RISK_MIN {
        RiskLevel::High
    } else {
        RiskLevel::VeryHigh
    };

    DietScore {
        score: to_score(raw),
        level,
        quality_value,
        fast_food_value,
        penalty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_bucket_edges() {
        assert_eq!(classify_steps(4_999).category, StepsCategory::Sedentary);
        assert_eq!(classify_steps(5_000).category, StepsCategory::LowActive);
        assert_eq!(classify_steps(7_500).category, StepsCategory::SomewhatActive);
        assert_eq!(classify_steps(10_000).category, StepsCategory::Active);
        assert_eq!(classify_steps(12_500).category, StepsCategory::HighlyActive);
    }

    #[test]
    fn test_mvpa_proxy_rounding() {
        assert_eq!(mvpa_minutes_proxy(0), 0);
        assert_eq!(mvpa_minutes_proxy(2_143), 150);
        assert_eq!(mvpa_minutes_proxy(4_286), 300);
    }

    #[test]
    fn test_guideline_by_steps_or_minutes() {
        let low = assess_activity_guideline(2_000);
        assert_eq!(low.mvpa_minutes_proxy, 140);
        assert!(!low.meets_guideline);

        let by_minutes = assess_activity_guideline(2_143);
        assert!(by_minutes.meets_guideline);
        assert!(!by_minutes.additional_benefits);

        let by_minutes = assess_activity_guideline(4_286);
        assert!(by_minutes.additional_benefits);
    }

    #[test]
    fn test_diet_score_table() {
        let best = calculate_diet_score(DietQuality::Good, FastFoodFrequency::Never);
        assert_eq!(best.score, 100);
        assert_eq!(best.level, RiskLevel::Low);

        let mid = calculate_diet_score(DietQuality::Average, FastFoodFrequency::Weekly);
        assert_eq!(mid.score, 45);
        assert!((mid.penalty - 15.0).abs() < f64::EPSILON);
        assert_eq!(mid.level, RiskLevel::High);

        let worst = calculate_diet_score(DietQuality::Poor, FastFoodFrequency::Frequent);
        assert_eq!(worst.score, 0);
        assert_eq!(worst.level, RiskLevel::VeryHigh);
    }

    #[test]
    fn test_alcohol_base_levels() {
        assert_eq!(
            assess_alcohol_risk(Gender::Male, 0.0, None).risk_level,
            AlcoholRiskLevel::None
        );
        assert_eq!(
            assess_alcohol_risk(Gender::Male, 14.0, Some(4.0)).risk_level,
            AlcoholRiskLevel::Elevated
        );
        assert_eq!(
            assess_alcohol_risk(Gender::Male, 15.0, None).risk_level,
            AlcoholRiskLevel::High
        );
        assert_eq!(
            assess_alcohol_risk(Gender::Other, 8.0, None).risk_level,
            AlcoholRiskLevel::High
        );
    }
}
