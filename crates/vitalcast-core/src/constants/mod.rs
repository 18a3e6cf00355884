// ABOUTME: Named threshold tables for every deterministic sub-scorer in the metrics engine
// ABOUTME: Age bands, BMI cutoffs, guideline thresholds, penalty tables, and unit conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Scoring constants
//!
//! Every threshold the engine compares against lives here, grouped by the
//! sub-scorer that owns it, so tests can assert against the table directly.
//! These are simplified screening proxies, not validated clinical models.

/// Unit conversion factors
pub mod units;

/// Service identifiers used in structured logs
pub mod service_names {
    /// Default service name of the command-line application
    pub const VITALCAST: &str = "vitalcast";
}

/// Rounding precision for the body composition primitives
pub mod body_composition {
    /// Decimal places kept for BMI
    pub const BMI_DECIMALS: i32 = 1;
    /// Decimal places kept for waist-to-hip ratio
    pub const WHR_DECIMALS: i32 = 2;
}

/// Finnish Diabetes Risk Score (FINDRISC) point table
///
/// Reference: Lindström, J. & Tuomilehto, J. (2003). The diabetes risk score.
/// *Diabetes Care*, 26(3), 725-731. <https://doi.org/10.2337/diacare.26.3.725>
pub mod findrisc {
    /// Age below this scores 0 points
    pub const AGE_BAND_1_MIN: u32 = 45;
    /// Age from `AGE_BAND_1_MIN` up to and including this scores `AGE_BAND_1_POINTS`
    pub const AGE_BAND_1_MAX: u32 = 54;
    /// Upper bound (inclusive) of the 55-64 band
    pub const AGE_BAND_2_MAX: u32 = 64;
    /// Points for 45-54
    pub const AGE_BAND_1_POINTS: u32 = 2;
    /// Points for 55-64
    pub const AGE_BAND_2_POINTS: u32 = 3;
    /// Points for over 64
    pub const AGE_BAND_3_POINTS: u32 = 4;

    /// BMI below this scores 0
    pub const BMI_OVERWEIGHT: f64 = 25.0;
    /// BMI above this scores `BMI_OBESE_POINTS`; 25-30 inclusive scores `BMI_OVERWEIGHT_POINTS`
    pub const BMI_OBESE: f64 = 30.0;
    /// Points for BMI 25-30
    pub const BMI_OVERWEIGHT_POINTS: u32 = 1;
    /// Points for BMI over 30
    pub const BMI_OBESE_POINTS: u32 = 3;

    /// Male waist lower bound (cm) for the first tier
    pub const WAIST_MALE_TIER_1: f64 = 94.0;
    /// Male waist upper bound (cm, inclusive) for the first tier
    pub const WAIST_MALE_TIER_2: f64 = 102.0;
    /// Female waist lower bound (cm) for the first tier
    pub const WAIST_FEMALE_TIER_1: f64 = 80.0;
    /// Female waist upper bound (cm, inclusive) for the first tier
    pub const WAIST_FEMALE_TIER_2: f64 = 88.0;
    /// Points for the first waist tier
    pub const WAIST_TIER_1_POINTS: u32 = 3;
    /// Points above the second waist bound
    pub const WAIST_TIER_2_POINTS: u32 = 4;

    /// Points for sedentary or light activity
    pub const LOW_ACTIVITY_POINTS: u32 = 2;
    /// Points for poor diet quality
    pub const POOR_DIET_POINTS: u32 = 1;
    /// Points for self-reported hypertension
    pub const HYPERTENSION_POINTS: u32 = 2;

    /// Ten-year probability bands: `(highest score in band, probability percent)`,
    /// evaluated lowest to highest, first match wins
    pub const PROBABILITY_BANDS: [(u32, u8); 4] = [(6, 1), (11, 4), (14, 17), (20, 33)];
    /// Probability for scores above the last band
    pub const PROBABILITY_ABOVE_BANDS: u8 = 50;
}

/// Multiplicative cardiovascular risk proxy factors
///
/// Hazard-ratio style accumulator. Not a validated clinical score.
pub mod cardiovascular {
    /// Starting relative risk
    pub const BASE_RISK: f64 = 1.0;
    /// Age after which the additive age term applies
    pub const AGE_ONSET: u32 = 40;
    /// Additive increment per year past `AGE_ONSET`
    pub const AGE_INCREMENT_PER_YEAR: f64 = 0.2;
    /// Male sex multiplier
    pub const MALE_MULTIPLIER: f64 = 1.3;
    /// Current smoker multiplier
    pub const SMOKER_MULTIPLIER: f64 = 2.0;
    /// BMI above which the obesity multiplier applies
    pub const BMI_OBESE: f64 = 30.0;
    /// BMI above which the overweight multiplier applies
    pub const BMI_OVERWEIGHT: f64 = 25.0;
    /// Obesity multiplier
    pub const OBESE_MULTIPLIER: f64 = 1.5;
    /// Overweight multiplier
    pub const OVERWEIGHT_MULTIPLIER: f64 = 1.2;
    /// Hypertension multiplier
    pub const HYPERTENSION_MULTIPLIER: f64 = 1.5;
    /// Type 2 diabetes multiplier
    pub const DIABETES_MULTIPLIER: f64 = 2.0;
    /// High cholesterol multiplier
    pub const CHOLESTEROL_MULTIPLIER: f64 = 1.3;
    /// Sedentary activity level multiplier
    pub const SEDENTARY_MULTIPLIER: f64 = 1.2;
    /// Ceiling applied before rounding
    pub const MAX_RISK: f64 = 99.0;
    /// Decimal places kept
    pub const DECIMALS: i32 = 1;
}

/// Legacy single-number bio-vitality score
pub mod vitality {
    /// Starting score
    pub const BASE_SCORE: f64 = 100.0;
    /// Age at which the age deduction starts
    pub const AGE_BASELINE: f64 = 20.0;
    /// Deduction per year past `AGE_BASELINE`
    pub const AGE_DEDUCTION_PER_YEAR: f64 = 0.3;
    /// BMI above which `OBESE_DEDUCTION` applies
    pub const BMI_OBESE: f64 = 30.0;
    /// BMI above which `OVERWEIGHT_DEDUCTION` applies
    pub const BMI_OVERWEIGHT: f64 = 25.0;
    /// Deduction for BMI over 30
    pub const OBESE_DEDUCTION: f64 = 15.0;
    /// Deduction for BMI over 25
    pub const OVERWEIGHT_DEDUCTION: f64 = 5.0;
    /// Deduction for current smokers
    pub const SMOKER_DEDUCTION: f64 = 20.0;
    /// Deduction for a sedentary activity level
    pub const SEDENTARY_DEDUCTION: f64 = 10.0;
    /// Bonus for an active activity level
    pub const ACTIVE_BONUS: f64 = 5.0;
    /// Deduction per listed condition
    pub const CONDITION_DEDUCTION: f64 = 10.0;
    /// Sleep below this many hours is penalized
    pub const SHORT_SLEEP_HOURS: f64 = 6.0;
    /// Deduction for short sleep
    pub const SHORT_SLEEP_DEDUCTION: f64 = 5.0;
    /// Floor of the clamped score
    pub const MIN_SCORE: f64 = 10.0;
    /// Ceiling of the clamped score
    pub const MAX_SCORE: f64 = 100.0;
}

/// Daily step count categories and the MVPA proxy
///
/// Reference: Tudor-Locke, C. & Bassett, D.R. (2004). How many steps/day are enough?
/// *Sports Medicine*, 34(1), 1-8. <https://doi.org/10.2165/00007256-200434010-00001>
pub mod steps {
    /// Below this: sedentary lifestyle index
    pub const SEDENTARY_BELOW: u32 = 5_000;
    /// Below this: low active
    pub const LOW_ACTIVE_BELOW: u32 = 7_500;
    /// Below this: somewhat active
    pub const SOMEWHAT_ACTIVE_BELOW: u32 = 10_000;
    /// Below this: active; at or above: highly active
    pub const ACTIVE_BELOW: u32 = 12_500;

    /// Steps per "block" in the MVPA proxy (`steps / 100 * 7`)
    pub const MVPA_STEPS_DIVISOR: f64 = 100.0;
    /// Minutes per block, representing a week of daily steps
    pub const MVPA_MINUTES_PER_BLOCK: f64 = 7.0;

    /// Steps per day that satisfy the guideline on their own
    pub const GUIDELINE_STEPS: u32 = 8_000;
    /// Weekly MVPA minutes that satisfy the guideline
    pub const GUIDELINE_MVPA_MINUTES: u32 = 150;
    /// Steps per day that earn the additional-benefits tier
    pub const ADDITIONAL_BENEFIT_STEPS: u32 = 11_000;
    /// Weekly MVPA minutes that earn the additional-benefits tier
    pub const ADDITIONAL_BENEFIT_MVPA_MINUTES: u32 = 300;
}

/// Sitting time risk buckets (hours per day)
pub mod sedentary {
    /// Below this: low
    pub const LOW_BELOW: f64 = 6.0;
    /// Below this: moderate
    pub const MODERATE_BELOW: f64 = 8.0;
    /// Below this: high; at or above: very high
    pub const HIGH_BELOW: f64 = 10.0;
}

/// Alcohol thresholds (standard drinks)
///
/// Reference: NIAAA definitions of heavy and binge drinking.
pub mod alcohol {
    /// Weekly drinks at or above which men are heavy drinkers
    pub const HEAVY_WEEKLY_MALE: f64 = 15.0;
    /// Weekly drinks at or above which women are heavy drinkers
    pub const HEAVY_WEEKLY_FEMALE: f64 = 8.0;
    /// Drinks per occasion at or above which men are binge drinking
    pub const BINGE_OCCASION_MALE: f64 = 5.0;
    /// Drinks per occasion at or above which women are binge drinking
    pub const BINGE_OCCASION_FEMALE: f64 = 4.0;
}

/// Tobacco exposure and lung cancer screening eligibility
///
/// Reference: USPSTF (2021) lung cancer screening recommendation.
pub mod smoking {
    /// Cigarettes in one pack
    pub const CIGARETTES_PER_PACK: f64 = 20.0;
    /// Pack-years at or above which current smokers are high risk
    pub const HIGH_RISK_PACK_YEARS: f64 = 20.0;
    /// Youngest screening-eligible age
    pub const SCREENING_MIN_AGE: u32 = 50;
    /// Oldest screening-eligible age
    pub const SCREENING_MAX_AGE: u32 = 80;
    /// Minimum pack-years for screening
    pub const SCREENING_MIN_PACK_YEARS: f64 = 20.0;
    /// Former smokers who quit within this many years remain eligible
    pub const SCREENING_MAX_YEARS_SINCE_QUIT: f64 = 15.0;
    /// Decimal places kept for pack-years
    pub const PACK_YEARS_DECIMALS: i32 = 1;
}

/// Diet quality score
pub mod diet {
    /// Ordinal for poor diet quality
    pub const QUALITY_POOR: u8 = 1;
    /// Ordinal for average diet quality
    pub const QUALITY_AVERAGE: u8 = 3;
    /// Ordinal for good diet quality
    pub const QUALITY_GOOD: u8 = 5;

    /// Ordinal for never eating fast food
    pub const FAST_FOOD_NEVER: u8 = 1;
    /// Ordinal for rarely eating fast food
    pub const FAST_FOOD_RARELY: u8 = 2;
    /// Ordinal for weekly fast food
    pub const FAST_FOOD_WEEKLY: u8 = 3;
    /// Ordinal for frequent fast food
    pub const FAST_FOOD_FREQUENT: u8 = 5;

    /// Points per quality ordinal step
    pub const POINTS_PER_QUALITY: f64 = 20.0;
    /// Penalty indexed by fast food ordinal (0-5)
    pub const FAST_FOOD_PENALTY: [f64; 6] = [0.0, 0.0, 5.0, 15.0, 25.0, 35.0];

    /// At or above: low risk
    pub const LOW_RISK_MIN: f64 = 80.0;
    /// At or above: moderate risk
    pub const MODERATE_RISK_MIN: f64 = 60.0;
    /// At or above: high risk; below: very high
    pub const HIGH_RISK_MIN: f64 = 40.0;
}

/// AHA Life's Essential 8 component bands
///
/// Reference: Lloyd-Jones, D.M., et al. (2022). Life's Essential 8.
/// *Circulation*, 146(5), e18-e43. <https://doi.org/10.1161/CIR.0000000000001078>
pub mod essential8 {
    /// Number of components averaged into the total
    pub const COMPONENT_COUNT: usize = 8;
    /// Component score ceiling
    pub const MAX_COMPONENT_SCORE: f64 = 100.0;

    /// Physical activity tiers: `(minimum weekly MVPA minutes, score)`, highest first
    pub const ACTIVITY_TIERS: [(u32, f64); 5] =
        [(150, 100.0), (90, 80.0), (60, 60.0), (30, 40.0), (1, 20.0)];

    /// Former smokers who quit at least this many years ago score 100
    pub const NICOTINE_QUIT_LONG_YEARS: f64 = 5.0;
    /// Former smokers who quit at least this many years ago score 75
    pub const NICOTINE_QUIT_SHORT_YEARS: f64 = 1.0;
    /// Score for quitting at least 5 years ago, or never smoking
    pub const NICOTINE_NEVER_SCORE: f64 = 100.0;
    /// Score for quitting 1-5 years ago
    pub const NICOTINE_QUIT_SHORT_SCORE: f64 = 75.0;
    /// Score for quitting under a year ago, or history without a quit date
    pub const NICOTINE_RECENT_SCORE: f64 = 50.0;
    /// Score for current smokers
    pub const NICOTINE_CURRENT_SCORE: f64 = 0.0;

    /// Optimal sleep band, inclusive on both ends
    pub const SLEEP_OPTIMAL: (f64, f64) = (7.0, 9.0);
    /// Near-optimal sleep: `[low, 7)` or `(9, high)`
    pub const SLEEP_NEAR_OPTIMAL: (f64, f64) = (6.0, 10.0);
    /// Fair sleep: `[low, 6)` or `[10, high)`
    pub const SLEEP_FAIR: (f64, f64) = (5.0, 11.0);
    /// Scores for optimal, near-optimal, fair, and poor sleep
    pub const SLEEP_SCORES: [f64; 4] = [100.0, 70.0, 40.0, 0.0];

    /// BMI tiers: `(exclusive upper bound, score)`, lowest first
    pub const BMI_TIERS: [(f64, f64); 4] = [(25.0, 100.0), (30.0, 70.0), (35.0, 40.0), (40.0, 20.0)];

    /// Blood pressure stage 2 systolic / diastolic thresholds
    pub const BP_STAGE_2: (f64, f64) = (140.0, 90.0);
    /// Blood pressure stage 1 systolic / diastolic thresholds
    pub const BP_STAGE_1: (f64, f64) = (130.0, 80.0);
    /// Elevated systolic threshold (diastolic must stay below stage 1)
    pub const BP_ELEVATED_SYSTOLIC: f64 = 120.0;
    /// Scores for stage 2, stage 1, elevated, and normal
    pub const BP_SCORES: [f64; 4] = [20.0, 50.0, 80.0, 100.0];

    /// LDL tiers in mg/dL: `(inclusive lower bound, score)`, highest first; below all scores 100
    pub const LDL_TIERS: [(f64, f64); 4] = [(190.0, 10.0), (160.0, 30.0), (130.0, 50.0), (100.0, 80.0)];
    /// Total cholesterol tiers in mg/dL, highest first; below all scores 100
    pub const TOTAL_CHOLESTEROL_TIERS: [(f64, f64); 2] = [(240.0, 20.0), (200.0, 60.0)];

    /// A1c tiers in percent, highest first; below all scores 100
    pub const A1C_TIERS: [(f64, f64); 2] = [(6.5, 20.0), (5.7, 60.0)];
    /// Fasting glucose tiers in mg/dL, highest first; below all scores 100
    pub const FASTING_GLUCOSE_TIERS: [(f64, f64); 2] = [(126.0, 20.0), (100.0, 60.0)];

    /// Score for an in-range clinical value
    pub const OPTIMAL_SCORE: f64 = 100.0;
    /// Ceiling for users on treatment medication
    pub const MEDICATION_CAP: f64 = 80.0;
    /// Readings older than this many months lose `STALE_PENALTY`
    pub const STALE_AFTER_MONTHS: f64 = 12.0;
    /// Deduction for a stale reading
    pub const STALE_PENALTY: f64 = 10.0;

    /// Self-reported hypertension score
    pub const SELF_REPORT_BP_SCORE: f64 = 30.0;
    /// Self-reported high cholesterol score
    pub const SELF_REPORT_LIPIDS_SCORE: f64 = 30.0;
    /// Self-reported type 2 diabetes score
    pub const SELF_REPORT_GLUCOSE_SCORE: f64 = 10.0;
    /// Score when nothing is measured and nothing is reported
    pub const UNKNOWN_DEFAULT_SCORE: f64 = 80.0;

    /// Measured components needed for high confidence
    pub const HIGH_CONFIDENCE_MEASURED: usize = 2;
    /// Measured plus self-reported components needed for medium confidence
    pub const MEDIUM_CONFIDENCE_KNOWN: usize = 6;
}
