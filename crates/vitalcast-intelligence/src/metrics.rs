// ABOUTME: MetricsEngine entry point mapping one UserProfile to one DerivedMetrics bundle
// ABOUTME: Single synchronous pass over every sub-scorer plus the payload views sent to the narrator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metrics engine
//!
//! [`MetricsEngine::compute`] is a total function: it never fails, keeps no
//! state between calls, and assumes the profile already passed
//! [`UserProfile::validate`]. Degenerate measurements flow through as
//! `inf`/`NaN` instead of raising an error.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use vitalcast_core::models::UserProfile;

use crate::behavior::{
    ActivityGuideline, AlcoholRisk, DietScore, SedentaryRisk, SmokingRisk, StepsAssessment,
    assess_activity_guideline, assess_alcohol_risk, assess_sedentary_risk, assess_smoking_risk,
    calculate_diet_score, classify_steps,
};
use crate::body_composition::{compute_bmi, compute_whr};
use crate::cardiovascular::{CardiovascularRisk, assess_cardiovascular_risk};
use crate::diabetes::{DiabetesRisk, assess_diabetes_risk};
use crate::essential8::{LifesEssential8, calculate_lifes_essential8};
use crate::vitality::{LegacyVitality, legacy_vitality_score};

/// Every deterministic score for one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    /// Body mass index, one decimal
    pub bmi: f64,
    /// Waist-to-hip ratio, two decimals
    pub waist_hip_ratio: f64,
    /// FINDRISC-style diabetes score
    pub diabetes: DiabetesRisk,
    /// Cardiovascular relative-risk proxy
    pub cardiovascular: CardiovascularRisk,
    /// Legacy bio-vitality score
    pub legacy_vitality: LegacyVitality,
    /// Steps category
    pub steps: StepsAssessment,
    /// Activity guideline compliance
    pub activity_guideline: ActivityGuideline,
    /// Sitting time risk
    pub sedentary: SedentaryRisk,
    /// Alcohol risk
    pub alcohol: AlcoholRisk,
    /// Tobacco exposure
    pub smoking: SmokingRisk,
    /// Diet score
    pub diet: DietScore,
    /// Life's Essential 8 composite, the headline score
    pub lifes_essential8: LifesEssential8,
}

impl DerivedMetrics {
    /// Headline 0-100 score
    #[must_use]
    pub const fn health_score(&self) -> u8 {
        self.lifes_essential8.total
    }

    /// Behavioral classifiers plus the composite, as echoed by the narrator
    #[must_use]
    pub fn additional_metrics(&self) -> Value {
        json!({
            "steps": self.steps,
            "activityGuideline": self.activity_guideline,
            "sedentary": self.sedentary,
            "alcohol": self.alcohol,
            "smoking": self.smoking,
            "diet": self.diet,
            "lifesEssential8": self.lifes_essential8,
        })
    }

    /// Intermediate numbers behind the risk scores
    #[must_use]
    pub fn debug_calculations(&self) -> Value {
        json!({
            "bmi": self.bmi,
            "waistHipRatio": self.waist_hip_ratio,
            "findrisc": {
                "score": self.diabetes.score,
                "probabilityPercent": self.diabetes.probability_percent,
                "breakdown": self.diabetes.breakdown,
            },
            "cardiovascular": {
                "relativeRisk": self.cardiovascular.relative_risk,
                "factors": self.cardiovascular.factors,
            },
            "legacyVitalityScore": self.legacy_vitality.score,
        })
    }
}

/// Stateless engine over [`UserProfile`]
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsEngine;

impl MetricsEngine {
    /// Compute every metric for `profile`
    #[must_use]
    pub fn compute(profile: &UserProfile) -> DerivedMetrics {
        let bmi = compute_bmi(profile.height_cm, profile.weight_kg);
        let diet = calculate_diet_score(profile.diet_quality, profile.fast_food_frequency);
        let lifes_essential8 = calculate_lifes_essential8(profile, bmi, &diet);

        DerivedMetrics {
            bmi,
            waist_hip_ratio: compute_whr(profile.waist_cm, profile.hip_cm),
            diabetes: assess_diabetes_risk(profile, bmi),
            cardiovascular: assess_cardiovascular_risk(profile, bmi),
            legacy_vitality: legacy_vitality_score(profile, bmi),
            steps: classify_steps(profile.daily_steps),
            activity_guideline: assess_activity_guideline(profile.daily_steps),
            sedentary: assess_sedentary_risk(profile.sitting_hours),
            alcohol: assess_alcohol_risk(
                profile.gender,
                profile.alcohol_drinks_per_week,
                profile.max_drinks_per_occasion,
            ),
            smoking: assess_smoking_risk(profile),
            diet,
            lifes_essential8,
        }
    }
}
