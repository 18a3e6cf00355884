// ABOUTME: Multiplicative cardiovascular relative-risk proxy (not a validated clinical score)
// ABOUTME: Additive age term first, then sequential multipliers, clamped to 99 and rounded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Cardiovascular risk proxy
//!
//! A hazard-ratio style accumulator. The additive age term goes into the base
//! before any multiplier; the multipliers then compound in a fixed order. Each
//! applied term is recorded so the calculation can be shown back to the user.

use serde::{Deserialize, Serialize};
use vitalcast_core::constants::cardiovascular::{
    AGE_INCREMENT_PER_YEAR, AGE_ONSET, BASE_RISK, BMI_OBESE, BMI_OVERWEIGHT,
    CHOLESTEROL_MULTIPLIER, DECIMALS, DIABETES_MULTIPLIER, HYPERTENSION_MULTIPLIER, MALE_MULTIPLIER,
    MAX_RISK, OBESE_MULTIPLIER, OVERWEIGHT_MULTIPLIER, SEDENTARY_MULTIPLIER, SMOKER_MULTIPLIER,
};
use vitalcast_core::models::{ActivityLevel, Gender, HealthCondition, UserProfile};

use crate::levels::DataBasis;
use crate::precision::round_to;

/// Disclaimer carried with every result
pub const CARDIOVASCULAR_DISCLAIMER: &str =
    "Relative risk proxy for education only; not a validated clinical cardiovascular risk score";

/// How a factor entered the accumulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    /// Added to the base
    Additive,
    /// Multiplied into the running value
    Multiplier,
}

/// One applied factor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactor {
    /// Factor name
    pub name: String,
    /// Additive or multiplicative
    pub kind: FactorKind,
    /// Increment or multiplier
    pub value: f64,
}

/// Cardiovascular proxy result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardiovascularRisk {
    /// Relative risk, clamped to [0, 99], one decimal
    pub relative_risk: f64,
    /// Factors in application order
    pub factors: Vec<RiskFactor>,
    /// Always `proxy`
    pub basis: DataBasis,
    /// Not-validated label
    pub disclaimer: String,
}

struct Accumulator {
    value: f64,
    factors: Vec<RiskFactor>,
}

impl Accumulator {
    const fn new() -> Self {
        Self {
            value: BASE_RISK,
            factors: Vec::new(),
        }
    }

    fn add(&mut self, name: &str, increment: f64) {
        self.value += increment;
        self.factors.push(RiskFactor {
            name: name.to_owned(),
            kind: FactorKind::Additive,
            value: increment,
        });
    }

    fn multiply(&mut self, name: &str, multiplier: f64) {
        self.value *= multiplier;
        self.factors.push(RiskFactor {
            name: name.to_owned(),
            kind: FactorKind::Multiplier,
            value: multiplier,
        });
    }

    fn multiply_if(&mut self, applies: bool, name: &str, multiplier: f64) {
        if applies {
            self.multiply(name, multiplier);
        }
    }
}

/// Compute the proxy from the profile and its rounded BMI
#[must_use]
pub fn assess_cardiovascular_risk(profile: &UserProfile, bmi: f64) -> CardiovascularRisk {
    let mut acc = Accumulator::new();
    let conditions = &profile.existing_conditions;

    if profile.age > AGE_ONSET {
        acc.add(
            "age",
            f64::from(profile.age - AGE_ONSET) * AGE_INCREMENT_PER_YEAR,
        );
    }

    acc.multiply_if(profile.gender == Gender::Male, "male", MALE_MULTIPLIER);
    acc.multiply_if(profile.smoker, "smoker", SMOKER_MULTIPLIER);

    if bmi > BMI_OBESE {
        acc.multiply("bmi_over_30", OBESE_MULTIPLIER);
    } else if bmi > BMI_OVERWEIGHT {
        acc.multiply("bmi_over_25", OVERWEIGHT_MULTIPLIER);
    }

    acc.multiply_if(
        conditions.contains(&HealthCondition::Hypertension),
        "hypertension",
        HYPERTENSION_MULTIPLIER,
    );
    acc.multiply_if(
        conditions.contains(&HealthCondition::Type2Diabetes),
        "type_2_diabetes",
        DIABETES_MULTIPLIER,
    );
    acc.multiply_if(
        conditions.contains(&HealthCondition::HighCholesterol),
        "high_cholesterol",
        CHOLESTEROL_MULTIPLIER,
    );
    acc.multiply_if(
        profile.activity_level == ActivityLevel::Sedentary,
        "sedentary",
        SEDENTARY_MULTIPLIER,
    );

    CardiovascularRisk {
        relative_risk: round_to(acc.value.clamp(0.0, MAX_RISK), DECIMALS),
        factors: acc.factors,
        basis: DataBasis::Proxy,
        disclaimer: CARDIOVASCULAR_DISCLAIMER.to_owned(),
    }
}
