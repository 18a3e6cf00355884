// ABOUTME: AHA Life's Essential 8 composite: eight banded components averaged into one score
// ABOUTME: Clinical components follow measured > self-reported > unknown precedence with provenance tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Life's Essential 8
//!
//! Each of the eight components is scored on [0, 100] and tagged with the
//! basis it came from. The composite is the rounded unweighted mean, and the
//! confidence grade is derived from how many components rest on real data.
//!
//! Blood pressure, lipids and glucose resolve through [`VitalStatus`]:
//! a measurement is banded against clinical thresholds, then capped at 80 when
//! the user is on treatment and reduced by 10 when older than a year. With no
//! measurement a self-reported diagnosis gets a fixed conservative score, and
//! with neither the optimistic default applies.
//!
//! # Reference
//!
//! Lloyd-Jones, D.M., et al. (2022). Life's Essential 8: Updating and Enhancing
//! the American Heart Association's Construct of Cardiovascular Health.
//! *Circulation*, 146(5), e18-e43. <https://doi.org/10.1161/CIR.0000000000001078>

use serde::{Deserialize, Serialize};
use vitalcast_core::constants::essential8::{
    A1C_TIERS, ACTIVITY_TIERS, BMI_TIERS, BP_ELEVATED_SYSTOLIC, BP_SCORES, BP_STAGE_1, BP_STAGE_2,
    COMPONENT_COUNT, FASTING_GLUCOSE_TIERS, HIGH_CONFIDENCE_MEASURED, LDL_TIERS,
    MEDICATION_CAP, MEDIUM_CONFIDENCE_KNOWN, NICOTINE_CURRENT_SCORE, NICOTINE_NEVER_SCORE,
    NICOTINE_QUIT_LONG_YEARS, NICOTINE_QUIT_SHORT_SCORE, NICOTINE_QUIT_SHORT_YEARS,
    NICOTINE_RECENT_SCORE, OPTIMAL_SCORE, SELF_REPORT_BP_SCORE, SELF_REPORT_GLUCOSE_SCORE,
    SELF_REPORT_LIPIDS_SCORE, SLEEP_FAIR, SLEEP_NEAR_OPTIMAL, SLEEP_OPTIMAL, SLEEP_SCORES,
    STALE_AFTER_MONTHS, STALE_PENALTY, TOTAL_CHOLESTEROL_TIERS, UNKNOWN_DEFAULT_SCORE,
};
use vitalcast_core::models::{
    ClinicalReading, GlucoseReading, HealthCondition, LipidPanel, UserProfile, VitalStatus,
};

use crate::behavior::{DietScore, mvpa_minutes_proxy};
use crate::levels::DataBasis;
use crate::precision::to_score;

/// One scored component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Essential8Component {
    /// Score in [0, 100]
    pub score: u8,
    /// Provenance of the input
    pub basis: DataBasis,
    /// Display label for the underlying value
    pub value_label: String,
}

impl Essential8Component {
    fn new(score: f64, basis: DataBasis, value_label: impl Into<String>) -> Self {
        Self {
            score: to_score(score),
            basis,
            value_label: value_label.into(),
        }
    }
}

/// The eight named components
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Essential8Components {
    /// Diet (proxy from the diet score)
    pub diet: Essential8Component,
    /// Physical activity (proxy from steps)
    pub physical_activity: Essential8Component,
    /// Nicotine exposure
    pub nicotine: Essential8Component,
    /// Sleep health
    pub sleep: Essential8Component,
    /// Body mass index
    pub bmi: Essential8Component,
    /// Blood lipids
    pub blood_lipids: Essential8Component,
    /// Blood glucose
    pub blood_glucose: Essential8Component,
    /// Blood pressure
    pub blood_pressure: Essential8Component,
}

impl Essential8Components {
    /// All components in a fixed order
    #[must_use]
    pub const fn as_array(&self) -> [&Essential8Component; COMPONENT_COUNT] {
        [
            &self.diet,
            &self.physical_activity,
            &self.nicotine,
            &self.sleep,
            &self.bmi,
            &self.blood_lipids,
            &self.blood_glucose,
            &self.blood_pressure,
        ]
    }
}

/// How much of the composite rests on real data
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// Mostly defaults
    Low,
    /// Mostly user-entered
    Medium,
    /// At least two clinical measurements
    High,
}

/// Component provenance counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataCompleteness {
    /// Components with basis `measured` or `self_report`
    pub measured_or_self_report_count: usize,
    /// Components with basis `proxy` or `unknown`
    pub proxy_or_unknown_count: usize,
    /// Always 8
    pub total: usize,
}

/// Composite result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifesEssential8 {
    /// Component scores
    pub components: Essential8Components,
    /// Rounded mean of the eight scores
    pub total: u8,
    /// Confidence grade
    pub confidence: Confidence,
    /// Provenance counts
    pub data_completeness: DataCompleteness,
}

// ============================================================================
// Lifestyle components
// ============================================================================

/// Activity score from weekly MVPA minutes
#[must_use]
pub fn activity_score(mvpa_minutes: u32) -> f64 {
    ACTIVITY_TIERS
        .iter()
        .find(|(minimum, _)| mvpa_minutes >= *minimum)
        .map_or(0.0, |(_, score)| *score)
}

/// Nicotine score and label
///
/// Current smokers score 0 and no history scores 100. Former smokers are
/// banded by years since quitting, and history with no quit date scores 50.
#[must_use]
pub fn nicotine_score(profile: &UserProfile) -> (f64, String) {
    if profile.smoker {
        return (NICOTINE_CURRENT_SCORE, "Current smoker".to_owned());
    }
    if !profile.has_smoking_history() {
        return (NICOTINE_NEVER_SCORE, "Never smoked".to_owned());
    }

    match profile.years_since_quit {
        Some(years) => {
            let score = if years >= NICOTINE_QUIT_LONG_YEARS {
                NICOTINE_NEVER_SCORE
            } else if years >= NICOTINE_QUIT_SHORT_YEARS {
                NICOTINE_QUIT_SHORT_SCORE
            } else {
                NICOTINE_RECENT_SCORE
            };
            (score, format!("Quit {years} years ago"))
        }
        None => (NICOTINE_RECENT_SCORE, "Former smoker".to_owned()),
    }
}

/// Sleep score
///
/// `[7, 9]` scores 100; `[6, 7)` or `(9, 10)` scores 70; `[5, 6)` or `[10, 11)`
/// scores 40; anything else scores 0.
#[must_use]
pub fn sleep_score(hours: f64) -> f64 {
    let (optimal_low, optimal_high) = SLEEP_OPTIMAL;
    let (near_low, near_high) = SLEEP_NEAR_OPTIMAL;
    let (fair_low, fair_high) = SLEEP_FAIR;
    let [optimal, near_optimal, fair, poor] = SLEEP_SCORES;

    if (optimal_low..=optimal_high).contains(&hours) {
        optimal
    } else if (near_low..optimal_low).contains(&hours)
        || (hours > optimal_high && hours < near_high)
    {
        near_optimal
    } else if (fair_low..near_low).contains(&hours) || (near_high..fair_high).contains(&hours) {
        fair
    } else {
        poor
    }
}

/// BMI score
#[must_use]
pub fn bmi_score(bmi: f64) -> f64 {
    BMI_TIERS
        .iter()
        .find(|(upper, _)| bmi < *upper)
        .map_or(0.0, |(_, score)| *score)
}

// ============================================================================
// Clinical components
// ============================================================================

fn band_descending(value: f64, tiers: &[(f64, f64)]) -> f64 {
    tiers
        .iter()
        .find(|(lower, _)| value >= *lower)
        .map_or(OPTIMAL_SCORE, |(_, score)| *score)
}

/// Raw blood pressure band; the worse of systolic and diastolic governs
#[must_use]
pub fn blood_pressure_raw_score(systolic: f64, diastolic: f64) -> f64 {
    let [stage_2, stage_1, elevated, normal] = BP_SCORES;

    if systolic >= BP_STAGE_2.0 || diastolic >= BP_STAGE_2.1 {
        stage_2
    } else if systolic >= BP_STAGE_1.0 || diastolic >= BP_STAGE_1.1 {
        stage_1
    } else if systolic >= BP_ELEVATED_SYSTOLIC {
        elevated
    } else {
        normal
    }
}

/// Raw lipid band: LDL when present, else total cholesterol, both in mg/dL
#[must_use]
pub fn lipids_raw_score(panel: &LipidPanel) -> Option<f64> {
    panel
        .ldl_mg_dl()
        .map(|ldl| band_descending(ldl, &LDL_TIERS))
        .or_else(|| {
            panel
                .total_chol_mg_dl()
                .map(|total| band_descending(total, &TOTAL_CHOLESTEROL_TIERS))
        })
}

/// Raw glucose band: A1c when present, else fasting glucose in mg/dL
#[must_use]
pub fn glucose_raw_score(reading: &GlucoseReading) -> Option<f64> {
    reading
        .a1c
        .map(|a1c| band_descending(a1c, &A1C_TIERS))
        .or_else(|| {
            reading
                .fasting_mg_dl()
                .map(|fasting| band_descending(fasting, &FASTING_GLUCOSE_TIERS))
        })
}

/// Apply the medication cap, then the stale-reading penalty
///
/// The cap only lowers: a raw score at or below 80 passes through.
#[must_use]
pub fn adjust_for_treatment(raw: f64, reading: &impl ClinicalReading) -> f64 {
    let capped = if reading.on_meds() {
        raw.min(MEDICATION_CAP)
    } else {
        raw
    };

    if reading.measured_within_months() > STALE_AFTER_MONTHS {
        (capped - STALE_PENALTY).max(0.0)
    } else {
        capped
    }
}

struct ClinicalScoring<'a, R> {
    status: VitalStatus<'a, R>,
    self_report_score: f64,
    self_report_label: &'static str,
}

impl<R: ClinicalReading> ClinicalScoring<'_, R> {
    fn score(self, measure: impl Fn(&R) -> Option<(f64, String)>) -> Essential8Component {
        match self.status {
            VitalStatus::Measured(reading) => match measure(reading) {
                Some((raw, label)) => Essential8Component::new(
                    adjust_for_treatment(raw, reading),
                    DataBasis::Measured,
                    label,
                ),
                None => unknown_component(),
            },
            VitalStatus::SelfReportedCondition => Essential8Component::new(
                self.self_report_score,
                DataBasis::SelfReport,
                self.self_report_label,
            ),
            VitalStatus::Unknown => unknown_component(),
        }
    }
}

fn unknown_component() -> Essential8Component {
    Essential8Component::new(UNKNOWN_DEFAULT_SCORE, DataBasis::Unknown, "Not measured")
}

fn blood_pressure_component(profile: &UserProfile) -> Essential8Component {
    ClinicalScoring {
        status: VitalStatus::resolve(
            profile.bp.as_ref(),
            &profile.existing_conditions,
            &HealthCondition::Hypertension,
        ),
        self_report_score: SELF_REPORT_BP_SCORE,
        self_report_label: "Self-reported hypertension",
    }
    .score(|bp| {
        Some((
            blood_pressure_raw_score(bp.systolic, bp.diastolic),
            format!("{}/{} mmHg", bp.systolic, bp.diastolic),
        ))
    })
}

fn lipids_component(profile: &UserProfile) -> Essential8Component {
    ClinicalScoring {
        status: VitalStatus::resolve(
            profile.lipids.as_ref(),
            &profile.existing_conditions,
            &HealthCondition::HighCholesterol,
        ),
        self_report_score: SELF_REPORT_LIPIDS_SCORE,
        self_report_label: "Self-reported high cholesterol",
    }
    .score(|panel| {
        let label = match (panel.ldl, panel.total_chol) {
            (Some(ldl), _) => format!("LDL {ldl} {}", panel.unit.as_str()),
            (None, Some(total)) => format!("Total {total} {}", panel.unit.as_str()),
            (None, None) => return None,
        };
        lipids_raw_score(panel).map(|raw| (raw, label))
    })
}

fn glucose_component(profile: &UserProfile) -> Essential8Component {
    ClinicalScoring {
        status: VitalStatus::resolve(
            profile.glucose.as_ref(),
            &profile.existing_conditions,
            &HealthCondition::Type2Diabetes,
        ),
        self_report_score: SELF_REPORT_GLUCOSE_SCORE,
        self_report_label: "Self-reported type 2 diabetes",
    }
    .score(|reading| {
        let label = match (reading.a1c, reading.fasting) {
            (Some(a1c), _) => format!("A1c {a1c}%"),
            (None, Some(fasting)) => format!("Fasting {fasting} {}", reading.unit.as_str()),
            (None, None) => return None,
        };
        glucose_raw_score(reading).map(|raw| (raw, label))
    })
}

// ============================================================================
// Composite
// ============================================================================

/// Rounded mean of the component scores
#[must_use]
pub fn composite_total(components: &Essential8Components) -> u8 {
    let sum: u32 = components
        .as_array()
        .iter()
        .map(|component| u32::from(component.score))
        .sum();
    let mean = f64::from(sum) / COMPONENT_COUNT as f64;
    to_score(mean)
}

/// Confidence grade and completeness counts from component bases
#[must_use]
pub fn grade_confidence(components: &Essential8Components) -> (Confidence, DataCompleteness) {
    let all = components.as_array();
    let measured = all
        .iter()
        .filter(|component| component.basis == DataBasis::Measured)
        .count();
    let known = all
        .iter()
        .filter(|component| component.basis.is_known())
        .count();

    let confidence = if measured >= HIGH_CONFIDENCE_MEASURED {
        Confidence::High
    } else if known >= MEDIUM_CONFIDENCE_KNOWN {
        Confidence::Medium
    } else {
        Confidence::Low
    };

    (
        confidence,
        DataCompleteness {
            measured_or_self_report_count: known,
            proxy_or_unknown_count: COMPONENT_COUNT - known,
            total: COMPONENT_COUNT,
        },
    )
}

/// Score all eight components and the composite
///
/// `bmi` and `diet` come from the caller so the composite reuses the exact
/// values reported elsewhere in the metrics bundle.
#[must_use]
pub fn calculate_lifes_essential8(
    profile: &UserProfile,
    bmi: f64,
    diet: &DietScore,
) -> LifesEssential8 {
    let minutes = mvpa_minutes_proxy(profile.daily_steps);
    let (nicotine, nicotine_label) = nicotine_score(profile);

    let components = Essential8Components {
        diet: Essential8Component::new(
            f64::from(diet.score),
            DataBasis::Proxy,
            format!("Diet score {}", diet.score),
        ),
        physical_activity: Essential8Component::new(
            activity_score(minutes),
            DataBasis::Proxy,
            format!("~{minutes} min/week"),
        ),
        nicotine: Essential8Component::new(nicotine, DataBasis::SelfReport, nicotine_label),
        sleep: Essential8Component::new(
            sleep_score(profile.sleep_hours),
            DataBasis::SelfReport,
            format!("{} h/night", profile.sleep_hours),
        ),
        bmi: Essential8Component::new(bmi_score(bmi), DataBasis::SelfReport, format!("BMI {bmi}")),
        blood_lipids: lipids_component(profile),
        blood_glucose: glucose_component(profile),
        blood_pressure: blood_pressure_component(profile),
    };

    let (confidence, data_completeness) = grade_confidence(&components);

    LifesEssential8 {
        total: composite_total(&components),
        components,
        confidence,
        data_completeness,
    }
}
