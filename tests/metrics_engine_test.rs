// ABOUTME: Integration tests for the deterministic metrics engine
// ABOUTME: Covers FINDRISC banding, Life's Essential 8 components, behavior classifiers, and bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{baseline_profile, ProfileBuilder};
use vitalcast::intelligence::behavior::{AlcoholRiskLevel, StepsCategory};
use vitalcast::intelligence::diabetes::DiabetesRiskBand;
use vitalcast::intelligence::essential8::Confidence;
use vitalcast::intelligence::levels::{DataBasis, RiskLevel};
use vitalcast::intelligence::MetricsEngine;
use vitalcast::models::{
    ActivityLevel, DietQuality, FastFoodFrequency, Gender, GlucoseReading, GlucoseUnit,
    HealthCondition, LipidPanel, LipidUnit, UserProfile,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

fn ldl_panel(ldl: f64, on_meds: bool) -> LipidPanel {
    LipidPanel {
        total_chol: None,
        ldl: Some(ldl),
        unit: LipidUnit::MgDl,
        on_meds,
        measured_within_months: 3.0,
    }
}

fn total_chol_panel(total: f64, unit: LipidUnit) -> LipidPanel {
    LipidPanel {
        total_chol: Some(total),
        ldl: None,
        unit,
        on_meds: false,
        measured_within_months: 3.0,
    }
}

fn a1c_reading(a1c: f64, fasting: Option<f64>) -> GlucoseReading {
    GlucoseReading {
        a1c: Some(a1c),
        fasting,
        unit: GlucoseUnit::MgDl,
        on_meds: false,
        measured_within_months: 2.0,
    }
}

fn lipids_score(panel: LipidPanel) -> u8 {
    MetricsEngine::compute(&ProfileBuilder::new().lipids(panel).build())
        .lifes_essential8
        .components
        .blood_lipids
        .score
}

fn glucose_score(reading: GlucoseReading) -> u8 {
    MetricsEngine::compute(&ProfileBuilder::new().glucose(reading).build())
        .lifes_essential8
        .components
        .blood_glucose
        .score
}

fn legacy_score(profile: &UserProfile) -> u8 {
    MetricsEngine::compute(profile).legacy_vitality.score
}

// ============================================================================
// FINDRISC
// ============================================================================

fn findrisc_profile(age: u32) -> UserProfile {
    ProfileBuilder::new()
        .age(age)
        .gender(Gender::Male)
        .bmi(27.0)
        .waist(96.0)
        .activity(ActivityLevel::Moderate)
        .diet(DietQuality::Average, FastFoodFrequency::Rarely)
        .build()
}

#[test]
fn test_findrisc_fifty_year_old_scores_age_band_one() {
    let metrics = MetricsEngine::compute(&findrisc_profile(50));
    let breakdown = metrics.diabetes.breakdown;

    assert_eq!(breakdown.age_points, 2);
    assert_eq!(breakdown.bmi_points, 1);
    assert_eq!(breakdown.waist_points, 3);
    assert_eq!(breakdown.activity_points, 0);
    assert_eq!(breakdown.diet_points, 0);
    assert_eq!(breakdown.hypertension_points, 0);
    assert_eq!(metrics.diabetes.score, 6);
    assert_eq!(metrics.diabetes.probability_percent, 1);
    assert_eq!(metrics.diabetes.band, DiabetesRiskBand::Low);
}

#[test]
fn test_findrisc_score_seven_maps_to_four_percent() {
    let metrics = MetricsEngine::compute(&findrisc_profile(55));

    assert_eq!(metrics.diabetes.breakdown.age_points, 3);
    assert_eq!(metrics.diabetes.score, 7);
    assert_eq!(metrics.diabetes.probability_percent, 4);
    assert_eq!(metrics.diabetes.band, DiabetesRiskBand::SlightlyElevated);
}

#[test]
fn test_findrisc_high_risk_profile() {
    let profile = ProfileBuilder::new()
        .age(66)
        .gender(Gender::Female)
        .bmi(32.0)
        .waist(95.0)
        .activity(ActivityLevel::Sedentary)
        .diet(DietQuality::Poor, FastFoodFrequency::Frequent)
        .condition(HealthCondition::Hypertension)
        .build();

    let diabetes = MetricsEngine::compute(&profile).diabetes;

    // 4 + 3 + 4 + 2 + 1 + 2
    assert_eq!(diabetes.score, 16);
    assert_eq!(diabetes.probability_percent, 33);
    assert_eq!(diabetes.band, DiabetesRiskBand::High);
}

#[test]
fn test_other_gender_uses_lower_waist_thresholds() {
    let other = ProfileBuilder::new().gender(Gender::Other).waist(85.0).build();
    let male = ProfileBuilder::new().gender(Gender::Male).waist(85.0).build();

    assert_eq!(MetricsEngine::compute(&other).diabetes.breakdown.waist_points, 3);
    assert_eq!(MetricsEngine::compute(&male).diabetes.breakdown.waist_points, 0);
}

// ============================================================================
// Life's Essential 8
// ============================================================================

#[test]
fn test_baseline_composite() {
    let le8 = MetricsEngine::compute(&baseline_profile()).lifes_essential8;
    let components = &le8.components;

    assert_eq!(components.diet.score, 95);
    assert_eq!(components.physical_activity.score, 100);
    assert_eq!(components.nicotine.score, 100);
    assert_eq!(components.sleep.score, 100);
    assert_eq!(components.bmi.score, 100);

    for unmeasured in [
        &components.blood_lipids,
        &components.blood_glucose,
        &components.blood_pressure,
    ] {
        assert_eq!(unmeasured.score, 80);
        assert_eq!(unmeasured.basis, DataBasis::Unknown);
    }

    // (95 + 100 * 4 + 80 * 3) / 8 = 91.875
    assert_eq!(le8.total, 92);
    assert_eq!(le8.confidence, Confidence::Low);
    assert_eq!(le8.data_completeness.measured_or_self_report_count, 3);
    assert_eq!(le8.data_completeness.proxy_or_unknown_count, 5);
    assert_eq!(le8.data_completeness.total, 8);
}

#[test]
fn test_sleep_component_bands() {
    let long = MetricsEngine::compute(&ProfileBuilder::new().sleep(9.5).build());
    let optimal = MetricsEngine::compute(&ProfileBuilder::new().sleep(7.0).build());

    assert_eq!(long.lifes_essential8.components.sleep.score, 70);
    assert_eq!(optimal.lifes_essential8.components.sleep.score, 100);
    assert_eq!(
        optimal.lifes_essential8.components.sleep.basis,
        DataBasis::SelfReport
    );
}

#[test]
fn test_blood_pressure_on_meds_keeps_stage_two_score() {
    let profile = ProfileBuilder::new().bp(145.0, 85.0, true, 3.0).build();
    let bp = MetricsEngine::compute(&profile)
        .lifes_essential8
        .components
        .blood_pressure;

    assert_eq!(bp.score, 20);
    assert_eq!(bp.basis, DataBasis::Measured);
    assert!(bp.value_label.contains("145"));
}

#[test]
fn test_optimal_blood_pressure_on_meds_is_capped() {
    let profile = ProfileBuilder::new().bp(110.0, 70.0, true, 3.0).build();
    let le8 = MetricsEngine::compute(&profile).lifes_essential8;

    assert_eq!(le8.components.blood_pressure.score, 80);
}

#[test]
fn test_stale_blood_pressure_loses_ten_points() {
    let profile = ProfileBuilder::new().bp(110.0, 70.0, false, 18.0).build();
    let le8 = MetricsEngine::compute(&profile).lifes_essential8;

    assert_eq!(le8.components.blood_pressure.score, 90);
}

#[test]
fn test_very_high_ldl_on_meds() {
    let profile = ProfileBuilder::new().lipids(ldl_panel(200.0, true)).build();
    let lipids = MetricsEngine::compute(&profile)
        .lifes_essential8
        .components
        .blood_lipids;

    assert_eq!(lipids.score, 10);
    assert_eq!(lipids.basis, DataBasis::Measured);
}

#[test]
fn test_measurement_takes_precedence_over_condition() {
    let profile = ProfileBuilder::new()
        .condition(HealthCondition::HighCholesterol)
        .lipids(ldl_panel(90.0, false))
        .build();
    let lipids = MetricsEngine::compute(&profile)
        .lifes_essential8
        .components
        .blood_lipids;

    assert_eq!(lipids.score, 100);
    assert_eq!(lipids.basis, DataBasis::Measured);
}

#[test]
fn test_self_reported_conditions_without_measurements() {
    let profile = ProfileBuilder::new()
        .condition(HealthCondition::Hypertension)
        .condition(HealthCondition::Type2Diabetes)
        .condition(HealthCondition::HighCholesterol)
        .build();
    let components = MetricsEngine::compute(&profile).lifes_essential8.components;

    assert_eq!(components.blood_pressure.score, 30);
    assert_eq!(components.blood_lipids.score, 30);
    assert_eq!(components.blood_glucose.score, 10);
    assert_eq!(components.blood_glucose.basis, DataBasis::SelfReport);
}

#[test]
fn test_empty_lipid_record_counts_as_unmeasured() {
    let profile = ProfileBuilder::new()
        .lipids(LipidPanel {
            total_chol: None,
            ldl: None,
            unit: LipidUnit::MgDl,
            on_meds: true,
            measured_within_months: 1.0,
        })
        .build();
    let lipids = MetricsEngine::compute(&profile)
        .lifes_essential8
        .components
        .blood_lipids;

    assert_eq!(lipids.score, 80);
    assert_eq!(lipids.basis, DataBasis::Unknown);
}

#[test]
fn test_fasting_glucose_in_mmol() {
    // 7.2 mmol/L is about 130 mg/dL
    let profile = ProfileBuilder::new()
        .glucose(GlucoseReading {
            a1c: None,
            fasting: Some(7.2),
            unit: GlucoseUnit::MmolL,
            on_meds: false,
            measured_within_months: 2.0,
        })
        .build();
    let glucose = MetricsEngine::compute(&profile)
        .lifes_essential8
        .components
        .blood_glucose;

    assert_eq!(glucose.score, 20);
    assert_eq!(glucose.basis, DataBasis::Measured);
}

#[test]
fn test_a1c_bands() {
    assert_eq!(glucose_score(a1c_reading(6.5, None)), 20);
    assert_eq!(glucose_score(a1c_reading(6.4, None)), 60);
    assert_eq!(glucose_score(a1c_reading(5.7, None)), 60);
    assert_eq!(glucose_score(a1c_reading(5.6, None)), 100);
}

#[test]
fn test_a1c_takes_precedence_over_fasting() {
    // Fasting 200 mg/dL alone would band at 20
    assert_eq!(glucose_score(a1c_reading(5.2, Some(200.0))), 100);
    assert_eq!(glucose_score(a1c_reading(6.8, Some(85.0))), 20);
}

#[test]
fn test_total_cholesterol_fallback_in_mg_dl() {
    assert_eq!(lipids_score(total_chol_panel(240.0, LipidUnit::MgDl)), 20);
    assert_eq!(lipids_score(total_chol_panel(239.0, LipidUnit::MgDl)), 60);
    assert_eq!(lipids_score(total_chol_panel(200.0, LipidUnit::MgDl)), 60);
    assert_eq!(lipids_score(total_chol_panel(199.0, LipidUnit::MgDl)), 100);
}

#[test]
fn test_total_cholesterol_fallback_in_mmol() {
    // 6.3 mmol/L is about 243.6 mg/dL
    assert_eq!(lipids_score(total_chol_panel(6.3, LipidUnit::MmolL)), 20);
    // 5.2 mmol/L is about 201.1 mg/dL
    assert_eq!(lipids_score(total_chol_panel(5.2, LipidUnit::MmolL)), 60);
    // 5.0 mmol/L is about 193.4 mg/dL
    assert_eq!(lipids_score(total_chol_panel(5.0, LipidUnit::MmolL)), 100);
}

#[test]
fn test_ldl_takes_precedence_over_total_cholesterol() {
    let panel = LipidPanel {
        total_chol: Some(260.0),
        ..ldl_panel(90.0, false)
    };

    assert_eq!(lipids_score(panel), 100);
}

#[test]
fn test_two_measurements_give_high_confidence() {
    let profile = ProfileBuilder::new()
        .bp(118.0, 76.0, false, 2.0)
        .lipids(ldl_panel(110.0, false))
        .build();
    let le8 = MetricsEngine::compute(&profile).lifes_essential8;

    assert_eq!(le8.confidence, Confidence::High);
    assert_eq!(le8.data_completeness.measured_or_self_report_count, 5);
}

#[test]
fn test_nicotine_by_smoking_history() {
    let current = ProfileBuilder::new().current_smoker(10.0, 5.0).build();
    let recent = ProfileBuilder::new().former_smoker(10.0, 5.0, 0.5).build();
    let few_years = ProfileBuilder::new().former_smoker(10.0, 5.0, 3.0).build();
    let long_ago = ProfileBuilder::new().former_smoker(10.0, 5.0, 8.0).build();

    let nicotine = |profile: UserProfile| {
        MetricsEngine::compute(&profile)
            .lifes_essential8
            .components
            .nicotine
            .score
    };

    assert_eq!(nicotine(current), 0);
    assert_eq!(nicotine(recent), 50);
    assert_eq!(nicotine(few_years), 75);
    assert_eq!(nicotine(long_ago), 100);
}

#[test]
fn test_composite_is_rounded_mean_of_components() {
    let profiles = [
        baseline_profile(),
        ProfileBuilder::new()
            .sleep(5.5)
            .bmi(33.0)
            .current_smoker(15.0, 10.0)
            .bp(135.0, 85.0, false, 14.0)
            .build(),
        ProfileBuilder::new()
            .steps(500)
            .diet(DietQuality::Poor, FastFoodFrequency::Frequent)
            .condition(HealthCondition::Type2Diabetes)
            .build(),
    ];

    for profile in profiles {
        let le8 = MetricsEngine::compute(&profile).lifes_essential8;
        let sum: u32 = le8
            .components
            .as_array()
            .iter()
            .map(|component| u32::from(component.score))
            .sum();
        let expected = (f64::from(sum) / 8.0).round() as u8;

        assert_eq!(le8.total, expected);
    }
}

// ============================================================================
// Behavior classifiers
// ============================================================================

#[test]
fn test_female_binge_drinking_escalates() {
    let profile = ProfileBuilder::new()
        .gender(Gender::Female)
        .alcohol(2.0, Some(6.0))
        .build();
    let alcohol = MetricsEngine::compute(&profile).alcohol;

    assert!(alcohol.binge_flag);
    assert_eq!(alcohol.risk_level, AlcoholRiskLevel::High);
    assert_close(alcohol.binge_threshold, 4.0);
    assert_close(alcohol.heavy_threshold, 8.0);
}

#[test]
fn test_alcohol_levels_without_binge() {
    let none = ProfileBuilder::new().alcohol(0.0, None).build();
    let some = ProfileBuilder::new()
        .gender(Gender::Male)
        .alcohol(10.0, Some(3.0))
        .build();
    let heavy = ProfileBuilder::new()
        .gender(Gender::Male)
        .alcohol(15.0, None)
        .build();

    assert_eq!(
        MetricsEngine::compute(&none).alcohol.risk_level,
        AlcoholRiskLevel::None
    );
    assert_eq!(
        MetricsEngine::compute(&some).alcohol.risk_level,
        AlcoholRiskLevel::Elevated
    );
    assert_eq!(
        MetricsEngine::compute(&heavy).alcohol.risk_level,
        AlcoholRiskLevel::High
    );
}

#[test]
fn test_current_smoker_pack_years_and_screening() {
    let profile = ProfileBuilder::new()
        .age(55)
        .current_smoker(20.0, 25.0)
        .build();
    let smoking = MetricsEngine::compute(&profile).smoking;

    assert_close(smoking.pack_years, 25.0);
    assert_eq!(smoking.risk_level, RiskLevel::High);
    assert!(smoking.lung_screening_eligible);
}

#[test]
fn test_former_smoker_screening_window() {
    let within = ProfileBuilder::new()
        .age(60)
        .former_smoker(20.0, 30.0, 10.0)
        .build();
    let beyond = ProfileBuilder::new()
        .age(60)
        .former_smoker(20.0, 30.0, 20.0)
        .build();

    let within = MetricsEngine::compute(&within).smoking;
    assert!(within.lung_screening_eligible);
    assert_close(within.pack_years, 0.0);
    assert_eq!(within.risk_level, RiskLevel::Low);

    assert!(!MetricsEngine::compute(&beyond).smoking.lung_screening_eligible);
}

#[test]
fn test_steps_and_guideline() {
    let metrics = MetricsEngine::compute(&ProfileBuilder::new().steps(8_000).build());

    assert_eq!(metrics.steps.category, StepsCategory::SomewhatActive);
    assert_eq!(metrics.activity_guideline.mvpa_minutes_proxy, 560);
    assert!(metrics.activity_guideline.meets_guideline);
    assert!(metrics.activity_guideline.additional_benefits);
}

#[test]
fn test_more_steps_never_lower_the_composite() {
    let totals: Vec<u8> = [0, 300, 1_000, 3_000, 6_000, 12_000]
        .into_iter()
        .map(|steps| {
            MetricsEngine::compute(&ProfileBuilder::new().steps(steps).build())
                .lifes_essential8
                .total
        })
        .collect();

    assert!(totals.windows(2).all(|pair| pair[0] <= pair[1]), "{totals:?}");
}

#[test]
fn test_more_sitting_never_lowers_sedentary_risk() {
    let levels: Vec<RiskLevel> = [0.0, 5.9, 6.0, 7.9, 8.0, 9.9, 10.0, 16.0]
        .into_iter()
        .map(|hours| {
            MetricsEngine::compute(&ProfileBuilder::new().sitting(hours).build())
                .sedentary
                .risk_level
        })
        .collect();

    assert!(levels.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(levels.first(), Some(&RiskLevel::Low));
    assert_eq!(levels.last(), Some(&RiskLevel::VeryHigh));
}

#[test]
fn test_diet_score_penalizes_fast_food() {
    let good = MetricsEngine::compute(
        &ProfileBuilder::new()
            .diet(DietQuality::Good, FastFoodFrequency::Never)
            .build(),
    );
    let poor = MetricsEngine::compute(
        &ProfileBuilder::new()
            .diet(DietQuality::Poor, FastFoodFrequency::Frequent)
            .build(),
    );

    assert_eq!(good.diet.score, 100);
    assert_eq!(good.diet.level, RiskLevel::Low);
    // 1 * 20 - 35, floored
    assert_eq!(poor.diet.score, 0);
    assert_eq!(poor.diet.level, RiskLevel::VeryHigh);
}

// ============================================================================
// Cardiovascular proxy and legacy score
// ============================================================================

#[test]
fn test_cardiovascular_baseline_is_one() {
    let cardio = MetricsEngine::compute(&baseline_profile()).cardiovascular;

    assert_close(cardio.relative_risk, 1.0);
    assert!(cardio.factors.is_empty());
    assert_eq!(cardio.basis, DataBasis::Proxy);
    assert!(!cardio.disclaimer.is_empty());
}

#[test]
fn test_cardiovascular_factors_compound_in_order() {
    let profile = ProfileBuilder::new()
        .age(50)
        .gender(Gender::Male)
        .bmi(31.0)
        .current_smoker(10.0, 10.0)
        .build();
    let cardio = MetricsEngine::compute(&profile).cardiovascular;

    // (1 + 10 * 0.2) * 1.3 * 2.0 * 1.5
    assert_close(cardio.relative_risk, 11.7);
    let names: Vec<&str> = cardio.factors.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["age", "male", "smoker", "bmi_over_30"]);
}

#[test]
fn test_cardiovascular_bmi_factor_is_tiered() {
    let cardio = |bmi| {
        MetricsEngine::compute(&ProfileBuilder::new().bmi(bmi).build()).cardiovascular
    };

    let normal = cardio(25.0);
    assert!(normal.factors.is_empty());
    assert_close(normal.relative_risk, 1.0);

    let overweight = cardio(26.0);
    let names: Vec<&str> = overweight.factors.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["bmi_over_25"]);
    assert_close(overweight.relative_risk, 1.2);

    // Obesity replaces the overweight factor rather than compounding it
    let obese = cardio(31.0);
    let names: Vec<&str> = obese.factors.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["bmi_over_30"]);
    assert_close(obese.relative_risk, 1.5);
}

#[test]
fn test_legacy_vitality_baseline() {
    let metrics = MetricsEngine::compute(&baseline_profile());

    // 100 - (40 - 20) * 0.3
    assert_eq!(metrics.legacy_vitality.score, 94);
}

#[test]
fn test_legacy_vitality_bmi_deductions() {
    // Baseline is 94 at age 40
    assert_eq!(legacy_score(&ProfileBuilder::new().bmi(25.0).build()), 94);
    assert_eq!(legacy_score(&ProfileBuilder::new().bmi(25.5).build()), 89);
    assert_eq!(legacy_score(&ProfileBuilder::new().bmi(30.0).build()), 89);
    assert_eq!(legacy_score(&ProfileBuilder::new().bmi(30.5).build()), 79);
}

#[test]
fn test_legacy_vitality_smoking_deduction() {
    let profile = ProfileBuilder::new().current_smoker(10.0, 10.0).build();

    assert_eq!(legacy_score(&profile), 74);
}

#[test]
fn test_legacy_vitality_activity_adjustments() {
    let level = |level| legacy_score(&ProfileBuilder::new().activity(level).build());

    assert_eq!(level(ActivityLevel::Sedentary), 84);
    assert_eq!(level(ActivityLevel::Light), 94);
    assert_eq!(level(ActivityLevel::Moderate), 94);
    assert_eq!(level(ActivityLevel::Active), 99);
}

#[test]
fn test_legacy_vitality_counts_every_condition_label() {
    let recognized = ProfileBuilder::new()
        .condition(HealthCondition::Hypertension)
        .build();
    let with_unrecognized = ProfileBuilder::new()
        .condition(HealthCondition::Hypertension)
        .condition(HealthCondition::Other("Asthma".to_owned()))
        .build();

    assert_eq!(legacy_score(&recognized), 84);
    assert_eq!(legacy_score(&with_unrecognized), 74);
}

#[test]
fn test_legacy_vitality_short_sleep_deduction() {
    assert_eq!(legacy_score(&ProfileBuilder::new().sleep(6.0).build()), 94);
    assert_eq!(legacy_score(&ProfileBuilder::new().sleep(5.9).build()), 89);
}

#[test]
fn test_extreme_profile_stays_in_bounds() {
    let profile = ProfileBuilder::new()
        .age(120)
        .gender(Gender::Male)
        .bmi(60.0)
        .waist(150.0)
        .steps(0)
        .sitting(24.0)
        .sleep(2.0)
        .activity(ActivityLevel::Sedentary)
        .diet(DietQuality::Poor, FastFoodFrequency::Frequent)
        .current_smoker(60.0, 100.0)
        .alcohol(80.0, Some(30.0))
        .condition(HealthCondition::Hypertension)
        .condition(HealthCondition::Type2Diabetes)
        .condition(HealthCondition::HighCholesterol)
        .bp(220.0, 130.0, true, 48.0)
        .lipids(ldl_panel(300.0, true))
        .build();

    let metrics = MetricsEngine::compute(&profile);

    assert_close(metrics.cardiovascular.relative_risk, 99.0);
    assert_eq!(metrics.legacy_vitality.score, 10);
    assert!(metrics.lifes_essential8.total <= 100);
    for component in metrics.lifes_essential8.components.as_array() {
        assert!(component.score <= 100);
    }
    // Every factor maxed out still lands in the 15-20 band
    assert_eq!(metrics.diabetes.score, 16);
    assert_eq!(metrics.diabetes.band, DiabetesRiskBand::High);
}

// ============================================================================
// Bundle
// ============================================================================

#[test]
fn test_compute_is_deterministic() {
    let profile = ProfileBuilder::new()
        .age(47)
        .bp(128.0, 82.0, false, 6.0)
        .alcohol(5.0, Some(3.0))
        .build();

    assert_eq!(MetricsEngine::compute(&profile), MetricsEngine::compute(&profile));
}

#[test]
fn test_health_score_is_the_composite() {
    let metrics = MetricsEngine::compute(&baseline_profile());

    assert_eq!(metrics.health_score(), metrics.lifes_essential8.total);
}

#[test]
fn test_echo_sections_are_camel_case() {
    let metrics = MetricsEngine::compute(&baseline_profile());

    let additional = metrics.additional_metrics();
    assert!(additional.get("lifesEssential8").is_some());
    assert!(additional.get("activityGuideline").is_some());
    assert_eq!(additional["alcohol"]["riskLevel"], "none");

    let debug = metrics.debug_calculations();
    assert_eq!(debug["findrisc"]["score"], metrics.diabetes.score);
    assert!(debug["findrisc"]["breakdown"].get("agePoints").is_some());
    assert_eq!(debug["legacyVitalityScore"], 94);
}

#[test]
fn test_bmi_and_whr_are_rounded() {
    let metrics = MetricsEngine::compute(&baseline_profile());

    // 65 / 1.7^2 = 22.49, 75 / 95 = 0.789
    assert_close(metrics.bmi, 22.5);
    assert_close(metrics.waist_hip_ratio, 0.79);
}
