// ABOUTME: What-if lifestyle scenarios that re-score a modified copy of the profile
// ABOUTME: Scenarios evaluate independently in parallel and report deltas against the baseline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! What-if scenarios
//!
//! A [`Scenario`] is a named list of [`LifestyleAdjustment`]s. Applying it
//! clones the profile, so the caller's input is never touched. Since the
//! engine is pure, every scenario is scored on its own rayon task.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;
use vitalcast_core::models::UserProfile;

use crate::metrics::{DerivedMetrics, MetricsEngine};
use crate::precision::round_to;

/// A single change to a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum LifestyleAdjustment {
    /// Stop smoking today
    QuitSmoking,
    /// Walk this many more steps per day
    AddDailySteps(u32),
    /// Sit this many fewer hours per day (floored at 0)
    ReduceSittingHours(f64),
    /// Diet one step better, fast food one step rarer
    ImproveDiet,
    /// Cap weekly drinks and stop binge drinking
    LimitAlcohol(f64),
    /// Lose this percentage of body weight
    ReduceWeightPercent(f64),
    /// Sleep this many hours per night
    SleepHours(f64),
}

impl LifestyleAdjustment {
    /// Apply in place; adjustments that do not fit the profile are no-ops
    pub fn apply_to(&self, profile: &mut UserProfile) {
        match *self {
            Self::QuitSmoking => {
                if profile.smoker {
                    profile.smoker = false;
                    profile.years_since_quit = Some(0.0);
                }
            }
            Self::AddDailySteps(steps) => {
                profile.daily_steps = profile.daily_steps.saturating_add(steps);
            }
            Self::ReduceSittingHours(hours) => {
                profile.sitting_hours = (profile.sitting_hours - hours).max(0.0);
            }
            Self::ImproveDiet => {
                profile.diet_quality = profile.diet_quality.improved();
                profile.fast_food_frequency = profile.fast_food_frequency.reduced();
            }
            Self::LimitAlcohol(limit) => {
                profile.alcohol_drinks_per_week = profile.alcohol_drinks_per_week.min(limit);
                profile.max_drinks_per_occasion = None;
            }
            Self::ReduceWeightPercent(percent) => {
                profile.weight_kg *= 1.0 - percent / 100.0;
            }
            Self::SleepHours(hours) => {
                profile.sleep_hours = hours;
            }
        }
    }
}

/// A named set of adjustments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Stable key
    pub key: String,
    /// Display label
    pub label: String,
    /// Changes applied in order
    pub adjustments: Vec<LifestyleAdjustment>,
}

impl Scenario {
    /// Create a scenario
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        adjustments: Vec<LifestyleAdjustment>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            adjustments,
        }
    }

    /// A modified copy of `profile`
    #[must_use]
    pub fn apply(&self, profile: &UserProfile) -> UserProfile {
        let mut adjusted = profile.clone();
        for adjustment in &self.adjustments {
            adjustment.apply_to(&mut adjusted);
        }
        adjusted
    }
}

/// One scenario's metrics and deltas against the baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioOutcome {
    /// Scenario key
    pub key: String,
    /// Scenario label
    pub label: String,
    /// Metrics for the adjusted profile
    pub metrics: DerivedMetrics,
    /// Change in the Life's Essential 8 total
    pub le8_delta: i32,
    /// Change in the FINDRISC score
    pub diabetes_score_delta: i64,
    /// Change in the cardiovascular relative risk, one decimal
    pub cardiovascular_delta: f64,
}

impl ScenarioOutcome {
    fn compare(scenario: &Scenario, baseline: &DerivedMetrics, metrics: DerivedMetrics) -> Self {
        Self {
            key: scenario.key.clone(),
            label: scenario.label.clone(),
            le8_delta: i32::from(metrics.lifes_essential8.total)
                - i32::from(baseline.lifes_essential8.total),
            diabetes_score_delta: i64::from(metrics.diabetes.score)
                - i64::from(baseline.diabetes.score),
            cardiovascular_delta: round_to(
                metrics.cardiovascular.relative_risk - baseline.cardiovascular.relative_risk,
                1,
            ),
            metrics,
        }
    }
}

/// Score each scenario against the profile, preserving input order
#[must_use]
pub fn evaluate_scenarios(profile: &UserProfile, scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
    let baseline = MetricsEngine::compute(profile);

    let outcomes: Vec<ScenarioOutcome> = scenarios
        .par_iter()
        .map(|scenario| {
            let metrics = MetricsEngine::compute(&scenario.apply(profile));
            ScenarioOutcome::compare(scenario, &baseline, metrics)
        })
        .collect();

    debug!(
        scenario_count = outcomes.len(),
        baseline_le8 = baseline.lifes_essential8.total,
        "Evaluated what-if scenarios"
    );

    outcomes
}

/// The standard scenario set
#[must_use]
pub fn default_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "quit_smoking",
            "Quit smoking",
            vec![LifestyleAdjustment::QuitSmoking],
        ),
        Scenario::new(
            "walk_more",
            "Walk 3,000 more steps a day",
            vec![LifestyleAdjustment::AddDailySteps(3_000)],
        ),
        Scenario::new(
            "sit_less",
            "Sit 2 fewer hours a day",
            vec![LifestyleAdjustment::ReduceSittingHours(2.0)],
        ),
        Scenario::new(
            "eat_better",
            "Improve diet quality",
            vec![LifestyleAdjustment::ImproveDiet],
        ),
        Scenario::new(
            "drink_less",
            "Keep to 3 drinks a week",
            vec![LifestyleAdjustment::LimitAlcohol(3.0)],
        ),
        Scenario::new(
            "lose_weight",
            "Lose 5% of body weight",
            vec![LifestyleAdjustment::ReduceWeightPercent(5.0)],
        ),
        Scenario::new(
            "sleep_better",
            "Sleep 8 hours a night",
            vec![LifestyleAdjustment::SleepHours(8.0)],
        ),
    ]
}
