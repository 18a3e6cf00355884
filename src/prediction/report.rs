// ABOUTME: Narrative prediction report schema returned by the language model
// ABOUTME: Risk cards, composite scores, life expectancy, trajectories, and the degraded fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Title of the placeholder card in a degraded report
pub const CONNECTION_ERROR_TITLE: &str = "Connection error";

const MAX_SCORE: f64 = 100.0;

/// Category key of a risk card
///
/// Unknown keys deserialize as [`RiskCategory::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    /// Type 2 diabetes risk
    Diabetes,
    /// Activity guideline compliance
    PhysicalActivity,
    /// Sitting time
    SedentaryBehavior,
    /// Alcohol intake
    AlcoholUse,
    /// Tobacco exposure
    TobaccoExposure,
    /// Diet quality
    DietQuality,
    /// Heart and vessel risk
    Cardiovascular,
    /// Anything else the narrator wants to say
    #[serde(other)]
    Other,
}

impl RiskCategory {
    /// The fixed keys every report is asked to cover
    pub const REQUIRED: [Self; 6] = [
        Self::Diabetes,
        Self::PhysicalActivity,
        Self::SedentaryBehavior,
        Self::AlcoholUse,
        Self::TobaccoExposure,
        Self::DietQuality,
    ];

    /// Wire key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Diabetes => "diabetes",
            Self::PhysicalActivity => "physical_activity",
            Self::SedentaryBehavior => "sedentary_behavior",
            Self::AlcoholUse => "alcohol_use",
            Self::TobaccoExposure => "tobacco_exposure",
            Self::DietQuality => "diet_quality",
            Self::Cardiovascular => "cardiovascular",
            Self::Other => "other",
        }
    }
}

/// One narrative card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskCard {
    /// Category key
    pub category: RiskCategory,
    /// Card heading
    pub title: String,
    /// Free-text level as written by the narrator ("low", "moderate", ...)
    #[serde(default)]
    pub level: String,
    /// Plain-language explanation
    #[serde(default)]
    pub summary: String,
    /// Concrete next steps
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
}

/// Estimated life expectancy in years
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeExpectancy {
    /// On the current path
    #[serde(default)]
    pub current: f64,
    /// With the suggested changes
    #[serde(default)]
    pub potential: f64,
}

/// One point of a projected score curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrajectoryPoint {
    /// Age at this point, rounded to whole years
    #[serde(deserialize_with = "whole_years")]
    pub age: u32,
    /// Projected composite score, clamped to [0, 100]
    #[serde(deserialize_with = "clamped_score")]
    pub score: u8,
}

/// Current and improved score curves
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trajectory {
    /// Curve if nothing changes
    #[serde(default)]
    pub current: Vec<TrajectoryPoint>,
    /// Curve with the suggested changes
    #[serde(default)]
    pub improved: Vec<TrajectoryPoint>,
}

/// A narrated what-if scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeScenario {
    /// Scenario heading
    pub title: String,
    /// What changes
    #[serde(default)]
    pub description: String,
    /// Expected effect, in the narrator's words
    #[serde(default)]
    pub impact: String,
}

/// The structured answer of the narrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionReport {
    /// Narrative cards
    #[serde(default)]
    pub risk_cards: Vec<RiskCard>,
    /// The one change with the largest expected benefit
    #[serde(default)]
    pub suggested_action: String,
    /// Current composite score
    #[serde(default, deserialize_with = "clamped_score")]
    pub health_score_current: u8,
    /// Composite score with the suggested changes
    #[serde(default, deserialize_with = "clamped_score")]
    pub health_score_future: u8,
    /// Life expectancy estimate
    #[serde(default)]
    pub life_expectancy: LifeExpectancy,
    /// Score curves
    #[serde(default)]
    pub trajectory: Trajectory,
    /// Narrated scenarios
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenarios: Option<Vec<NarrativeScenario>>,
    /// Chart specifications, passed through to the UI untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charts: Option<Value>,
    /// Echo of the behavioral metrics payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_metrics: Option<Value>,
    /// Echo of the intermediate calculations payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_calculations: Option<Value>,
}

impl PredictionReport {
    /// The structurally valid placeholder used when the narrator fails
    #[must_use]
    pub fn degraded(reason: impl Into<String>) -> Self {
        Self {
            risk_cards: vec![RiskCard {
                category: RiskCategory::Other,
                title: CONNECTION_ERROR_TITLE.to_owned(),
                level: "unknown".to_owned(),
                summary: reason.into(),
                recommendations: Vec::new(),
            }],
            suggested_action: "Please try again in a moment.".to_owned(),
            health_score_current: 0,
            health_score_future: 0,
            life_expectancy: LifeExpectancy::default(),
            trajectory: Trajectory::default(),
            scenarios: None,
            charts: None,
            additional_metrics: None,
            debug_calculations: None,
        }
    }

    /// Required category keys that have no card
    #[must_use]
    pub fn missing_categories(&self) -> Vec<RiskCategory> {
        RiskCategory::REQUIRED
            .into_iter()
            .filter(|required| !self.risk_cards.iter().any(|card| card.category == *required))
            .collect()
    }
}

/// Accept any JSON number, clamp to [0, 100], and round
fn clamped_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if raw.is_nan() {
        return Ok(0);
    }
    Ok(raw.clamp(0.0, MAX_SCORE).round() as u8)
}

/// Accept any JSON number as a non-negative whole number of years
fn whole_years<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if raw.is_nan() {
        return Ok(0);
    }
    Ok(raw.clamp(0.0, f64::from(u32::MAX)).round() as u32)
}
