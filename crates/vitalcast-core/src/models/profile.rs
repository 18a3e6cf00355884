// ABOUTME: User lifestyle profile consumed by the metrics engine, with boundary validation
// ABOUTME: Demographics, body measurements, activity, habits, diet, conditions, and vitals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{BloodPressureReading, ConditionSet, GlucoseReading, LipidPanel};
use crate::errors::{AppError, AppResult};

/// Oldest accepted age
const MAX_AGE_YEARS: u32 = 130;

/// Hours in a day, the ceiling for sitting and sleep time
const HOURS_PER_DAY: f64 = 24.0;

/// Biological sex used for sex-specific thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    #[serde(alias = "Male")]
    Male,
    /// Female
    #[serde(alias = "Female")]
    Female,
    /// Other or undisclosed; scored with the lower (female) thresholds
    #[serde(alias = "Other")]
    Other,
}

/// Self-described activity level, ordered from least to most active
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[serde(alias = "Sedentary")]
    Sedentary,
    /// Light exercise
    #[serde(alias = "Light")]
    Light,
    /// Moderate exercise
    #[serde(alias = "Moderate")]
    Moderate,
    /// Regular vigorous exercise
    #[serde(alias = "Active")]
    Active,
}

/// Self-rated diet quality, ordered worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietQuality {
    /// Poor
    #[serde(alias = "Poor")]
    Poor,
    /// Average
    #[serde(alias = "Average")]
    Average,
    /// Good
    #[serde(alias = "Good")]
    Good,
}

impl DietQuality {
    /// One step better, saturating at `Good`
    #[must_use]
    pub const fn improved(self) -> Self {
        match self {
            Self::Poor => Self::Average,
            Self::Average | Self::Good => Self::Good,
        }
    }
}

/// Fast food frequency, ordered least to most frequent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FastFoodFrequency {
    /// Never
    #[serde(alias = "Never")]
    Never,
    /// Rarely
    #[serde(alias = "Rarely")]
    Rarely,
    /// About weekly
    #[serde(alias = "Weekly")]
    Weekly,
    /// Several times a week or more
    #[serde(alias = "Frequent")]
    Frequent,
}

impl FastFoodFrequency {
    /// One step less frequent, saturating at `Never`
    #[must_use]
    pub const fn reduced(self) -> Self {
        match self {
            Self::Frequent => Self::Weekly,
            Self::Weekly => Self::Rarely,
            Self::Rarely | Self::Never => Self::Never,
        }
    }
}

/// Demographic and lifestyle snapshot
///
/// The engine assumes a profile that already passed [`UserProfile::validate`];
/// it performs no checks of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Age in years
    pub age: u32,
    /// Biological sex
    pub gender: Gender,
    /// Height (cm)
    pub height_cm: f64,
    /// Weight (kg)
    pub weight_kg: f64,
    /// Waist circumference (cm)
    pub waist_cm: f64,
    /// Hip circumference (cm)
    pub hip_cm: f64,

    /// Average daily steps
    #[serde(default)]
    pub daily_steps: u32,
    /// Hours spent sitting per day
    #[serde(default)]
    pub sitting_hours: f64,
    /// Self-described activity level
    pub activity_level: ActivityLevel,
    /// Average nightly sleep (hours)
    pub sleep_hours: f64,

    /// Current smoker
    #[serde(default)]
    pub smoker: bool,
    /// Cigarettes per day (current, or historical for former smokers)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cigarettes_per_day: Option<f64>,
    /// Years of smoking
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_smoked: Option<f64>,
    /// Years since quitting (former smokers)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_since_quit: Option<f64>,
    /// Standard drinks per week
    #[serde(default)]
    pub alcohol_drinks_per_week: f64,
    /// Most drinks on a single occasion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_drinks_per_occasion: Option<f64>,

    /// Self-rated diet quality
    pub diet_quality: DietQuality,
    /// Fast food frequency
    pub fast_food_frequency: FastFoodFrequency,

    /// Self-reported diagnoses
    #[serde(default)]
    pub existing_conditions: ConditionSet,

    /// Blood pressure reading, absent when unmeasured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bp: Option<BloodPressureReading>,
    /// Cholesterol panel, absent when unmeasured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lipids: Option<LipidPanel>,
    /// Glycemic markers, absent when unmeasured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glucose: Option<GlucoseReading>,
}

impl UserProfile {
    /// Parse a profile from JSON
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` when the document is not a well-typed profile.
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            AppError::invalid_format(format!("Profile is not valid: {e}"))
                .with_details(json!({ "line": e.line(), "column": e.column() }))
        })
    }

    /// Whether any smoking history field is populated
    #[must_use]
    pub fn has_smoking_history(&self) -> bool {
        self.years_since_quit.is_some()
            || self.years_smoked.is_some_and(|years| years > 0.0)
            || self.cigarettes_per_day.is_some_and(|count| count > 0.0)
    }

    /// Validate the profile at the application boundary
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` naming the first offending field.
    pub fn validate(&self) -> AppResult<()> {
        if self.age > MAX_AGE_YEARS {
            return Err(AppError::out_of_range(
                "age",
                format!("age must be at most {MAX_AGE_YEARS} years"),
            ));
        }

        require_positive("heightCm", self.height_cm)?;
        require_positive("weightKg", self.weight_kg)?;
        require_positive("waistCm", self.waist_cm)?;
        require_positive("hipCm", self.hip_cm)?;

        require_hours("sittingHours", self.sitting_hours)?;
        require_hours("sleepHours", self.sleep_hours)?;

        require_non_negative("alcoholDrinksPerWeek", Some(self.alcohol_drinks_per_week))?;
        require_non_negative("maxDrinksPerOccasion", self.max_drinks_per_occasion)?;
        require_non_negative("cigarettesPerDay", self.cigarettes_per_day)?;
        require_non_negative("yearsSmoked", self.years_smoked)?;
        require_non_negative("yearsSinceQuit", self.years_since_quit)?;

        if let Some(bp) = &self.bp {
            require_positive("bp.systolic", bp.systolic)?;
            require_positive("bp.diastolic", bp.diastolic)?;
            require_non_negative("bp.measuredWithinMonths", Some(bp.measured_within_months))?;
        }

        if let Some(lipids) = &self.lipids {
            if let Some(ldl) = lipids.ldl {
                require_positive("lipids.ldl", ldl)?;
            }
            if let Some(total) = lipids.total_chol {
                require_positive("lipids.totalChol", total)?;
            }
            require_non_negative(
                "lipids.measuredWithinMonths",
                Some(lipids.measured_within_months),
            )?;
        }

        if let Some(glucose) = &self.glucose {
            if let Some(a1c) = glucose.a1c {
                require_positive("glucose.a1c", a1c)?;
            }
            if let Some(fasting) = glucose.fasting {
                require_positive("glucose.fasting", fasting)?;
            }
            require_non_negative(
                "glucose.measuredWithinMonths",
                Some(glucose.measured_within_months),
            )?;
        }

        Ok(())
    }
}

fn require_positive(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::out_of_range(
            field,
            format!("{field} must be a positive number (got {value})"),
        ))
    }
}

fn require_non_negative(field: &str, value: Option<f64>) -> AppResult<()> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(AppError::out_of_range(
            field,
            format!("{field} must not be negative (got {v})"),
        )),
        _ => Ok(()),
    }
}

fn require_hours(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && (0.0..=HOURS_PER_DAY).contains(&value) {
        Ok(())
    } else {
        Err(AppError::out_of_range(
            field,
            format!("{field} must be within 0-24 hours (got {value})"),
        ))
    }
}
