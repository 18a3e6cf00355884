// ABOUTME: Optional clinical readings (blood pressure, lipids, glucose) with explicit units
// ABOUTME: Resolves each vital sign into measured, self-reported, or unknown provenance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::{ConditionSet, HealthCondition};
use crate::constants::units::{CHOLESTEROL_MMOL_TO_MGDL, GLUCOSE_MMOL_TO_MGDL};

/// Unit attached to cholesterol values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LipidUnit {
    /// Milligrams per deciliter
    #[default]
    #[serde(rename = "mg/dL", alias = "mg_dl", alias = "mgdl")]
    MgDl,
    /// Millimoles per liter
    #[serde(rename = "mmol/L", alias = "mmol_l", alias = "mmoll")]
    MmolL,
}

impl LipidUnit {
    /// Convert a value in this unit to mg/dL
    #[must_use]
    pub fn to_mg_dl(self, value: f64) -> f64 {
        match self {
            Self::MgDl => value,
            Self::MmolL => value * CHOLESTEROL_MMOL_TO_MGDL,
        }
    }

    /// Display suffix
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MgDl => "mg/dL",
            Self::MmolL => "mmol/L",
        }
    }
}

/// Unit attached to fasting glucose values (A1c is always a percentage)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlucoseUnit {
    /// Milligrams per deciliter
    #[default]
    #[serde(rename = "mg/dL", alias = "mg_dl", alias = "mgdl")]
    MgDl,
    /// Millimoles per liter
    #[serde(rename = "mmol/L", alias = "mmol_l", alias = "mmoll")]
    MmolL,
}

impl GlucoseUnit {
    /// Convert a value in this unit to mg/dL
    #[must_use]
    pub fn to_mg_dl(self, value: f64) -> f64 {
        match self {
            Self::MgDl => value,
            Self::MmolL => value * GLUCOSE_MMOL_TO_MGDL,
        }
    }

    /// Display suffix
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MgDl => "mg/dL",
            Self::MmolL => "mmol/L",
        }
    }
}

/// Blood pressure measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodPressureReading {
    /// Systolic pressure (mmHg)
    pub systolic: f64,
    /// Diastolic pressure (mmHg)
    pub diastolic: f64,
    /// Whether the user takes antihypertensive medication
    #[serde(default)]
    pub on_meds: bool,
    /// Age of the reading in months
    #[serde(default)]
    pub measured_within_months: f64,
}

/// Cholesterol panel; either value may be missing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LipidPanel {
    /// Total cholesterol in `unit`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_chol: Option<f64>,
    /// LDL cholesterol in `unit`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ldl: Option<f64>,
    /// Unit of both values
    #[serde(default)]
    pub unit: LipidUnit,
    /// Whether the user takes lipid-lowering medication
    #[serde(default)]
    pub on_meds: bool,
    /// Age of the panel in months
    #[serde(default)]
    pub measured_within_months: f64,
}

impl LipidPanel {
    /// LDL converted to mg/dL
    #[must_use]
    pub fn ldl_mg_dl(&self) -> Option<f64> {
        self.ldl.map(|value| self.unit.to_mg_dl(value))
    }

    /// Total cholesterol converted to mg/dL
    #[must_use]
    pub fn total_chol_mg_dl(&self) -> Option<f64> {
        self.total_chol.map(|value| self.unit.to_mg_dl(value))
    }
}

/// Glycemic markers; either value may be missing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlucoseReading {
    /// Hemoglobin A1c (%)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a1c: Option<f64>,
    /// Fasting plasma glucose in `unit`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fasting: Option<f64>,
    /// Unit of the fasting value
    #[serde(default)]
    pub unit: GlucoseUnit,
    /// Whether the user takes glucose-lowering medication
    #[serde(default)]
    pub on_meds: bool,
    /// Age of the reading in months
    #[serde(default)]
    pub measured_within_months: f64,
}

impl GlucoseReading {
    /// Fasting glucose converted to mg/dL
    #[must_use]
    pub fn fasting_mg_dl(&self) -> Option<f64> {
        self.fasting.map(|value| self.unit.to_mg_dl(value))
    }
}

/// Common view over clinical readings used by the three-tier precedence
pub trait ClinicalReading {
    /// Whether the user reports treatment medication for this condition
    fn on_meds(&self) -> bool;
    /// Age of the reading in months
    fn measured_within_months(&self) -> f64;
    /// Whether the record actually carries a value to band
    fn has_values(&self) -> bool;
}

impl ClinicalReading for BloodPressureReading {
    fn on_meds(&self) -> bool {
        self.on_meds
    }

    fn measured_within_months(&self) -> f64 {
        self.measured_within_months
    }

    fn has_values(&self) -> bool {
        true
    }
}

impl ClinicalReading for LipidPanel {
    fn on_meds(&self) -> bool {
        self.on_meds
    }

    fn measured_within_months(&self) -> f64 {
        self.measured_within_months
    }

    fn has_values(&self) -> bool {
        self.ldl.is_some() || self.total_chol.is_some()
    }
}

impl ClinicalReading for GlucoseReading {
    fn on_meds(&self) -> bool {
        self.on_meds
    }

    fn measured_within_months(&self) -> f64 {
        self.measured_within_months
    }

    fn has_values(&self) -> bool {
        self.a1c.is_some() || self.fasting.is_some()
    }
}

/// Provenance of one vital sign, in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VitalStatus<'a, R> {
    /// A real reading with at least one value
    Measured(&'a R),
    /// No reading, but the matching condition is self-reported
    SelfReportedCondition,
    /// Neither measured nor reported
    Unknown,
}

impl<'a, R: ClinicalReading> VitalStatus<'a, R> {
    /// Resolve the three-tier precedence: measurement, then condition, then unknown
    #[must_use]
    pub fn resolve(
        reading: Option<&'a R>,
        conditions: &ConditionSet,
        condition: &HealthCondition,
    ) -> Self {
        match reading {
            Some(reading) if reading.has_values() => Self::Measured(reading),
            _ if conditions.contains(condition) => Self::SelfReportedCondition,
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversion() {
        assert!((LipidUnit::MmolL.to_mg_dl(5.0) - 193.35).abs() < 1e-9);
        assert!((LipidUnit::MgDl.to_mg_dl(5.0) - 5.0).abs() < f64::EPSILON);
        assert!((GlucoseUnit::MmolL.to_mg_dl(7.0) - 126.0).abs() < 1e-9);
    }

    #[test]
    fn test_unit_wire_labels() {
        let panel: LipidPanel =
            serde_json::from_str(r#"{"ldl": 3.4, "unit": "mmol/L", "onMeds": true}"#).unwrap();
        assert_eq!(panel.unit, LipidUnit::MmolL);
        assert!(panel.on_meds);
        assert!(panel.total_chol.is_none());
    }

    #[test]
    fn test_empty_panel_is_not_measured() {
        let panel = LipidPanel {
            total_chol: None,
            ldl: None,
            unit: LipidUnit::MgDl,
            on_meds: false,
            measured_within_months: 1.0,
        };
        let conditions: ConditionSet = [HealthCondition::HighCholesterol].into_iter().collect();

        let status = VitalStatus::resolve(Some(&panel), &conditions, &HealthCondition::HighCholesterol);
        assert_eq!(status, VitalStatus::SelfReportedCondition);

        let status =
            VitalStatus::resolve(Some(&panel), &ConditionSet::new(), &HealthCondition::HighCholesterol);
        assert_eq!(status, VitalStatus::Unknown);
    }
}
