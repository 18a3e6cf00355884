// ABOUTME: Closed enumeration of the health conditions the scoring logic recognizes
// ABOUTME: Unrecognized labels are kept verbatim so condition counts stay faithful
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A self-reported existing condition
///
/// Wire labels are matched exactly (case-sensitive), as the UI emits them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HealthCondition {
    /// "Hypertension"
    Hypertension,
    /// "Type 2 Diabetes"
    Type2Diabetes,
    /// "High Cholesterol"
    HighCholesterol,
    /// Any other label, stored as given
    Other(String),
}

impl HealthCondition {
    /// Wire label for the hypertension condition
    pub const HYPERTENSION_LABEL: &'static str = "Hypertension";
    /// Wire label for the type 2 diabetes condition
    pub const TYPE_2_DIABETES_LABEL: &'static str = "Type 2 Diabetes";
    /// Wire label for the high cholesterol condition
    pub const HIGH_CHOLESTEROL_LABEL: &'static str = "High Cholesterol";

    /// Label as shown to and received from the UI
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Hypertension => Self::HYPERTENSION_LABEL,
            Self::Type2Diabetes => Self::TYPE_2_DIABETES_LABEL,
            Self::HighCholesterol => Self::HIGH_CHOLESTEROL_LABEL,
            Self::Other(label) => label,
        }
    }

    /// Whether the scoring logic has a rule for this condition
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for HealthCondition {
    fn from(label: String) -> Self {
        match label.as_str() {
            Self::HYPERTENSION_LABEL => Self::Hypertension,
            Self::TYPE_2_DIABETES_LABEL => Self::Type2Diabetes,
            Self::HIGH_CHOLESTEROL_LABEL => Self::HighCholesterol,
            _ => Self::Other(label),
        }
    }
}

impl From<&str> for HealthCondition {
    fn from(label: &str) -> Self {
        Self::from(label.to_owned())
    }
}

impl From<HealthCondition> for String {
    fn from(condition: HealthCondition) -> Self {
        match condition {
            HealthCondition::Other(label) => label,
            recognized => recognized.label().to_owned(),
        }
    }
}

impl fmt::Display for HealthCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Set of existing conditions; duplicates collapse
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionSet(BTreeSet<HealthCondition>);

impl ConditionSet {
    /// Create an empty set
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Membership test
    #[must_use]
    pub fn contains(&self, condition: &HealthCondition) -> bool {
        self.0.contains(condition)
    }

    /// Number of listed conditions, recognized or not
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no condition is listed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Add a condition, returning whether it was new
    pub fn insert(&mut self, condition: HealthCondition) -> bool {
        self.0.insert(condition)
    }

    /// Iterate in label order
    pub fn iter(&self) -> impl Iterator<Item = &HealthCondition> {
        self.0.iter()
    }
}

impl FromIterator<HealthCondition> for ConditionSet {
    fn from_iter<I: IntoIterator<Item = HealthCondition>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
