// ABOUTME: Categorical vocabularies shared across the scorers
// ABOUTME: Ordered risk levels and the provenance tag attached to composite components
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Ordered risk level; comparison follows severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Low
    Low,
    /// Moderate
    Moderate,
    /// High
    High,
    /// Very high
    VeryHigh,
}

impl RiskLevel {
    /// Wire label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::VeryHigh => "very_high",
        }
    }
}

/// Where a score's input came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataBasis {
    /// A clinical measurement supplied by the user
    Measured,
    /// A user-entered answer or a self-reported diagnosis
    SelfReport,
    /// Estimated from a coarse lifestyle answer
    Proxy,
    /// Nothing known; a population default was assumed
    Unknown,
}

impl DataBasis {
    /// Whether the basis counts as known data for confidence grading
    #[must_use]
    pub const fn is_known(self) -> bool {
        matches!(self, Self::Measured | Self::SelfReport)
    }
}
