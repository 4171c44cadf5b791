// ABOUTME: Health risk dashboard verdicts for stress, sleep, and blood pressure
// ABOUTME: Pure threshold classification of HealthMetrics, independent of the classifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Risk dashboard
//!
//! Three independent verdicts, each a function of one or two metrics. They never
//! look at the classifier output and carry no memory between calls.

use super::thresholds::{blood_pressure, sleep, stress};
use crate::models::HealthMetrics;
use serde::{Deserialize, Serialize};

/// Badge colour class for a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskSeverity {
    /// Nothing to flag
    Success,
    /// Worth watching
    Warning,
    /// Needs attention
    Error,
}

impl RiskSeverity {
    /// Short marker for text output
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::Success => "[ OK ]",
            Self::Warning => "[WARN]",
            Self::Error => "[HIGH]",
        }
    }
}

/// Stress verdict from the 1-10 self rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StressRisk {
    /// Stress at or below 4
    Low,
    /// Stress 5 to 7
    Moderate,
    /// Stress above 7
    High,
}

impl StressRisk {
    /// Classify a stress level
    #[must_use]
    pub const fn from_level(stress_level: u32) -> Self {
        if stress_level > stress::HIGH_ABOVE {
            Self::High
        } else if stress_level > stress::MODERATE_ABOVE {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Badge text
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Stress",
            Self::Moderate => "Moderate Stress",
            Self::High => "High Stress",
        }
    }

    /// Badge colour class
    #[must_use]
    pub const fn severity(self) -> RiskSeverity {
        match self {
            Self::Low => RiskSeverity::Success,
            Self::Moderate => RiskSeverity::Warning,
            Self::High => RiskSeverity::Error,
        }
    }
}

/// Sleep verdict from nightly duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepRisk {
    /// Seven hours or more
    Healthy,
    /// Five or six hours
    Borderline,
    /// Under five hours
    Poor,
}

impl SleepRisk {
    /// Classify a sleep duration in hours
    #[must_use]
    pub const fn from_duration(sleep_duration: u32) -> Self {
        if sleep_duration < sleep::POOR_BELOW {
            Self::Poor
        } else if sleep_duration < sleep::BORDERLINE_BELOW {
            Self::Borderline
        } else {
            Self::Healthy
        }
    }

    /// Badge text
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Healthy => "Healthy Sleep",
            Self::Borderline => "Borderline Sleep",
            Self::Poor => "Poor Sleep",
        }
    }

    /// Badge colour class
    #[must_use]
    pub const fn severity(self) -> RiskSeverity {
        match self {
            Self::Healthy => RiskSeverity::Success,
            Self::Borderline => RiskSeverity::Warning,
            Self::Poor => RiskSeverity::Error,
        }
    }
}

/// Blood pressure verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BpRisk {
    /// Systolic at most 140 and diastolic at most 90
    Normal,
    /// Systolic above 140 or diastolic above 90
    High,
}

impl BpRisk {
    /// Classify a systolic/diastolic pair
    #[must_use]
    pub const fn from_pressure(systolic: u32, diastolic: u32) -> Self {
        if systolic > blood_pressure::SYSTOLIC_HIGH_ABOVE
            || diastolic > blood_pressure::DIASTOLIC_HIGH_ABOVE
        {
            Self::High
        } else {
            Self::Normal
        }
    }

    /// Badge text
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal Blood Pressure",
            Self::High => "High Blood Pressure",
        }
    }

    /// Badge colour class
    #[must_use]
    pub const fn severity(self) -> RiskSeverity {
        match self {
            Self::Normal => RiskSeverity::Success,
            Self::High => RiskSeverity::Error,
        }
    }
}

/// The three dashboard verdicts for one record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Stress verdict
    pub stress: StressRisk,
    /// Sleep verdict
    pub sleep: SleepRisk,
    /// Blood pressure verdict
    pub blood_pressure: BpRisk,
}

impl RiskAssessment {
    /// Assess all three dimensions
    #[must_use]
    pub const fn assess(metrics: &HealthMetrics) -> Self {
        Self {
            stress: StressRisk::from_level(metrics.stress_level()),
            sleep: SleepRisk::from_duration(metrics.sleep_duration()),
            blood_pressure: BpRisk::from_pressure(metrics.bp_systolic(), metrics.bp_diastolic()),
        }
    }

    /// `(label, severity)` badges in dashboard column order
    #[must_use]
    pub const fn badges(&self) -> [(&'static str, RiskSeverity); 3] {
        [
            (self.stress.label(), self.stress.severity()),
            (self.sleep.label(), self.sleep.severity()),
            (self.blood_pressure.label(), self.blood_pressure.severity()),
        ]
    }

    /// Most severe of the three verdicts
    #[must_use]
    pub fn worst_severity(&self) -> RiskSeverity {
        self.badges()
            .into_iter()
            .map(|(_, severity)| severity)
            .max()
            .unwrap_or(RiskSeverity::Success)
    }
}
