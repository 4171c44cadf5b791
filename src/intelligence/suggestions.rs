// ABOUTME: Personalized lifestyle suggestions triggered by single-metric thresholds
// ABOUTME: Fixed priority order with an explicit balanced-lifestyle outcome when none fire
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::thresholds::{activity, blood_pressure, heart_rate, sleep, stress};
use crate::models::HealthMetrics;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Message shown when no suggestion rule fires
pub const BALANCED_MESSAGE: &str = "Your lifestyle looks balanced! Keep it up.";

/// One suggestion rule, declared in evaluation priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suggestion {
    /// Stress above 7
    Relaxation,
    /// Sleep under 6 hours
    MoreSleep,
    /// Activity under 30 minutes/day
    MoreActivity,
    /// Heart rate above 100 bpm
    HeartCheckup,
    /// Systolic above 140
    BloodPressureConsult,
}

impl Suggestion {
    /// All rules in priority order
    pub const ALL: [Self; 5] = [
        Self::Relaxation,
        Self::MoreSleep,
        Self::MoreActivity,
        Self::HeartCheckup,
        Self::BloodPressureConsult,
    ];

    /// Whether this rule fires for `metrics`
    #[must_use]
    pub const fn applies_to(self, metrics: &HealthMetrics) -> bool {
        match self {
            Self::Relaxation => metrics.stress_level() > stress::SUGGESTION_ABOVE,
            Self::MoreSleep => metrics.sleep_duration() < sleep::SUGGESTION_BELOW,
            Self::MoreActivity => {
                metrics.physical_activity_level() < activity::SUGGESTION_BELOW
            }
            Self::HeartCheckup => metrics.heart_rate() > heart_rate::SUGGESTION_ABOVE,
            Self::BloodPressureConsult => {
                metrics.bp_systolic() > blood_pressure::SYSTOLIC_SUGGESTION_ABOVE
            }
        }
    }

    /// Stable identifier
    #[must_use]
    pub const fn kind(self) -> &'static str {
        match self {
            Self::Relaxation => "relaxation",
            Self::MoreSleep => "more_sleep",
            Self::MoreActivity => "more_activity",
            Self::HeartCheckup => "heart_checkup",
            Self::BloodPressureConsult => "blood_pressure_consult",
        }
    }

    /// Text shown to the user
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Relaxation => "Try relaxation techniques (meditation, deep breathing).",
            Self::MoreSleep => "Aim for at least 7-8 hours of quality sleep.",
            Self::MoreActivity => "Increase daily activity, at least 30 mins/day.",
            Self::HeartCheckup => "Monitor your heart health, consider a check-up.",
            Self::BloodPressureConsult => "Consult doctor for high blood pressure management.",
        }
    }
}

impl Serialize for Suggestion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Suggestion", 2)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("message", self.message())?;
        state.end()
    }
}

/// Result of running every suggestion rule
///
/// `Balanced` is its own outcome rather than an empty list; renderers show the
/// affirmation for it. `Suggestions` always holds at least one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "items", rename_all = "snake_case")]
pub enum SuggestionOutcome {
    /// One or more rules fired, in priority order
    Suggestions(Vec<Suggestion>),
    /// No rule fired
    Balanced,
}

impl SuggestionOutcome {
    /// Evaluate all rules in priority order
    #[must_use]
    pub fn evaluate(metrics: &HealthMetrics) -> Self {
        let fired: Vec<Suggestion> = Suggestion::ALL
            .into_iter()
            .filter(|rule| rule.applies_to(metrics))
            .collect();
        if fired.is_empty() {
            Self::Balanced
        } else {
            Self::Suggestions(fired)
        }
    }

    /// Whether no rule fired
    #[must_use]
    pub const fn is_balanced(&self) -> bool {
        matches!(self, Self::Balanced)
    }

    /// Fired rules (empty slice when balanced)
    #[must_use]
    pub fn suggestions(&self) -> &[Suggestion] {
        match self {
            Self::Suggestions(items) => items,
            Self::Balanced => &[],
        }
    }

    /// Lines to display: the fired messages, or the balanced affirmation
    #[must_use]
    pub fn messages(&self) -> Vec<&'static str> {
        match self {
            Self::Suggestions(items) => items.iter().map(|item| item.message()).collect(),
            Self::Balanced => vec![BALANCED_MESSAGE],
        }
    }
}
