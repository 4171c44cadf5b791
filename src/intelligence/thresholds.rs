// ABOUTME: Threshold constants for the risk dashboard and lifestyle suggestion rules
// ABOUTME: Every comparison is strict; a value exactly at a threshold takes the milder branch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Thresholds used by the rule layer
//!
//! Risk badges and suggestions read their cut-offs from here. Suggestion
//! thresholds are separate constants from the badge thresholds: sleep flags a
//! suggestion below 6 hours while its badge cut-offs are 5 and 7.

/// Stress level (1-10 self rating)
pub mod stress {
    /// Above this the stress badge is High
    pub const HIGH_ABOVE: u32 = 7;
    /// Above this (and not High) the stress badge is Moderate
    pub const MODERATE_ABOVE: u32 = 4;
    /// Above this a relaxation suggestion is given
    pub const SUGGESTION_ABOVE: u32 = 7;
}

/// Sleep duration in hours
pub mod sleep {
    /// Below this the sleep badge is Poor
    pub const POOR_BELOW: u32 = 5;
    /// Below this (and not Poor) the sleep badge is Borderline
    pub const BORDERLINE_BELOW: u32 = 7;
    /// Below this a longer-sleep suggestion is given
    pub const SUGGESTION_BELOW: u32 = 6;
}

/// Blood pressure in mmHg
///
/// Reference: Stage 2 hypertension starts at 140/90
/// (Whelton, P.K., et al. (2018). ACC/AHA Guideline for High Blood Pressure in Adults)
pub mod blood_pressure {
    /// Systolic above this marks High blood pressure
    pub const SYSTOLIC_HIGH_ABOVE: u32 = 140;
    /// Diastolic above this marks High blood pressure
    pub const DIASTOLIC_HIGH_ABOVE: u32 = 90;
    /// Systolic above this triggers the consult-a-doctor suggestion
    pub const SYSTOLIC_SUGGESTION_ABOVE: u32 = 140;
}

/// Physical activity in minutes per day
pub mod activity {
    /// Below this an increase-activity suggestion is given
    pub const SUGGESTION_BELOW: u32 = 30;
}

/// Heart rate in bpm
pub mod heart_rate {
    /// Above this a heart-health suggestion is given (resting tachycardia)
    pub const SUGGESTION_ABOVE: u32 = 100;
}
