// ABOUTME: Inclusive input ranges and form defaults for each health metric
// ABOUTME: Values match the bounded controls of the input form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Age in years
pub mod age {
    /// Lower bound
    pub const MIN: u32 = 10;
    /// Upper bound
    pub const MAX: u32 = 100;
    /// Form default
    pub const DEFAULT: u32 = 25;
}

/// Sleep duration in whole hours
pub mod sleep_duration {
    /// Lower bound
    pub const MIN: u32 = 0;
    /// Upper bound
    pub const MAX: u32 = 12;
    /// Form default
    pub const DEFAULT: u32 = 7;
}

/// Self-rated sleep quality (1 = poor, 10 = excellent)
pub mod quality_of_sleep {
    /// Lower bound
    pub const MIN: u32 = 1;
    /// Upper bound
    pub const MAX: u32 = 10;
    /// Form default
    pub const DEFAULT: u32 = 5;
}

/// Physical activity in minutes per day
pub mod physical_activity_level {
    /// Lower bound
    pub const MIN: u32 = 0;
    /// Upper bound
    pub const MAX: u32 = 300;
    /// Form default
    pub const DEFAULT: u32 = 30;
}

/// Self-rated stress (1 = low, 10 = high)
pub mod stress_level {
    /// Lower bound
    pub const MIN: u32 = 1;
    /// Upper bound
    pub const MAX: u32 = 10;
    /// Form default
    pub const DEFAULT: u32 = 5;
}

/// Resting heart rate in bpm
pub mod heart_rate {
    /// Lower bound
    pub const MIN: u32 = 40;
    /// Upper bound
    pub const MAX: u32 = 120;
    /// Form default
    pub const DEFAULT: u32 = 70;
}

/// Steps per day
pub mod daily_steps {
    /// Lower bound
    pub const MIN: u32 = 0;
    /// Upper bound
    pub const MAX: u32 = 30_000;
    /// Form default
    pub const DEFAULT: u32 = 5_000;
}

/// Systolic blood pressure in mmHg
pub mod bp_systolic {
    /// Lower bound
    pub const MIN: u32 = 80;
    /// Upper bound
    pub const MAX: u32 = 200;
    /// Form default
    pub const DEFAULT: u32 = 120;
}

/// Diastolic blood pressure in mmHg
pub mod bp_diastolic {
    /// Lower bound
    pub const MIN: u32 = 50;
    /// Upper bound
    pub const MAX: u32 = 130;
    /// Form default
    pub const DEFAULT: u32 = 80;
}
