// ABOUTME: Health metric record with range-checked construction and fixed feature order
// ABOUTME: MetricField catalogue carries labels, bounds, and defaults for each input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::metric_bounds::{
    age, bp_diastolic, bp_systolic, daily_steps, heart_rate, physical_activity_level,
    quality_of_sleep, sleep_duration, stress_level,
};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// One of the nine health inputs, in classifier feature order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricField {
    /// Age in years
    Age,
    /// Sleep duration in hours
    SleepDuration,
    /// Self-rated sleep quality
    QualityOfSleep,
    /// Physical activity in minutes per day
    PhysicalActivityLevel,
    /// Self-rated stress
    StressLevel,
    /// Heart rate in bpm
    HeartRate,
    /// Steps per day
    DailySteps,
    /// Systolic blood pressure
    BpSystolic,
    /// Diastolic blood pressure
    BpDiastolic,
}

impl MetricField {
    /// Number of features the classifier is trained on
    pub const COUNT: usize = 9;

    /// All fields in feature order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Age,
        Self::SleepDuration,
        Self::QualityOfSleep,
        Self::PhysicalActivityLevel,
        Self::StressLevel,
        Self::HeartRate,
        Self::DailySteps,
        Self::BpSystolic,
        Self::BpDiastolic,
    ];

    /// Position of this field in the feature vector
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable `snake_case` key (JSON field name, model feature name)
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::SleepDuration => "sleep_duration",
            Self::QualityOfSleep => "quality_of_sleep",
            Self::PhysicalActivityLevel => "physical_activity_level",
            Self::StressLevel => "stress_level",
            Self::HeartRate => "heart_rate",
            Self::DailySteps => "daily_steps",
            Self::BpSystolic => "bp_systolic",
            Self::BpDiastolic => "bp_diastolic",
        }
    }

    /// Label shown next to the input control
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::SleepDuration => "Sleep Duration (hours)",
            Self::QualityOfSleep => "Quality of Sleep (1=Poor, 10=Excellent)",
            Self::PhysicalActivityLevel => "Physical Activity Level (minutes/day)",
            Self::StressLevel => "Stress Level (1=Low, 10=High)",
            Self::HeartRate => "Heart Rate (bpm)",
            Self::DailySteps => "Daily Steps",
            Self::BpSystolic => "Blood Pressure - Systolic",
            Self::BpDiastolic => "Blood Pressure - Diastolic",
        }
    }

    /// Name used in the summary report table
    #[must_use]
    pub const fn report_name(self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::SleepDuration => "Sleep Duration",
            Self::QualityOfSleep => "Quality of Sleep",
            Self::PhysicalActivityLevel => "Physical Activity",
            Self::StressLevel => "Stress Level",
            Self::HeartRate => "Heart Rate",
            Self::DailySteps => "Daily Steps",
            Self::BpSystolic => "BP Systolic",
            Self::BpDiastolic => "BP Diastolic",
        }
    }

    /// Inclusive lower bound
    #[must_use]
    pub const fn min(self) -> u32 {
        match self {
            Self::Age => age::MIN,
            Self::SleepDuration => sleep_duration::MIN,
            Self::QualityOfSleep => quality_of_sleep::MIN,
            Self::PhysicalActivityLevel => physical_activity_level::MIN,
            Self::StressLevel => stress_level::MIN,
            Self::HeartRate => heart_rate::MIN,
            Self::DailySteps => daily_steps::MIN,
            Self::BpSystolic => bp_systolic::MIN,
            Self::BpDiastolic => bp_diastolic::MIN,
        }
    }

    /// Inclusive upper bound
    #[must_use]
    pub const fn max(self) -> u32 {
        match self {
            Self::Age => age::MAX,
            Self::SleepDuration => sleep_duration::MAX,
            Self::QualityOfSleep => quality_of_sleep::MAX,
            Self::PhysicalActivityLevel => physical_activity_level::MAX,
            Self::StressLevel => stress_level::MAX,
            Self::HeartRate => heart_rate::MAX,
            Self::DailySteps => daily_steps::MAX,
            Self::BpSystolic => bp_systolic::MAX,
            Self::BpDiastolic => bp_diastolic::MAX,
        }
    }

    /// Value the control starts at
    #[must_use]
    pub const fn default_value(self) -> u32 {
        match self {
            Self::Age => age::DEFAULT,
            Self::SleepDuration => sleep_duration::DEFAULT,
            Self::QualityOfSleep => quality_of_sleep::DEFAULT,
            Self::PhysicalActivityLevel => physical_activity_level::DEFAULT,
            Self::StressLevel => stress_level::DEFAULT,
            Self::HeartRate => heart_rate::DEFAULT,
            Self::DailySteps => daily_steps::DEFAULT,
            Self::BpSystolic => bp_systolic::DEFAULT,
            Self::BpDiastolic => bp_diastolic::DEFAULT,
        }
    }

    /// Whether `raw` lies within `[min, max]`
    #[must_use]
    pub fn contains(self, raw: i64) -> bool {
        (i64::from(self.min())..=i64::from(self.max())).contains(&raw)
    }

    /// Slider semantics: pull `raw` to the nearest bound
    #[must_use]
    pub fn clamp(self, raw: i64) -> u32 {
        let clamped = raw.clamp(i64::from(self.min()), i64::from(self.max()));
        u32::try_from(clamped).unwrap_or_else(|_| self.max())
    }

    /// Number-entry semantics: reject `raw` when it is out of range
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when `raw` lies outside `[min, max]`
    pub fn check(self, raw: i64) -> AppResult<u32> {
        if self.contains(raw) {
            Ok(self.clamp(raw))
        } else {
            Err(AppError::out_of_range(
                self.key(),
                raw,
                self.min(),
                self.max(),
            ))
        }
    }

    /// Parse from the `snake_case` key (hyphens accepted)
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let normalized = key.trim().to_lowercase().replace('-', "_");
        Self::ALL.into_iter().find(|field| field.key() == normalized)
    }
}

impl fmt::Display for MetricField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Fixed-order numeric sequence handed to the classifier
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector([f64; MetricField::COUNT]);

impl FeatureVector {
    /// Feature values in `MetricField::ALL` order
    #[must_use]
    pub const fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of features
    #[must_use]
    pub const fn len(&self) -> usize {
        MetricField::COUNT
    }

    /// Always false; present for API symmetry with slices
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

/// Nine bounded health metrics captured by one interaction
///
/// Fields are private: every constructor range-checks or clamps, so a value
/// of this type always satisfies its per-field bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawHealthMetrics")]
pub struct HealthMetrics {
    age: u32,
    sleep_duration: u32,
    quality_of_sleep: u32,
    physical_activity_level: u32,
    stress_level: u32,
    heart_rate: u32,
    daily_steps: u32,
    bp_systolic: u32,
    bp_diastolic: u32,
}

impl HealthMetrics {
    /// Start a builder seeded with nothing (unset fields take their defaults)
    #[must_use]
    pub fn builder() -> HealthMetricsBuilder {
        HealthMetricsBuilder::default()
    }

    /// Build from values already known to be in range
    const fn from_checked(values: [u32; MetricField::COUNT]) -> Self {
        Self {
            age: values[0],
            sleep_duration: values[1],
            quality_of_sleep: values[2],
            physical_activity_level: values[3],
            stress_level: values[4],
            heart_rate: values[5],
            daily_steps: values[6],
            bp_systolic: values[7],
            bp_diastolic: values[8],
        }
    }

    /// Age in years
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Sleep duration in hours
    #[must_use]
    pub const fn sleep_duration(&self) -> u32 {
        self.sleep_duration
    }

    /// Self-rated sleep quality
    #[must_use]
    pub const fn quality_of_sleep(&self) -> u32 {
        self.quality_of_sleep
    }

    /// Physical activity in minutes per day
    #[must_use]
    pub const fn physical_activity_level(&self) -> u32 {
        self.physical_activity_level
    }

    /// Self-rated stress
    #[must_use]
    pub const fn stress_level(&self) -> u32 {
        self.stress_level
    }

    /// Heart rate in bpm
    #[must_use]
    pub const fn heart_rate(&self) -> u32 {
        self.heart_rate
    }

    /// Steps per day
    #[must_use]
    pub const fn daily_steps(&self) -> u32 {
        self.daily_steps
    }

    /// Systolic blood pressure
    #[must_use]
    pub const fn bp_systolic(&self) -> u32 {
        self.bp_systolic
    }

    /// Diastolic blood pressure
    #[must_use]
    pub const fn bp_diastolic(&self) -> u32 {
        self.bp_diastolic
    }

    /// Value of one field
    #[must_use]
    pub const fn get(&self, field: MetricField) -> u32 {
        match field {
            MetricField::Age => self.age,
            MetricField::SleepDuration => self.sleep_duration,
            MetricField::QualityOfSleep => self.quality_of_sleep,
            MetricField::PhysicalActivityLevel => self.physical_activity_level,
            MetricField::StressLevel => self.stress_level,
            MetricField::HeartRate => self.heart_rate,
            MetricField::DailySteps => self.daily_steps,
            MetricField::BpSystolic => self.bp_systolic,
            MetricField::BpDiastolic => self.bp_diastolic,
        }
    }

    /// `(field, value)` pairs in feature order
    pub fn entries(&self) -> impl Iterator<Item = (MetricField, u32)> + '_ {
        MetricField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }

    /// Feature record for the classifier, in trained feature order
    #[must_use]
    pub fn feature_vector(&self) -> FeatureVector {
        FeatureVector(MetricField::ALL.map(|field| f64::from(self.get(field))))
    }
}

impl Default for HealthMetrics {
    fn default() -> Self {
        Self::from_checked(MetricField::ALL.map(MetricField::default_value))
    }
}

/// Collects raw values before range handling
///
/// Unset fields fall back to the form defaults.
#[derive(Debug, Clone, Default)]
pub struct HealthMetricsBuilder {
    values: [Option<i64>; MetricField::COUNT],
}

impl HealthMetricsBuilder {
    /// Set any field by name
    #[must_use]
    pub fn set(mut self, field: MetricField, value: i64) -> Self {
        self.values[field.index()] = Some(value);
        self
    }

    /// Set age
    #[must_use]
    pub fn age(self, value: i64) -> Self {
        self.set(MetricField::Age, value)
    }

    /// Set sleep duration
    #[must_use]
    pub fn sleep_duration(self, value: i64) -> Self {
        self.set(MetricField::SleepDuration, value)
    }

    /// Set sleep quality
    #[must_use]
    pub fn quality_of_sleep(self, value: i64) -> Self {
        self.set(MetricField::QualityOfSleep, value)
    }

    /// Set physical activity level
    #[must_use]
    pub fn physical_activity_level(self, value: i64) -> Self {
        self.set(MetricField::PhysicalActivityLevel, value)
    }

    /// Set stress level
    #[must_use]
    pub fn stress_level(self, value: i64) -> Self {
        self.set(MetricField::StressLevel, value)
    }

    /// Set heart rate
    #[must_use]
    pub fn heart_rate(self, value: i64) -> Self {
        self.set(MetricField::HeartRate, value)
    }

    /// Set daily steps
    #[must_use]
    pub fn daily_steps(self, value: i64) -> Self {
        self.set(MetricField::DailySteps, value)
    }

    /// Set systolic blood pressure
    #[must_use]
    pub fn bp_systolic(self, value: i64) -> Self {
        self.set(MetricField::BpSystolic, value)
    }

    /// Set diastolic blood pressure
    #[must_use]
    pub fn bp_diastolic(self, value: i64) -> Self {
        self.set(MetricField::BpDiastolic, value)
    }

    fn raw(&self, field: MetricField) -> i64 {
        self.values[field.index()].unwrap_or_else(|| i64::from(field.default_value()))
    }

    /// Build, rejecting the first out-of-range value
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` naming the first offending field
    pub fn build(self) -> AppResult<HealthMetrics> {
        let mut values = [0_u32; MetricField::COUNT];
        for field in MetricField::ALL {
            values[field.index()] = field.check(self.raw(field))?;
        }
        Ok(HealthMetrics::from_checked(values))
    }

    /// Build, clamping every value into its range
    #[must_use]
    pub fn build_clamped(self) -> HealthMetrics {
        HealthMetrics::from_checked(MetricField::ALL.map(|field| {
            let raw = self.raw(field);
            let value = field.clamp(raw);
            if i64::from(value) != raw {
                debug!(field = field.key(), raw, value, "Clamped metric into range");
            }
            value
        }))
    }
}

/// Unvalidated wire form of [`HealthMetrics`]
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawHealthMetrics {
    age: i64,
    sleep_duration: i64,
    quality_of_sleep: i64,
    physical_activity_level: i64,
    stress_level: i64,
    heart_rate: i64,
    daily_steps: i64,
    bp_systolic: i64,
    bp_diastolic: i64,
}

impl TryFrom<RawHealthMetrics> for HealthMetrics {
    type Error = AppError;

    fn try_from(raw: RawHealthMetrics) -> Result<Self, Self::Error> {
        HealthMetrics::builder()
            .age(raw.age)
            .sleep_duration(raw.sleep_duration)
            .quality_of_sleep(raw.quality_of_sleep)
            .physical_activity_level(raw.physical_activity_level)
            .stress_level(raw.stress_level)
            .heart_rate(raw.heart_rate)
            .daily_steps(raw.daily_steps)
            .bp_systolic(raw.bp_systolic)
            .bp_diastolic(raw.bp_diastolic)
            .build()
    }
}
