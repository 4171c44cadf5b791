// ABOUTME: Integration tests for the health risk dashboard verdicts
// ABOUTME: Covers threshold boundaries, totality over valid ranges, and badge severities
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use sleep_disorder_predictor::intelligence::{
    BpRisk, RiskAssessment, RiskSeverity, SleepRisk, StressRisk,
};
use sleep_disorder_predictor::models::{HealthMetrics, MetricField};

#[test]
fn test_stress_boundaries() {
    assert_eq!(StressRisk::from_level(1), StressRisk::Low);
    assert_eq!(StressRisk::from_level(4), StressRisk::Low);
    assert_eq!(StressRisk::from_level(5), StressRisk::Moderate);
    assert_eq!(StressRisk::from_level(7), StressRisk::Moderate);
    assert_eq!(StressRisk::from_level(8), StressRisk::High);
    assert_eq!(StressRisk::from_level(10), StressRisk::High);
}

#[test]
fn test_sleep_boundaries() {
    assert_eq!(SleepRisk::from_duration(0), SleepRisk::Poor);
    assert_eq!(SleepRisk::from_duration(4), SleepRisk::Poor);
    assert_eq!(SleepRisk::from_duration(5), SleepRisk::Borderline);
    assert_eq!(SleepRisk::from_duration(6), SleepRisk::Borderline);
    assert_eq!(SleepRisk::from_duration(7), SleepRisk::Healthy);
    assert_eq!(SleepRisk::from_duration(12), SleepRisk::Healthy);
}

#[test]
fn test_blood_pressure_boundaries() {
    assert_eq!(BpRisk::from_pressure(140, 90), BpRisk::Normal);
    assert_eq!(BpRisk::from_pressure(141, 90), BpRisk::High);
    assert_eq!(BpRisk::from_pressure(140, 91), BpRisk::High);
    assert_eq!(BpRisk::from_pressure(80, 50), BpRisk::Normal);
}

#[test]
fn test_inverted_pressure_is_not_rejected() {
    // Diastolic above systolic is accepted and judged on the thresholds alone
    let metrics = HealthMetrics::builder()
        .bp_systolic(90)
        .bp_diastolic(120)
        .build()
        .unwrap();
    let risks = RiskAssessment::assess(&metrics);
    assert_eq!(risks.blood_pressure, BpRisk::High);
}

#[test]
fn test_totality_over_valid_ranges() {
    for stress in MetricField::StressLevel.min()..=MetricField::StressLevel.max() {
        let risk = StressRisk::from_level(stress);
        assert!(matches!(
            risk,
            StressRisk::Low | StressRisk::Moderate | StressRisk::High
        ));
    }
    for hours in MetricField::SleepDuration.min()..=MetricField::SleepDuration.max() {
        let risk = SleepRisk::from_duration(hours);
        assert!(matches!(
            risk,
            SleepRisk::Healthy | SleepRisk::Borderline | SleepRisk::Poor
        ));
    }
    for systolic in MetricField::BpSystolic.min()..=MetricField::BpSystolic.max() {
        for diastolic in MetricField::BpDiastolic.min()..=MetricField::BpDiastolic.max() {
            let risk = BpRisk::from_pressure(systolic, diastolic);
            let expected_high = systolic > 140 || diastolic > 90;
            assert_eq!(risk == BpRisk::High, expected_high);
        }
    }
}

#[test]
fn test_assessment_of_balanced_record() {
    let risks = RiskAssessment::assess(&common::balanced_metrics());
    assert_eq!(risks.stress, StressRisk::Low);
    assert_eq!(risks.sleep, SleepRisk::Healthy);
    assert_eq!(risks.blood_pressure, BpRisk::Normal);
    assert_eq!(risks.worst_severity(), RiskSeverity::Success);
}

#[test]
fn test_badges_follow_dashboard_order() {
    let risks = RiskAssessment::assess(&common::all_triggers_metrics());
    let badges = risks.badges();
    assert_eq!(badges[0], ("High Stress", RiskSeverity::Error));
    assert_eq!(badges[1], ("Poor Sleep", RiskSeverity::Error));
    assert_eq!(badges[2], ("High Blood Pressure", RiskSeverity::Error));
}

#[test]
fn test_moderate_and_borderline_are_warnings() {
    let metrics = HealthMetrics::builder()
        .stress_level(6)
        .sleep_duration(6)
        .build()
        .unwrap();
    let risks = RiskAssessment::assess(&metrics);
    assert_eq!(risks.stress.severity(), RiskSeverity::Warning);
    assert_eq!(risks.sleep.severity(), RiskSeverity::Warning);
    assert_eq!(risks.worst_severity(), RiskSeverity::Warning);
}

#[test]
fn test_assessment_ignores_other_fields() {
    let base = common::balanced_metrics();
    let changed = HealthMetrics::builder()
        .age(90)
        .sleep_duration(i64::from(base.sleep_duration()))
        .quality_of_sleep(1)
        .physical_activity_level(0)
        .stress_level(i64::from(base.stress_level()))
        .heart_rate(119)
        .daily_steps(0)
        .bp_systolic(i64::from(base.bp_systolic()))
        .bp_diastolic(i64::from(base.bp_diastolic()))
        .build()
        .unwrap();
    assert_eq!(RiskAssessment::assess(&base), RiskAssessment::assess(&changed));
}
