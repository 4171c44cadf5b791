// ABOUTME: Criterion benchmarks for the classifier and the evaluator
// ABOUTME: Measures softmax scoring, rule evaluation, and full text rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for one prediction cycle.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(clippy::cast_possible_wrap)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sleep_disorder_predictor::classifier::{classify, Classifier, SoftmaxClassifier};
use sleep_disorder_predictor::formatters::{format_evaluation, OutputFormat};
use sleep_disorder_predictor::intelligence::evaluate;
use sleep_disorder_predictor::models::{HealthMetrics, MetricField};

const DEMO_MODEL_JSON: &str = include_str!("../models/sleep_model.json");

/// Deterministic spread of records across every field range
fn generate_metrics(count: usize) -> Vec<HealthMetrics> {
    (0..count)
        .map(|index| {
            MetricField::ALL
                .into_iter()
                .fold(HealthMetrics::builder(), |builder, field| {
                    let span = i64::from(field.max() - field.min()) + 1;
                    let offset = (index as i64 * 7919 + field.index() as i64 * 104_729) % span;
                    builder.set(field, i64::from(field.min()) + offset)
                })
                .build()
                .unwrap()
        })
        .collect()
}

fn bench_classifier(c: &mut Criterion) {
    let mut group = c.benchmark_group("classifier");
    let classifier = SoftmaxClassifier::from_json(DEMO_MODEL_JSON).unwrap();
    let metrics = generate_metrics(1)[0];
    let features = metrics.feature_vector();

    group.bench_function("predict_proba", |b| {
        b.iter(|| classifier.predict_proba(black_box(&features)));
    });
    group.bench_function("classify", |b| {
        b.iter(|| classify(&classifier, black_box(&metrics)));
    });

    group.finish();
}

fn bench_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluation");
    let classifier = SoftmaxClassifier::from_json(DEMO_MODEL_JSON).unwrap();

    for count in [10_usize, 100, 1000] {
        let records = generate_metrics(count);
        let outputs: Vec<_> = records
            .iter()
            .map(|metrics| classify(&classifier, metrics).unwrap())
            .collect();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("evaluate", count), &count, |b, _| {
            b.iter(|| {
                records
                    .iter()
                    .zip(&outputs)
                    .map(|(metrics, output)| evaluate(black_box(metrics), black_box(output)))
                    .filter(Result::is_ok)
                    .count()
            });
        });
    }

    group.finish();
}

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    let classifier = SoftmaxClassifier::from_json(DEMO_MODEL_JSON).unwrap();
    let metrics = generate_metrics(1)[0];
    let result = evaluate(&metrics, &classify(&classifier, &metrics).unwrap()).unwrap();

    for format in [OutputFormat::Text, OutputFormat::Json] {
        group.bench_with_input(BenchmarkId::new("format", format), &format, |b, &format| {
            b.iter(|| format_evaluation(black_box(&result), format));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classifier, bench_evaluation, bench_rendering);
criterion_main!(benches);
