// ABOUTME: Input collector gathering nine bounded health metrics into one record
// ABOUTME: Supports preset values, JSON documents, and an interactive prompt form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Input Collector
//!
//! Each field is read through a bounded control. A control either clamps an
//! out-of-range entry (slider semantics) or rejects it (number-entry
//! semantics); either way the resulting [`HealthMetrics`] is always in range.
//! Fields a source leaves unset keep their form default. No cross-field checks
//! are made.

use crate::errors::{AppError, AppResult};
use crate::models::{HealthMetrics, MetricField};
use serde_json::{Map, Value};
use std::io::{self, BufRead, Read, Write};
use tracing::debug;

/// How a control treats an out-of-range entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangePolicy {
    /// Pull the value to the nearest bound
    Clamp,
    /// Fail with `ValueOutOfRange`
    #[default]
    Reject,
}

/// Something that can supply raw values for the form fields
pub trait InputSource {
    /// Raw entry for `field`, or `None` to keep the default
    ///
    /// # Errors
    ///
    /// Returns an input error when the source cannot produce a value
    fn read(&mut self, field: MetricField) -> AppResult<Option<i64>>;
}

/// Gathers one [`HealthMetrics`] record from an [`InputSource`]
#[derive(Debug, Clone, Copy, Default)]
pub struct InputCollector {
    policy: RangePolicy,
}

impl InputCollector {
    /// Collector with the given range policy
    #[must_use]
    pub const fn new(policy: RangePolicy) -> Self {
        Self { policy }
    }

    /// Read every field in feature order and build the record
    ///
    /// # Errors
    ///
    /// Returns the source's error, or `ValueOutOfRange` under
    /// [`RangePolicy::Reject`]
    pub fn collect(&self, source: &mut dyn InputSource) -> AppResult<HealthMetrics> {
        let mut builder = HealthMetrics::builder();
        for field in MetricField::ALL {
            if let Some(raw) = source.read(field)? {
                builder = builder.set(field, raw);
            }
        }
        let metrics = match self.policy {
            RangePolicy::Clamp => builder.build_clamped(),
            RangePolicy::Reject => builder.build()?,
        };
        debug!(?metrics, "Collected health metrics");
        Ok(metrics)
    }
}

/// Values supplied up front (command-line flags, tests)
#[derive(Debug, Clone, Default)]
pub struct PresetValues {
    values: [Option<i64>; MetricField::COUNT],
}

impl PresetValues {
    /// Provide a value for `field`
    #[must_use]
    pub fn with(mut self, field: MetricField, value: i64) -> Self {
        self.values[field.index()] = Some(value);
        self
    }

    /// Provide an optional value for `field`
    #[must_use]
    pub fn with_opt(mut self, field: MetricField, value: Option<i64>) -> Self {
        self.values[field.index()] = value;
        self
    }
}

impl InputSource for PresetValues {
    fn read(&mut self, field: MetricField) -> AppResult<Option<i64>> {
        Ok(self.values[field.index()])
    }
}

/// A JSON object keyed by field name (`snake_case`, hyphens accepted)
#[derive(Debug, Clone)]
pub struct JsonSource {
    values: [Option<i64>; MetricField::COUNT],
}

impl JsonSource {
    /// Parse a JSON document
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the document is not an object of integer
    /// values keyed by known field names
    pub fn from_reader(reader: impl Read) -> AppResult<Self> {
        let document: Value = serde_json::from_reader(reader).map_err(|e| {
            AppError::invalid_input(format!("input is not valid JSON: {e}")).with_source(e)
        })?;
        match document {
            Value::Object(map) => Self::from_map(&map),
            other => Err(AppError::invalid_input(format!(
                "input must be a JSON object, found {}",
                json_type(&other)
            ))),
        }
    }

    fn from_map(map: &Map<String, Value>) -> AppResult<Self> {
        let mut values = [None; MetricField::COUNT];
        for (key, value) in map {
            let field = MetricField::from_key(key)
                .ok_or_else(|| AppError::invalid_input(format!("unknown field '{key}'")))?;
            let raw = value.as_i64().ok_or_else(|| {
                AppError::invalid_input(format!("field '{key}' must be an integer, found {value}"))
            })?;
            values[field.index()] = Some(raw);
        }
        Ok(Self { values })
    }
}

impl InputSource for JsonSource {
    fn read(&mut self, field: MetricField) -> AppResult<Option<i64>> {
        Ok(self.values[field.index()])
    }
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Interactive form on a line-oriented terminal
///
/// Each prompt shows the range and default. An empty line or end of input
/// keeps the default, an unparseable line asks again, and an out-of-range
/// number is reported and handed on for the collector to clamp.
pub struct PromptSource<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptSource<R, W> {
    /// Prompt on `output`, read answers from `input`
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn io_error(e: io::Error) -> AppError {
        AppError::internal("terminal I/O failed").with_source(e)
    }
}

impl<R: BufRead, W: Write> InputSource for PromptSource<R, W> {
    fn read(&mut self, field: MetricField) -> AppResult<Option<i64>> {
        loop {
            write!(
                self.output,
                "{} [{}-{}, default {}]: ",
                field.label(),
                field.min(),
                field.max(),
                field.default_value()
            )
            .and_then(|()| self.output.flush())
            .map_err(Self::io_error)?;

            let mut line = String::new();
            let read = self.input.read_line(&mut line).map_err(Self::io_error)?;
            let answer = line.trim();
            if read == 0 || answer.is_empty() {
                return Ok(None);
            }

            match answer.parse::<i64>() {
                Ok(raw) => {
                    if !field.contains(raw) {
                        writeln!(
                            self.output,
                            "  {raw} is outside {}-{}, using {}",
                            field.min(),
                            field.max(),
                            field.clamp(raw)
                        )
                        .map_err(Self::io_error)?;
                    }
                    return Ok(Some(raw));
                }
                Err(_) => {
                    writeln!(self.output, "  '{answer}' is not a whole number, try again")
                        .map_err(Self::io_error)?;
                }
            }
        }
    }
}
