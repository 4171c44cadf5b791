// ABOUTME: Sleep disorder predictor command-line front end
// ABOUTME: Collects the nine health inputs, runs the classifier, and renders the dashboard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Evaluate once from flags (unset fields keep their defaults)
//! sleep-predictor predict --age 45 --sleep-duration 5 --stress-level 8
//!
//! # Evaluate a JSON document, flags override its values
//! sleep-predictor predict --input metrics.json --heart-rate 105
//!
//! # Interactive form
//! sleep-predictor form
//!
//! # List the inputs with their ranges and defaults
//! sleep-predictor fields
//!
//! # JSON output with a specific model artifact
//! sleep-predictor --format json --model models/sleep_model.json predict
//! ```

use clap::{Args, Parser, Subcommand};
use sleep_disorder_predictor::{
    collector::{InputCollector, InputSource, JsonSource, PresetValues, PromptSource, RangePolicy},
    config::PredictorConfig,
    constants::display,
    errors::{AppError, AppResult},
    formatters::{format_error, format_evaluation, render_field_catalogue, OutputFormat},
    logging::LoggingConfig,
    models::{HealthMetrics, MetricField},
    predictor::Predictor,
};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "sleep-predictor",
    about = "Sleep Disorder Prediction",
    long_about = "Predict a sleep disorder from nine lifestyle and health metrics, with a risk dashboard and personalised suggestions."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Classifier artifact override
    #[arg(long, global = true)]
    model: Option<PathBuf>,

    /// Output format override
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Evaluate one record given by flags and/or a JSON document
    Predict {
        #[command(flatten)]
        metrics: MetricArgs,

        /// JSON document with field values (`-` reads stdin)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Pull out-of-range values to the nearest bound instead of failing
        #[arg(long)]
        clamp: bool,
    },

    /// Prompt for each input on the terminal, then predict
    Form,

    /// List the inputs with their ranges and defaults
    Fields,
}

#[derive(Args)]
struct MetricArgs {
    /// Age in years (10-100)
    #[arg(long, allow_negative_numbers = true)]
    age: Option<i64>,

    /// Sleep duration in hours (0-12)
    #[arg(long, allow_negative_numbers = true)]
    sleep_duration: Option<i64>,

    /// Quality of sleep (1-10)
    #[arg(long, allow_negative_numbers = true)]
    quality_of_sleep: Option<i64>,

    /// Physical activity in minutes/day (0-300)
    #[arg(long, allow_negative_numbers = true)]
    physical_activity_level: Option<i64>,

    /// Stress level (1-10)
    #[arg(long, allow_negative_numbers = true)]
    stress_level: Option<i64>,

    /// Heart rate in bpm (40-120)
    #[arg(long, allow_negative_numbers = true)]
    heart_rate: Option<i64>,

    /// Daily steps (0-30000)
    #[arg(long, allow_negative_numbers = true)]
    daily_steps: Option<i64>,

    /// Systolic blood pressure (80-200)
    #[arg(long, allow_negative_numbers = true)]
    bp_systolic: Option<i64>,

    /// Diastolic blood pressure (50-130)
    #[arg(long, allow_negative_numbers = true)]
    bp_diastolic: Option<i64>,
}

impl MetricArgs {
    fn into_preset(self) -> PresetValues {
        PresetValues::default()
            .with_opt(MetricField::Age, self.age)
            .with_opt(MetricField::SleepDuration, self.sleep_duration)
            .with_opt(MetricField::QualityOfSleep, self.quality_of_sleep)
            .with_opt(MetricField::PhysicalActivityLevel, self.physical_activity_level)
            .with_opt(MetricField::StressLevel, self.stress_level)
            .with_opt(MetricField::HeartRate, self.heart_rate)
            .with_opt(MetricField::DailySteps, self.daily_steps)
            .with_opt(MetricField::BpSystolic, self.bp_systolic)
            .with_opt(MetricField::BpDiastolic, self.bp_diastolic)
    }
}

/// Flags first, then the JSON document, then the form default
struct LayeredSource {
    flags: PresetValues,
    document: Option<JsonSource>,
}

impl InputSource for LayeredSource {
    fn read(&mut self, field: MetricField) -> AppResult<Option<i64>> {
        if let Some(value) = self.flags.read(field)? {
            return Ok(Some(value));
        }
        match self.document.as_mut() {
            Some(document) => document.read(field),
            None => Ok(None),
        }
    }
}

fn read_document(path: &Path) -> AppResult<JsonSource> {
    if path.as_os_str() == "-" {
        return JsonSource::from_reader(io::stdin().lock());
    }
    let file = File::open(path).map_err(|e| {
        AppError::invalid_input(format!("cannot open input {}", path.display())).with_source(e)
    })?;
    JsonSource::from_reader(BufReader::new(file))
}

fn render(predictor: &Predictor, metrics: &HealthMetrics, format: OutputFormat) -> AppResult<String> {
    let result = predictor.predict(metrics)?;
    Ok(format_evaluation(&result, format)?.data)
}

fn run(command: Command, config: &PredictorConfig) -> AppResult<String> {
    match command {
        Command::Fields => Ok(render_field_catalogue()),
        Command::Predict {
            metrics,
            input,
            clamp,
        } => {
            let predictor = Predictor::load(config)?;
            let document = input.as_deref().map(read_document).transpose()?;
            let mut source = LayeredSource {
                flags: metrics.into_preset(),
                document,
            };
            let policy = if clamp {
                RangePolicy::Clamp
            } else {
                RangePolicy::Reject
            };
            let metrics = InputCollector::new(policy).collect(&mut source)?;
            render(&predictor, &metrics, config.output_format)
        }
        Command::Form => {
            let predictor = Predictor::load(config)?;
            let stdout = io::stdout();
            {
                let mut out = stdout.lock();
                writeln!(
                    out,
                    "{}\n{}\n\n{}",
                    display::TITLE,
                    display::SUBTITLE,
                    display::FORM_HEADING
                )
                .map_err(|e| AppError::internal("terminal I/O failed").with_source(e))?;
            }
            let mut source = PromptSource::new(io::stdin().lock(), stdout.lock());
            let metrics = InputCollector::new(RangePolicy::Clamp).collect(&mut source)?;
            drop(source);
            render(&predictor, &metrics, config.output_format)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::from_env().verbose(cli.verbose).init() {
        eprintln!("warning: {e}");
    }

    let config = PredictorConfig::from_env().with_overrides(cli.model, cli.format);
    info!(
        model = %config.model_path.display(),
        format = %config.output_format,
        "Starting sleep predictor"
    );

    match run(cli.command, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(code = ?e.code, error = %e, "Command failed");
            eprintln!("{}", format_error(&e, config.output_format));
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}
