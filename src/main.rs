mod bands;
mod catalog;
mod cli;
mod config;
mod engine;
mod error;
mod report;
mod types;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use crate::bands::BandTable;
use crate::catalog::{MetricCatalog, Thresholds};
use crate::engine::{BatchEntry, ScoreRequest};
use crate::error::ScoreError;
use crate::types::config::ScoreConfig;
use crate::types::profile::Profile;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const PARTIAL: i32 = 1;
    pub const REJECTED: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run() -> Result<i32, ScoreError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let catalog = MetricCatalog::standard();
    let bands = BandTable::standard();

    match cli.command {
        cli::Commands::List(cmd) => {
            let metrics: Vec<_> = match cmd.phase {
                Some(phase) => catalog.by_phase(phase).collect(),
                None => catalog.iter().collect(),
            };
            let rendered = report::render_catalog(&metrics, output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Explain(cmd) => {
            let metric = catalog
                .lookup(&cmd.metric)
                .ok_or_else(|| ScoreError::MetricNotFound(cmd.metric.clone()))?;
            let profile = cmd
                .age_group
                .zip(cmd.skill_level)
                .map(|(age, skill)| Profile::new(age, skill));
            let explanation = report::Explanation::build(metric, profile, &bands);
            let rendered = report::render_explanation(&explanation, output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Score(cmd) => {
            let loaded = load_validated_config(&catalog)?;
            let profile = cmd
                .age_group
                .zip(cmd.skill_level)
                .map(|(age, skill)| Profile::new(age, skill))
                .or_else(|| loaded.as_ref().and_then(|cfg| cfg.default_profile()));
            let thresholds = parse_overrides(&cmd.metric, &cmd.param)?
                .or_else(|| loaded.as_ref().and_then(|cfg| cfg.parameters_for(&cmd.metric)));
            let request = ScoreRequest {
                metric: &cmd.metric,
                value: cmd.value,
                profile,
                thresholds,
            };
            let outcome = engine::score(&catalog, &bands, &request)?;
            let rendered = report::render_outcome(&outcome, output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Batch(cmd) => {
            if !cmd.file.exists() {
                return Err(ScoreError::BatchInput(format!(
                    "file not found: {}",
                    cmd.file.display()
                )));
            }
            let loaded = load_validated_config(&catalog)?;
            let content = std::fs::read_to_string(&cmd.file)?;
            let mut entries: Vec<BatchEntry> = serde_json::from_str(&content)
                .map_err(|e| ScoreError::BatchInput(format!("{}: {}", cmd.file.display(), e)))?;
            if let Some(cfg) = &loaded {
                for entry in &mut entries {
                    if entry.parameters.is_none() {
                        entry.parameters = cfg.parameters_for(&entry.metric);
                    }
                }
            }
            let default_profile = loaded.as_ref().and_then(|cfg| cfg.default_profile());
            let batch_report = engine::score_batch(&catalog, &bands, &entries, default_profile);
            let rendered = report::render_batch(&batch_report, output_format(&cmd.format))?;
            println!("{rendered}");
            if batch_report.has_failures() {
                Ok(exit_code::PARTIAL)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
    }
}

fn load_validated_config(catalog: &MetricCatalog) -> Result<Option<ScoreConfig>, ScoreError> {
    let working_dir = std::env::current_dir()?;
    let loaded = config::load_config(&working_dir)?;
    if let Some(cfg) = &loaded {
        cfg.validate(catalog)?;
    }
    Ok(loaded)
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Text => report::OutputFormat::Text,
        cli::ReportFormat::Json => report::OutputFormat::Json,
    }
}

fn parse_overrides(metric: &str, params: &[String]) -> Result<Option<Thresholds>, ScoreError> {
    if params.is_empty() {
        return Ok(None);
    }
    let mut thresholds = Thresholds::default();
    for param in params {
        let (key, raw) = param.split_once('=').ok_or_else(|| {
            invalid_param(metric, format!("expected KEY=VALUE, got '{param}'"))
        })?;
        let value: f64 = raw.trim().parse().map_err(|_| {
            invalid_param(metric, format!("'{raw}' is not a number for {key}"))
        })?;
        thresholds
            .set(key.trim(), value)
            .map_err(|unknown| invalid_param(metric, format!("unknown threshold key: {unknown}")))?;
    }
    Ok(Some(thresholds))
}

fn invalid_param(metric: &str, detail: String) -> ScoreError {
    ScoreError::InvalidParameters {
        metric: metric.to_string(),
        detail,
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_scoring_rejection() {
                exit_code::REJECTED
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
