use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::catalog::Phase;
use crate::types::profile::{AgeGroup, SkillLevel};

#[derive(Parser)]
#[command(
    name = "pitchscore",
    version,
    about = "Quality scoring for baseball pitching biomechanics metrics"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the metric catalog
    List(ListCommand),
    /// Show one metric's definition and scoring bands
    Explain(ExplainCommand),
    /// Score a single observed value
    Score(ScoreCommand),
    /// Score a JSON file of observations
    Batch(BatchCommand),
}

#[derive(Args)]
pub struct ListCommand {
    /// Restrict the listing to one delivery phase
    #[arg(long, value_enum)]
    pub phase: Option<Phase>,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ExplainCommand {
    /// Metric name exactly as listed in the catalog
    pub metric: String,

    #[arg(long, value_enum, requires = "skill_level")]
    pub age_group: Option<AgeGroup>,

    #[arg(long, value_enum, requires = "age_group")]
    pub skill_level: Option<SkillLevel>,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Metric name exactly as listed in the catalog
    pub metric: String,

    /// Observed measurement value
    #[arg(allow_negative_numbers = true)]
    pub value: f64,

    #[arg(long, value_enum, requires = "skill_level")]
    pub age_group: Option<AgeGroup>,

    #[arg(long, value_enum, requires = "age_group")]
    pub skill_level: Option<SkillLevel>,

    /// Threshold override as KEY=VALUE; repeatable
    #[arg(short, long, value_name = "KEY=VALUE")]
    pub param: Vec<String>,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct BatchCommand {
    /// JSON file holding an array of {metric, value, ...} entries
    pub file: PathBuf,

    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ReportFormat,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}
