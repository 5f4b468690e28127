pub mod json;
pub mod text;

use serde::Serialize;

use crate::bands::{Band, BandTable};
use crate::catalog::MetricDefinition;
use crate::engine::{BatchReport, ScoreOutcome};
use crate::error::ScoreError;
use crate::types::profile::{Profile, SkillLevel};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

/// One metric's definition plus the bands a given profile would score
/// against, as shown by `explain`.
#[derive(Debug, Serialize)]
pub struct Explanation<'a> {
    pub metric: &'a MetricDefinition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    pub bands: Vec<&'a Band>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comparison: Vec<SkillRange>,
}

/// One skill level's good range at the caller's age group.
#[derive(Debug, Serialize)]
pub struct SkillRange {
    pub skill_level: SkillLevel,
    pub range_min: f64,
    pub range_max: f64,
    pub selected: bool,
}

impl<'a> Explanation<'a> {
    /// Collect the bands the profile scores against, and for banded
    /// metrics the good range of every skill level at the same age
    /// group, the caller's own marked.
    pub fn build(
        metric: &'a MetricDefinition,
        profile: Option<Profile>,
        bands: &'a BandTable,
    ) -> Explanation<'a> {
        let comparison = match profile {
            Some(profile) => SkillLevel::ALL
                .iter()
                .filter_map(|&skill_level| {
                    let candidate = Profile::new(profile.age_group, skill_level);
                    bands
                        .eligible(metric.name, Some(candidate))
                        .iter()
                        .find_map(|band| band.good_bounds())
                        .map(|(range_min, range_max)| SkillRange {
                            skill_level,
                            range_min,
                            range_max,
                            selected: skill_level == profile.skill_level,
                        })
                })
                .collect(),
            None => Vec::new(),
        };
        Explanation {
            metric,
            profile,
            bands: bands.eligible(metric.name, profile),
            comparison,
        }
    }
}

pub fn render_outcome(outcome: &ScoreOutcome, format: OutputFormat) -> Result<String, ScoreError> {
    match format {
        OutputFormat::Text => Ok(text::outcome_text(outcome)),
        OutputFormat::Json => json::to_json(outcome).map_err(ScoreError::Json),
    }
}

pub fn render_batch(report: &BatchReport, format: OutputFormat) -> Result<String, ScoreError> {
    match format {
        OutputFormat::Text => Ok(text::batch_text(report)),
        OutputFormat::Json => json::batch_to_json(report).map_err(ScoreError::Json),
    }
}

pub fn render_catalog(
    metrics: &[&MetricDefinition],
    format: OutputFormat,
) -> Result<String, ScoreError> {
    match format {
        OutputFormat::Text => Ok(text::catalog_text(metrics)),
        OutputFormat::Json => json::catalog_to_json(metrics).map_err(ScoreError::Json),
    }
}

pub fn render_explanation(
    explanation: &Explanation<'_>,
    format: OutputFormat,
) -> Result<String, ScoreError> {
    match format {
        OutputFormat::Text => Ok(text::explanation_text(explanation)),
        OutputFormat::Json => json::explanation_to_json(explanation).map_err(ScoreError::Json),
    }
}
