//! Scoring pipeline: metric lookup, parameter resolution, algorithm
//! dispatch, band adjustments, rating. Every call reads the shared
//! catalog and band table and writes nothing back, so one pair of
//! tables serves any number of concurrent callers.

mod finalize;
mod functions;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::bands::{Band, BandTable};
use crate::catalog::{
    MetricCatalog, MetricDefinition, ParameterSource, Phase, ScoringKind, Thresholds,
};
use crate::error::{Result, ScoreError};
use crate::types::profile::{AgeGroup, Profile, SkillLevel};
use crate::types::rating::Rating;

use functions::{BANDED_FLOOR, FIXED_FLOOR};

/// One scoring call. `thresholds` overrides whatever the catalog
/// stores for the metric; without a profile only general bands are
/// eligible on the banded path.
#[derive(Debug, Clone)]
pub struct ScoreRequest<'a> {
    pub metric: &'a str,
    pub value: f64,
    pub profile: Option<Profile>,
    pub thresholds: Option<Thresholds>,
}

/// A scored value together with the metadata callers present alongside
/// it. `parameters_used` echoes the resolved thresholds the score was
/// computed from; `band` is set only when a band table row resolved
/// the score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreOutcome {
    pub metric: &'static str,
    pub unit: &'static str,
    pub description: &'static str,
    pub phase: Phase,
    pub kind: ScoringKind,
    pub value: f64,
    pub score: f64,
    pub rating: Rating,
    pub parameters_used: Thresholds,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}

/// Score one observed value against the catalog.
pub fn score(
    catalog: &MetricCatalog,
    bands: &BandTable,
    request: &ScoreRequest<'_>,
) -> Result<ScoreOutcome> {
    let metric = catalog
        .lookup(request.metric)
        .ok_or_else(|| ScoreError::MetricNotFound(request.metric.to_string()))?;
    debug!(metric = metric.name, value = request.value, "scoring");

    if let Some(overrides) = &request.thresholds {
        let raw = run_kind(metric, request.value, overrides, FIXED_FLOOR)?;
        return Ok(build_outcome(metric, request, raw, *overrides, None));
    }
    match &metric.source {
        ParameterSource::Fixed(stored) => {
            let raw = run_kind(metric, request.value, stored, FIXED_FLOOR)?;
            Ok(build_outcome(metric, request, raw, *stored, None))
        }
        ParameterSource::Banded => score_banded(bands, metric, request),
    }
}

fn run_kind(
    metric: &MetricDefinition,
    value: f64,
    thresholds: &Thresholds,
    floor: f64,
) -> Result<f64> {
    match metric.kind {
        ScoringKind::OptimalRange => {
            functions::optimal_range(metric.name, value, metric.unit, thresholds, floor)
        }
        ScoringKind::LowerIsBetter => {
            functions::lower_is_better(metric.name, value, thresholds, floor)
        }
        ScoringKind::HigherIsBetter => {
            functions::higher_is_better(metric.name, value, thresholds, floor)
        }
        ScoringKind::InjuryRisk => functions::injury_risk(metric.name, value, thresholds, floor),
        ScoringKind::TargetBased => functions::target_based(metric.name, value, thresholds, floor),
    }
}

fn score_banded(
    bands: &BandTable,
    metric: &MetricDefinition,
    request: &ScoreRequest<'_>,
) -> Result<ScoreOutcome> {
    let eligible = bands.eligible(metric.name, request.profile);
    if eligible.is_empty() {
        return Err(ScoreError::NoMatch {
            metric: metric.name.to_string(),
            detail: "no bands defined for this profile".to_string(),
        });
    }
    let matched = bands
        .select(metric.name, request.value, request.profile)
        .ok_or_else(|| ScoreError::NoMatch {
            metric: metric.name.to_string(),
            detail: "value out of defined bands".to_string(),
        })?;
    debug!(metric = metric.name, band = matched.label, "band matched");

    let (raw, resolved) = if matched.is_auto_hundred() && !matched.invert {
        let resolved = Thresholds {
            optimal_min: matched.range_min,
            optimal_max: matched.range_max,
            ..Thresholds::EMPTY
        };
        (100.0, resolved)
    } else if matched.target_value.is_some() {
        let resolved = Thresholds {
            target_value: matched.target_value,
            optimal_min: matched.range_min,
            optimal_max: matched.range_max,
            ..Thresholds::EMPTY
        };
        let raw = functions::target_based(metric.name, request.value, &resolved, BANDED_FLOOR)?;
        (raw, resolved)
    } else {
        let (optimal_min, optimal_max) =
            anchor_bounds(&eligible, matched).ok_or_else(|| ScoreError::InvalidParameters {
                metric: metric.name.to_string(),
                detail: format!("matched band '{}' defines no scorable range", matched.label),
            })?;
        let width = optimal_max - optimal_min;
        let resolved = Thresholds {
            optimal_min: Some(optimal_min),
            optimal_max: Some(optimal_max),
            bad_low_threshold: Some(optimal_min - width),
            bad_high_threshold: Some(optimal_max + width),
            ..Thresholds::EMPTY
        };
        let raw = functions::optimal_range(
            metric.name,
            request.value,
            metric.unit,
            &resolved,
            BANDED_FLOOR,
        )?;
        (raw, resolved)
    };

    let score = finalize::finalize(raw, matched.multiplier, matched.invert);
    Ok(build_outcome(metric, request, score, resolved, Some(matched.label)))
}

/// Interpolation anchors on the profile's stated good range: the first
/// eligible auto-hundred band with both bounds, else the matched
/// band's own bounds when it has two.
fn anchor_bounds(eligible: &[&Band], matched: &Band) -> Option<(f64, f64)> {
    eligible
        .iter()
        .find_map(|band| band.good_bounds())
        .or_else(|| matched.range_min.zip(matched.range_max))
}

fn build_outcome(
    metric: &MetricDefinition,
    request: &ScoreRequest<'_>,
    score: f64,
    parameters_used: Thresholds,
    band: Option<&'static str>,
) -> ScoreOutcome {
    ScoreOutcome {
        metric: metric.name,
        unit: metric.unit,
        description: metric.description,
        phase: metric.phase,
        kind: metric.kind,
        value: request.value,
        score,
        rating: finalize::rate(score, metric.is_risk_metric()),
        parameters_used,
        band,
        profile: request.profile,
    }
}

/// One row of a batch input file. A row-level profile needs both
/// halves; rows without one fall back to the batch default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchEntry {
    pub metric: String,
    pub value: f64,
    #[serde(default)]
    pub age_group: Option<AgeGroup>,
    #[serde(default)]
    pub skill_level: Option<SkillLevel>,
    #[serde(default)]
    pub parameters: Option<Thresholds>,
}

/// One scored batch row. A failed row keeps its place with a zero
/// score and the rejection text instead of aborting the batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchRow {
    pub metric: String,
    pub value: f64,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub rows: Vec<BatchRow>,
    pub scored: usize,
    pub failed: usize,
}

impl BatchReport {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Score a whole batch in input order. Row failures are recorded in
/// place, never propagated; callers read `failed` for the exit status.
pub fn score_batch(
    catalog: &MetricCatalog,
    bands: &BandTable,
    entries: &[BatchEntry],
    default_profile: Option<Profile>,
) -> BatchReport {
    let mut rows = Vec::with_capacity(entries.len());
    let mut failed = 0;
    for entry in entries {
        let result = entry_profile(entry, default_profile).and_then(|profile| {
            score(
                catalog,
                bands,
                &ScoreRequest {
                    metric: &entry.metric,
                    value: entry.value,
                    profile,
                    thresholds: entry.parameters,
                },
            )
        });
        match result {
            Ok(outcome) => rows.push(BatchRow {
                metric: entry.metric.clone(),
                value: entry.value,
                score: outcome.score,
                rating: Some(outcome.rating),
                band: outcome.band,
                error: None,
            }),
            Err(error) => {
                warn!(metric = %entry.metric, error = %error, "batch row failed");
                failed += 1;
                rows.push(BatchRow {
                    metric: entry.metric.clone(),
                    value: entry.value,
                    score: 0.0,
                    rating: None,
                    band: None,
                    error: Some(error.to_string()),
                });
            }
        }
    }
    let scored = rows.len() - failed;
    BatchReport {
        rows,
        scored,
        failed,
    }
}

fn entry_profile(entry: &BatchEntry, default_profile: Option<Profile>) -> Result<Option<Profile>> {
    match (entry.age_group, entry.skill_level) {
        (Some(age_group), Some(skill_level)) => Ok(Some(Profile::new(age_group, skill_level))),
        (None, None) => Ok(default_profile),
        _ => Err(ScoreError::BatchInput(format!(
            "entry for '{}' sets only one of age_group/skill_level",
            entry.metric
        ))),
    }
}
