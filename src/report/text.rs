use super::Explanation;
use crate::bands::Band;
use crate::catalog::{MetricDefinition, ParameterSource, Thresholds};
use crate::engine::{BatchReport, ScoreOutcome};

pub fn outcome_text(outcome: &ScoreOutcome) -> String {
    let mut output = String::new();
    output.push_str(outcome.metric);
    output.push('\n');
    output.push_str(&format!("  description: {}\n", outcome.description));
    output.push_str(&format!("  phase:       {}\n", outcome.phase));
    output.push_str(&format!("  kind:        {}\n", outcome.kind));
    output.push_str(&format!("  value:       {} {}\n", outcome.value, outcome.unit));
    if let Some(profile) = outcome.profile {
        output.push_str(&format!("  profile:     {profile}\n"));
    }
    if let Some(band) = outcome.band {
        output.push_str(&format!("  band:        {band}\n"));
    }
    output.push_str(&format!(
        "  parameters:  {}\n",
        thresholds_text(&outcome.parameters_used)
    ));
    output.push_str(&format!("  score:       {:.1}\n", outcome.score));
    output.push_str(&format!("  rating:      {}\n", outcome.rating));
    output
}

pub fn batch_text(report: &BatchReport) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:<44} {:>10} {:>8}  {}\n",
        "METRIC", "VALUE", "SCORE", "RESULT"
    ));
    for row in &report.rows {
        let result = match &row.error {
            Some(error) => format!("failed: {error}"),
            None => {
                let mut result = row
                    .rating
                    .map(|rating| rating.label().to_string())
                    .unwrap_or_default();
                if let Some(band) = row.band {
                    result.push_str(&format!(" [{band}]"));
                }
                result
            }
        };
        output.push_str(&format!(
            "{:<44} {:>10.1} {:>8.1}  {}\n",
            row.metric, row.value, row.score, result
        ));
    }
    output.push_str(&format!(
        "\n{} scored, {} failed\n",
        report.scored, report.failed
    ));
    output
}

pub fn catalog_text(metrics: &[&MetricDefinition]) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:<44} {:<22} {:<24} {}\n",
        "METRIC", "UNIT", "PHASE", "KIND"
    ));
    for metric in metrics {
        output.push_str(&format!(
            "{:<44} {:<22} {:<24} {}\n",
            metric.name,
            metric.unit,
            metric.phase.label(),
            metric.kind.label()
        ));
    }
    output
}

pub fn explanation_text(explanation: &Explanation<'_>) -> String {
    let metric = explanation.metric;
    let mut output = String::new();
    output.push_str(metric.name);
    output.push('\n');
    output.push_str(&format!("  unit:        {}\n", metric.unit));
    output.push_str(&format!("  phase:       {}\n", metric.phase));
    output.push_str(&format!("  kind:        {}\n", metric.kind));
    output.push_str(&format!("  description: {}\n", metric.description));
    match &metric.source {
        ParameterSource::Fixed(thresholds) => {
            output.push_str(&format!("  thresholds:  {}\n", thresholds_text(thresholds)));
        }
        ParameterSource::Banded => match explanation.profile {
            Some(profile) => {
                output.push_str(&format!("  bands for {profile}:\n"));
                if explanation.bands.is_empty() {
                    output.push_str("    none\n");
                }
                for band in &explanation.bands {
                    output.push_str(&format!(
                        "    {:<18} {}\n",
                        band.label,
                        band_bounds_text(band)
                    ));
                }
                if !explanation.comparison.is_empty() {
                    output.push_str(&format!("  skill levels at {}:\n", profile.age_group));
                    for row in &explanation.comparison {
                        let marker = if row.selected { "  (selected)" } else { "" };
                        output.push_str(&format!(
                            "    {:<18} {}..{}{}\n",
                            row.skill_level.label(),
                            row.range_min,
                            row.range_max,
                            marker
                        ));
                    }
                }
            }
            None => output.push_str(
                "  bands:       profile specific; pass --age-group and --skill-level\n",
            ),
        },
    }
    output
}

fn thresholds_text(thresholds: &Thresholds) -> String {
    let pairs = [
        ("optimal_min", thresholds.optimal_min),
        ("optimal_max", thresholds.optimal_max),
        ("bad_low_threshold", thresholds.bad_low_threshold),
        ("bad_high_threshold", thresholds.bad_high_threshold),
        ("optimal_upper_bound", thresholds.optimal_upper_bound),
        ("poor_threshold", thresholds.poor_threshold),
        ("optimal_lower_bound", thresholds.optimal_lower_bound),
        ("warning_threshold", thresholds.warning_threshold),
        ("critical_threshold", thresholds.critical_threshold),
        ("target_value", thresholds.target_value),
    ];
    let parts: Vec<String> = pairs
        .iter()
        .filter_map(|(key, value)| value.map(|value| format!("{key}={value}")))
        .collect();
    parts.join(", ")
}

fn band_bounds_text(band: &Band) -> String {
    let mut text = match (band.range_min, band.range_max) {
        (Some(min), Some(max)) => format!("{min}..{max}"),
        (Some(min), None) => format!(">= {min}"),
        (None, Some(max)) => format!("<= {max}"),
        (None, None) => String::new(),
    };
    if let Some(target) = band.target_value {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(&format!("target {target}"));
    }
    if band.multiplier != 1.0 {
        text.push_str(&format!(" x{}", band.multiplier));
    }
    if band.invert {
        text.push_str(" inverted");
    }
    text
}
