//! The piecewise scoring family. Each function maps (value, thresholds)
//! to a raw score in [floor, 100], rounded to one decimal at return.
//! Missing or mis-ordered thresholds reject; nothing is silently
//! repaired beyond the documented default rules.

use crate::catalog::Thresholds;
use crate::error::{Result, ScoreError};

/// Minimum score on the fixed/runtime parameter path.
pub const FIXED_FLOOR: f64 = 1.0;
/// Minimum score on the band-resolved path.
pub const BANDED_FLOOR: f64 = 0.0;

pub fn round1(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}

fn invalid(metric: &str, detail: String) -> ScoreError {
    ScoreError::InvalidParameters {
        metric: metric.to_string(),
        detail,
    }
}

fn missing_keys(metric: &str, pairs: &[(&str, Option<f64>)]) -> ScoreError {
    let missing: Vec<&str> = pairs
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(key, _)| *key)
        .collect();
    invalid(metric, format!("missing required keys: {}", missing.join(", ")))
}

/// 100 inside [optimal_min, optimal_max], linear falloff to `floor` at
/// the bad thresholds. Absent bad thresholds default to: low, 0 when
/// optimal_min > 0, else one range-width below; high, 100 for a "%"
/// unit, else twice optimal_max when positive, else one range-width
/// above.
pub(super) fn optimal_range(
    metric: &str,
    value: f64,
    unit: &str,
    thresholds: &Thresholds,
    floor: f64,
) -> Result<f64> {
    let (optimal_min, optimal_max) = match (thresholds.optimal_min, thresholds.optimal_max) {
        (Some(min), Some(max)) => (min, max),
        (min, max) => {
            return Err(missing_keys(
                metric,
                &[("optimal_min", min), ("optimal_max", max)],
            ))
        }
    };
    if optimal_min > optimal_max {
        return Err(invalid(
            metric,
            format!(
                "optimal_min ({optimal_min}) cannot be greater than optimal_max ({optimal_max})"
            ),
        ));
    }

    let width = optimal_max - optimal_min;
    let bad_low = thresholds
        .bad_low_threshold
        .unwrap_or(if optimal_min > 0.0 { 0.0 } else { optimal_min - width });
    let bad_high = thresholds.bad_high_threshold.unwrap_or(if unit == "%" {
        100.0
    } else if optimal_max > 0.0 {
        optimal_max * 2.0
    } else {
        optimal_max + width
    });

    if bad_low >= optimal_min {
        return Err(invalid(
            metric,
            format!("bad_low_threshold ({bad_low}) is not less than optimal_min ({optimal_min})"),
        ));
    }
    if bad_high <= optimal_max {
        return Err(invalid(
            metric,
            format!(
                "bad_high_threshold ({bad_high}) is not greater than optimal_max ({optimal_max})"
            ),
        ));
    }

    let score = if value >= optimal_min && value <= optimal_max {
        100.0
    } else if value < optimal_min {
        if value <= bad_low {
            floor
        } else {
            let interpolated =
                floor + (value - bad_low) / (optimal_min - bad_low) * (100.0 - floor);
            interpolated.max(floor)
        }
    } else if value >= bad_high {
        floor
    } else {
        let interpolated =
            100.0 - (value - optimal_max) / (bad_high - optimal_max) * (100.0 - floor);
        interpolated.max(floor)
    };
    Ok(round1(score))
}

/// 100 at or below the optimal upper bound, `floor` at or beyond the
/// poor threshold, linear in between.
pub(super) fn lower_is_better(
    metric: &str,
    value: f64,
    thresholds: &Thresholds,
    floor: f64,
) -> Result<f64> {
    let (upper, poor) = match (thresholds.optimal_upper_bound, thresholds.poor_threshold) {
        (Some(upper), Some(poor)) => (upper, poor),
        (upper, poor) => {
            return Err(missing_keys(
                metric,
                &[("optimal_upper_bound", upper), ("poor_threshold", poor)],
            ))
        }
    };
    if !(0.0 <= upper && upper < poor) {
        return Err(invalid(
            metric,
            format!(
                "optimal_upper_bound ({upper}) must be non-negative and strictly less than poor_threshold ({poor})"
            ),
        ));
    }

    let score = if value <= upper {
        100.0
    } else if value >= poor {
        floor
    } else {
        let interpolated = 100.0 - (value - upper) / (poor - upper) * (100.0 - floor);
        interpolated.max(floor)
    };
    Ok(round1(score))
}

/// Proportional scaling: `value / bound * 100`, capped at 100 from the
/// bound upward and clamped to `floor` at or below zero.
pub(super) fn higher_is_better(
    metric: &str,
    value: f64,
    thresholds: &Thresholds,
    floor: f64,
) -> Result<f64> {
    let bound = match thresholds.optimal_lower_bound {
        Some(bound) => bound,
        None => return Err(missing_keys(metric, &[("optimal_lower_bound", None)])),
    };
    if bound <= 0.0 {
        return Err(invalid(
            metric,
            format!("optimal_lower_bound ({bound}) must be greater than zero"),
        ));
    }

    let score = if value >= bound {
        100.0
    } else if value <= 0.0 {
        floor
    } else {
        (value / bound * 100.0).max(floor)
    };
    Ok(round1(score))
}

/// Higher value means higher risk: 100 at or below the warning
/// threshold, `floor` at or beyond the critical threshold, linear in
/// between. Mis-ordered thresholds degrade to a step function at the
/// warning threshold.
pub(super) fn injury_risk(
    metric: &str,
    value: f64,
    thresholds: &Thresholds,
    floor: f64,
) -> Result<f64> {
    let (warning, critical) = match (thresholds.warning_threshold, thresholds.critical_threshold) {
        (Some(warning), Some(critical)) => (warning, critical),
        (warning, critical) => {
            return Err(missing_keys(
                metric,
                &[("warning_threshold", warning), ("critical_threshold", critical)],
            ))
        }
    };

    let score = if warning >= critical {
        if value <= warning {
            100.0
        } else {
            floor
        }
    } else if value <= warning {
        100.0
    } else if value >= critical {
        floor
    } else {
        let interpolated = 100.0 - (value - warning) / (critical - warning) * (100.0 - floor);
        interpolated.max(floor)
    };
    Ok(round1(score))
}

/// Gaussian falloff around a target. The standard deviation derives
/// from the accompanying range: a quarter of its width, 0.1 for a
/// single-point range, 0.5 with no range at all.
pub(super) fn target_based(
    metric: &str,
    value: f64,
    thresholds: &Thresholds,
    floor: f64,
) -> Result<f64> {
    let target = match thresholds.target_value {
        Some(target) => target,
        None => return Err(missing_keys(metric, &[("target_value", None)])),
    };
    let std_dev = match (thresholds.optimal_min, thresholds.optimal_max) {
        (Some(min), Some(max)) if max > min => (max - min) / 4.0,
        (Some(_), Some(_)) => 0.1,
        _ => 0.5,
    };

    let deviation = (value - target) / std_dev;
    let score = (100.0 * (-0.5 * deviation * deviation).exp()).max(floor);
    Ok(round1(score))
}
