use super::functions::round1;
use crate::types::rating::Rating;

/// Apply band adjustments to a raw score: multiplier first, then
/// inversion, clamping to [0, 100] after each step. The result is
/// rounded to one decimal like every other score.
pub(super) fn finalize(raw: f64, multiplier: f64, invert: bool) -> f64 {
    let adjusted = (raw * multiplier).clamp(0.0, 100.0);
    let value = if invert {
        (100.0 - adjusted).clamp(0.0, 100.0)
    } else {
        adjusted
    };
    round1(value)
}

/// Pick the label family by metric kind: risk metrics rate on safety,
/// everything else on quality.
pub(super) fn rate(score: f64, risk: bool) -> Rating {
    if risk {
        Rating::for_risk(score)
    } else {
        Rating::for_quality(score)
    }
}
