mod data;

use crate::types::profile::Profile;
use serde::Serialize;

/// Tolerance for matching a value against a bare target band.
pub const TARGET_EPSILON: f64 = 1e-6;

/// One row of the band table: a metric's scoring zone, optionally
/// restricted to a single (age group, skill level) profile.
#[derive(Debug, Clone, Serialize)]
pub struct Band {
    pub metric: &'static str,
    pub label: &'static str,
    pub range_min: Option<f64>,
    pub range_max: Option<f64>,
    pub target_value: Option<f64>,
    pub multiplier: f64,
    pub invert: bool,
    pub profile: Option<Profile>,
    auto_hundred: bool,
}

impl Band {
    /// Full constructor. `auto_hundred` is derived from the label once,
    /// here; nothing re-parses labels at scoring time.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        metric: &'static str,
        label: &'static str,
        range_min: Option<f64>,
        range_max: Option<f64>,
        target_value: Option<f64>,
        multiplier: f64,
        invert: bool,
        profile: Option<Profile>,
    ) -> Band {
        let auto_hundred =
            label.contains("Optimal") || label.contains("Elite") || label.contains("Safe Zone");
        Band {
            metric,
            label,
            range_min,
            range_max,
            target_value,
            multiplier,
            invert,
            profile,
            auto_hundred,
        }
    }

    pub fn range(
        metric: &'static str,
        label: &'static str,
        min: f64,
        max: f64,
        profile: Option<Profile>,
    ) -> Band {
        Band::new(metric, label, Some(min), Some(max), None, 1.0, false, profile)
    }

    /// Open-ended band matching any value at or below `max`.
    pub fn at_most(
        metric: &'static str,
        label: &'static str,
        max: f64,
        profile: Option<Profile>,
    ) -> Band {
        Band::new(metric, label, None, Some(max), None, 1.0, false, profile)
    }

    /// Open-ended band matching any value at or above `min`.
    pub fn at_least(
        metric: &'static str,
        label: &'static str,
        min: f64,
        profile: Option<Profile>,
    ) -> Band {
        Band::new(metric, label, Some(min), None, None, 1.0, false, profile)
    }

    pub fn target(
        metric: &'static str,
        label: &'static str,
        target: f64,
        profile: Option<Profile>,
    ) -> Band {
        Band::new(metric, label, None, None, Some(target), 1.0, false, profile)
    }

    /// Bands named as good score a flat 100 when the value sits inside
    /// their stated bounds and no inversion applies.
    pub fn is_auto_hundred(&self) -> bool {
        self.auto_hundred
    }

    /// Bounds of a band that scores a flat 100, when both are stated.
    /// Interpolation anchors and the skill comparison read these.
    pub fn good_bounds(&self) -> Option<(f64, f64)> {
        if self.auto_hundred {
            self.range_min.zip(self.range_max)
        } else {
            None
        }
    }

    /// True when the value sits inside every stated bound. A band with
    /// no bounds at all contains only its target value.
    pub fn contains(&self, value: f64) -> bool {
        match (self.range_min, self.range_max) {
            (None, None) => self
                .target_value
                .map_or(false, |target| (value - target).abs() < TARGET_EPSILON),
            (min, max) => {
                min.map_or(true, |m| value >= m) && max.map_or(true, |m| value <= m)
            }
        }
    }

    fn applies_to(&self, profile: Option<Profile>) -> bool {
        match self.profile {
            None => true,
            Some(own) => profile == Some(own),
        }
    }
}

// Matching rules, tried strictly in order. Within one rule the first
// band in table order wins.
fn rule_target_with_range(band: &Band, value: f64) -> bool {
    band.target_value.is_some()
        && (band.range_min.is_some() || band.range_max.is_some())
        && band.contains(value)
}

fn rule_target_only(band: &Band, value: f64) -> bool {
    match band.target_value {
        Some(target) => {
            band.range_min.is_none()
                && band.range_max.is_none()
                && (value - target).abs() < TARGET_EPSILON
        }
        None => false,
    }
}

fn rule_closed_range(band: &Band, value: f64) -> bool {
    matches!((band.range_min, band.range_max), (Some(min), Some(max)) if min <= value && value <= max)
}

fn rule_min_only(band: &Band, value: f64) -> bool {
    matches!((band.range_min, band.range_max), (Some(min), None) if value >= min)
}

fn rule_max_only(band: &Band, value: f64) -> bool {
    matches!((band.range_min, band.range_max), (None, Some(max)) if value <= max)
}

const RULES: [fn(&Band, f64) -> bool; 5] = [
    rule_target_with_range,
    rule_target_only,
    rule_closed_range,
    rule_min_only,
    rule_max_only,
];

/// The flat band table. Built once next to the catalog, immutable,
/// shared read-only by every scoring call.
#[derive(Debug, Clone)]
pub struct BandTable {
    bands: Vec<Band>,
}

impl BandTable {
    /// Expand the built-in adaptive range tables into band rows.
    pub fn standard() -> BandTable {
        BandTable::from_bands(data::standard_bands())
    }

    pub fn from_bands(bands: Vec<Band>) -> BandTable {
        BandTable { bands }
    }

    /// Bands eligible for this metric and caller profile, in table
    /// order: rows with a matching profile plus general rows.
    pub fn eligible(&self, metric: &str, profile: Option<Profile>) -> Vec<&Band> {
        self.bands
            .iter()
            .filter(|band| band.metric == metric && band.applies_to(profile))
            .collect()
    }

    /// Pick the single applicable band for a value, or None.
    pub fn select(&self, metric: &str, value: f64, profile: Option<Profile>) -> Option<&Band> {
        let eligible = self.eligible(metric, profile);
        for rule in RULES {
            if let Some(band) = eligible.iter().find(|band| rule(band, value)) {
                return Some(band);
            }
        }
        None
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}
