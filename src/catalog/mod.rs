mod data;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Delivery phases covered by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Windup,
    Stride,
    ArmCocking,
    AccelerationRelease,
    FollowThrough,
    KineticChain,
    InjuryRisk,
    PitchSpecific,
    Performance,
}

impl Phase {
    pub const ALL: [Phase; 9] = [
        Phase::Windup,
        Phase::Stride,
        Phase::ArmCocking,
        Phase::AccelerationRelease,
        Phase::FollowThrough,
        Phase::KineticChain,
        Phase::InjuryRisk,
        Phase::PitchSpecific,
        Phase::Performance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Phase::Windup => "Windup",
            Phase::Stride => "Stride",
            Phase::ArmCocking => "Arm Cocking",
            Phase::AccelerationRelease => "Acceleration & Release",
            Phase::FollowThrough => "Follow-Through",
            Phase::KineticChain => "Kinetic Chain",
            Phase::InjuryRisk => "Injury Risk",
            Phase::PitchSpecific => "Pitch Specific",
            Phase::Performance => "Performance",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Closed set of scoring algorithms. Every dispatch on this is a match;
/// adding a kind means adding an arm everywhere the compiler points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringKind {
    OptimalRange,
    LowerIsBetter,
    HigherIsBetter,
    InjuryRisk,
    TargetBased,
}

impl ScoringKind {
    /// Threshold keys that must be present before this kind can score.
    pub fn required_keys(&self) -> &'static [&'static str] {
        match self {
            ScoringKind::OptimalRange => &["optimal_min", "optimal_max"],
            ScoringKind::LowerIsBetter => &["optimal_upper_bound", "poor_threshold"],
            ScoringKind::HigherIsBetter => &["optimal_lower_bound"],
            ScoringKind::InjuryRisk => &["warning_threshold", "critical_threshold"],
            ScoringKind::TargetBased => &["target_value"],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoringKind::OptimalRange => "optimal_range",
            ScoringKind::LowerIsBetter => "lower_is_better",
            ScoringKind::HigherIsBetter => "higher_is_better",
            ScoringKind::InjuryRisk => "injury_risk",
            ScoringKind::TargetBased => "target_based",
        }
    }
}

impl fmt::Display for ScoringKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Named threshold values. Which fields must be set depends on the
/// scoring kind; the scoring functions check presence and ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimal_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimal_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bad_low_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bad_high_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimal_upper_bound: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poor_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimal_lower_bound: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_value: Option<f64>,
}

impl Thresholds {
    pub const EMPTY: Thresholds = Thresholds {
        optimal_min: None,
        optimal_max: None,
        bad_low_threshold: None,
        bad_high_threshold: None,
        optimal_upper_bound: None,
        poor_threshold: None,
        optimal_lower_bound: None,
        warning_threshold: None,
        critical_threshold: None,
        target_value: None,
    };

    pub fn is_empty(&self) -> bool {
        *self == Thresholds::EMPTY
    }

    /// Set one threshold by its table key. Returns the key back as an
    /// error if it names no known threshold.
    pub fn set(&mut self, key: &str, value: f64) -> std::result::Result<(), String> {
        match key {
            "optimal_min" => self.optimal_min = Some(value),
            "optimal_max" => self.optimal_max = Some(value),
            "bad_low_threshold" => self.bad_low_threshold = Some(value),
            "bad_high_threshold" => self.bad_high_threshold = Some(value),
            "optimal_upper_bound" => self.optimal_upper_bound = Some(value),
            "poor_threshold" => self.poor_threshold = Some(value),
            "optimal_lower_bound" => self.optimal_lower_bound = Some(value),
            "warning_threshold" => self.warning_threshold = Some(value),
            "critical_threshold" => self.critical_threshold = Some(value),
            "target_value" => self.target_value = Some(value),
            unknown => return Err(unknown.to_string()),
        }
        Ok(())
    }

    /// Build a set from `(key, value)` pairs, rejecting unknown keys.
    pub fn from_pairs<'a, I>(pairs: I) -> std::result::Result<Thresholds, String>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut thresholds = Thresholds::default();
        for (key, value) in pairs {
            thresholds
                .set(key, value)
                .map_err(|unknown| format!("unknown threshold key: {unknown}"))?;
        }
        Ok(thresholds)
    }
}

/// Where a metric's thresholds come from when the caller supplies none.
/// Caller-supplied thresholds override either variant per call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterSource {
    /// One stored threshold set, the same for every pitcher.
    Fixed(Thresholds),
    /// Thresholds resolved through the band table by profile and value.
    Banded,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricDefinition {
    pub name: &'static str,
    pub unit: &'static str,
    pub description: &'static str,
    pub phase: Phase,
    pub kind: ScoringKind,
    pub source: ParameterSource,
}

impl MetricDefinition {
    /// Risk metrics rate on the safety label family.
    pub fn is_risk_metric(&self) -> bool {
        self.kind == ScoringKind::InjuryRisk
    }
}

/// The full built-in metric table. Built once, immutable, shared
/// read-only across any number of scoring calls.
#[derive(Debug, Clone)]
pub struct MetricCatalog {
    metrics: Vec<MetricDefinition>,
    index: HashMap<&'static str, usize>,
}

impl MetricCatalog {
    /// Build the standard catalog from the built-in tables. Pure: no
    /// globals, no side effects; callers share the returned value.
    pub fn standard() -> MetricCatalog {
        MetricCatalog::from_entries(data::STANDARD.to_vec())
    }

    fn from_entries(metrics: Vec<MetricDefinition>) -> MetricCatalog {
        let mut index = HashMap::with_capacity(metrics.len());
        for (position, metric) in metrics.iter().enumerate() {
            let previous = index.insert(metric.name, position);
            debug_assert!(previous.is_none(), "duplicate metric name: {}", metric.name);
        }
        MetricCatalog { metrics, index }
    }

    pub fn lookup(&self, name: &str) -> Option<&MetricDefinition> {
        self.index.get(name).map(|&position| &self.metrics[position])
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &MetricDefinition> {
        self.metrics.iter()
    }

    pub fn by_phase(&self, phase: Phase) -> impl Iterator<Item = &MetricDefinition> {
        self.metrics.iter().filter(move |metric| metric.phase == phase)
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}
