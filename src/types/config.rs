use serde::Deserialize;
use std::collections::BTreeMap;

use crate::catalog::{MetricCatalog, Thresholds};
use crate::error::ScoreError;
use crate::types::profile::{AgeGroup, Profile, SkillLevel};

/// On-disk configuration: a default pitcher profile and per-metric
/// threshold overrides. Both sections are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoreConfig {
    pub profile: Option<ProfileSection>,
    #[serde(default)]
    pub parameters: BTreeMap<String, Thresholds>,
}

/// `[profile]` section. Both halves are required; a half-specified
/// profile cannot select bands.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileSection {
    pub age_group: AgeGroup,
    pub skill_level: SkillLevel,
}

impl ScoreConfig {
    pub fn default_profile(&self) -> Option<Profile> {
        self.profile
            .as_ref()
            .map(|section| Profile::new(section.age_group, section.skill_level))
    }

    /// Threshold overrides configured for one metric.
    pub fn parameters_for(&self, metric: &str) -> Option<Thresholds> {
        self.parameters.get(metric).copied()
    }

    pub fn validate(&self, catalog: &MetricCatalog) -> Result<(), ScoreError> {
        for (name, thresholds) in &self.parameters {
            if catalog.lookup(name).is_none() {
                return Err(ScoreError::ConfigParse(format!(
                    "parameters section names unknown metric: {name}"
                )));
            }
            if thresholds.is_empty() {
                return Err(ScoreError::ConfigParse(format!(
                    "parameters.\"{name}\" sets no threshold keys"
                )));
            }
        }
        Ok(())
    }
}
