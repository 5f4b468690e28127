use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pitcher age bracket used by the adaptive threshold tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AgeGroup {
    Youth,
    YoungAdult,
    Adult,
    MiddleAge,
    Masters,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 5] = [
        AgeGroup::Youth,
        AgeGroup::YoungAdult,
        AgeGroup::Adult,
        AgeGroup::MiddleAge,
        AgeGroup::Masters,
    ];

    /// Label as it appears in the threshold tables and reports.
    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Youth => "Youth (8-12)",
            AgeGroup::YoungAdult => "Young Adult (13-25)",
            AgeGroup::Adult => "Adult (26-39)",
            AgeGroup::MiddleAge => "Middle Age (40-55)",
            AgeGroup::Masters => "Masters (56+)",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Elite,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 3] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Elite,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Elite => "Elite",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An (age group, skill level) pair. Bands carrying a profile apply only
/// to callers with the exact same pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Profile {
    pub age_group: AgeGroup,
    pub skill_level: SkillLevel,
}

impl Profile {
    pub fn new(age_group: AgeGroup, skill_level: SkillLevel) -> Self {
        Profile {
            age_group,
            skill_level,
        }
    }

    /// All fifteen combinations, age-major, in table order.
    pub fn all() -> impl Iterator<Item = Profile> {
        AgeGroup::ALL.iter().flat_map(|&age_group| {
            SkillLevel::ALL
                .iter()
                .map(move |&skill_level| Profile::new(age_group, skill_level))
        })
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.age_group, self.skill_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_group_labels_match_tables() {
        assert_eq!(AgeGroup::Youth.label(), "Youth (8-12)");
        assert_eq!(AgeGroup::YoungAdult.label(), "Young Adult (13-25)");
        assert_eq!(AgeGroup::Adult.label(), "Adult (26-39)");
        assert_eq!(AgeGroup::MiddleAge.label(), "Middle Age (40-55)");
        assert_eq!(AgeGroup::Masters.label(), "Masters (56+)");
    }

    #[test]
    fn profile_all_covers_fifteen_combinations() {
        let profiles: Vec<Profile> = Profile::all().collect();
        assert_eq!(profiles.len(), 15);
        assert_eq!(
            profiles[0],
            Profile::new(AgeGroup::Youth, SkillLevel::Beginner)
        );
        assert_eq!(
            profiles[14],
            Profile::new(AgeGroup::Masters, SkillLevel::Elite)
        );
    }

    #[test]
    fn profile_display_joins_both_labels() {
        let profile = Profile::new(AgeGroup::Adult, SkillLevel::Elite);
        assert_eq!(profile.to_string(), "Adult (26-39) / Elite");
    }
}
