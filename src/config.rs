use crate::error::{Result, ScoreError};
use crate::types::config::ScoreConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "pitchscore.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".pitchscore/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/pitchscore/config.toml";

/// Load and merge configuration layers: the user's global file, then
/// the working directory's `pitchscore.toml`, then its local override
/// file. Later layers win key by key. `None` when no layer exists.
pub fn load_config(root: &Path) -> Result<Option<ScoreConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<ScoreConfig>> {
    let mut merged = Value::Table(Map::new());
    let mut found = false;
    if let Some(path) = global_path {
        found |= merge_file_if_exists(&mut merged, path)?;
    }
    found |= merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    found |= merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;
    if !found {
        return Ok(None);
    }

    let cfg: ScoreConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| ScoreError::ConfigParse(e.to_string()))?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ScoreError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::profile::{AgeGroup, Profile, SkillLevel};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_no_layer_exists() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_reads_a_global_file_alone() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");
        fs::write(
            &global_path,
            r#"
[profile]
age_group = "masters"
skill_level = "beginner"
"#,
        )
        .expect("global config should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("global-only config should exist");
        assert_eq!(
            cfg.default_profile(),
            Some(Profile::new(AgeGroup::Masters, SkillLevel::Beginner))
        );
    }

    #[test]
    fn load_config_merges_global_repo_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[profile]
age_group = "youth"
skill_level = "beginner"

[parameters."Knee Lift Height"]
optimal_min = 40.0
optimal_max = 80.0
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[profile]
age_group = "adult"
skill_level = "intermediate"
"#,
        )
        .expect("repo config should write");

        fs::create_dir_all(root.path().join(".pitchscore"))
            .expect("local config dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[profile]
skill_level = "elite"
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        assert_eq!(
            cfg.default_profile(),
            Some(Profile::new(AgeGroup::Adult, SkillLevel::Elite))
        );
        let lift = cfg
            .parameters_for("Knee Lift Height")
            .expect("global parameters should survive the merge");
        assert_eq!(lift.optimal_min, Some(40.0));
        assert_eq!(lift.optimal_max, Some(80.0));
    }

    #[test]
    fn load_config_reports_the_failing_file() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "profile = [broken")
            .expect("broken config should write");

        let err = load_config_with_global(root.path(), None).expect_err("load should fail");
        assert!(matches!(err, ScoreError::ConfigParse(_)));
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn load_config_rejects_unknown_sections() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[scoring]
floor = 5.0
"#,
        )
        .expect("config should write");

        let err = load_config_with_global(root.path(), None).expect_err("load should fail");
        assert!(matches!(err, ScoreError::ConfigParse(_)));
    }
}
