use std::path::{Path, PathBuf};

use inpl_scoring::aggregate::MissingScorePolicy;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// Environment variable naming a config file.
const CONFIG_ENV: &str = "INPL_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub missing_scores: MissingScorePolicy,
    /// Normative table to load instead of the embedded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub norms_path: Option<PathBuf>,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("inpl").join("config.json"))
}

/// Resolve which config file to read: an explicit path, then
/// `$INPL_CONFIG`, then the user config directory. `None` means built-in
/// defaults.
fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    default_config_path().filter(|path| path.exists())
}

pub fn load_config(explicit: Option<&Path>) -> eyre::Result<ReportConfig> {
    let Some(path) = config_path(explicit) else {
        tracing::debug!("no config file, using defaults");
        return Ok(ReportConfig::default());
    };

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    let config = parse_config(&contents)?;
    tracing::debug!(path = %path.display(), ?config, "config loaded");
    Ok(config)
}

fn parse_config(contents: &str) -> eyre::Result<ReportConfig> {
    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: ReportConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update inpl-report."
        ));
    }

    // v0 → v1: stamp the version and backfill the default policy
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("missing_scores")
            .or_insert(serde_json::to_value(MissingScorePolicy::default())?);
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added missing_scores)");
    }

    Ok(json)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn unversioned_config_gets_default_policy() {
        let config = parse_config(r#"{"norms_path": "/srv/norms.csv"}"#).unwrap();

        assert_eq!(config.config_version, 1);
        assert_eq!(config.missing_scores, MissingScorePolicy::Skip);
        assert_eq!(config.norms_path, Some(PathBuf::from("/srv/norms.csv")));
    }

    #[test]
    fn unversioned_config_keeps_its_policy() {
        let config = parse_config(r#"{"missing_scores": "count_as_bad"}"#).unwrap();

        assert_eq!(config.config_version, 1);
        assert_eq!(config.missing_scores, MissingScorePolicy::CountAsBad);
    }

    #[test]
    fn migration_stamps_version_and_backfills_policy() {
        let migrated = migrate(serde_json::json!({}), 0).unwrap();

        assert_eq!(
            migrated,
            serde_json::json!({ "config_version": 1, "missing_scores": "skip" })
        );
    }

    #[test]
    fn v1_is_read_as_is() {
        let config =
            parse_config(r#"{"config_version": 1, "missing_scores": "count_as_bad"}"#).unwrap();

        assert_eq!(config.missing_scores, MissingScorePolicy::CountAsBad);
        assert_eq!(config.norms_path, None);
    }

    #[test]
    fn newer_version_is_rejected() {
        let err = parse_config(r#"{"config_version": 7}"#).unwrap_err();

        assert!(err.to_string().contains("newer than this build"), "{err}");
    }

    #[test]
    fn non_object_config_is_rejected() {
        assert!(parse_config("[1, 2]").is_err());
    }

    #[test]
    fn explicit_path_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"config_version": 1, "missing_scores": "skip"}}"#).unwrap();

        let config = load_config(Some(file.path())).unwrap();

        assert_eq!(config.config_version, 1);
        assert_eq!(config.missing_scores, MissingScorePolicy::Skip);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/inpl/config.json"))).unwrap_err();

        assert!(err.to_string().contains("failed to read config"), "{err}");
    }
}
