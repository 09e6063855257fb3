use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use symptotrack_rules::RuleSet;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// JSON file holding symptom records.
    pub store_path: PathBuf,
    /// Seconds between polling cycles in `watch`. Added in v1.
    pub poll_interval_secs: u64,
    /// Custom rule vocabulary; the built-in set is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_set_path: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            store_path: default_store_path(),
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            rule_set_path: None,
        }
    }
}

impl CliConfig {
    /// The rule set named by this config, or the built-in one.
    pub fn load_rule_set(&self) -> eyre::Result<RuleSet> {
        match &self.rule_set_path {
            Some(path) => load_rule_set(path),
            None => Ok(RuleSet::default()),
        }
    }
}

pub fn load_rule_set(path: &Path) -> eyre::Result<RuleSet> {
    let rule_set = RuleSet::load(path)
        .map_err(|e| eyre::eyre!("failed to load rule set at {}: {e}", path.display()))?;
    tracing::info!(path = %path.display(), version = rule_set.version, "rule set loaded");
    Ok(rule_set)
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("symptotrack"))
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("symptotrack").join("records.json"))
        .unwrap_or_else(|| PathBuf::from("records.json"))
}

/// Load the config at `path`, or defaults when no file exists yet.
pub fn load_config(path: &Path) -> eyre::Result<CliConfig> {
    if !path.exists() {
        return Ok(CliConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: CliConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update symptotrack."
        ));
    }

    // v0 → v1: add poll_interval_secs
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("poll_interval_secs")
            .or_insert(serde_json::Value::Number(DEFAULT_POLL_INTERVAL_SECS.into()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added poll_interval_secs)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &CliConfig) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
