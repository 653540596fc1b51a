use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATABASE: &str = "roster.db";

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RosterConfig {
    pub database: Option<PathBuf>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("roster.toml")
}

/// Load the config file.
///
/// A missing default file is not an error; a missing file that was asked for is.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<RosterConfig>> {
    let explicit = path.is_some();
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        if explicit {
            anyhow::bail!("config file {} does not exist", path.display());
        }
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: RosterConfig = toml::from_str(&contents)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(Some(config))
}

/// Flag (or `ROSTER_DATABASE`) wins over the config file, which wins over the default
pub fn resolve_database_path(flag: Option<PathBuf>, config: Option<&RosterConfig>) -> PathBuf {
    flag.or_else(|| config.and_then(|c| c.database.clone()))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
