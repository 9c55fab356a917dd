//! Configuration for the fill-arguments component.
//!
//! Settings are session-local policy flags loaded from a `fillcall.toml` at
//! the workspace root, with an environment-variable override for tooling.
//! A missing file means defaults; unknown keys are surfaced as warnings so a
//! typo never silently disables a flag.

use std::path::{Path, PathBuf};

use fillcall_edit::EditPolicy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding config discovery.
///
/// Relative paths are resolved against the current working directory.
pub const FILLCALL_CONFIG_ENV_VAR: &str = "FILLCALL_CONFIG";

/// File name discovered at the workspace root.
pub const CONFIG_FILE_NAME: &str = "fillcall.toml";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct FillConfig {
    /// The `[fill]` table, mapping directly onto the edit policy flags.
    #[serde(default)]
    pub fill: EditPolicy,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Non-fatal findings from loading a config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A key the schema does not know about; likely a typo.
    UnknownKey { path: PathBuf, key: String },
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigWarning::UnknownKey { path, key } => {
                write!(f, "unknown config key `{key}` in {}", path.display())
            }
        }
    }
}

/// Locate the config file for `workspace_root`.
///
/// The `FILLCALL_CONFIG` environment variable wins over a workspace-root
/// `fillcall.toml`; `None` when neither exists.
pub fn discover_config_path(workspace_root: &Path) -> Option<PathBuf> {
    if let Some(override_path) = std::env::var_os(FILLCALL_CONFIG_ENV_VAR) {
        let path = PathBuf::from(override_path);
        if path.exists() {
            return Some(path.canonicalize().unwrap_or(path));
        }
        tracing::warn!(
            path = %path.display(),
            "config override does not exist; falling back to discovery"
        );
    }

    let candidate = workspace_root.join(CONFIG_FILE_NAME);
    if candidate.exists() {
        return Some(candidate.canonicalize().unwrap_or(candidate));
    }
    None
}

/// Load the config for `workspace_root`, returning defaults when no file is
/// found. The returned path is the file actually loaded, if any.
pub fn load_for_workspace(
    workspace_root: &Path,
) -> Result<(FillConfig, Option<PathBuf>), ConfigError> {
    let ((config, path), warnings) = load_for_workspace_with_diagnostics(workspace_root)?;
    for warning in &warnings {
        tracing::warn!(%warning, "config warning");
    }
    Ok((config, path))
}

/// Like [`load_for_workspace`], but hands warnings back to the caller
/// instead of logging them.
pub fn load_for_workspace_with_diagnostics(
    workspace_root: &Path,
) -> Result<((FillConfig, Option<PathBuf>), Vec<ConfigWarning>), ConfigError> {
    let Some(path) = discover_config_path(workspace_root) else {
        return Ok(((FillConfig::default(), None), Vec::new()));
    };

    let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let (config, warnings) = parse_config(&text, &path)?;
    Ok(((config, Some(path)), warnings))
}

fn parse_config(
    text: &str,
    path: &Path,
) -> Result<(FillConfig, Vec<ConfigWarning>), ConfigError> {
    let deserializer = toml::de::Deserializer::new(text);
    let mut unknown = Vec::new();
    let config = serde_ignored::deserialize(deserializer, |ignored| {
        unknown.push(ignored.to_string());
    })
    .map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let warnings = unknown
        .into_iter()
        .map(|key| ConfigWarning::UnknownKey {
            path: path.to_path_buf(),
            key,
        })
        .collect();
    Ok((config, warnings))
}

/// JSON schema for the config file, for editor completion of
/// `fillcall.toml`.
pub fn json_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(FillConfig)
}
