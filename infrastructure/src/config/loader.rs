//! YAML source and policy file loading

use std::path::{Path, PathBuf};

use thiserror::Error;

use toolgate_domain::policy::entities::PolicyConfig;
use toolgate_domain::policy::error::PolicyError;
use toolgate_domain::source::entities::SourceConfig;

/// Problems loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid policy in {path}: {source}")]
    Policy {
        path: PathBuf,
        #[source]
        source: PolicyError,
    },
}

impl ConfigError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io { path: path.to_path_buf(), source }
    }
}

/// Load and validate one YAML source definition.
pub fn load_source(path: &Path) -> Result<SourceConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::io(path, source))?;
    serde_yaml::from_str(&raw)
        .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
}

/// Load every source definition in the given order.
///
/// Fails on the first unreadable or malformed file; duplicate action names
/// across files are not an error here — the index resolves them last-wins.
pub fn load_sources(paths: &[PathBuf]) -> Result<Vec<SourceConfig>, ConfigError> {
    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        let source = load_source(path)?;
        tracing::info!(
            source = %source.name,
            path = %path.display(),
            actions = source.actions.len(),
            "Loaded source"
        );
        sources.push(source);
    }
    Ok(sources)
}

/// Load and validate a YAML policy file.
pub fn load_policy(path: &Path) -> Result<PolicyConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::io(path, source))?;
    let policy: PolicyConfig = serde_yaml::from_str(&raw)
        .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
    policy
        .validate()
        .map_err(|source| ConfigError::Policy { path: path.to_path_buf(), source })?;
    Ok(policy)
}

/// Server name advertised over MCP: the single source's name, or the
/// package name when several sources are merged.
pub fn server_name(sources: &[SourceConfig]) -> String {
    if sources.len() == 1 { sources[0].name.clone() } else { "toolgate".to_string() }
}
