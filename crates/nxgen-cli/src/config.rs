use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use nxgen_core::{load_config, ScaffoldConfig};

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "nxgen.yaml";

/// Picks the config file to load: the explicit path, then `./nxgen.yaml`,
/// then `<config dir>/nxgen/config.yaml`.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }
    dirs::config_dir()
        .map(|dir| dir.join("nxgen").join("config.yaml"))
        .filter(|path| path.is_file())
}

/// Effective config and the file it came from, if any.
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: ScaffoldConfig,
    pub source: Option<PathBuf>,
}

/// Loads the effective config. An explicitly named file must exist.
///
/// Does not log. Callers report `source` once the subscriber is installed.
pub fn load(explicit: Option<&Path>) -> Result<LoadedConfig> {
    if let Some(path) = explicit {
        if !path.is_file() {
            bail!("config file not found: {}", path.display());
        }
    }
    match resolve_config_path(explicit) {
        Some(path) => {
            let config =
                load_config(&path).with_context(|| format!("failed to load {}", path.display()))?;
            Ok(LoadedConfig {
                config,
                source: Some(path),
            })
        }
        None => Ok(LoadedConfig::default()),
    }
}
