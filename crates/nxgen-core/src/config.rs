use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::answers::AnswerDefaults;
use crate::error::{Result, ScaffoldError};

/// Settings read from `nxgen.yaml`.
///
/// Every field is optional in the file; missing ones fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Template root overriding the bundled templates.
    pub template_dir: Option<PathBuf>,
    /// Prompt defaults.
    pub defaults: AnswerDefaults,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `info` or `nxgen_core=debug`.
    pub level: String,
    /// `text` or `json`.
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "text".to_string(),
        }
    }
}

/// Loads the YAML config at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<ScaffoldConfig> {
    if !path.exists() {
        return Ok(ScaffoldConfig::default());
    }
    let content = std::fs::read_to_string(path).map_err(|e| ScaffoldError::io(path, e))?;
    serde_yaml::from_str(&content).map_err(|e| ScaffoldError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ScaffoldConfig::default();
        assert_eq!(config.template_dir, None);
        assert_eq!(config.defaults.database_user, "admin");
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.log.format, "text");
    }

    #[test]
    fn test_load_config_nonexistent_returns_default() {
        let config = load_config(Path::new("does-not-exist.yaml")).unwrap();
        assert_eq!(config, ScaffoldConfig::default());
    }

    #[test]
    fn test_load_config_from_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "defaults:\n  database_user: dev\n  database_local_container_name: dev-local\n  database_test_container_name: dev-test\nlog:\n  level: debug\n  format: json"
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.template_dir, None);
        assert_eq!(config.defaults.database_user, "dev");
        assert_eq!(config.defaults.database_local_container_name, "dev-local");
        assert_eq!(config.defaults.database_test_container_name, "dev-test");
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.format, "json");
    }

    #[test]
    fn test_load_config_template_dir() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "template_dir: /opt/templates").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.template_dir, Some(PathBuf::from("/opt/templates")));
    }

    #[test]
    fn test_load_config_partial_yaml_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "defaults:\n  database_user: root").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.defaults.database_user, "root");
        assert_eq!(config.defaults.database_test_container_name, "testdb");
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_load_config_invalid_yaml_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "log: [unclosed").unwrap();
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::Config { .. }));
    }
}
