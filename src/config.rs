use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::strip::DEFAULT_BLOCK_ELEMENTS;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CleanerConfig {
    pub block_elements: Vec<String>,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            block_elements: DEFAULT_BLOCK_ELEMENTS
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub file: Option<String>,
    pub level: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: Some("warn".to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub cleaner: CleanerConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let explicit_path = lookup("CONFIG_FILE");
        let config = if let Some(path) = explicit_path {
            let path = PathBuf::from(path);
            if !path.exists() {
                return Err(anyhow!("config file {:?} not found", path));
            }
            Self::load_from_file(&path)?
        } else {
            let path = locate_default_config();
            if let Some(path) = path {
                Self::load_from_file(&path)?
            } else {
                AppConfig::default()
            }
        };

        Self::apply_env_overrides(config, lookup)
    }

    pub fn from_yaml_str(contents: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(contents).context("failed to parse config")
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {:?}", path))?;
        let config: AppConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {:?}", path))?;
        Ok(config)
    }

    fn apply_env_overrides<F>(mut config: AppConfig, lookup: F) -> anyhow::Result<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(elements) = lookup("BLOCK_ELEMENTS") {
            config.cleaner.block_elements = parse_element_list(&elements);
        }

        if let Some(log_file) = lookup("LOG_FILE_PATH") {
            config.logging.file = Some(log_file);
        }

        if let Some(log_level) = lookup("LOG_LEVEL") {
            config.logging.level = Some(log_level);
        }

        if config
            .cleaner
            .block_elements
            .iter()
            .any(|name| name.trim().is_empty())
        {
            return Err(anyhow!(
                "block element names must not be empty; check BLOCK_ELEMENTS or cleaner.block_elements"
            ));
        }

        Ok(config)
    }
}

fn parse_element_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| name.to_string())
        .collect()
}

fn locate_default_config() -> Option<PathBuf> {
    let candidates = [
        PathBuf::from("config/config.yaml"),
        PathBuf::from("../config/config.yaml"),
    ];

    for path in candidates {
        if path.exists() {
            return Some(path);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::HashMap, io::Write};

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_use_standard_elements() {
        let config = AppConfig::default();
        assert_eq!(
            config.cleaner.block_elements,
            vec!["head", "style", "script", "noscript", "iframe", "svg"]
        );
        assert_eq!(config.logging.level.as_deref(), Some("warn"));
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = AppConfig::from_yaml_str("logging:\n  level: debug\n").unwrap();
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.cleaner.block_elements.len(), 6);
    }

    #[test]
    fn yaml_overrides_block_elements() {
        let config =
            AppConfig::from_yaml_str("cleaner:\n  block_elements: [script, nav]\n").unwrap();
        assert_eq!(config.cleaner.block_elements, vec!["script", "nav"]);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "logging:\n  file: logs/cleaner.log").unwrap();
        let config = AppConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.logging.file.as_deref(), Some("logs/cleaner.log"));
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        assert!(AppConfig::from_yaml_str("cleaner: [").is_err());
    }

    #[test]
    fn element_list_is_split_and_trimmed() {
        assert_eq!(
            parse_element_list(" script, style ,,nav"),
            vec!["script", "style", "nav"]
        );
        assert!(parse_element_list("").is_empty());
    }

    #[test]
    fn env_overrides_replace_config_values() {
        let config = AppConfig::apply_env_overrides(
            AppConfig::default(),
            vars(&[
                ("BLOCK_ELEMENTS", "script, nav"),
                ("LOG_LEVEL", "trace"),
                ("LOG_FILE_PATH", "logs/out.log"),
            ]),
        )
        .unwrap();
        assert_eq!(config.cleaner.block_elements, vec!["script", "nav"]);
        assert_eq!(config.logging.level.as_deref(), Some("trace"));
        assert_eq!(config.logging.file.as_deref(), Some("logs/out.log"));
    }

    #[test]
    fn no_overrides_keeps_config() {
        let config = AppConfig::apply_env_overrides(AppConfig::default(), vars(&[])).unwrap();
        assert_eq!(config.cleaner.block_elements.len(), 6);
        assert_eq!(config.logging.level.as_deref(), Some("warn"));
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn empty_element_name_is_rejected() {
        let mut config = AppConfig::default();
        config.cleaner.block_elements.push("  ".to_string());
        let err = AppConfig::apply_env_overrides(config, vars(&[])).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.yaml");
        let lookup = vars(&[("CONFIG_FILE", missing.to_str().unwrap())]);
        let err = AppConfig::from_lookup(lookup).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn config_file_then_env_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cleaner:\n  block_elements: [style]\nlogging:\n  level: info").unwrap();
        let lookup = vars(&[
            ("CONFIG_FILE", file.path().to_str().unwrap()),
            ("LOG_LEVEL", "debug"),
        ]);
        let config = AppConfig::from_lookup(lookup).unwrap();
        assert_eq!(config.cleaner.block_elements, vec!["style"]);
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
    }
}
