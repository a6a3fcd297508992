//! Configuration file parsing and management.
//!
//! This module handles loading configuration from TOML files and merging
//! configurations with proper precedence rules (local > home > XDG).

use crate::error::DomainScoutError;
use crate::types::CheckConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration loaded from TOML files.
///
/// ```toml
/// [defaults]
/// tlds = ["com", "io", "dev"]
/// timeout = "5s"
/// pretty = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Default values for CLI options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

/// Default configuration values that map to CLI options.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    /// Default TLD list for keyword scans
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tlds: Option<Vec<String>>,

    /// Default probe timeout (as string, e.g., "5s", "500ms")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,

    /// Default pretty output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretty: Option<bool>,
}

impl FileConfig {
    /// Apply file defaults to a [`CheckConfig`].
    ///
    /// CLI arguments are layered on top by the caller, so anything set
    /// here acts as a default, not an override.
    pub fn apply(&self, mut config: CheckConfig) -> Result<CheckConfig, DomainScoutError> {
        if let Some(defaults) = &self.defaults {
            if let Some(tlds) = &defaults.tlds {
                config.tlds = Some(tlds.clone());
            }
            if let Some(timeout) = &defaults.timeout {
                let timeout = parse_timeout(timeout)?;
                config.dns_timeout = timeout;
                config.rdap_timeout = timeout;
            }
        }
        Ok(config)
    }
}

/// Parse a human-readable timeout like "5s", "500ms", or a bare number
/// of seconds.
pub fn parse_timeout(value: &str) -> Result<Duration, DomainScoutError> {
    let value = value.trim();

    let parsed = if let Some(ms) = value.strip_suffix("ms") {
        ms.trim().parse::<u64>().ok().map(Duration::from_millis)
    } else if let Some(secs) = value.strip_suffix('s') {
        secs.trim().parse::<u64>().ok().map(Duration::from_secs)
    } else {
        value.parse::<u64>().ok().map(Duration::from_secs)
    };

    parsed.ok_or_else(|| {
        DomainScoutError::config(format!(
            "Invalid timeout '{}': expected forms like \"5s\" or \"500ms\"",
            value
        ))
    })
}

/// Configuration discovery and loading functionality.
pub struct ConfigManager {
    /// Whether to emit warnings for config issues
    pub verbose: bool,
}

impl ConfigManager {
    /// Create a new configuration manager.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Load configuration from a specific file.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<FileConfig, DomainScoutError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(DomainScoutError::file_error(
                path.to_string_lossy(),
                "Configuration file not found",
            ));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            DomainScoutError::file_error(
                path.to_string_lossy(),
                format!("Failed to read configuration file: {}", e),
            )
        })?;

        let config: FileConfig = toml::from_str(&content).map_err(|e| {
            DomainScoutError::config(format!("Failed to parse TOML configuration: {}", e))
        })?;

        self.validate_config(&config)?;

        Ok(config)
    }

    /// Discover and load configuration files in precedence order.
    ///
    /// Looks for configuration files in standard locations and merges
    /// them, later (more local) files winning.
    pub fn discover_and_load(&self) -> Result<FileConfig, DomainScoutError> {
        let mut merged_config = FileConfig::default();
        let mut loaded_files = Vec::new();

        // 1. XDG config (lowest precedence)
        if let Some(xdg_path) = self.get_xdg_config_path() {
            if let Ok(config) = self.load_file(&xdg_path) {
                merged_config = self.merge_configs(merged_config, config);
                loaded_files.push(xdg_path);
            }
        }

        // 2. Home config
        if let Some(global_path) = self.get_global_config_path() {
            if let Ok(config) = self.load_file(&global_path) {
                merged_config = self.merge_configs(merged_config, config);
                loaded_files.push(global_path);
            }
        }

        // 3. Local config (highest precedence)
        if let Some(local_path) = self.get_local_config_path() {
            if let Ok(config) = self.load_file(&local_path) {
                merged_config = self.merge_configs(merged_config, config);
                loaded_files.push(local_path);
            }
        }

        if self.verbose && loaded_files.len() > 1 {
            eprintln!("Multiple config files found. Using precedence:");
            for (i, path) in loaded_files.iter().enumerate() {
                let status = if i == loaded_files.len() - 1 {
                    "active"
                } else {
                    "overridden"
                };
                eprintln!("   {} ({})", path.display(), status);
            }
        }

        Ok(merged_config)
    }

    /// Merge two configurations, with the higher-precedence one winning
    /// field by field.
    pub fn merge_configs(&self, lower: FileConfig, higher: FileConfig) -> FileConfig {
        let defaults = match (lower.defaults, higher.defaults) {
            (Some(lo), Some(hi)) => Some(DefaultsConfig {
                tlds: hi.tlds.or(lo.tlds),
                timeout: hi.timeout.or(lo.timeout),
                pretty: hi.pretty.or(lo.pretty),
            }),
            (lo, hi) => hi.or(lo),
        };

        FileConfig { defaults }
    }

    fn validate_config(&self, config: &FileConfig) -> Result<(), DomainScoutError> {
        if let Some(defaults) = &config.defaults {
            if let Some(timeout) = &defaults.timeout {
                parse_timeout(timeout)?;
            }

            if let Some(tlds) = &defaults.tlds {
                if tlds.is_empty() {
                    return Err(DomainScoutError::config("TLD list cannot be empty"));
                }
                for tld in tlds {
                    if tld.trim().is_empty() || !tld.chars().all(|c| c.is_alphanumeric()) {
                        return Err(DomainScoutError::config(format!("Invalid TLD '{}'", tld)));
                    }
                }
            }
        }

        Ok(())
    }

    fn get_local_config_path(&self) -> Option<PathBuf> {
        let candidates = ["./domain-scout.toml", "./.domain-scout.toml"];

        candidates
            .iter()
            .map(Path::new)
            .find(|p| p.exists())
            .map(Path::to_path_buf)
    }

    fn get_global_config_path(&self) -> Option<PathBuf> {
        let home = env::var_os("HOME")?;
        let candidates = [".domain-scout.toml", "domain-scout.toml"];

        candidates
            .iter()
            .map(|c| Path::new(&home).join(c))
            .find(|p| p.exists())
    }

    fn get_xdg_config_path(&self) -> Option<PathBuf> {
        let config_dir = env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| env::var_os("HOME").map(|home| Path::new(&home).join(".config")))?;

        let path = config_dir.join("domain-scout").join("config.toml");
        path.exists().then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout("5s").unwrap(), Duration::from_secs(5));
        assert_eq!(parse_timeout("500ms").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_timeout("3").unwrap(), Duration::from_secs(3));

        assert!(parse_timeout("fast").is_err());
        assert!(parse_timeout("").is_err());
    }

    #[test]
    fn test_load_file() {
        let config_content = r#"
[defaults]
tlds = ["com", "io", "dev"]
timeout = "3s"
pretty = true
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(config_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let manager = ConfigManager::new(false);
        let config = manager.load_file(temp_file.path()).unwrap();

        let defaults = config.defaults.unwrap();
        assert_eq!(
            defaults.tlds,
            Some(vec!["com".to_string(), "io".to_string(), "dev".to_string()])
        );
        assert_eq!(defaults.timeout, Some("3s".to_string()));
        assert_eq!(defaults.pretty, Some(true));
    }

    #[test]
    fn test_load_file_rejects_invalid_timeout() {
        let config_content = r#"
[defaults]
timeout = "forever"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(config_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let manager = ConfigManager::new(false);
        assert!(manager.load_file(temp_file.path()).is_err());
    }

    #[test]
    fn test_load_file_rejects_bad_tld() {
        let config_content = r#"
[defaults]
tlds = ["com", "not a tld"]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(config_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let manager = ConfigManager::new(false);
        assert!(manager.load_file(temp_file.path()).is_err());
    }

    #[test]
    fn test_merge_configs() {
        let manager = ConfigManager::new(false);

        let lower = FileConfig {
            defaults: Some(DefaultsConfig {
                tlds: Some(vec!["com".to_string()]),
                timeout: Some("5s".to_string()),
                pretty: Some(false),
            }),
        };

        let higher = FileConfig {
            defaults: Some(DefaultsConfig {
                tlds: None,
                timeout: Some("2s".to_string()),
                pretty: None,
            }),
        };

        let merged = manager.merge_configs(lower, higher);
        let defaults = merged.defaults.unwrap();

        assert_eq!(defaults.timeout, Some("2s".to_string())); // Higher wins
        assert_eq!(defaults.tlds, Some(vec!["com".to_string()])); // Lower preserved
        assert_eq!(defaults.pretty, Some(false)); // Lower preserved
    }

    #[test]
    fn test_apply_to_check_config() {
        let file_config = FileConfig {
            defaults: Some(DefaultsConfig {
                tlds: Some(vec!["io".to_string(), "dev".to_string()]),
                timeout: Some("2s".to_string()),
                pretty: None,
            }),
        };

        let config = file_config.apply(CheckConfig::default()).unwrap();
        assert_eq!(config.scan_tlds(), vec!["io", "dev"]);
        assert_eq!(config.dns_timeout, Duration::from_secs(2));
        assert_eq!(config.rdap_timeout, Duration::from_secs(2));
    }
}
