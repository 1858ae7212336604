//! # Configuration
//!
//! Settings are resolved in priority order (highest first):
//! 1. **Command-line flags**: `--data`, `--bucket`
//! 2. **Environment variables**: `CINEDB_DATA_FILE`, `CINEDB_BUCKET`
//! 3. **Config file**: `config.json`, located by `--config`, then
//!    `CINEDB_CONFIG`, then the OS config directory (via `directories`)
//! 4. **Compiled defaults**
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | `data.json` | Local dataset document |
//! | `bucket` | `s3://cinema-web` | Remote bucket URI |
//! | `remote_file` | `data.json` | Document name inside the bucket |
//! | `transfer.program` | `aws` | Transfer tool executable |
//! | `transfer.args` | `["s3", "cp"]` | Arguments before source and destination |

use crate::error::{CinedbError, Result};
use crate::sync::CommandTransfer;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "data.json";
const DEFAULT_BUCKET: &str = "s3://cinema-web";

pub const ENV_CONFIG: &str = "CINEDB_CONFIG";
pub const ENV_DATA_FILE: &str = "CINEDB_DATA_FILE";
pub const ENV_BUCKET: &str = "CINEDB_BUCKET";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CinedbConfig {
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    #[serde(default = "default_bucket")]
    pub bucket: String,

    #[serde(default = "default_remote_file")]
    pub remote_file: String,

    #[serde(default)]
    pub transfer: TransferConfig,
}

/// External copy command. Source and destination are appended to `args`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransferConfig {
    #[serde(default = "default_program")]
    pub program: String,

    #[serde(default = "default_transfer_args")]
    pub args: Vec<String>,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_bucket() -> String {
    DEFAULT_BUCKET.to_string()
}

fn default_remote_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_program() -> String {
    "aws".to_string()
}

fn default_transfer_args() -> Vec<String> {
    vec!["s3".to_string(), "cp".to_string()]
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_transfer_args(),
        }
    }
}

impl Default for CinedbConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            bucket: default_bucket(),
            remote_file: default_remote_file(),
            transfer: TransferConfig::default(),
        }
    }
}

impl CinedbConfig {
    /// Where to look for the config file when none is given explicitly.
    pub fn locate(explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit
            .or_else(|| std::env::var_os(ENV_CONFIG).map(PathBuf::from))
            .or_else(|| {
                ProjectDirs::from("com", "cinedb", "cinedb")
                    .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
            })
    }

    /// Load config from `path`, or return defaults if the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CinedbError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| CinedbError::Config(format!("cannot parse {}: {}", path.display(), e)))
    }

    /// Apply `CINEDB_*` overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(data_file) = lookup(ENV_DATA_FILE).filter(|v| !v.is_empty()) {
            self.data_file = PathBuf::from(data_file);
        }
        if let Some(bucket) = lookup(ENV_BUCKET).filter(|v| !v.is_empty()) {
            self.bucket = bucket;
        }
    }

    pub fn apply_overrides(&mut self, data_file: Option<PathBuf>, bucket: Option<String>) {
        if let Some(data_file) = data_file {
            self.data_file = data_file;
        }
        if let Some(bucket) = bucket {
            self.bucket = bucket;
        }
    }

    pub fn transfer_tool(&self) -> CommandTransfer {
        CommandTransfer::new(self.transfer.program.clone(), self.transfer.args.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = CinedbConfig::default();
        assert_eq!(config.data_file, PathBuf::from("data.json"));
        assert_eq!(config.bucket, "s3://cinema-web");
        assert_eq!(config.remote_file, "data.json");
        assert_eq!(config.transfer.program, "aws");
        assert_eq!(config.transfer.args, vec!["s3", "cp"]);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = CinedbConfig::load(dir.path().join("config.json")).unwrap();
        assert_eq!(config, CinedbConfig::default());
    }

    #[test]
    fn test_load_partial_config_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"bucket": "s3://other", "transfer": {"program": "cp"}}"#).unwrap();

        let config = CinedbConfig::load(&path).unwrap();
        assert_eq!(config.bucket, "s3://other");
        assert_eq!(config.data_file, PathBuf::from("data.json"));
        assert_eq!(config.transfer.program, "cp");
        assert_eq!(config.transfer.args, vec!["s3", "cp"]);
    }

    #[test]
    fn test_load_malformed_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "bucket = 's3://toml'").unwrap();
        assert!(matches!(CinedbConfig::load(&path), Err(CinedbError::Config(_))));
    }

    #[test]
    fn test_env_then_flags() {
        let env: HashMap<&str, &str> = [
            (ENV_DATA_FILE, "/srv/cinema.json"),
            (ENV_BUCKET, "s3://from-env"),
        ]
        .into_iter()
        .collect();

        let mut config = CinedbConfig::default();
        config.apply_env_from(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.data_file, PathBuf::from("/srv/cinema.json"));
        assert_eq!(config.bucket, "s3://from-env");

        config.apply_overrides(None, Some("s3://from-flag".to_string()));
        assert_eq!(config.data_file, PathBuf::from("/srv/cinema.json"));
        assert_eq!(config.bucket, "s3://from-flag");
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let mut config = CinedbConfig::default();
        config.apply_env_from(|_| Some(String::new()));
        assert_eq!(config, CinedbConfig::default());
    }

    #[test]
    fn test_locate_prefers_explicit_path() {
        let explicit = PathBuf::from("/tmp/custom.json");
        assert_eq!(CinedbConfig::locate(Some(explicit.clone())), Some(explicit));
    }
}
