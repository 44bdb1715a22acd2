//! Configuration management

use crate::error::{OrgcalError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "orgcal.toml";

const DEFAULT_OUTPUT: &str = "journal.org";
const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where `build` writes when no `--output` is given
    pub output: PathBuf,
    /// Log level used when neither `--log-level` nor `RUST_LOG` is set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: PathBuf::from(DEFAULT_OUTPUT),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load orgcal.toml from the given directory, falling back to defaults
    /// when the file does not exist
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Config::default());
        }
        Self::load_from_file(&config_path)
    }

    /// Load an explicitly named config file; the file must exist
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                OrgcalError::Config(format!("Config file not found: {}", path.display()))
            } else {
                OrgcalError::Io(e)
            }
        })?;

        toml::from_str(&contents).map_err(|e| {
            OrgcalError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Save config to orgcal.toml in the given directory, refusing to
    /// overwrite an existing file
    pub fn save_to_dir(&self, path: &Path) -> Result<PathBuf> {
        let config_path = path.join(CONFIG_FILE);
        if config_path.exists() {
            return Err(OrgcalError::Config(format!(
                "Config file already exists: {}",
                config_path.display()
            )));
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(config_path)
    }

    /// Output path, preferring an explicit override
    pub fn output_path(&self, requested: Option<&Path>) -> PathBuf {
        requested
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.output.clone())
    }
}
