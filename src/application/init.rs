//! Write a default configuration file

use crate::error::Result;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Create `orgcal.toml` with default values in `path`.
pub fn init_config(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    Config::default().save_to_dir(path)
}
