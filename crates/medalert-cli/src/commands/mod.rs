//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod frequency;
pub mod process;

use std::path::{Path, PathBuf};

use tracing::debug;

use medalert_core::MedAlertConfig;

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("medalert")
        .join("config.json")
}

/// Load the config given with `--config`, else the default file, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<MedAlertConfig> {
    if let Some(path) = config_path {
        debug!("Loading configuration from {}", path);
        return Ok(MedAlertConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Loading configuration from {}", default_path.display());
        Ok(MedAlertConfig::from_file(&default_path)?)
    } else {
        Ok(MedAlertConfig::default())
    }
}
