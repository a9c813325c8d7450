//! Settings file utilities

use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .context("Could not determine config directory")
        .map(|p| p.join("ledgerline"))
}

pub fn data_dir() -> Result<PathBuf> {
    dirs::data_local_dir()
        .context("Could not determine data directory")
        .map(|p| p.join("ledgerline"))
}

pub fn logs_dir() -> Result<PathBuf> {
    data_dir().map(|p| p.join("logs"))
}

pub fn import_settings_file() -> Result<PathBuf> {
    config_dir().map(|p| p.join("import_settings.json"))
}

pub fn ensure_directories() -> Result<()> {
    let dirs = [config_dir()?, data_dir()?, logs_dir()?];
    for dir in dirs {
        if !dir.exists() {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create directory: {:?}", dir))?;
        }
    }
    Ok(())
}
