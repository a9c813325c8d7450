//! Ledgerline Settings
//!
//! Persisted configuration for the statement import page:
//! - Account shown in the page header
//! - Date up to which statements were already imported
//! - Character encodings offered for the parse step
//! - Page tips

use anyhow::{Context, Result};
use chrono::NaiveDate;
use ledgerline_import::{PageContext, StatementEncoding};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod settings_file;

pub use settings_file::*;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    pub account_name: String,
    pub statements_imported_through: Option<NaiveDate>,
    /// Dropdown entries in display order; the first is the default choice
    pub encodings: Vec<StatementEncoding>,
    pub page_tips: Vec<String>,
}

impl Default for ImportSettings {
    fn default() -> Self {
        let context = PageContext::default();
        Self {
            account_name: context.account_name,
            statements_imported_through: context.statements_imported_through,
            encodings: StatementEncoding::all().to_vec(),
            page_tips: context.tips,
        }
    }
}

impl ImportSettings {
    /// Load from the default location, falling back to defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::settings_path()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::settings_path()?)
    }

    pub fn settings_path() -> Result<PathBuf> {
        import_settings_file()
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No import settings file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;
        serde_json::from_str(&content).with_context(|| "Failed to parse import settings JSON")
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write settings to {:?}", path))?;
        Ok(())
    }

    /// Encoding domain for the session. An empty list means every known encoding.
    pub fn encoding_domain(&self) -> Vec<StatementEncoding> {
        if self.encodings.is_empty() {
            tracing::warn!("Import settings list no encodings, offering all");
            return StatementEncoding::all().to_vec();
        }
        self.encodings.clone()
    }

    pub fn page_context(&self) -> PageContext {
        PageContext {
            account_name: self.account_name.clone(),
            statements_imported_through: self.statements_imported_through,
            tips: self.page_tips.clone(),
        }
    }
}
