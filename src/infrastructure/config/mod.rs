// ============================================================
// EXPORT CONFIGURATION
// ============================================================
// Source/destination paths, layered: defaults, TOML file, env

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "catalog_export.toml";

/// Prefix for environment overrides, e.g. `CATALOG_EXPORT_INPUT_PATH`
pub const ENV_PREFIX: &str = "CATALOG_EXPORT_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Source workbook (or CSV) path
    pub input_path: PathBuf,

    /// Destination CSV path
    pub output_path: PathBuf,

    /// Worksheet name; the first sheet is used when unset
    #[serde(default)]
    pub sheet: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("herm_data.xlsx"),
            output_path: PathBuf::from("processed_data_final.csv"),
            sheet: None,
        }
    }
}

impl ExportConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            sheet: None,
        }
    }

    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = Some(sheet.into());
        self
    }

    /// Load defaults, then the TOML file, then `CATALOG_EXPORT_*` variables
    ///
    /// A missing default file is skipped; a missing explicit file is an error.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let file = match config_file {
            Some(path) if !path.exists() => {
                return Err(AppError::ConfigError(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };

        let config: ExportConfig = Figment::from(Serialized::defaults(ExportConfig::default()))
            .merge(Toml::file(&file))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;

        tracing::debug!(
            config_file = %file.display(),
            input = %config.input_path.display(),
            output = %config.output_path.display(),
            "Export config loaded"
        );

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(AppError::ValidationError(
                "input_path must not be empty".to_string(),
            ));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(AppError::ValidationError(
                "output_path must not be empty".to_string(),
            ));
        }
        if self.input_path == self.output_path {
            return Err(AppError::ValidationError(format!(
                "input_path and output_path are the same file: {}",
                self.input_path.display()
            )));
        }
        if matches!(&self.sheet, Some(sheet) if sheet.trim().is_empty()) {
            return Err(AppError::ValidationError(
                "sheet must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}
